use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use tglink_core::{clock::SystemClock, config::Config, messaging::port::MessagingPort};
use tglink_http::{build_router, AppState};
use tglink_telegram::TelegramMessenger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tglink_core::logging::init("tglink")?;

    let cfg = Arc::new(Config::load()?);

    let messenger: Option<Arc<dyn MessagingPort>> = match TelegramMessenger::from_config(&cfg)? {
        Some(m) => Some(Arc::new(m)),
        None => {
            warn!("TELEGRAM_BOT_TOKEN is not set; /start will fail and replies are dropped");
            None
        }
    };
    if cfg.app_url.is_none() {
        warn!("APP_URL is not set; connection links cannot be issued");
    }

    let state = AppState::new(cfg.clone(), messenger, Arc::new(SystemClock));
    let app = build_router(state);

    let listener = TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;
    info!(addr = %cfg.bind_addr, "tglink listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    info!("tglink stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
