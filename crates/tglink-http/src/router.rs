//! Route definitions.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::handle_panic;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(webhook_routes())
        .merge(connect_routes())
        .route("/api/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Telegram webhook: POST only, no CORS.
fn webhook_routes() -> Router<AppState> {
    Router::new().route(
        "/api/webhook",
        post(handlers::webhook::receive_update)
            .options(handlers::preflight)
            .fallback(handlers::method_not_allowed),
    )
}

/// Browser-facing token validator, open to any origin.
fn connect_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/connect",
            get(handlers::connect::validate_token)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{HeaderMap, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use tglink_core::{
        clock::FixedClock,
        config::Config,
        domain::CallbackId,
        errors::Error,
        messaging::{
            port::MessagingPort,
            types::{CallbackAnswer, OutgoingMessage},
        },
        Result,
    };

    use super::*;

    pub(crate) const NOW: i64 = 1_700_000_000_000;

    #[derive(Default)]
    pub(crate) struct FakeMessenger {
        pub(crate) fail: bool,
        pub(crate) sends: Mutex<Vec<OutgoingMessage>>,
        pub(crate) answers: Mutex<Vec<CallbackId>>,
    }

    #[async_trait]
    impl MessagingPort for FakeMessenger {
        async fn send_message(&self, msg: OutgoingMessage) -> Result<()> {
            self.sends.lock().unwrap().push(msg);
            if self.fail {
                return Err(Error::External("telegram error: timed out".to_string()));
            }
            Ok(())
        }

        async fn answer_callback_query(
            &self,
            callback_id: &CallbackId,
            _answer: CallbackAnswer,
        ) -> Result<()> {
            self.answers.lock().unwrap().push(callback_id.clone());
            if self.fail {
                return Err(Error::External("telegram error: timed out".to_string()));
            }
            Ok(())
        }
    }

    pub(crate) fn app(messenger: Option<Arc<FakeMessenger>>, app_url: Option<&str>) -> Router {
        let app_url = app_url.map(str::to_string);
        let cfg = Config::from_lookup(move |k| match k {
            "APP_URL" => app_url.clone(),
            _ => None,
        })
        .unwrap();

        build_router(AppState::new(
            Arc::new(cfg),
            messenger.map(|m| m as Arc<dyn MessagingPort>),
            Arc::new(FixedClock(NOW)),
        ))
    }

    pub(crate) async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: &str,
    ) -> (StatusCode, HeaderMap, String) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "https://alerts.example.com")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, _, body) = send(app(None, None), Method::GET, "/api/health", "").await;
        assert_eq!(status, StatusCode::OK);
        let v: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let (status, _, _) = send(app(None, None), Method::GET, "/api/nope", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    async fn boom() -> &'static str {
        panic!("leaked chat 123456789")
    }

    #[tokio::test]
    async fn panics_become_generic_server_errors() {
        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let (status, _, body) = send(app, Method::GET, "/boom", "").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("123456789"));
    }
}
