use std::{env, fs, net::SocketAddr, path::Path, time::Duration};

use reqwest::Url;

use crate::{errors::Error, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TELEGRAM_TIMEOUT_MS: u64 = 10_000;

/// Typed configuration, read from the process environment.
///
/// The bot credential and the app URL are optional at load time: the token
/// validator works without them, and the webhook decides per command whether it
/// can do useful work.
#[derive(Clone, Debug)]
pub struct Config {
    // Telegram
    pub telegram_bot_token: Option<String>,
    pub telegram_api_url: Option<Url>,
    pub telegram_timeout: Duration,

    // Deep links
    pub app_url: Option<Url>,

    // HTTP server
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).and_then(non_empty);

        let telegram_bot_token = get("TELEGRAM_BOT_TOKEN");
        let telegram_api_url = get("TELEGRAM_API_URL")
            .map(|v| parse_url("TELEGRAM_API_URL", &v))
            .transpose()?;
        let telegram_timeout = Duration::from_millis(
            get("TELEGRAM_TIMEOUT_MS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_TELEGRAM_TIMEOUT_MS),
        );

        let app_url = get("APP_URL")
            .map(|v| parse_url("APP_URL", &v))
            .transpose()?;

        let mut bind_addr: SocketAddr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("BIND_ADDR is not a socket address: {e}")))?;
        if let Some(port) = get("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("PORT is not a valid port: {e}")))?;
            bind_addr.set_port(port);
        }

        Ok(Self {
            telegram_bot_token,
            telegram_api_url,
            telegram_timeout,
            app_url,
            bind_addr,
        })
    }

    /// The bot credential, or a config error naming the missing variable.
    pub fn require_bot_token(&self) -> Result<&str> {
        self.telegram_bot_token.as_deref().ok_or_else(|| {
            Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
        })
    }

    pub fn require_app_url(&self) -> Result<&Url> {
        self.app_url
            .as_ref()
            .ok_or_else(|| Error::Config("APP_URL environment variable is required".to_string()))
    }
}

/// Append the token to the app URL as the `connect` query parameter.
pub fn connection_link(app_url: &Url, token: &str) -> Url {
    let mut link = app_url.clone();
    link.query_pairs_mut().append_pair("connect", token);
    link
}

fn parse_url(key: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Config(format!("{key} is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!("{key} must be an http(s) URL")));
    }
    Ok(url)
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
