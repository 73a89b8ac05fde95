use crate::token::TokenError;

/// Core error type.
///
/// Adapter crates map their specific errors into this type so the HTTP layer can
/// decide consistently between a client error, a swallowed upstream failure and a
/// generic server error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("token error: {0}")]
    Token(#[from] TokenError),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
