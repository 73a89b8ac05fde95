//! HTTP surface built on Axum.
//!
//! Two endpoints: the Telegram webhook (`POST /api/webhook`) that issues
//! connection links, and the token validator (`GET /api/connect`) used by the
//! browser. Both are stateless.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
