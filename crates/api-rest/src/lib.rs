//! REST API for the HackHub coordination service.
//!
//! Exposes the application services over HTTP. Every response body is the
//! ok/error envelope from `hackhub_domain::errors`; HTTP status codes mirror
//! the error taxonomy (401/403/404, everything else 500).

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;

pub use app::{create_app, create_app_with_state, init_tracing};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
