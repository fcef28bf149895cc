#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::{
    authenticate, decode_access_token, is_token_valid, mint_access_token, Claims, LoginOutcome,
    MintedToken, Role, ACCESS_TOKEN_TTL,
};
pub use config::{AppConfig, ConfigError, Environment};
pub use error::AppError;
pub use errors::DomainError;
pub use infra::db::connect_db;
pub use infra::state::{build_state, Repositories, StateBuilder};
pub use middleware::{JwtExtract, RequestTrace, StructuredLogger, TraceSpan};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
