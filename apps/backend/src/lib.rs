#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use adapters::{InMemoryRoomStore, StaticCatalog};
pub use config::{GameConfig, ServerConfig};
pub use error::AppError;
pub use errors::ErrorCode;
pub use infra::state::{build_state, StateBuilder};
pub use middleware::RequestTrace;
pub use services::game_flow::{GameFlowMutationResult, GameFlowService};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
