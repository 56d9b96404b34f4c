//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! - **[`server`]**: listener bootstrap, `/health`, graceful shutdown
//! - **[`errors`]**: fallback handlers for unknown paths and methods
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router(api_routes, health_router(app_info!()));
//!     create_app(router, &ServerConfig::default()).await
//! }
//! ```

pub mod errors;
pub mod server;

pub use errors::ErrorResponse;
pub use errors::handlers::{method_not_allowed, not_found};
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};
