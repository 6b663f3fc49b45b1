//! Utilities and middleware shared by Axum services in this workspace.
//!
//! - [`errors`]: structured error responses (`AppError`, `ErrorResponse`)
//! - [`extractors`]: custom extractors (UUID path, validated JSON)
//! - [`server`]: router assembly, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use extractors::{UuidPath, ValidatedJson};
pub use server::{
    HealthResponse, create_app, create_router, health_router, shutdown_signal,
};
