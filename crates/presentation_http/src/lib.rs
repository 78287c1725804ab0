//! City weather HTTP presentation layer
//!
//! Axum handlers, the JSON error contract and the middleware stack for the
//! city weather API.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{JsonBody, RequestId};
pub use routes::{create_app, create_router};
pub use server::{ShutdownOutcome, serve};
pub use state::AppState;
