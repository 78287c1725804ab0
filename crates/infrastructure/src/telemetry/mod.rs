//! Telemetry infrastructure
//!
//! Logging via `tracing-subscriber`.

mod logging;

pub use logging::{DEFAULT_LOG_FILTER, TelemetryError, init_logging};
