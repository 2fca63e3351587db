//! oms-hello: greeting, health check and liveness probe endpoints.
//!
//! The binary in `main.rs` wires these modules together; they are exposed as a
//! library so integration tests can run the real router on an ephemeral port.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::{AppConfig, ConfigError};
pub use crate::http::{start_server, ServerError};
pub use routes::create_router;
