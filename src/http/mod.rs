//! HTTP server module.
//!
//! Binds the listening socket, serves the router over plain HTTP, and drains
//! in-flight requests on SIGTERM/SIGINT. TLS is terminated in front of this
//! process.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
