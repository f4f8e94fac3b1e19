//! HTTP server module.
//!
//! Binds the configured address, serves the router and drains in-flight
//! requests on SIGTERM/SIGINT before exiting.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
