//! HTTP server module.
//!
//! Serves plain HTTP; TLS termination is left to the orchestrator's edge
//! (Service or Ingress). Includes graceful shutdown on SIGTERM/SIGINT so
//! replicas drain in-flight requests when the orchestrator scales down or
//! rolls out a new revision.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
