//! Greeter - minimal HTTP greeting service.
//!
//! A single-route HTTP server: `GET /` returns a fixed plain-text greeting.
//! The router construction and server startup live here so integration
//! tests can drive the service on an ephemeral port.

pub mod config;
pub mod routes;
pub mod server;
