//! Greeter: a minimal HTTP greeting service.
//!
//! This is the application entry point. It initializes tracing, builds the
//! Axum router with the single root route, and starts the HTTP server on
//! the fixed port.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::config::{BIND_HOST, DEFAULT_LOG_FILTER, PORT};
use greeter::routes::create_router;
use greeter::server::start_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create router
    let app = create_router();

    // Start server; a failed bind propagates and terminates the process
    let addr = SocketAddr::from((BIND_HOST, PORT));
    start_server(app, addr).await?;

    Ok(())
}
