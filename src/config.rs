//! Service constants.
//!
//! The listening port and response payload are fixed at compile time. No
//! configuration file, environment variable, or command-line flag is read
//! for process configuration; only the log filter honors `RUST_LOG`.

// =============================================================================
// HTTP Server
// =============================================================================

/// TCP port the service listens on.
pub const PORT: u16 = 3000;

/// Bind address. All interfaces, so the port is reachable through a
/// container port mapping.
pub const BIND_HOST: [u8; 4] = [0, 0, 0, 0];

// =============================================================================
// Response Payload
// =============================================================================

/// Body returned for every `GET /` request.
pub const GREETING: &str = "Hello World!";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "greeter=info";
