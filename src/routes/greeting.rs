//! Root path handler.

use crate::config::GREETING;

/// Greeting handler.
///
/// Returns the fixed plain-text greeting. The request itself is ignored;
/// route matching has already established method and path.
pub async fn index() -> &'static str {
    GREETING
}
