//! HTTP route handlers.
//!
//! A single route is registered: `GET /` returns the greeting. Everything
//! else falls through to the router's defaults: 404 for an unknown path,
//! 405 with an `Allow: GET` header for `/` with the wrong method.

pub mod greeting;

use axum::{routing::get, Router};

/// Creates the Axum router with the single greeting route.
pub fn create_router() -> Router {
    Router::new().route("/", get(greeting::index))
}
