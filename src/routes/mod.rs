//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The website is served separately as a static WASM bundle, so every
//! route here is JSON and CORS is left open for the site's origin.

pub mod status;


use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(status::root))
        .route("/health", get(status::health))
        .route("/api/v1/status", get(status::status))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
