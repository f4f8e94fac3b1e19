//! HTTP route handlers.
//!
//! Calculation and health responses are never cached; the API documentation
//! carries a short public cache lifetime. Unmatched routes and methods get a
//! JSON 404 listing the available routes, and handler panics become a JSON 500.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod calculator;
pub mod docs;
pub mod health;

use axum::{
    http::{Method, StatusCode, Uri},
    middleware,
    routing::get,
    Json, Router,
};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer};

use crate::config::{
    ADD_ROUTE, AVAILABLE_ROUTES, CACHE_CONTROL_DOCS, CACHE_CONTROL_NO_STORE, DOCS_ROUTE,
    HEALTH_ROUTE, OPENAPI_ROUTE,
};
use crate::error::handle_panic;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Calculator and health check - always fresh
    let api_routes = Router::new()
        .route(ADD_ROUTE, get(calculator::add))
        .route(HEALTH_ROUTE, get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // API documentation - only changes on redeploy
    let docs_routes = Router::new()
        .route(DOCS_ROUTE, get(docs::index))
        .route(OPENAPI_ROUTE, get(docs::openapi_json))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DOCS),
        ));

    Router::new()
        .merge(api_routes)
        .merge(docs_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

/// Fallback for unknown routes and unsupported methods.
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    tracing::warn!(%method, %uri, "Route not found");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "message": format!("The requested route {} {} does not exist", method, uri),
            "availableRoutes": AVAILABLE_ROUTES,
        })),
    )
}
