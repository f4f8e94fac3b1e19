//! Shared application state for request handlers.

use std::sync::Arc;

use utoipa::openapi::OpenApi;

use crate::config::AppConfig;
use crate::routes::docs::build_openapi;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the application configuration and the OpenAPI document, which is
/// built once at startup and served as-is.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub openapi: Arc<OpenApi>,
}

impl AppState {
    /// Creates a new application state from the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let openapi = build_openapi(&config);
        Self {
            config: Arc::new(config),
            openapi: Arc::new(openapi),
        }
    }
}
