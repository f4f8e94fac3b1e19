//! OpenAPI document and the Swagger UI page that renders it.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use const_format::formatcp;
use utoipa::openapi::{server::Server, OpenApi as OpenApiDoc};
use utoipa::OpenApi;

use super::{calculator, health};
use crate::config::{AppConfig, OPENAPI_ROUTE};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "A REST service that performs addition operations"
    ),
    paths(calculator::add, health::health),
    components(schemas(
        calculator::SumResponse,
        calculator::ErrorResponse,
        health::HealthResponse
    )),
    tags(
        (name = "Calculator", description = "Arithmetic operations"),
        (name = "Health", description = "Service liveness")
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI document with the configured version and server URL.
pub fn build_openapi(config: &AppConfig) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    doc.info.version = config.service.version.clone();
    doc.servers = Some(vec![Server::new(config.http.base_url())]);
    doc
}

const SWAGGER_UI_PAGE: &str = formatcp!(
    r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Calculator API</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {{
            window.ui = SwaggerUIBundle({{ url: "{}", dom_id: "#swagger-ui" }});
        }};
    </script>
</body>
</html>"##,
    OPENAPI_ROUTE
);

/// Swagger UI page.
pub async fn index() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

/// The OpenAPI document as JSON.
pub async fn openapi_json(State(state): State<AppState>) -> Response {
    Json(state.openapi.as_ref()).into_response()
}
