//! Application errors and their JSON responses.
//!
//! Every `AppError` is a client error and carries its message back to the
//! caller. Unexpected failures surface as handler panics, which are logged with
//! full detail and answered with a generic 500 body.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::calculator::CalculatorError;
use crate::config::ADD_EXAMPLE;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Calculation(#[from] CalculatorError),

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::MissingParameter(_) => json!({
                "error": self.to_string(),
                "example": ADD_EXAMPLE,
            }),
            AppError::Calculation(_) | AppError::BadRequest(_) => {
                tracing::warn!(error = %self, "Rejected request");
                json!({ "error": self.to_string() })
            }
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

fn internal_error_body() -> serde_json::Value {
    json!({
        "error": "Internal Server Error",
        "message": "An unexpected error occurred",
    })
}

/// Panic handler for `CatchPanicLayer`, answering with the standard 500 body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Unhandled error");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(internal_error_body())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_parameter_response() {
        let response = AppError::MissingParameter("operands").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Missing required parameter: operands");
        assert_eq!(json["example"], "/calculator/add?operands=1,2,3");
    }

    #[tokio::test]
    async fn test_calculation_error_response() {
        let err = CalculatorError::InvalidTokens(vec!["abc".to_string(), "x".to_string()]);
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid characters: abc, x");
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let response =
            AppError::BadRequest("duplicate field `operands`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "duplicate field `operands`");
    }

    #[tokio::test]
    async fn test_handle_panic_hides_details() {
        let panics: [Box<dyn Any + Send>; 3] = [
            Box::new("database on fire"),
            Box::new("database on fire".to_string()),
            Box::new(42_u8),
        ];

        for panic in panics {
            let response = handle_panic(panic);
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let json = body_json(response).await;
            assert_eq!(json["error"], "Internal Server Error");
            assert_eq!(json["message"], "An unexpected error occurred");
            assert!(!json.to_string().contains("database"));
        }
    }
}
