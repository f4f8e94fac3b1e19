//! Addition endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::calculator;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AddParams {
    pub operands: Option<String>,
}

/// Successful addition result. A sum that overflows serializes as `null`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SumResponse {
    pub sum: f64,
}

/// Error body returned for invalid input.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Adds a comma-separated list of numbers.
///
/// An absent or empty `operands` parameter is rejected before reaching the
/// calculator.
#[utoipa::path(
    get,
    path = "/calculator/add",
    tag = "Calculator",
    summary = "Add numbers",
    params(
        ("operands" = String, Query, description = "Comma-separated list of numbers"),
    ),
    responses(
        (status = 200, description = "Successful operation", body = SumResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    )
)]
#[instrument(name = "calculator::add", skip_all)]
pub async fn add(
    query: Result<Query<AddParams>, QueryRejection>,
) -> Result<Json<SumResponse>, AppError> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let operands = match params.operands {
        Some(operands) if !operands.is_empty() => operands,
        _ => return Err(AppError::MissingParameter("operands")),
    };

    tracing::info!(operands = %operands, "Processing addition request");

    let sum = calculator::sum(Some(operands.as_str()))?;
    tracing::info!(sum, "Calculation successful");

    Ok(Json(SumResponse { sum }))
}
