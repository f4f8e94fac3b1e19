//! Calculator service: a small REST API that sums comma-separated numbers.
//!
//! The summation itself lives in [`calculator`] and knows nothing about HTTP;
//! the remaining modules wire it into an Axum router with request logging,
//! JSON errors, a health probe and OpenAPI documentation.

pub mod calculator;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use calculator::{sum, CalculatorError};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
