use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use valuation::ValuationError;

#[derive(Error, Debug)]
pub enum AppError {
    /// The request body was missing, not an object, or lacked a required key.
    #[error("Invalid request data. Please provide 'portfolio' and 'fiat_currency'.")]
    InvalidRequest,
    /// The caller asked for a market that does not exist upstream.
    #[error("{0}")]
    Validation(String),
    /// The upstream API failed; the detail is its error text.
    #[error("Error fetching data from Buda API: {0}")]
    Upstream(String),
}

impl From<ValuationError> for AppError {
    fn from(err: ValuationError) -> Self {
        match err {
            ValuationError::MarketUnavailable(_) => AppError::Validation(err.to_string()),
            ValuationError::Api(api_err) => AppError::Upstream(api_err.to_string()),
        }
    }
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Note the field asymmetry: shape failures answer with an `error` field,
/// everything else with `message`. Clients depend on it.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidRequest => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "total_portfolio_value": null,
                    "currency": null,
                    "error": "Invalid request data. Please provide 'portfolio' and 'fiat_currency'.",
                })),
            )
                .into_response(),
            AppError::Validation(message) => {
                tracing::warn!("Rejected portfolio: {}", message);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "total_portfolio_value": null,
                        "currency": null,
                        "message": message,
                    })),
                )
                    .into_response()
            }
            AppError::Upstream(detail) => {
                tracing::error!(error = %detail, "Buda API failure.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "total_portfolio_value": null,
                        "currency": null,
                        "message": format!("Error fetching data from Buda API: {}", detail),
                    })),
                )
                    .into_response()
            }
        }
    }
}
