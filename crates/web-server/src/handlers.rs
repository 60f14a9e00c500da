use crate::{error::AppError, AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use valuation::Portfolio;

/// The body shape the endpoint accepts.
#[derive(Debug, Deserialize)]
pub struct ValuationRequest {
    pub portfolio: Portfolio,
    pub fiat_currency: String,
}

/// The success envelope. Failure envelopes are built in `error.rs`.
#[derive(Debug, Serialize)]
pub struct ValuationResponse {
    pub total_portfolio_value: f64,
    pub currency: String,
    pub message: String,
}

/// # POST /
/// Values the supplied portfolio in the requested fiat currency.
///
/// The payload is extracted as a `Result` so that every shape problem
/// (missing body, non-JSON, missing keys, non-numeric amounts) funnels into
/// the same fixed 400 response instead of axum's default rejection.
pub async fn value_portfolio(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ValuationRequest>, JsonRejection>,
) -> Result<Json<ValuationResponse>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::InvalidRequest)?;

    let total = valuation::value_portfolio(
        state.markets.as_ref(),
        &request.portfolio,
        &request.fiat_currency,
    )
    .await?;

    let response = ValuationResponse {
        total_portfolio_value: total,
        currency: request.fiat_currency,
        message: String::new(),
    };
    tracing::info!(
        "Valued portfolio at {} {}",
        response.total_portfolio_value,
        response.currency
    );
    Ok(Json(response))
}

/// # GET /
/// The endpoint only speaks POST; a GET gets a fixed reminder body.
pub async fn wrong_method() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "total_portfolio_value": null,
            "currency": null,
            "message": "Please send a POST request with your portfolio data.",
        })),
    )
}
