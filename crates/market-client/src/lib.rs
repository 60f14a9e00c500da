use crate::error::ApiError;
use async_trait::async_trait;
use configuration::BudaConfig;
use std::time::Duration;

pub mod error;
pub mod responses;

// --- Public API ---
pub use responses::{MarketEntry, MarketsResponse, TickerResponse};

/// The generic, abstract interface for the upstream market-data API.
/// This trait is the contract the valuation engine and web server use,
/// allowing the underlying implementation (live or stub) to be swapped out.
#[async_trait]
pub trait MarketApi: Send + Sync {
    /// Fetches the identifiers of all markets currently tradable upstream.
    async fn list_markets(&self) -> Result<Vec<String>, ApiError>;

    /// Fetches the most recent trade price for a single market.
    async fn last_price(&self, market: &str) -> Result<f64, ApiError>;
}

/// A concrete implementation of `MarketApi` for the Buda exchange.
#[derive(Clone)]
pub struct BudaClient {
    client: reqwest::Client,
    base_url: String,
}

impl BudaClient {
    /// Builds a client from the `[buda]` configuration section. Every
    /// request carries the configured timeout; expiry surfaces as
    /// `ApiError::Request` on the call that hit it.
    pub fn new(config: &BudaConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("Failed to build reqwest client"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_text(&self, url: &str) -> Result<(reqwest::StatusCode, String), ApiError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }
}

#[async_trait]
impl MarketApi for BudaClient {
    async fn list_markets(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/markets", self.base_url);
        let (status, text) = self.get_text(&url).await?;

        if !status.is_success() {
            return Err(ApiError::MarketsStatus(status.as_u16()));
        }

        let payload = serde_json::from_str::<MarketsResponse>(&text)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        Ok(payload.markets.into_iter().map(|market| market.id).collect())
    }

    async fn last_price(&self, market: &str) -> Result<f64, ApiError> {
        let url = format!("{}/markets/{}/ticker", self.base_url, market);
        let (status, text) = self.get_text(&url).await?;

        if !status.is_success() {
            return Err(ApiError::TickerStatus {
                market: market.to_string(),
                status: status.as_u16(),
            });
        }

        let payload = serde_json::from_str::<TickerResponse>(&text)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        // Buda reports the last price as a [amount, currency] string pair.
        let raw = payload.ticker.last_price.into_iter().next().ok_or_else(|| {
            ApiError::Deserialization(format!("ticker for {market} carries an empty last_price"))
        })?;

        raw.parse::<f64>().map_err(|_| ApiError::MalformedPrice {
            market: market.to_string(),
            raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    struct UpstreamStub {
        base_url: String,
        shutdown: Option<oneshot::Sender<()>>,
    }

    impl UpstreamStub {
        async fn stop(mut self) {
            if let Some(shutdown) = self.shutdown.take() {
                let _ = shutdown.send(());
            }
        }
    }

    async fn spawn_upstream_stub(app: Router) -> UpstreamStub {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });

        UpstreamStub {
            base_url: format!("http://{addr}"),
            shutdown: Some(shutdown_tx),
        }
    }

    fn client_for(stub: &UpstreamStub, timeout_secs: u64) -> BudaClient {
        BudaClient::new(&BudaConfig {
            base_url: stub.base_url.clone(),
            timeout_secs,
        })
    }

    #[tokio::test]
    async fn list_markets_extracts_catalog_ids() {
        let app = Router::new().route(
            "/markets",
            get(|| async {
                Json(json!({
                    "markets": [
                        { "id": "BTC-CLP", "name": "btc-clp" },
                        { "id": "ETH-CLP", "name": "eth-clp" },
                    ]
                }))
            }),
        );
        let stub = spawn_upstream_stub(app).await;

        let markets = client_for(&stub, 2).list_markets().await.unwrap();
        assert_eq!(markets, vec!["BTC-CLP", "ETH-CLP"]);

        stub.stop().await;
    }

    #[tokio::test]
    async fn list_markets_surfaces_upstream_status() {
        let app = Router::new().route(
            "/markets",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        );
        let stub = spawn_upstream_stub(app).await;

        let err = client_for(&stub, 2).list_markets().await.unwrap_err();
        assert_eq!(err.to_string(), "Error fetching markets: 503");

        stub.stop().await;
    }

    #[tokio::test]
    async fn list_markets_rejects_malformed_payload() {
        let app = Router::new().route(
            "/markets",
            get(|| async { Json(json!({ "unexpected": true })) }),
        );
        let stub = spawn_upstream_stub(app).await;

        let err = client_for(&stub, 2).list_markets().await.unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));

        stub.stop().await;
    }

    #[tokio::test]
    async fn last_price_parses_the_quoted_amount() {
        let app = Router::new().route(
            "/markets/BTC-CLP/ticker",
            get(|| async {
                Json(json!({
                    "ticker": {
                        "market_id": "BTC-CLP",
                        "last_price": ["950000.0", "CLP"],
                        "max_bid": ["940000.0", "CLP"],
                    }
                }))
            }),
        );
        let stub = spawn_upstream_stub(app).await;

        let price = client_for(&stub, 2).last_price("BTC-CLP").await.unwrap();
        assert_eq!(price, 950_000.0);

        stub.stop().await;
    }

    #[tokio::test]
    async fn last_price_surfaces_upstream_status() {
        let app = Router::new().route(
            "/markets/BTC-CLP/ticker",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let stub = spawn_upstream_stub(app).await;

        let err = client_for(&stub, 2).last_price("BTC-CLP").await.unwrap_err();
        assert_eq!(err.to_string(), "Error fetching exchange rate for BTC-CLP: 500");

        stub.stop().await;
    }

    #[tokio::test]
    async fn last_price_flags_non_numeric_price() {
        let app = Router::new().route(
            "/markets/BTC-CLP/ticker",
            get(|| async {
                Json(json!({ "ticker": { "last_price": ["not-a-number", "CLP"] } }))
            }),
        );
        let stub = spawn_upstream_stub(app).await;

        let err = client_for(&stub, 2).last_price("BTC-CLP").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid price format for market BTC-CLP: not-a-number from Buda API"
        );

        stub.stop().await;
    }

    #[tokio::test]
    async fn slow_upstream_times_out_as_request_error() {
        let app = Router::new().route(
            "/markets",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "markets": [] }))
            }),
        );
        let stub = spawn_upstream_stub(app).await;

        let err = client_for(&stub, 1).list_markets().await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));

        stub.stop().await;
    }
}
