use market_client::error::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValuationError {
    /// The derived market identifier does not exist in the upstream catalog.
    /// This is a caller-data failure, not an infrastructure one.
    #[error("Market {0} is not available in the current portfolio.")]
    MarketUnavailable(String),

    /// The upstream API failed or returned a payload we could not use.
    #[error(transparent)]
    Api(#[from] ApiError),
}
