use crate::error::Result;

pub mod llm_client;
pub mod market_client;

pub use llm_client::{ChatMessage, LlmClient};
pub use market_client::{MarketDataClient, QuoteSummary};

/// Common trait for market data providers
///
/// The public source adapter only depends on this seam, so tests can point
/// it at a stubbed provider.
#[async_trait::async_trait]
pub trait MarketDataProvider {
    async fn quote_summary(&self, ticker: &str) -> Result<QuoteSummary>;
}
