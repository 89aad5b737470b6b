use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ValuationError};
use crate::models::Config;

use super::MarketDataProvider;

/// Numeric field envelope used by the quote-summary payload
///
/// The provider wraps every number as `{"raw": 2.5e12, "fmt": "2.5T"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawValue {
    pub raw: Option<f64>,
    pub fmt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    result: Option<Vec<QuoteSummary>>,
    error: Option<serde_json::Value>,
}

/// One company's quote-summary payload, as returned by the provider
#[derive(Debug, Default, Deserialize)]
pub struct QuoteSummary {
    pub price: Option<PriceModule>,
    #[serde(rename = "assetProfile")]
    pub asset_profile: Option<AssetProfileModule>,
    #[serde(rename = "summaryDetail")]
    pub summary_detail: Option<SummaryDetailModule>,
    #[serde(rename = "incomeStatementHistory")]
    pub income_statement_history: Option<IncomeStatementHistoryModule>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PriceModule {
    #[serde(rename = "longName")]
    pub long_name: Option<String>,
    #[serde(rename = "marketCap")]
    pub market_cap: Option<RawValue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssetProfileModule {
    pub industry: Option<String>,
    #[serde(rename = "longBusinessSummary")]
    pub long_business_summary: Option<String>,
    #[serde(rename = "companyOfficers", default)]
    pub company_officers: Vec<CompanyOfficer>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompanyOfficer {
    pub name: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryDetailModule {
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<RawValue>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<RawValue>,
}

/// Annual income statements, most recent first
#[derive(Debug, Default, Deserialize)]
pub struct IncomeStatementHistoryModule {
    #[serde(rename = "incomeStatementHistory", default)]
    pub statements: Vec<IncomeStatement>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IncomeStatement {
    #[serde(rename = "endDate")]
    pub end_date: Option<RawValue>,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: Option<RawValue>,
    #[serde(rename = "netIncome")]
    pub net_income: Option<RawValue>,
}

const QUOTE_SUMMARY_MODULES: &str = "price,assetProfile,summaryDetail,incomeStatementHistory";

/// Market data API client
pub struct MarketDataClient {
    client: Client,
    base_url: String,
}

impl MarketDataClient {
    /// Create a new market data client
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .user_agent("valuation-builder/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: config.market_data_base_url.clone(),
        })
    }

    async fn fetch_quote_summary(&self, ticker: &str) -> Result<QuoteSummary> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(ValuationError::InvalidInput(
                "ticker symbol must not be empty".to_string(),
            ));
        }

        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.base_url, ticker, QUOTE_SUMMARY_MODULES
        );

        debug!("Requesting quote summary: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ValuationError::DataUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ValuationError::DataUnavailable(format!(
                "provider returned HTTP {} for {}",
                status, ticker
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ValuationError::DataUnavailable(format!("failed to read response: {}", e)))?;

        debug!("Quote summary response: {} bytes", text.len());

        let envelope: QuoteSummaryEnvelope = serde_json::from_str(&text).map_err(|e| {
            ValuationError::DataUnavailable(format!("failed to parse quote summary: {}", e))
        })?;

        if let Some(error) = envelope.quote_summary.error {
            if !error.is_null() {
                return Err(ValuationError::DataUnavailable(format!(
                    "provider error for {}: {}",
                    ticker, error
                )));
            }
        }

        envelope
            .quote_summary
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| {
                ValuationError::DataUnavailable(format!("no data returned for {}", ticker))
            })
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for MarketDataClient {
    async fn quote_summary(&self, ticker: &str) -> Result<QuoteSummary> {
        self.fetch_quote_summary(ticker).await
    }
}
