use serde::{Deserialize, Serialize};

/// Canonical company metrics record
///
/// All monetary fields are expressed in billions of dollars and all rates in
/// percent, regardless of which source produced the record. Built once per
/// interaction by one of the source adapters and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyMetrics {
    pub name: String,
    pub industry: String,
    /// Billions. May be negative for distressed reporters.
    pub revenue: f64,
    /// Percent, may be negative.
    pub revenue_growth: f64,
    /// Billions. Derived from margin for private companies.
    pub net_income: f64,
    /// Percent.
    pub profit_margin: f64,
    /// Billions. Public companies only.
    pub market_cap: Option<f64>,
    /// Public companies only. 0.0 when the provider reports neither forward
    /// nor trailing P/E.
    pub pe_ratio: Option<f64>,
    /// Percent. Private companies only.
    pub ebitda_margin: Option<f64>,
    pub competitors: Vec<String>,
    pub description: String,
}

/// Free-form private company input, pre-validation
///
/// Numeric fields stay as entered text until the private source adapter
/// parses them, so malformed entries can be reported per field.
#[derive(Debug, Clone, Default)]
pub struct RawPrivateInput {
    pub name: String,
    pub industry: String,
    /// Revenue in millions of dollars.
    pub revenue_millions: String,
    pub revenue_growth: String,
    pub profit_margin: String,
    pub ebitda_margin: String,
    /// Comma-separated competitor names.
    pub competitors: String,
}

/// Supported export document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_model: String,
    pub groq_base_url: String,
    pub market_data_base_url: String,
    pub output_dir: String,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Ok(Config {
            groq_api_key: std::env::var("GROQ_API_KEY")
                .map_err(|_| anyhow::anyhow!("GROQ_API_KEY environment variable required"))?,
            groq_model: std::env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "meta-llama/llama-4-scout-17b-16e-instruct".to_string()),
            groq_base_url: std::env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            market_data_base_url: std::env::var("MARKET_DATA_BASE_URL")
                .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string()),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "output".to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}
