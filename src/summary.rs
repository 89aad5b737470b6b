//! Valuation summary generation
//!
//! Wraps the LLM client behind a single `generate` call. Provider failures
//! degrade to a fixed placeholder so a bad key or outage never aborts the
//! session.

use tracing::{info, warn};

use crate::api::{ChatMessage, LlmClient};
use crate::models::CompanyMetrics;

/// Placeholder returned when the provider call fails
pub const SUMMARY_UNAVAILABLE: &str =
    "Error generating valuation summary. Please check your Groq API key and try again.";

const SYSTEM_PROMPT: &str =
    "You are an experienced financial analyst specializing in company valuations.";

pub struct SummaryGenerator {
    client: LlmClient,
}

impl SummaryGenerator {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    /// Generate a prose valuation summary for the given metrics
    pub async fn generate(&self, metrics: &CompanyMetrics) -> String {
        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(metrics)),
        ];

        match self.client.chat(messages).await {
            Ok(text) => {
                info!("Generated valuation summary for {}", metrics.name);
                text
            }
            Err(e) => {
                warn!("Summary generation degraded to placeholder: {}", e);
                SUMMARY_UNAVAILABLE.to_string()
            }
        }
    }
}

/// Fixed-structure analyst prompt embedding the normalized metrics
pub fn build_prompt(metrics: &CompanyMetrics) -> String {
    format!(
        "Generate a concise (150-200 words) valuation summary for {name}.

Key metrics:
- Revenue: ${revenue:.2}B
- Revenue Growth: {growth:.1}%
- Profit Margin: {margin:.1}%
- Industry: {industry}

Focus on:
1. Company's market position and competitive advantages
2. Financial performance and growth trends
3. Key valuation drivers and metrics
4. Risks and opportunities
5. Overall valuation perspective

Please provide a professional, balanced analysis that would be suitable for investors.",
        name = metrics.name,
        revenue = metrics.revenue,
        growth = metrics.revenue_growth,
        margin = metrics.profit_margin,
        industry = metrics.industry,
    )
}
