//! Source adapters
//!
//! Two paths produce the canonical `CompanyMetrics` record: a public-market
//! fetch keyed by ticker symbol, and a transform over the private company
//! form. Both delegate every unit conversion and ratio to `normalize`.

use tracing::{info, warn};

use crate::api::{MarketDataProvider, QuoteSummary};
use crate::error::{Result, ValuationError};
use crate::models::{CompanyMetrics, RawPrivateInput};
use crate::normalize::{
    derive_net_income, derive_profit_margin, growth_percent, to_billions, UnitScale,
};

/// Fetch and normalize metrics for a publicly traded company
///
/// Any provider or parse failure surfaces as `DataUnavailable`; provider
/// specifics never leak past this boundary.
pub async fn fetch_public(
    provider: &(dyn MarketDataProvider + Send + Sync),
    ticker: &str,
) -> Result<CompanyMetrics> {
    let summary = provider.quote_summary(ticker).await?;
    let metrics = map_quote_summary(summary, ticker)?;
    info!(
        "Fetched metrics for {} ({}): revenue ${:.2}B",
        metrics.name, ticker, metrics.revenue
    );
    Ok(metrics)
}

fn map_quote_summary(summary: QuoteSummary, ticker: &str) -> Result<CompanyMetrics> {
    let price = summary.price.unwrap_or_default();
    let profile = summary.asset_profile.unwrap_or_default();
    let detail = summary.summary_detail.unwrap_or_default();
    let statements = summary
        .income_statement_history
        .map(|history| history.statements)
        .unwrap_or_default();

    let name = price
        .long_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| ticker.to_string());

    let market_cap_raw = price.market_cap.and_then(|v| v.raw).unwrap_or(0.0);
    let market_cap = to_billions(market_cap_raw, UnitScale::Units);

    // Statements are most-recent-first; growth needs two fiscal periods.
    let latest_revenue = statements
        .first()
        .and_then(|s| s.total_revenue.as_ref())
        .and_then(|v| v.raw)
        .ok_or_else(|| {
            ValuationError::DataUnavailable(format!("no reported revenue for {}", ticker))
        })?;
    let prior_revenue = statements
        .get(1)
        .and_then(|s| s.total_revenue.as_ref())
        .and_then(|v| v.raw)
        .ok_or_else(|| {
            ValuationError::DataUnavailable(format!(
                "fewer than two fiscal periods reported for {}",
                ticker
            ))
        })?;
    let latest_net_income = statements
        .first()
        .and_then(|s| s.net_income.as_ref())
        .and_then(|v| v.raw)
        .ok_or_else(|| {
            ValuationError::DataUnavailable(format!("no reported net income for {}", ticker))
        })?;

    let revenue = to_billions(latest_revenue, UnitScale::Units);
    let net_income = to_billions(latest_net_income, UnitScale::Units);
    let revenue_growth = growth_percent(latest_revenue, prior_revenue)?;
    let profit_margin = derive_profit_margin(net_income, revenue)?;

    // Forward P/E preferred, trailing as fallback, 0.0 as a degraded value
    // when the provider reports neither.
    let pe_ratio = detail
        .forward_pe
        .and_then(|v| v.raw)
        .or_else(|| detail.trailing_pe.and_then(|v| v.raw))
        .unwrap_or_else(|| {
            warn!("No P/E reported for {}, defaulting to 0.0", ticker);
            0.0
        });

    let competitors = profile
        .company_officers
        .into_iter()
        .filter_map(|officer| officer.name)
        .filter(|name| !name.trim().is_empty())
        .collect();

    Ok(CompanyMetrics {
        name,
        industry: profile.industry.unwrap_or_else(|| "N/A".to_string()),
        revenue,
        revenue_growth,
        net_income,
        profit_margin,
        market_cap: Some(market_cap),
        pe_ratio: Some(pe_ratio),
        ebitda_margin: None,
        competitors,
        description: profile.long_business_summary.unwrap_or_default(),
    })
}

/// Validate and normalize the private company form
///
/// Pure transform, no external calls. Numeric fields are parsed from the
/// entered text; zero is a valid value, only empty or unparseable entries
/// are rejected.
pub fn process_private(input: &RawPrivateInput) -> Result<CompanyMetrics> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValuationError::InvalidInput(
            "company name must not be empty".to_string(),
        ));
    }

    let industry = input.industry.trim();
    let industry = if industry.is_empty() {
        "N/A".to_string()
    } else {
        industry.to_string()
    };

    let revenue_millions = parse_numeric_field("revenue", &input.revenue_millions)?;
    let revenue_growth = parse_numeric_field("revenue growth", &input.revenue_growth)?;
    let profit_margin = parse_numeric_field("profit margin", &input.profit_margin)?;
    let ebitda_margin = parse_numeric_field("EBITDA margin", &input.ebitda_margin)?;

    let revenue = to_billions(revenue_millions, UnitScale::Millions);
    let net_income = derive_net_income(revenue, profit_margin);

    Ok(CompanyMetrics {
        name: name.to_string(),
        industry,
        revenue,
        revenue_growth,
        net_income,
        profit_margin,
        market_cap: None,
        pe_ratio: None,
        ebitda_margin: Some(ebitda_margin),
        competitors: parse_competitor_list(&input.competitors),
        description: String::new(),
    })
}

/// Split a comma-separated competitor entry into trimmed names
///
/// Insertion order is preserved; empty segments are dropped.
pub fn parse_competitor_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_numeric_field(field: &str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        ValuationError::InvalidInput(format!("{} is not a valid number: '{}'", field, raw.trim()))
    })
}
