//! Shared unit-scaling and ratio derivation
//!
//! Both source adapters call into this module so that public and private
//! records carry identical field semantics: money in billions, rates in
//! percent. The arithmetic lives here and nowhere else.

use crate::error::{Result, ValuationError};

/// Unit of the raw monetary value being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitScale {
    /// Native currency units, e.g. a provider-reported 2.5e12 market cap.
    Units,
    /// Millions, the unit of the private company form.
    Millions,
}

/// Convert a raw monetary value to billions
pub fn to_billions(value: f64, scale: UnitScale) -> f64 {
    match scale {
        UnitScale::Units => value / 1e9,
        UnitScale::Millions => value / 1000.0,
    }
}

/// Period-over-period growth in percent
///
/// `latest` and `previous` must share a unit. A zero prior period has no
/// defined growth rate and is reported as `InvalidMetric`.
pub fn growth_percent(latest: f64, previous: f64) -> Result<f64> {
    let growth = (latest / previous - 1.0) * 100.0;
    if !growth.is_finite() {
        return Err(ValuationError::InvalidMetric(format!(
            "revenue growth is undefined for prior-period revenue {}",
            previous
        )));
    }
    Ok(growth)
}

/// Net-income-over-revenue margin in percent
///
/// Zero revenue yields a non-finite ratio and is reported as `InvalidMetric`
/// rather than letting NaN/Infinity flow downstream.
pub fn derive_profit_margin(net_income: f64, revenue: f64) -> Result<f64> {
    let margin = net_income / revenue * 100.0;
    if !margin.is_finite() {
        return Err(ValuationError::InvalidMetric(format!(
            "profit margin is undefined for revenue {}",
            revenue
        )));
    }
    Ok(margin)
}

/// Net income in billions from revenue (billions) and margin (percent)
pub fn derive_net_income(revenue_billions: f64, profit_margin_pct: f64) -> f64 {
    revenue_billions * profit_margin_pct / 100.0
}
