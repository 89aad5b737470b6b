//! Builders for test records and provider payloads

use serde_json::{json, Value};

use valuation_builder::models::{CompanyMetrics, Config, RawPrivateInput};

/// A private-company metrics record with round numbers
pub fn sample_metrics(name: &str) -> CompanyMetrics {
    CompanyMetrics {
        name: name.to_string(),
        industry: "Software".to_string(),
        revenue: 1.2,
        revenue_growth: 20.0,
        net_income: 0.18,
        profit_margin: 15.0,
        market_cap: None,
        pe_ratio: None,
        ebitda_margin: Some(22.0),
        competitors: vec!["Globex".to_string(), "Initech".to_string()],
        description: String::new(),
    }
}

/// A complete, well-formed private company form
pub fn sample_private_input() -> RawPrivateInput {
    RawPrivateInput {
        name: "Acme Robotics".to_string(),
        industry: "Industrial Automation".to_string(),
        revenue_millions: "1200".to_string(),
        revenue_growth: "18.5".to_string(),
        profit_margin: "15".to_string(),
        ebitda_margin: "22".to_string(),
        competitors: "Acme, Globex,  Initech".to_string(),
    }
}

/// Config pointing both external clients at test servers
pub fn test_config(market_url: &str, groq_url: &str) -> Config {
    Config {
        groq_api_key: "test-key".to_string(),
        groq_model: "test-model".to_string(),
        groq_base_url: groq_url.to_string(),
        market_data_base_url: market_url.to_string(),
        output_dir: "output".to_string(),
        request_timeout_secs: 5,
    }
}

/// Quote-summary payload with a most-recent-first revenue history
///
/// `revenues` drives the income-statement history; net income is attached to
/// the most recent period only, matching what the mapping reads.
pub fn quote_summary_payload(
    revenues: &[f64],
    net_income: f64,
    market_cap: f64,
    trailing_pe: Option<f64>,
    forward_pe: Option<f64>,
) -> Value {
    let statements: Vec<Value> = revenues
        .iter()
        .enumerate()
        .map(|(i, revenue)| {
            if i == 0 {
                json!({
                    "totalRevenue": {"raw": revenue},
                    "netIncome": {"raw": net_income}
                })
            } else {
                json!({"totalRevenue": {"raw": revenue}})
            }
        })
        .collect();

    let mut summary_detail = json!({});
    if let Some(pe) = trailing_pe {
        summary_detail["trailingPE"] = json!({"raw": pe});
    }
    if let Some(pe) = forward_pe {
        summary_detail["forwardPE"] = json!({"raw": pe});
    }

    json!({
        "quoteSummary": {
            "result": [{
                "price": {
                    "longName": "Test Corp",
                    "marketCap": {"raw": market_cap}
                },
                "assetProfile": {
                    "industry": "Consumer Electronics",
                    "longBusinessSummary": "Designs and sells devices.",
                    "companyOfficers": [
                        {"name": "Alice Chen", "title": "CEO"},
                        {"name": "Bob Diaz", "title": "CFO"}
                    ]
                },
                "summaryDetail": summary_detail,
                "incomeStatementHistory": {
                    "incomeStatementHistory": statements
                }
            }],
            "error": null
        }
    })
}
