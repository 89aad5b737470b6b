//! Summary generator tests against a stubbed chat-completions endpoint

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use valuation_builder::api::LlmClient;
use valuation_builder::summary::{SummaryGenerator, SUMMARY_UNAVAILABLE};

use crate::common::test_data;

#[test_log::test(tokio::test)]
async fn test_generated_summary_is_trimmed_response_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "  Solid fundamentals overall.  "}}
            ]
        })))
        .mount(&server)
        .await;

    let config = test_data::test_config("http://unused.invalid", &server.uri());
    let generator = SummaryGenerator::new(LlmClient::new(&config).unwrap());

    let summary = generator
        .generate(&test_data::sample_metrics("Acme Corp"))
        .await;

    assert_eq!(summary, "Solid fundamentals overall.");
}

#[test_log::test(tokio::test)]
async fn test_provider_failure_degrades_to_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let config = test_data::test_config("http://unused.invalid", &server.uri());
    let generator = SummaryGenerator::new(LlmClient::new(&config).unwrap());

    let summary = generator
        .generate(&test_data::sample_metrics("Acme Corp"))
        .await;

    assert_eq!(summary, SUMMARY_UNAVAILABLE);
}

#[test_log::test(tokio::test)]
async fn test_empty_choices_degrades_to_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let config = test_data::test_config("http://unused.invalid", &server.uri());
    let generator = SummaryGenerator::new(LlmClient::new(&config).unwrap());

    let summary = generator
        .generate(&test_data::sample_metrics("Acme Corp"))
        .await;

    assert_eq!(summary, SUMMARY_UNAVAILABLE);
}
