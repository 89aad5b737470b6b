//! Private-path pipeline tests: form input through prompt and export

use pretty_assertions::assert_eq;
use test_log::test;

use valuation_builder::export::DocumentExporter;
use valuation_builder::models::ExportFormat;
use valuation_builder::sources;
use valuation_builder::summary::build_prompt;

use crate::common::test_data;

#[test]
fn test_private_form_to_normalized_record() {
    let metrics = sources::process_private(&test_data::sample_private_input()).unwrap();

    assert_eq!(metrics.name, "Acme Robotics");
    assert_eq!(metrics.revenue, 1.2); // 1200M -> 1.2B
    assert_eq!(metrics.revenue_growth, 18.5);
    assert_eq!(metrics.profit_margin, 15.0);
    assert!((metrics.net_income - 0.18).abs() < 1e-12);
    assert_eq!(
        metrics.competitors,
        vec!["Acme", "Globex", "Initech"],
        "competitor order must be preserved"
    );
    assert_eq!(metrics.market_cap, None);
    assert_eq!(metrics.pe_ratio, None);
}

#[test]
fn test_normalized_record_feeds_the_prompt() {
    let metrics = sources::process_private(&test_data::sample_private_input()).unwrap();
    let prompt = build_prompt(&metrics);

    assert!(prompt.contains("Acme Robotics"));
    assert!(prompt.contains("Revenue: $1.20B"));
    assert!(prompt.contains("Revenue Growth: 18.5%"));
    assert!(prompt.contains("Industry: Industrial Automation"));
}

#[test]
fn test_normalized_record_exports_to_both_formats() {
    let metrics = sources::process_private(&test_data::sample_private_input()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let exporter = DocumentExporter::new(dir.path());

    for format in [ExportFormat::Pdf, ExportFormat::Docx] {
        let path = exporter
            .export(&metrics, "Steady grower with healthy margins.", format)
            .unwrap();
        assert!(path.exists());
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("valuation_summary_Acme Robotics_"));
    }
}
