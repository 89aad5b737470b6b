//! Document export
//!
//! Renders the metrics record plus the generated summary into a PDF or Word
//! document under the output directory. Documents are rendered fully in
//! memory and written in one step, so a failed render leaves no partial
//! file behind.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing::info;

use crate::error::{Result, ValuationError};
use crate::models::{CompanyMetrics, ExportFormat};

mod docx;
mod pdf;

/// Reduce a company name to a filesystem-safe stem
///
/// Retains alphanumerics, spaces, hyphens and underscores; everything else
/// is stripped and the result trimmed.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Metric lines shared by both document bodies
fn metric_lines(metrics: &CompanyMetrics) -> Vec<String> {
    vec![
        format!("Industry: {}", metrics.industry),
        format!("Revenue: ${:.2}B", metrics.revenue),
        format!("Revenue Growth: {:.1}%", metrics.revenue_growth),
        format!("Profit Margin: {:.1}%", metrics.profit_margin),
    ]
}

pub struct DocumentExporter {
    output_dir: PathBuf,
}

impl DocumentExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Export the summary document, returning the written path
    pub fn export(
        &self,
        metrics: &CompanyMetrics,
        summary: &str,
        format: ExportFormat,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            ValuationError::ExportFailure(format!(
                "cannot create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let safe_name = sanitize_filename(&metrics.name);
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!(
            "valuation_summary_{}_{}.{}",
            safe_name,
            timestamp,
            format.extension()
        );
        let path = self.output_dir.join(filename);

        let bytes = match format {
            ExportFormat::Pdf => pdf::render(metrics, summary),
            ExportFormat::Docx => docx::render(metrics, summary),
        }
        .map_err(|e| ValuationError::ExportFailure(e.to_string()))?;

        fs::write(&path, bytes).map_err(|e| {
            ValuationError::ExportFailure(format!("cannot write {}: {}", path.display(), e))
        })?;

        info!("Exported {} document to {}", format.extension(), path.display());
        Ok(path)
    }
}
