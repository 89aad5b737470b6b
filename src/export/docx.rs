//! Word document rendering for the valuation summary

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use crate::models::CompanyMetrics;

use super::metric_lines;

// Run sizes are half-points: 48 = 24pt title, 28 = 14pt headings.
const TITLE_SIZE: usize = 48;
const HEADING_SIZE: usize = 28;

pub(super) fn render(metrics: &CompanyMetrics, summary: &str) -> anyhow::Result<Vec<u8>> {
    let mut docx = Docx::new()
        .add_paragraph(heading(
            &format!("Valuation Summary: {}", metrics.name),
            TITLE_SIZE,
        ))
        .add_paragraph(heading("Key Metrics", HEADING_SIZE));

    for line in metric_lines(metrics) {
        docx = docx.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(format!("\u{2022} {}", line))),
        );
    }

    docx = docx.add_paragraph(heading("Analysis", HEADING_SIZE));
    for paragraph in summary.split('\n') {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(paragraph)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer)?;
    Ok(buffer.into_inner())
}

fn heading(text: &str, size: usize) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(size))
}
