//! PDF rendering for the valuation summary document

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::models::CompanyMetrics;

use super::metric_lines;

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 6.0;
// Body text at 11pt fits roughly this many characters across the page.
const WRAP_WIDTH: usize = 90;

pub(super) fn render(metrics: &CompanyMetrics, summary: &str) -> anyhow::Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Valuation Summary: {}", metrics.name),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let body_font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let heading_font = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        cursor_mm: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    writer.line(
        &format!("Valuation Summary: {}", metrics.name),
        20.0,
        &heading_font,
    );
    writer.space(LINE_HEIGHT_MM);

    writer.line("Key Metrics:", 14.0, &heading_font);
    for line in metric_lines(metrics) {
        writer.line(&line, 11.0, &body_font);
    }
    writer.space(LINE_HEIGHT_MM);

    writer.line("Analysis:", 14.0, &heading_font);
    for paragraph in summary.split('\n') {
        for line in wrap_text(paragraph, WRAP_WIDTH) {
            writer.line(&line, 11.0, &body_font);
        }
    }

    Ok(doc.save_to_bytes()?)
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    cursor_mm: f32,
}

impl PageWriter<'_> {
    fn line(&mut self, text: &str, size_pt: f32, font: &IndirectFontRef) {
        if self.cursor_mm < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        self.layer
            .use_text(text, size_pt, Mm(MARGIN_MM), Mm(self.cursor_mm), font);
        self.cursor_mm -= LINE_HEIGHT_MM;
    }

    fn space(&mut self, height_mm: f32) {
        self.cursor_mm -= height_mm;
    }
}

/// Greedy word wrap for the built-in fixed-metric layout
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
