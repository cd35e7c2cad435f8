use anyhow::{Context, Result};
use chrono::Local;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// US letter
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 25.4;
const LINE_SPACING: f32 = 7.0;

const TITLE: &str = "Personal Budget Report";

/// Write the summary lines to a one-page PDF at `path`.
///
/// The caller owns the file: this function never deletes anything and only
/// creates or truncates `path`. Blank summary lines are skipped; spacing
/// between paragraphs is fixed.
pub(crate) fn write_report(lines: &[String], path: &Path) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");

    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow::anyhow!("failed to load title font: {e}"))?;
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow::anyhow!("failed to load body font: {e}"))?;

    let content = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT - 30.0;
    content.use_text(TITLE, 18.0, Mm(MARGIN), Mm(y), &title_font);
    y -= 2.0 * LINE_SPACING;

    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        content.use_text(line.as_str(), 11.0, Mm(MARGIN), Mm(y), &body_font);
        y -= LINE_SPACING;
    }

    let footer = format!("Generated {}", Local::now().format("%Y-%m-%d"));
    content.use_text(footer, 9.0, Mm(MARGIN), Mm(15.0), &body_font);

    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| anyhow::anyhow!("failed to write PDF: {e}"))?;

    Ok(())
}
