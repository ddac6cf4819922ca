use crate::error::Result;
use crate::report::ReportDocument;
use crate::util::format_int;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs;
use tabled::{settings::Style, Table, Tabled};

// Page geometry in millimeters for a portrait A4 sheet: 10mm body line
// step, 5mm gap between record blocks, page break at the 15mm bottom
// margin.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 10.0;
const MARGIN_BOTTOM: f32 = 15.0;
const LINE_STEP: f32 = 10.0;
const BLOCK_GAP: f32 = 5.0;
const FONT_SIZE: f32 = 12.0;
// Average Helvetica glyph advance at 1pt, in millimeters. Used to
// approximate the centered title without embedding font metrics.
const AVG_GLYPH_MM: f32 = 0.5 * 0.352_778;

/// Print every row as a markdown-style table.
pub fn print_table<T>(rows: &[T])
where
    T: Tabled + Clone,
{
    if rows.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table = Table::new(rows.to_vec()).with(Style::markdown()).to_string();
    println!("{}\n", table);
}

/// Print at most `max_rows` rows, noting how many were held back.
pub fn preview_table<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}", table);
    if rows.len() > max_rows {
        println!(
            "({} of {} rows shown)",
            format_int(max_rows as i64),
            format_int(rows.len() as i64)
        );
    }
    println!();
}

/// Render the document to fixed-layout PDF bytes, write the artifact, and
/// return the bytes for the download path.
///
/// Layout: title near the top of the first page, then one line per block
/// entry at the left margin, stepping down the page and breaking onto a
/// fresh page when the cursor reaches the bottom margin.
pub fn write_pdf(path: &str, document: &ReportDocument) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        document.title.clone(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT - LINE_STEP;

    let title_width = document.title.len() as f32 * FONT_SIZE * AVG_GLYPH_MM;
    let title_x = ((PAGE_WIDTH - title_width) / 2.0).max(MARGIN_LEFT);
    layer.use_text(document.title.as_str(), FONT_SIZE, Mm(title_x), Mm(y), &font);
    y -= 2.0 * LINE_STEP;

    for block in &document.blocks {
        for line in block {
            if y < MARGIN_BOTTOM {
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                layer = doc.get_page(next_page).get_layer(next_layer);
                y = PAGE_HEIGHT - LINE_STEP;
            }
            layer.use_text(line.as_str(), FONT_SIZE, Mm(MARGIN_LEFT), Mm(y), &font);
            y -= LINE_STEP;
        }
        y -= BLOCK_GAP;
    }

    let bytes = doc.save_to_bytes()?;
    fs::write(path, &bytes)?;
    Ok(bytes)
}
