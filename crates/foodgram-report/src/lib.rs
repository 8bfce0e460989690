//! Foodgram Report - Shopping-list PDF rendering
//!
//! This crate provides:
//! - The shopping-list table model with its fixed header row
//! - TrueType font embedding for Cyrillic-capable PDF text
//! - A deterministic, paginated PDF renderer
//! - The immutable report document handed to the HTTP layer

pub mod document;
pub mod font;
pub mod pdf;
pub mod style;
pub mod table;

#[doc(hidden)]
pub mod fixture;

use std::path::Path;

use foodgram_common::{FoodgramError, SHOPPING_LIST_TITLE};

pub use document::ReportDocument;
pub use font::EmbeddedFont;
pub use pdf::PdfRenderer;
pub use table::{ReportLine, ShoppingListTable, TableRow};

/// Render the shopping list of `lines` with the TrueType font at `font_path`.
pub fn render_shopping_list(
    font_path: impl AsRef<Path>,
    lines: Vec<ReportLine>,
) -> Result<ReportDocument, FoodgramError> {
    let font = EmbeddedFont::from_file(font_path)?;
    let table = ShoppingListTable::new(lines);

    PdfRenderer::new(font).render(SHOPPING_LIST_TITLE, &table)
}
