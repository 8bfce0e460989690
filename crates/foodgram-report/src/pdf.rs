//! Deterministic PDF renderer for the shopping-list table
//!
//! Layout: a centered title on the first page, then the table rows top to
//! bottom. Rows that do not fit continue on the next page; the header row is
//! printed once. The output carries no timestamps or document ids, so equal
//! input always yields byte-identical files.

use std::ops::Range;

use foodgram_common::{FoodgramError, SHOPPING_LIST_FILE_NAME};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};
use tracing::debug;

use crate::document::ReportDocument;
use crate::font::{EmbeddedFont, GlyphEncoder, UsedGlyph};
use crate::style::*;
use crate::table::{ShoppingListTable, TableRow};

const FONT_RESOURCE: &str = "F1";

/// Entries per `beginbfchar` block; the CMap format allows at most 100.
const BFCHAR_BLOCK: usize = 100;

pub struct PdfRenderer {
    font: EmbeddedFont,
}

impl PdfRenderer {
    pub fn new(font: EmbeddedFont) -> Self {
        Self { font }
    }

    pub fn render(
        &self,
        title: &str,
        table: &ShoppingListTable,
    ) -> Result<ReportDocument, FoodgramError> {
        let bytes = self.render_bytes(title, table)?;

        Ok(ReportDocument::pdf(bytes, SHOPPING_LIST_FILE_NAME))
    }

    pub fn render_bytes(
        &self,
        title: &str,
        table: &ShoppingListTable,
    ) -> Result<Vec<u8>, FoodgramError> {
        let mut encoder = self.font.encoder()?;

        let pages = paginate(table.len());
        let mut page_contents = Vec::with_capacity(pages.len());

        for (page_index, rows) in pages.iter().enumerate() {
            let mut ops = Vec::new();

            let mut top = if page_index == 0 {
                draw_title(&mut ops, &mut encoder, title);
                first_page_table_top()
            } else {
                continued_table_top()
            };

            for row_index in rows.clone() {
                let style = if row_index == 0 {
                    HEADER_STYLE
                } else {
                    DATA_STYLE
                };
                top -= ROW_HEIGHT;
                draw_row(&mut ops, &mut encoder, &table.rows()[row_index], top, style);
            }

            let content = Content { operations: ops }
                .encode()
                .map_err(|e| render_failed("page content", e))?;
            page_contents.push(content);
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = self.add_font(&mut doc, &encoder);
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { FONT_RESOURCE => font_id },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(page_contents.len());
        for content in page_contents {
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(PAGE_WIDTH),
                    Object::Real(PAGE_HEIGHT),
                ],
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| render_failed("document", e))?;

        debug!(
            rows = table.len(),
            pages = page_count,
            size = bytes.len(),
            "Rendered shopping list"
        );

        Ok(bytes)
    }

    /// Embed the font as a Type0 font with an Identity-H CID descendant.
    fn add_font(&self, doc: &mut Document, encoder: &GlyphEncoder<'_>) -> ObjectId {
        let font = &self.font;
        let base_font = Object::Name(font.base_font().as_bytes().to_vec());

        let font_file_id = doc.add_object(Stream::new(
            dictionary! { "Length1" => font.data().len() as i64 },
            font.data().to_vec(),
        ));

        let descriptor_id = doc.add_object(dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => base_font.clone(),
            "Flags" => 32i64,
            "FontBBox" => font.bbox().map(Object::Integer).to_vec(),
            "ItalicAngle" => 0i64,
            "Ascent" => font.ascent(),
            "Descent" => font.descent(),
            "CapHeight" => font.cap_height(),
            "StemV" => 80i64,
            "FontFile2" => font_file_id,
        });

        let widths: Vec<Object> = encoder
            .used_glyphs()
            .iter()
            .flat_map(|(gid, glyph)| {
                [
                    Object::Integer(i64::from(*gid)),
                    Object::Array(vec![Object::Integer(i64::from(glyph.width))]),
                ]
            })
            .collect();

        let cid_font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "BaseFont" => base_font.clone(),
            "CIDSystemInfo" => dictionary! {
                "Registry" => Object::string_literal("Adobe"),
                "Ordering" => Object::string_literal("Identity"),
                "Supplement" => 0i64,
            },
            "FontDescriptor" => descriptor_id,
            "DW" => i64::from(encoder.default_width()),
            "W" => widths,
            "CIDToGIDMap" => "Identity",
        });

        let to_unicode_id = doc.add_object(Stream::new(
            dictionary! {},
            to_unicode_cmap(encoder.used_glyphs().iter()).into_bytes(),
        ));

        doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => base_font,
            "Encoding" => "Identity-H",
            "DescendantFonts" => vec![Object::from(cid_font_id)],
            "ToUnicode" => to_unicode_id,
        })
    }
}

fn render_failed(what: &str, err: impl std::fmt::Display) -> FoodgramError {
    FoodgramError::RenderFailed(format!("cannot serialize {}: {}", what, err))
}

/// Split `row_count` table rows into per-page index ranges.
pub fn paginate(row_count: usize) -> Vec<Range<usize>> {
    let mut pages = Vec::new();
    let mut start = 0;
    let mut capacity = rows_fitting(first_page_table_top()).max(1);

    loop {
        let end = (start + capacity).min(row_count);
        pages.push(start..end);
        if end >= row_count {
            break;
        }
        start = end;
        capacity = rows_fitting(continued_table_top()).max(1);
    }

    pages
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

fn set_fill(ops: &mut Vec<Operation>, color: Color) {
    ops.push(Operation::new(
        "rg",
        vec![real(color.r), real(color.g), real(color.b)],
    ));
}

fn show_text(
    ops: &mut Vec<Operation>,
    encoder: &mut GlyphEncoder<'_>,
    text: &str,
    font_size: f32,
    x: f32,
    y: f32,
) {
    let glyphs = encoder.encode(text);

    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![Object::Name(FONT_RESOURCE.as_bytes().to_vec()), real(font_size)],
    ));
    ops.push(Operation::new("Td", vec![real(x), real(y)]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(glyphs, StringFormat::Hexadecimal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn draw_title(ops: &mut Vec<Operation>, encoder: &mut GlyphEncoder<'_>, title: &str) {
    let width = encoder.text_width(title, TITLE_FONT_SIZE);
    let x = (PAGE_WIDTH - width) / 2.0;
    let y = PAGE_HEIGHT - PAGE_MARGIN - TITLE_FONT_SIZE;

    set_fill(ops, BLACK);
    show_text(ops, encoder, title, TITLE_FONT_SIZE, x, y);
}

/// Draw one table row whose bottom edge sits at `bottom`.
fn draw_row(
    ops: &mut Vec<Operation>,
    encoder: &mut GlyphEncoder<'_>,
    row: &TableRow,
    bottom: f32,
    style: RowStyle,
) {
    let left = table_left();

    set_fill(ops, style.background);
    ops.push(Operation::new(
        "re",
        vec![
            real(left),
            real(bottom),
            real(table_width()),
            real(ROW_HEIGHT),
        ],
    ));
    ops.push(Operation::new("f", vec![]));

    ops.push(Operation::new(
        "RG",
        vec![real(GREY.r), real(GREY.g), real(GREY.b)],
    ));
    ops.push(Operation::new("w", vec![real(GRID_LINE_WIDTH)]));
    for column in 0..COLUMN_COUNT {
        let cell_left = left + COLUMN_WIDTH * column as f32;
        ops.push(Operation::new(
            "re",
            vec![
                real(cell_left),
                real(bottom),
                real(COLUMN_WIDTH),
                real(ROW_HEIGHT),
            ],
        ));
        ops.push(Operation::new("S", vec![]));
    }

    set_fill(ops, style.text);
    for (column, text) in row.cells.iter().enumerate() {
        let cell_left = left + COLUMN_WIDTH * column as f32;
        let width = encoder.text_width(text, style.font_size);
        let x = cell_left + (COLUMN_WIDTH - width) / 2.0;
        let y = bottom + style.bottom_padding;

        show_text(ops, encoder, text, style.font_size, x, y);
    }
}

/// Build a ToUnicode CMap mapping every used glyph id back to its character.
fn to_unicode_cmap<'a>(glyphs: impl Iterator<Item = (&'a u16, &'a UsedGlyph)>) -> String {
    let entries: Vec<String> = glyphs
        .map(|(gid, glyph)| {
            let mut units = [0u16; 2];
            let utf16: String = glyph
                .ch
                .encode_utf16(&mut units)
                .iter()
                .map(|unit| format!("{:04X}", unit))
                .collect();
            format!("<{:04X}> <{}>", gid, utf16)
        })
        .collect();

    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    for block in entries.chunks(BFCHAR_BLOCK) {
        cmap.push_str(&format!("{} beginbfchar\n", block.len()));
        for entry in block {
            cmap.push_str(entry);
            cmap.push('\n');
        }
        cmap.push_str("endbfchar\n");
    }

    cmap.push_str(
        "endcmap\n\
         CMapName currentdict /CMap defineresource pop\n\
         end\n\
         end\n",
    );

    cmap
}
