//! TrueType font loading and glyph encoding
//!
//! Text is written with an Identity-H encoded CID font, so every character is
//! emitted as its two-byte glyph id. The encoder records every glyph it hands
//! out so the renderer can emit widths and a ToUnicode map for exactly those.

use std::collections::BTreeMap;
use std::path::Path;

use foodgram_common::FoodgramError;
use tracing::debug;
use ttf_parser::{Face, GlyphId, name_id};

/// Width in thousandths of an em used when a glyph has no advance
const FALLBACK_WIDTH: u16 = 500;

const FALLBACK_FONT_NAME: &str = "FoodgramEmbedded";

/// Parsed TrueType font ready to be embedded into a PDF
#[derive(Clone, Debug)]
pub struct EmbeddedFont {
    data: Vec<u8>,
    base_font: String,
    units_per_em: u16,
    ascent: i16,
    descent: i16,
    cap_height: i16,
    bbox: [i16; 4],
}

impl EmbeddedFont {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FoodgramError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| {
            FoodgramError::RenderFailed(format!("cannot read font {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), size = data.len(), "Loaded report font");

        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FoodgramError> {
        let face = parse_face(&data)?;

        let base_font = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == name_id::POST_SCRIPT_NAME)
            .find_map(|name| name.to_string())
            .map(|name| sanitize_font_name(&name))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_FONT_NAME.to_string());

        let rect = face.global_bounding_box();
        let units_per_em = face.units_per_em();
        let ascent = face.ascender();
        let descent = face.descender();
        let cap_height = face.capital_height().unwrap_or(ascent);

        Ok(Self {
            base_font,
            units_per_em,
            ascent,
            descent,
            cap_height,
            bbox: [rect.x_min, rect.y_min, rect.x_max, rect.y_max],
            data,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// PostScript name written as `/BaseFont`
    pub fn base_font(&self) -> &str {
        &self.base_font
    }

    /// Convert a value in font units to thousandths of an em.
    pub fn scale(&self, value: i16) -> i64 {
        (f32::from(value) * 1000.0 / f32::from(self.units_per_em)).round() as i64
    }

    pub fn ascent(&self) -> i64 {
        self.scale(self.ascent)
    }

    pub fn descent(&self) -> i64 {
        self.scale(self.descent)
    }

    pub fn cap_height(&self) -> i64 {
        self.scale(self.cap_height)
    }

    pub fn bbox(&self) -> [i64; 4] {
        self.bbox.map(|v| self.scale(v))
    }

    pub fn encoder(&self) -> Result<GlyphEncoder<'_>, FoodgramError> {
        let face = parse_face(&self.data)?;
        let default_width = advance(&face, GlyphId(0)).unwrap_or(FALLBACK_WIDTH);

        Ok(GlyphEncoder {
            face,
            default_width,
            used: BTreeMap::new(),
        })
    }
}

fn parse_face(data: &[u8]) -> Result<Face<'_>, FoodgramError> {
    Face::parse(data, 0)
        .map_err(|e| FoodgramError::RenderFailed(format!("invalid TrueType font: {}", e)))
}

/// Horizontal advance of `glyph` in thousandths of an em
fn advance(face: &Face<'_>, glyph: GlyphId) -> Option<u16> {
    let units_per_em = f32::from(face.units_per_em());
    face.glyph_hor_advance(glyph)
        .map(|adv| (f32::from(adv) * 1000.0 / units_per_em).round() as u16)
}

fn sanitize_font_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_graphic() && !"()<>[]{}/%#".contains(*c))
        .collect()
}

/// Glyph recorded by the encoder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsedGlyph {
    pub ch: char,
    /// Advance in thousandths of an em
    pub width: u16,
}

/// Maps text to glyph ids and remembers which glyphs were used
pub struct GlyphEncoder<'a> {
    face: Face<'a>,
    default_width: u16,
    used: BTreeMap<u16, UsedGlyph>,
}

impl GlyphEncoder<'_> {
    /// Encode `text` as big-endian two-byte glyph ids.
    ///
    /// Characters the font has no glyph for map to glyph 0.
    pub fn encode(&mut self, text: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(text.len() * 2);
        for ch in text.chars() {
            let gid = self.glyph(ch);
            bytes.extend_from_slice(&gid.to_be_bytes());
        }
        bytes
    }

    /// Width of `text` in points at `font_size`
    pub fn text_width(&mut self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|ch| {
                let gid = self.glyph(ch);
                u32::from(self.width_of(gid))
            })
            .sum();

        units as f32 * font_size / 1000.0
    }

    pub fn default_width(&self) -> u16 {
        self.default_width
    }

    /// Glyphs handed out so far, ordered by glyph id
    pub fn used_glyphs(&self) -> &BTreeMap<u16, UsedGlyph> {
        &self.used
    }

    fn glyph(&mut self, ch: char) -> u16 {
        let Some(gid) = self.face.glyph_index(ch) else {
            return 0;
        };

        if !self.used.contains_key(&gid.0) {
            let width = advance(&self.face, gid).unwrap_or(self.default_width);
            self.used.insert(gid.0, UsedGlyph { ch, width });
        }

        gid.0
    }

    fn width_of(&self, gid: u16) -> u16 {
        self.used
            .get(&gid)
            .map(|glyph| glyph.width)
            .unwrap_or(self.default_width)
    }
}
