//! Synthesized TrueType font for tests
//!
//! The font has no outlines. It carries `head`, `hhea`, `maxp`, a `hmtx` with
//! per-glyph advances and a format 4 `cmap` covering printable ASCII and the
//! basic Cyrillic alphabet, which is enough to embed it and measure text.

/// `(first char, last char, first glyph id)` of every mapped range
const CHAR_RANGES: [(u16, u16, u16); 4] = [
    (0x0020, 0x007E, 1),   // printable ASCII
    (0x0401, 0x0401, 96),  // Ё
    (0x0410, 0x044F, 97),  // А..я
    (0x0451, 0x0451, 161), // ё
];

/// Glyph count, `.notdef` included
pub const GLYPH_COUNT: u16 = 162;

/// Advance width of `gid` in font units (1000 per em)
pub fn glyph_advance(gid: u16) -> u16 {
    match gid {
        0 => 500,
        1 => 250,
        2..=95 => 600,
        _ => 700,
    }
}

fn head_table() -> Vec<u8> {
    let mut t = Vec::with_capacity(54);
    t.extend_from_slice(&1u16.to_be_bytes()); // majorVersion
    t.extend_from_slice(&0u16.to_be_bytes()); // minorVersion
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // fontRevision
    t.extend_from_slice(&0u32.to_be_bytes()); // checksumAdjustment
    t.extend_from_slice(&0x5F0F_3CF5u32.to_be_bytes()); // magicNumber
    t.extend_from_slice(&0x000Bu16.to_be_bytes()); // flags
    t.extend_from_slice(&1000u16.to_be_bytes()); // unitsPerEm
    t.extend_from_slice(&0i64.to_be_bytes()); // created
    t.extend_from_slice(&0i64.to_be_bytes()); // modified
    for v in [0i16, -200, 1000, 800] {
        t.extend_from_slice(&v.to_be_bytes()); // xMin, yMin, xMax, yMax
    }
    t.extend_from_slice(&0u16.to_be_bytes()); // macStyle
    t.extend_from_slice(&8u16.to_be_bytes()); // lowestRecPPEM
    t.extend_from_slice(&2i16.to_be_bytes()); // fontDirectionHint
    t.extend_from_slice(&0i16.to_be_bytes()); // indexToLocFormat
    t.extend_from_slice(&0i16.to_be_bytes()); // glyphDataFormat
    t
}

fn hhea_table() -> Vec<u8> {
    let mut t = Vec::with_capacity(36);
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    t.extend_from_slice(&800i16.to_be_bytes()); // ascender
    t.extend_from_slice(&(-200i16).to_be_bytes()); // descender
    t.extend_from_slice(&0i16.to_be_bytes()); // lineGap
    t.extend_from_slice(&1000u16.to_be_bytes()); // advanceWidthMax
    t.extend_from_slice(&[0u8; 20]); // side bearings, extent, caret, reserved
    t.extend_from_slice(&0i16.to_be_bytes()); // metricDataFormat
    t.extend_from_slice(&GLYPH_COUNT.to_be_bytes()); // numberOfHMetrics
    t
}

fn hmtx_table() -> Vec<u8> {
    let mut t = Vec::with_capacity(4 * usize::from(GLYPH_COUNT));
    for gid in 0..GLYPH_COUNT {
        t.extend_from_slice(&glyph_advance(gid).to_be_bytes());
        t.extend_from_slice(&0i16.to_be_bytes()); // lsb
    }
    t
}

fn cmap_table() -> Vec<u8> {
    // Terminating segment required by format 4
    let mut segments: Vec<(u16, u16, i16)> = CHAR_RANGES
        .iter()
        .map(|&(start, end, first_gid)| (start, end, (i32::from(first_gid) - i32::from(start)) as i16))
        .collect();
    segments.push((0xFFFF, 0xFFFF, 1));

    let seg_count = segments.len() as u16;
    let search_range = 2 * (1u16 << (15 - seg_count.leading_zeros()));
    let entry_selector = 15 - seg_count.leading_zeros() as u16;

    let mut sub = Vec::new();
    sub.extend_from_slice(&4u16.to_be_bytes()); // format
    sub.extend_from_slice(&(16 + 8 * seg_count).to_be_bytes()); // length
    sub.extend_from_slice(&0u16.to_be_bytes()); // language
    sub.extend_from_slice(&(2 * seg_count).to_be_bytes());
    sub.extend_from_slice(&search_range.to_be_bytes());
    sub.extend_from_slice(&entry_selector.to_be_bytes());
    sub.extend_from_slice(&(2 * seg_count - search_range).to_be_bytes()); // rangeShift
    for (_, end, _) in &segments {
        sub.extend_from_slice(&end.to_be_bytes());
    }
    sub.extend_from_slice(&0u16.to_be_bytes()); // reservedPad
    for (start, _, _) in &segments {
        sub.extend_from_slice(&start.to_be_bytes());
    }
    for (_, _, delta) in &segments {
        sub.extend_from_slice(&delta.to_be_bytes());
    }
    for _ in &segments {
        sub.extend_from_slice(&0u16.to_be_bytes()); // idRangeOffset
    }

    let mut t = Vec::with_capacity(12 + sub.len());
    t.extend_from_slice(&0u16.to_be_bytes()); // version
    t.extend_from_slice(&1u16.to_be_bytes()); // numTables
    t.extend_from_slice(&3u16.to_be_bytes()); // platformID: Windows
    t.extend_from_slice(&1u16.to_be_bytes()); // encodingID: Unicode BMP
    t.extend_from_slice(&12u32.to_be_bytes()); // subtable offset
    t.extend_from_slice(&sub);
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = Vec::with_capacity(6);
    t.extend_from_slice(&0x0000_5000u32.to_be_bytes());
    t.extend_from_slice(&GLYPH_COUNT.to_be_bytes()); // numGlyphs
    t
}

/// Build the bytes of a minimal, parseable TrueType font.
pub fn minimal_truetype_font() -> Vec<u8> {
    // Table records must be sorted by tag.
    let tables: [(&[u8; 4], Vec<u8>); 5] = [
        (b"cmap", cmap_table()),
        (b"head", head_table()),
        (b"hhea", hhea_table()),
        (b"hmtx", hmtx_table()),
        (b"maxp", maxp_table()),
    ];

    let num_tables = tables.len() as u16;
    let entry_selector = 15 - num_tables.leading_zeros() as u16;
    let search_range = 16 * (1u16 << entry_selector);
    let mut font = Vec::new();
    font.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    font.extend_from_slice(&num_tables.to_be_bytes());
    font.extend_from_slice(&search_range.to_be_bytes());
    font.extend_from_slice(&entry_selector.to_be_bytes());
    font.extend_from_slice(&(16 * num_tables - search_range).to_be_bytes()); // rangeShift

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in &tables {
        font.extend_from_slice(*tag);
        font.extend_from_slice(&0u32.to_be_bytes()); // checksum
        font.extend_from_slice(&(offset as u32).to_be_bytes());
        font.extend_from_slice(&(data.len() as u32).to_be_bytes());

        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() + body.len();
    }

    font.extend_from_slice(&body);
    font
}

/// Write the minimal font into `dir` and return its path.
pub fn write_minimal_font(dir: &std::path::Path) -> std::io::Result<std::path::PathBuf> {
    let path = dir.join("test-font.ttf");
    std::fs::write(&path, minimal_truetype_font())?;
    Ok(path)
}
