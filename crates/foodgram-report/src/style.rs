//! Page geometry and colors of the shopping-list report

/// RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

pub const BROWN: Color = Color::rgb(0.647059, 0.164706, 0.164706);
pub const WHITESMOKE: Color = Color::rgb(0.960784, 0.960784, 0.960784);
pub const BEIGE: Color = Color::rgb(0.960784, 0.960784, 0.862745);
pub const GREY: Color = Color::rgb(0.501961, 0.501961, 0.501961);
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

// US Letter
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const PAGE_MARGIN: f32 = 72.0;

pub const TITLE_FONT_SIZE: f32 = 22.0;
pub const TITLE_LEADING: f32 = 26.4;
pub const TITLE_SPACER: f32 = 30.0;

pub const COLUMN_COUNT: usize = 3;
pub const COLUMN_WIDTH: f32 = 175.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const GRID_LINE_WIDTH: f32 = 0.5;

/// Fill, text color, font size and bottom padding of one row kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStyle {
    pub background: Color,
    pub text: Color,
    pub font_size: f32,
    pub bottom_padding: f32,
}

pub const HEADER_STYLE: RowStyle = RowStyle {
    background: BROWN,
    text: WHITESMOKE,
    font_size: 18.0,
    bottom_padding: 12.0,
};

pub const DATA_STYLE: RowStyle = RowStyle {
    background: BEIGE,
    text: BLACK,
    font_size: 14.0,
    bottom_padding: 5.0,
};

pub const fn table_width() -> f32 {
    COLUMN_WIDTH * COLUMN_COUNT as f32
}

/// Left edge of the table, centered on the page
pub const fn table_left() -> f32 {
    (PAGE_WIDTH - table_width()) / 2.0
}

/// Top edge of the table on the first page, below the title and spacer
pub const fn first_page_table_top() -> f32 {
    PAGE_HEIGHT - PAGE_MARGIN - TITLE_LEADING - TITLE_SPACER
}

/// Top edge of the table on continuation pages
pub const fn continued_table_top() -> f32 {
    PAGE_HEIGHT - PAGE_MARGIN
}

/// Number of whole rows that fit between `top` and the bottom margin
pub fn rows_fitting(top: f32) -> usize {
    ((top - PAGE_MARGIN) / ROW_HEIGHT).floor() as usize
}
