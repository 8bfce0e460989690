//! Shopping-list table model
//!
//! A table always starts with the fixed header row followed by one data row
//! per aggregated ingredient, in the order the rows were supplied.

use foodgram_common::SHOPPING_LIST_HEADER;

/// One aggregated ingredient line to print
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub name: String,
    pub quantity: i64,
    pub unit: String,
}

impl ReportLine {
    pub fn new(name: impl Into<String>, quantity: i64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Text of the three cells of a table row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub cells: [String; 3],
}

impl TableRow {
    fn header() -> Self {
        Self {
            cells: SHOPPING_LIST_HEADER.map(str::to_string),
        }
    }
}

impl From<ReportLine> for TableRow {
    fn from(line: ReportLine) -> Self {
        Self {
            cells: [line.name, line.quantity.to_string(), line.unit],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShoppingListTable {
    rows: Vec<TableRow>,
}

impl ShoppingListTable {
    pub fn new(lines: impl IntoIterator<Item = ReportLine>) -> Self {
        let lines = lines.into_iter();
        let mut rows = Vec::with_capacity(lines.size_hint().0 + 1);
        rows.push(TableRow::header());
        rows.extend(lines.map(TableRow::from));

        Self { rows }
    }

    /// All rows, header first
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn header(&self) -> &TableRow {
        &self.rows[0]
    }

    pub fn body(&self) -> &[TableRow] {
        &self.rows[1..]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A table is never empty; it always holds at least the header row.
    pub fn is_empty(&self) -> bool {
        false
    }
}
