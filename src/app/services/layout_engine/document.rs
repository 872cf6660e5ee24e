//! In-memory layout document
//!
//! The document is an ordered sequence of rows, each a sparse mapping of
//! column index to styled cell, plus converted column widths and merge
//! ranges. It is built incrementally by the builders and serialized exactly
//! once by the renderer.

use std::collections::BTreeMap;

use super::style::{BorderEdges, CellStyle, EdgeStyle};
use super::units::{convert_column_width, convert_row_height};

/// Value of one output cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

/// One styled output cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

/// A horizontal merge across one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRange {
    pub row: usize,
    pub first_col: usize,
    pub last_col: usize,
}

/// One output row: converted height plus sparse cells by column index
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    /// Height in writer units (already converted)
    pub height: f64,
    pub cells: BTreeMap<usize, Cell>,
}

impl LayoutRow {
    /// Create a row from a display height
    pub fn new(display_height: f64) -> Self {
        Self {
            height: convert_row_height(display_height),
            cells: BTreeMap::new(),
        }
    }

    /// Set one cell of the row
    pub fn set(&mut self, col: usize, value: CellValue, style: CellStyle) {
        self.cells.insert(col, Cell { value, style });
    }
}

/// The produced spreadsheet document
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    pub sheet_name: String,
    /// Column widths in writer units (already converted)
    pub column_widths: Vec<f64>,
    pub rows: Vec<LayoutRow>,
    pub merges: Vec<MergeRange>,
}

impl LayoutDocument {
    /// Create an empty document with converted column widths
    pub fn new(sheet_name: impl Into<String>, display_widths: &[f64]) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            column_widths: display_widths
                .iter()
                .map(|w| convert_column_width(*w))
                .collect(),
            rows: Vec::new(),
            merges: Vec::new(),
        }
    }

    /// Number of logical columns
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Append a row and return its index
    pub fn push_row(&mut self, row: LayoutRow) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Append a row merged across every column
    ///
    /// The anchor cell carries the text; the covered cells receive styled
    /// placeholders so border decoration reaches the full region.
    pub fn push_merged_row(&mut self, display_height: f64, text: &str, style: CellStyle) -> usize {
        let mut row = LayoutRow::new(display_height);
        row.set(0, CellValue::Text(text.to_string()), style);
        for col in 1..self.column_count() {
            row.set(col, CellValue::Empty, style);
        }
        let index = self.push_row(row);
        self.merges.push(MergeRange {
            row: index,
            first_col: 0,
            last_col: self.column_count() - 1,
        });
        index
    }

    /// Reinforce the outer boundary of the full table region
    ///
    /// The first row gets the outer top edge, the last row the bottom edge,
    /// the first column the left edge and the last column the right edge.
    /// Each reinforcement is a pure merge: the outer edge is applied, edges
    /// the cell already has are kept, and any remaining unset edge falls back
    /// to thin. Cells absent from a boundary row/column are created as
    /// placeholders so the outline is continuous.
    pub fn decorate_outer_border(&mut self, outer: EdgeStyle) {
        if self.rows.is_empty() || self.column_count() == 0 {
            return;
        }
        let last_row = self.rows.len() - 1;
        let last_col = self.column_count() - 1;

        for col in 0..=last_col {
            Self::reinforce(&mut self.rows[0], col, BorderEdges::top(outer));
            Self::reinforce(&mut self.rows[last_row], col, BorderEdges::bottom(outer));
        }
        for row in self.rows.iter_mut() {
            Self::reinforce(row, 0, BorderEdges::left(outer));
            Self::reinforce(row, last_col, BorderEdges::right(outer));
        }
    }

    fn reinforce(row: &mut LayoutRow, col: usize, outer: BorderEdges) {
        let cell = row.cells.entry(col).or_insert_with(|| Cell {
            value: CellValue::Empty,
            style: CellStyle {
                font_size: crate::constants::font_sizes::BODY,
                bold: false,
                red: false,
                wrap: false,
                border: BorderEdges::NONE,
            },
        });
        cell.style.border = outer
            .or(cell.style.border)
            .or(BorderEdges::all(EdgeStyle::Thin));
    }
}
