//! Document serialization
//!
//! Renders a finished [`LayoutDocument`] into an XLSX byte buffer with
//! `rust_xlsxwriter`. The renderer is the only place styling concepts are
//! translated into writer formats, and it never touches the filesystem.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use std::collections::HashSet;
use tracing::debug;

use super::document::{CellValue, LayoutDocument};
use super::style::{CellStyle, EdgeStyle};
use crate::constants::OUTPUT_FONT_NAME;
use crate::{Error, Result};

/// Serialize a layout document into an in-memory XLSX buffer
pub fn render_document(document: &LayoutDocument) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(&document.sheet_name)
        .map_err(|e| Error::serialization("invalid sheet name", e))?;

    for (col, width) in document.column_widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(|e| Error::serialization("could not set column width", e))?;
    }

    // Cells covered by a merge are written by merge_range, not individually
    let mut merged_cells: HashSet<(usize, usize)> = HashSet::new();
    for merge in &document.merges {
        for col in merge.first_col..=merge.last_col {
            merged_cells.insert((merge.row, col));
        }
    }

    for merge in &document.merges {
        let anchor = document.rows[merge.row]
            .cells
            .get(&merge.first_col)
            .ok_or_else(|| {
                Error::configuration(format!("merge range at row {} has no anchor cell", merge.row))
            })?;
        let text = match &anchor.value {
            CellValue::Text(text) => text.as_str(),
            _ => "",
        };
        worksheet
            .merge_range(
                merge.row as u32,
                merge.first_col as u16,
                merge.row as u32,
                merge.last_col as u16,
                text,
                &make_format(&anchor.style),
            )
            .map_err(|e| Error::serialization("could not merge cells", e))?;
    }

    for (row_index, row) in document.rows.iter().enumerate() {
        worksheet
            .set_row_height(row_index as u32, row.height)
            .map_err(|e| Error::serialization("could not set row height", e))?;

        for (col_index, cell) in &row.cells {
            if merged_cells.contains(&(row_index, *col_index)) {
                continue;
            }
            let format = make_format(&cell.style);
            match &cell.value {
                CellValue::Empty => worksheet
                    .write_blank(row_index as u32, *col_index as u16, &format)
                    .map_err(|e| Error::serialization("could not write cell", e))?,
                CellValue::Text(text) => worksheet
                    .write_string_with_format(row_index as u32, *col_index as u16, text, &format)
                    .map_err(|e| Error::serialization("could not write cell", e))?,
                CellValue::Number(number) => worksheet
                    .write_number_with_format(row_index as u32, *col_index as u16, *number, &format)
                    .map_err(|e| Error::serialization("could not write cell", e))?,
            };
        }
    }

    debug!(
        "serializing document '{}' ({} rows, {} merges)",
        document.sheet_name,
        document.rows.len(),
        document.merges.len()
    );

    workbook
        .save_to_buffer()
        .map_err(|e| Error::serialization("could not encode workbook buffer", e))
}

fn make_format(style: &CellStyle) -> Format {
    let mut format = Format::new()
        .set_font_name(OUTPUT_FONT_NAME)
        .set_font_size(style.font_size)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    if style.bold {
        format = format.set_bold();
    }
    if style.red {
        format = format.set_font_color("FF0000");
    }
    if style.wrap {
        format = format.set_text_wrap();
    }

    if let Some(edge) = style.border.top {
        format = format.set_border_top(edge_to_border(edge));
    }
    if let Some(edge) = style.border.left {
        format = format.set_border_left(edge_to_border(edge));
    }
    if let Some(edge) = style.border.bottom {
        format = format.set_border_bottom(edge_to_border(edge));
    }
    if let Some(edge) = style.border.right {
        format = format.set_border_right(edge_to_border(edge));
    }

    format
}

fn edge_to_border(edge: EdgeStyle) -> FormatBorder {
    match edge {
        EdgeStyle::Thin => FormatBorder::Thin,
        EdgeStyle::Medium => FormatBorder::Medium,
    }
}
