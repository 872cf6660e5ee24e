//! Competition and activity document builders
//!
//! Translate sorted/grouped records and a template descriptor into the
//! in-memory layout document: title block, note rows, headers, data region
//! and the reinforced outer border.

use super::document::{CellValue, LayoutDocument, LayoutRow};
use super::grouping::format_score;
use super::style::{CellStyle, EdgeStyle};
use crate::app::models::{Record, ScoreGroup, Template};
use crate::constants::{ACTIVITY_BLOCK_HEADERS, COMPETITION_HEADERS, ROSTER_SHEET_NAME};

/// Build the single-column competition layout
///
/// Title row, note row, one header row, one data row per sorted record with
/// a running 1-based sequence number, optional trailing custom-note row.
pub fn build_competition_document(records: &[Record], template: &Template) -> LayoutDocument {
    let mut document = LayoutDocument::new(ROSTER_SHEET_NAME, &template.kind.column_widths());
    let fonts = &template.font_sizes;
    let heights = &template.row_heights;

    document.push_merged_row(heights.title, &template.title, CellStyle::title(fonts));
    document.push_merged_row(heights.note, &template.note, CellStyle::note(fonts));

    let mut header = LayoutRow::new(heights.header);
    for (col, label) in COMPETITION_HEADERS.iter().enumerate() {
        header.set(col, CellValue::Text(label.to_string()), CellStyle::header(fonts));
    }
    document.push_row(header);

    let body = CellStyle::body(fonts);
    for (index, record) in records.iter().enumerate() {
        let mut row = LayoutRow::new(heights.body);
        row.set(0, CellValue::Number((index + 1) as f64), body);
        row.set(1, text_cell(&record.class_name), body);
        row.set(2, text_cell(&record.name), body);
        row.set(3, text_cell(&record.award), body);
        row.set(4, score_cell(record.score), body);
        document.push_row(row);
    }

    if let Some(custom_note) = &template.custom_note {
        document.push_merged_row(heights.note, custom_note, CellStyle::note(fonts));
    }

    document.decorate_outer_border(EdgeStyle::Thin);
    document
}

/// Build the dual-column activity layout
///
/// Title row once, then per score group (highest score first) a merged note
/// row, a header row duplicated across both 3-column blocks and the data
/// region. Records fill the first block completely (`ceil(N/2)` rows) before
/// the second block, whose sequence numbers continue from the first; rows
/// where the second block has no record still get bordered placeholder
/// cells.
pub fn build_activity_document(groups: &[ScoreGroup], template: &Template) -> LayoutDocument {
    let mut document = LayoutDocument::new(ROSTER_SHEET_NAME, &template.kind.column_widths());
    let fonts = &template.font_sizes;
    let heights = &template.row_heights;
    let block_width = ACTIVITY_BLOCK_HEADERS.len();

    document.push_merged_row(heights.title, &template.title, CellStyle::title(fonts));

    let body = CellStyle::body(fonts);
    for group in groups {
        let note = format!(
            "注：以下同学每人加{}{}",
            format_score(group.score),
            group.score_type
        );
        document.push_merged_row(heights.note, &note, CellStyle::note(fonts));

        let mut header = LayoutRow::new(heights.header);
        for (col, label) in ACTIVITY_BLOCK_HEADERS.iter().enumerate() {
            let label = CellValue::Text(label.to_string());
            header.set(col, label.clone(), CellStyle::header(fonts));
            header.set(col + block_width, label, CellStyle::header(fonts));
        }
        document.push_row(header);

        let total = group.records.len();
        let first_col_count = total.div_ceil(2);
        let second_col_count = total - first_col_count;

        for row_index in 0..first_col_count.max(second_col_count) {
            let mut row = LayoutRow::new(heights.body);

            if row_index < first_col_count {
                let record = &group.records[row_index];
                row.set(0, CellValue::Number((row_index + 1) as f64), body);
                row.set(1, text_cell(&record.class_name), body);
                row.set(2, text_cell(&record.name), body);
            } else {
                for col in 0..block_width {
                    row.set(col, CellValue::Empty, body);
                }
            }

            if row_index < second_col_count {
                let record = &group.records[first_col_count + row_index];
                let sequence = (first_col_count + row_index + 1) as f64;
                row.set(3, CellValue::Number(sequence), body);
                row.set(4, text_cell(&record.class_name), body);
                row.set(5, text_cell(&record.name), body);
            } else {
                // Empty cells still need borders
                for col in block_width..2 * block_width {
                    row.set(col, CellValue::Empty, body);
                }
            }

            document.push_row(row);
        }
    }

    if let Some(custom_note) = &template.custom_note {
        document.push_merged_row(heights.note, custom_note, CellStyle::note(fonts));
    }

    document.decorate_outer_border(EdgeStyle::Thin);
    document
}

fn text_cell(value: &str) -> CellValue {
    if value.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(value.to_string())
    }
}

/// A zero score renders as an empty cell, matching the paper form
fn score_cell(score: f64) -> CellValue {
    if score == 0.0 {
        CellValue::Empty
    } else {
        CellValue::Number(score)
    }
}
