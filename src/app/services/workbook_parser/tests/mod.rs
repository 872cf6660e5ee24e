//! Tests for the source workbook parser
//!
//! Fixtures are generated in memory with `rust_xlsxwriter` so no files are
//! touched; the parser only ever sees byte buffers.


use crate::constants::REQUIRED_FIELDS;
use rust_xlsxwriter::Workbook;

/// Build an XLSX buffer with a single sheet of string cells
pub fn build_workbook(sheet_name: &str, rows: &[Vec<&str>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).unwrap();
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, *value)
                .unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// Build a valid source workbook with the full 15-column header
pub fn build_source_workbook(data_rows: &[Vec<&str>]) -> Vec<u8> {
    let mut rows: Vec<Vec<&str>> = vec![REQUIRED_FIELDS.to_vec()];
    rows.extend(data_rows.iter().cloned());
    build_workbook("数据源", &rows)
}

/// One source data row in canonical column order
pub fn source_row<'a>(
    class_name: &'a str,
    name: &'a str,
    activity_name: &'a str,
    score: &'a str,
    remark: &'a str,
) -> Vec<&'a str> {
    vec![
        "1",
        "2023-2024-1",
        "是",
        class_name,
        "20230001",
        name,
        "活动",
        activity_name,
        "学业分",
        score,
        "",
        "学生会",
        "王老师",
        "13800000000",
        remark,
    ]
}
