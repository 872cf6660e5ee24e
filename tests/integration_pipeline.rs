//! Integration tests for the source pipeline
//!
//! Builds synthetic source workbooks in memory and verifies end-to-end
//! parsing, validation, deduplication, attendance classification and
//! blacklist export.

use calamine::{Data, Reader, Xlsx};
use roster_processor::app::services::blacklist::{BlacklistRow, export_blacklist};
use roster_processor::app::services::record_processor::{classify_attendance, process_records};
use roster_processor::app::services::workbook_parser::WorkbookParser;
use roster_processor::config::AttendanceConfig;
use roster_processor::{Error, Record};
use rust_xlsxwriter::Workbook;
use std::io::Cursor;

const HEADERS: &[&str] = &[
    "序号",
    "学年学期",
    "是否为工学院举办",
    "行政班级",
    "学号",
    "姓名",
    "活动类型",
    "活动名称",
    "加分类型",
    "加分分数",
    "奖项",
    "部门",
    "负责人",
    "联系电话",
    "备注",
];

/// Build a source workbook with the full 15-column header and string rows
fn source_workbook(rows: &[[&str; 15]]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("数据源").unwrap();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (row_index, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_index as u32 + 1, col as u16, *value)
                .unwrap();
        }
    }

    workbook.save_to_buffer().unwrap()
}

fn contest_row<'a>(
    class: &'a str,
    student_id: &'a str,
    name: &'a str,
    award: &'a str,
    score: &'a str,
    remark: &'a str,
) -> [&'a str; 15] {
    [
        "1",
        "2024年秋",
        "是",
        class,
        student_id,
        name,
        "比赛",
        "程序设计大赛",
        "学业分",
        score,
        award,
        "科创部",
        "负责人",
        "13800000000",
        remark,
    ]
}

fn pipeline(rows: &[[&str; 15]]) -> Vec<Record> {
    let buffer = source_workbook(rows);
    WorkbookParser::new().parse_bytes(&buffer).unwrap()
}

#[test]
fn test_full_pipeline_partitions_every_row() {
    let rows = [
        contest_row("外国语2101", "20230001", "王五", "一等奖", "4", "已考勤"),
        contest_row("网络工程2101", "20230002", "张三", "三等奖", "2", "已考勤"),
        contest_row("网络工程2102", "20230003", "李四", "一等奖", "4", "已考勤"),
        contest_row("大数据2101", "20230004", "赵六", "二等奖", "3", "已考勤"),
        // Duplicate of 张三 under (class, name, activity)
        contest_row("网络工程2101", "20230002", "张三", "三等奖", "2", "已考勤"),
        // Empty name
        contest_row("大数据2101", "20230005", "", "参与奖", "1", "已考勤"),
        // Lateness keyword wins over the attended keyword
        contest_row("软件工程2101", "20230006", "孙七", "一等奖", "4", "已考勤但迟到"),
    ];

    let parsed = pipeline(&rows);
    assert_eq!(parsed.len(), 7);

    let outcome = process_records(parsed);
    assert_eq!(outcome.stats.total, 7);
    assert_eq!(outcome.stats.valid, 5);
    assert_eq!(outcome.stats.invalid, 2);
    assert_eq!(outcome.valid.len() + outcome.invalid.len(), 7);

    // The duplicate carries its sheet row number (1-based plus header)
    let duplicate = &outcome.invalid[0];
    assert_eq!(duplicate.record.name, "张三");
    assert_eq!(duplicate.row_index, 6);

    let attendance = classify_attendance(outcome.valid, &AttendanceConfig::default());
    assert_eq!(attendance.attended.len(), 4);
    assert_eq!(attendance.unattended.len(), 1);
    assert_eq!(attendance.unattended[0].record.name, "孙七");
    assert_eq!(
        attendance.unattended[0].reason,
        "备注中包含缺勤信息：已考勤但迟到"
    );
}

#[test]
fn test_score_coercion_from_sheet_strings() {
    let rows = [
        contest_row("网络工程2101", "20230001", "张三", "一等奖", "2.5", "已考勤"),
        contest_row("网络工程2101", "20230002", "李四", "二等奖", "abc", "已考勤"),
    ];

    let parsed = pipeline(&rows);
    assert_eq!(parsed[0].score, 2.5);
    // Unparseable scores coerce to zero instead of failing the row
    assert_eq!(parsed[1].score, 0.0);
}

#[test]
fn test_missing_sheet_is_an_error() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("其他表").unwrap();
    worksheet.write_string(0, 0, "序号").unwrap();
    let buffer = workbook.save_to_buffer().unwrap();

    let result = WorkbookParser::new().parse_bytes(&buffer);
    assert!(matches!(
        result,
        Err(Error::MissingSheet { sheet }) if sheet == "数据源"
    ));
}

#[test]
fn test_missing_columns_are_reported_together() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("数据源").unwrap();
    // Header row without 奖项 and 备注
    for (col, header) in HEADERS
        .iter()
        .filter(|h| **h != "奖项" && **h != "备注")
        .enumerate()
    {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    let buffer = workbook.save_to_buffer().unwrap();

    let result = WorkbookParser::new().parse_bytes(&buffer);
    match result {
        Err(Error::MissingFields { fields }) => {
            assert_eq!(fields, vec!["奖项".to_string(), "备注".to_string()]);
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }
}

#[test]
fn test_blacklist_collects_unattended_and_invalid_rows() {
    let rows = [
        contest_row("网络工程2101", "20230001", "张三", "一等奖", "4", "已考勤"),
        contest_row("软件工程2101", "20230002", "孙七", "二等奖", "3", "请假"),
        contest_row("大数据2101", "20230003", "", "参与奖", "1", "已考勤"),
    ];

    let outcome = process_records(pipeline(&rows));
    let attendance = classify_attendance(outcome.valid, &AttendanceConfig::default());

    let blacklist: Vec<BlacklistRow> = attendance
        .unattended
        .iter()
        .map(BlacklistRow::from)
        .chain(outcome.invalid.iter().map(BlacklistRow::from))
        .collect();
    assert_eq!(blacklist.len(), 2);

    let buffer = export_blacklist(&blacklist).unwrap();
    let mut workbook = Xlsx::new(Cursor::new(buffer)).unwrap();
    let range = workbook.worksheet_range("黑名单").unwrap();

    assert_eq!(range.get_size().0, 3); // header plus two rows
    assert_eq!(
        range.get_value((1, 1)),
        Some(&Data::String("孙七".to_string()))
    );
    assert_eq!(
        range.get_value((1, 3)),
        Some(&Data::String("备注中包含缺勤信息：请假".to_string()))
    );
    assert_eq!(
        range.get_value((2, 3)),
        Some(&Data::String("姓名为空或活动名称为空".to_string()))
    );
}
