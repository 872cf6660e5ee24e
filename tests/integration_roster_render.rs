//! Integration tests for end-to-end roster rendering
//!
//! Runs cleaned records through sorting, grouping, layout and serialization,
//! then reads the produced workbook back to verify the visible sheet.

use calamine::{Data, Reader, Xlsx};
use roster_processor::app::services::layout_engine::render_roster;
use roster_processor::config::SorterConfig;
use roster_processor::{Record, Template};
use std::io::Cursor;

fn record(class: &str, name: &str, award: &str, score: f64) -> Record {
    Record {
        term: "2024年秋".to_string(),
        class_name: class.to_string(),
        name: name.to_string(),
        activity_type: "比赛".to_string(),
        activity_name: "程序设计大赛".to_string(),
        score_type: "学业分".to_string(),
        score,
        award: award.to_string(),
        ..Record::default()
    }
}

fn read_roster(buffer: Vec<u8>) -> calamine::Range<Data> {
    let mut workbook = Xlsx::new(Cursor::new(buffer)).unwrap();
    workbook.worksheet_range("加分名单").unwrap()
}

#[test]
fn test_competition_roster_college_classes_first_by_award() {
    let records = vec![
        record("外国语2101", "王五", "一等奖", 4.0),
        record("网络工程2101", "张三", "三等奖", 2.0),
        record("网络工程2102", "李四", "一等奖", 4.0),
        record("软件工程2101", "孙七", "二等奖", 3.0),
        record("大数据2101", "赵六", "二等奖", 3.0),
    ];
    let template = Template::competition(
        "2024年秋工学院程序设计大赛加分名单",
        "注：以下同学加学业分，具体分数如下",
    );

    let buffer = render_roster(records, &template, &SorterConfig::default()).unwrap();
    let range = read_roster(buffer);

    // Title and note occupy the two merged top rows
    assert_eq!(
        range.get_value((0, 0)),
        Some(&Data::String("2024年秋工学院程序设计大赛加分名单".to_string()))
    );
    assert_eq!(
        range.get_value((2, 0)),
        Some(&Data::String("序号".to_string()))
    );

    // College classes come first, ranked by award tier with tied tiers
    // falling back to class order; the external class follows even though it
    // holds a first prize
    let names: Vec<_> = (3..8)
        .map(|row| range.get_value((row, 2)).cloned())
        .collect();
    assert_eq!(
        names,
        vec![
            Some(Data::String("李四".to_string())),
            Some(Data::String("赵六".to_string())),
            Some(Data::String("孙七".to_string())),
            Some(Data::String("张三".to_string())),
            Some(Data::String("王五".to_string())),
        ]
    );

    // Sequence numbers keep counting across the partition boundary
    assert_eq!(range.get_value((3, 0)), Some(&Data::Float(1.0)));
    assert_eq!(range.get_value((7, 0)), Some(&Data::Float(5.0)));
    assert_eq!(range.get_value((3, 3)), Some(&Data::String("一等奖".to_string())));
    assert_eq!(range.get_value((3, 4)), Some(&Data::Float(4.0)));
}

#[test]
fn test_competition_zero_score_renders_blank() {
    let records = vec![record("网络工程2101", "张三", "参与奖", 0.0)];
    let template = Template::competition("标题", "注释");

    let buffer = render_roster(records, &template, &SorterConfig::default()).unwrap();
    let range = read_roster(buffer);

    assert_eq!(range.get_value((3, 3)), Some(&Data::String("参与奖".to_string())));
    assert_eq!(range.get_value((3, 4)), Some(&Data::Empty));
}

#[test]
fn test_activity_roster_groups_by_score_with_dual_blocks() {
    let mut records: Vec<Record> = (1..=5)
        .map(|i| record("网络工程2101", &format!("学生{i}"), "", 2.0))
        .collect();
    records.push(record("大数据2101", "学生六", "", 1.0));

    let template = Template::activity("2024年秋工学院志愿活动加分名单", "");
    let buffer = render_roster(records, &template, &SorterConfig::default()).unwrap();
    let range = read_roster(buffer);

    // Highest score group first, with its per-group note
    assert_eq!(
        range.get_value((1, 0)),
        Some(&Data::String("注：以下同学每人加2学业分".to_string()))
    );

    // Five records split 3/2 across the blocks; sequence continues at 4
    assert_eq!(range.get_value((3, 0)), Some(&Data::Float(1.0)));
    assert_eq!(range.get_value((3, 3)), Some(&Data::Float(4.0)));
    assert_eq!(range.get_value((5, 0)), Some(&Data::Float(3.0)));
    assert_eq!(range.get_value((5, 3)), Some(&Data::Empty));

    // The score-1 group follows with its own note, header and single row
    assert_eq!(
        range.get_value((6, 0)),
        Some(&Data::String("注：以下同学每人加1学业分".to_string()))
    );
    assert_eq!(
        range.get_value((7, 0)),
        Some(&Data::String("序号".to_string()))
    );
    assert_eq!(
        range.get_value((8, 1)),
        Some(&Data::String("大数据2101".to_string()))
    );
}

#[test]
fn test_custom_note_appended_after_data_region() {
    let records = vec![record("网络工程2101", "张三", "一等奖", 4.0)];
    let template = Template::competition("标题", "注释").with_custom_note("名单公示三天");

    let buffer = render_roster(records, &template, &SorterConfig::default()).unwrap();
    let range = read_roster(buffer);

    assert_eq!(
        range.get_value((4, 0)),
        Some(&Data::String("名单公示三天".to_string()))
    );
}
