//! Tests for score grouping

use super::layout_record;
use crate::app::services::layout_engine::grouping::{format_score, group_by_score};

#[test]
fn test_groups_ordered_by_descending_score() {
    let records = vec![
        layout_record("网络工程2101", "张三", 1.0),
        layout_record("网络工程2101", "李四", 3.0),
        layout_record("软件工程2102", "王五", 2.0),
    ];

    let groups = group_by_score(records);

    let scores: Vec<f64> = groups.iter().map(|g| g.score).collect();
    assert_eq!(scores, vec![3.0, 2.0, 1.0]);
}

#[test]
fn test_group_members_share_score_and_type() {
    let mut moral = layout_record("网络工程2101", "李四", 2.0);
    moral.score_type = "思想分".to_string();

    let records = vec![
        layout_record("网络工程2101", "张三", 2.0),
        moral,
        layout_record("软件工程2102", "王五", 2.0),
    ];

    let groups = group_by_score(records);

    // Same score but different type means separate groups
    assert_eq!(groups.len(), 2);
    for group in &groups {
        for record in &group.records {
            assert_eq!(record.score, group.score);
            assert_eq!(record.score_type_label(), group.score_type);
        }
    }
}

#[test]
fn test_score_ties_retain_insertion_order() {
    let mut thought = layout_record("网络工程2101", "张三", 2.0);
    thought.score_type = "思想分".to_string();
    let academic = layout_record("网络工程2101", "李四", 2.0);

    let groups = group_by_score(vec![thought, academic]);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].score_type, "思想分");
    assert_eq!(groups[1].score_type, "学业分");
}

#[test]
fn test_unset_score_type_defaults() {
    let mut record = layout_record("网络工程2101", "张三", 1.5);
    record.score_type = String::new();

    let groups = group_by_score(vec![record]);

    assert_eq!(groups[0].score_type, "学业分");
}

#[test]
fn test_upstream_order_kept_within_group() {
    let records = vec![
        layout_record("大数据2101", "张三", 2.0),
        layout_record("网络工程2101", "李四", 2.0),
        layout_record("软件工程2102", "王五", 2.0),
    ];

    let groups = group_by_score(records);

    assert_eq!(groups.len(), 1);
    let names: Vec<&str> = groups[0].records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["张三", "李四", "王五"]);
}

#[test]
fn test_format_score() {
    assert_eq!(format_score(2.0), "2");
    assert_eq!(format_score(0.5), "0.5");
    assert_eq!(format_score(2.5), "2.5");
}
