//! Tests for the layout engine

pub mod grouping_tests;
pub mod style_tests;

use crate::app::models::Record;

/// Create a test record with the fields the layouts render
pub fn layout_record(class_name: &str, name: &str, score: f64) -> Record {
    Record {
        class_name: class_name.to_string(),
        name: name.to_string(),
        activity_name: "测试活动".to_string(),
        score_type: "学业分".to_string(),
        score,
        ..Record::default()
    }
}

/// Create a test record carrying an award
pub fn award_record(class_name: &str, name: &str, award: &str, score: f64) -> Record {
    let mut record = layout_record(class_name, name, score);
    record.award = award.to_string();
    record
}
