//! Tests for the record processing pipeline


use crate::app::models::Record;

/// Create a test record with the identifying fields set
pub fn make_record(class_name: &str, name: &str, activity_name: &str) -> Record {
    Record {
        sequence: "1".to_string(),
        term: "2023-2024-1".to_string(),
        college_hosted: "是".to_string(),
        class_name: class_name.to_string(),
        student_id: "20230001".to_string(),
        name: name.to_string(),
        activity_type: "活动".to_string(),
        activity_name: activity_name.to_string(),
        score_type: "学业分".to_string(),
        score: 2.0,
        award: String::new(),
        department: "学生会".to_string(),
        owner: "王老师".to_string(),
        phone: "13800000000".to_string(),
        remark: "已考勤".to_string(),
    }
}

/// Create a test record with a specific remark
pub fn make_record_with_remark(name: &str, remark: &str) -> Record {
    let mut record = make_record("网络工程2101", name, "志愿服务");
    record.remark = remark.to_string();
    record
}
