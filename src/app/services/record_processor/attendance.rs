//! Keyword-based attendance classification
//!
//! Splits cleaned records into attended/unattended sets by inspecting the
//! trimmed remark field against configured keyword sets. Rule order matters:
//! absence keywords take precedence even when an attendance keyword also
//! appears in the same remark.

use tracing::info;

use crate::app::models::{AttendanceResult, Record, UnattendedRecord};
use crate::config::AttendanceConfig;

/// Classify records by attendance status
///
/// Per record, evaluated on the trimmed remark:
/// 1. Remark contains an absence keyword → unattended
///    (`备注中包含缺勤信息：{remark}`)
/// 2. Remark equals the full-attendance token (`全勤`) → attended
/// 3. Remark contains an attended keyword → attended
/// 4. Otherwise → unattended (`备注中未找到考勤关键词`)
///
/// The partition is total and disjoint: every input record lands in exactly
/// one channel.
pub fn classify_attendance(records: Vec<Record>, config: &AttendanceConfig) -> AttendanceResult {
    let mut attended = Vec::new();
    let mut unattended = Vec::new();

    for record in records {
        let remark = record.remark.trim().to_string();

        if config
            .absence_keywords
            .iter()
            .any(|keyword| remark.contains(keyword.as_str()))
        {
            unattended.push(UnattendedRecord {
                record,
                reason: format!("备注中包含缺勤信息：{remark}"),
            });
            continue;
        }

        if remark == config.full_attendance_remark {
            attended.push(record);
            continue;
        }

        if config
            .attended_keywords
            .iter()
            .any(|keyword| remark.contains(keyword.as_str()))
        {
            attended.push(record);
        } else {
            unattended.push(UnattendedRecord {
                record,
                reason: "备注中未找到考勤关键词".to_string(),
            });
        }
    }

    info!(
        "attendance classification complete: {} attended, {} unattended",
        attended.len(),
        unattended.len()
    );

    AttendanceResult {
        attended,
        unattended,
    }
}
