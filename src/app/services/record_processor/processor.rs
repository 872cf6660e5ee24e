//! Normalization, validity routing and deduplication
//!
//! Implements the cleaning stage of the pipeline: whitespace trimming on the
//! identifying fields, routing of unusable rows, first-wins deduplication on
//! the composite (class, name, activity) key and aggregate statistics.

use std::collections::HashSet;
use tracing::{debug, info};

use crate::app::models::{InvalidReason, InvalidRecord, Record, SourceStats, ValidationOutcome};
use crate::constants::ROW_INDEX_OFFSET;

/// Clean decoded rows into a validation outcome
///
/// Every input row lands in exactly one of the `valid`/`invalid` channels:
/// - trimmed name or activity name empty → invalid (`姓名为空或活动名称为空`)
/// - duplicate composite key → invalid (`重复数据`), first occurrence wins
///
/// Invalid rows carry the row number shown in the source sheet (1-based plus
/// the header row). The operation is idempotent: re-running it over the
/// `valid` output yields the same set unchanged.
pub fn process_records(rows: Vec<Record>) -> ValidationOutcome {
    let total = rows.len();
    let mut valid = Vec::new();
    let mut invalid = Vec::new();
    let mut seen: HashSet<(String, String, String)> = HashSet::new();
    let mut classes: HashSet<String> = HashSet::new();
    let mut activity_types: HashSet<String> = HashSet::new();

    for (index, row) in rows.into_iter().enumerate() {
        let row_index = index + ROW_INDEX_OFFSET;
        let record = normalize_record(row);

        if record.name.is_empty() || record.activity_name.is_empty() {
            debug!("row {} rejected: empty name or activity", row_index);
            invalid.push(InvalidRecord {
                record,
                reason: InvalidReason::EmptyNameOrActivity,
                row_index,
            });
            continue;
        }

        if !seen.insert(record.dedup_key()) {
            debug!(
                "row {} rejected: duplicate of ({}, {}, {})",
                row_index, record.class_name, record.name, record.activity_name
            );
            invalid.push(InvalidRecord {
                record,
                reason: InvalidReason::Duplicate,
                row_index,
            });
            continue;
        }

        classes.insert(record.class_name.clone());
        activity_types.insert(record.activity_type.clone());
        valid.push(record);
    }

    let stats = SourceStats {
        total,
        valid: valid.len(),
        invalid: invalid.len(),
        classes: classes.len(),
        activity_types: activity_types.len(),
    };

    info!(
        "record processing complete: {} rows -> {} valid, {} invalid ({} classes, {} activity types)",
        stats.total, stats.valid, stats.invalid, stats.classes, stats.activity_types
    );

    ValidationOutcome {
        valid,
        invalid,
        stats,
    }
}

/// Trim the identifying fields of a record
///
/// Only 姓名, 活动名称, 行政班级 and 学号 are trimmed; free-text fields such
/// as the remark keep their original spacing (the attendance classifier trims
/// its own view of the remark).
pub fn normalize_record(mut record: Record) -> Record {
    record.name = record.name.trim().to_string();
    record.activity_name = record.activity_name.trim().to_string();
    record.class_name = record.class_name.trim().to_string();
    record.student_id = record.student_id.trim().to_string();
    record
}
