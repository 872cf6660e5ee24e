//! Data models for roster processing
//!
//! Core data structures representing source activity records, the outcomes of
//! validation and attendance classification, and the export template
//! descriptors for the two institutional roster layouts.

use crate::constants::{
    ACTIVITY_BLOCK_COLUMN_WIDTHS, COMPETITION_COLUMN_WIDTHS, DEFAULT_SCORE_TYPE, font_sizes,
    row_heights,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Source Records
// =============================================================================

/// One normalized row of the source sheet's 15 required columns
///
/// Field names translate the institutional column headers; `score` is always
/// numerically coerced (`加分分数`, 0.0 when unparseable). A record in the
/// `valid` channel is guaranteed to carry a non-empty trimmed `name` and
/// `activity_name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 序号 — source sequence label, carried through untouched
    pub sequence: String,
    /// 学年学期
    pub term: String,
    /// 是否为工学院举办
    pub college_hosted: String,
    /// 行政班级
    pub class_name: String,
    /// 学号
    pub student_id: String,
    /// 姓名
    pub name: String,
    /// 活动类型
    pub activity_type: String,
    /// 活动名称
    pub activity_name: String,
    /// 加分类型
    pub score_type: String,
    /// 加分分数, coerced to a number
    pub score: f64,
    /// 奖项
    pub award: String,
    /// 部门
    pub department: String,
    /// 负责人
    pub owner: String,
    /// 联系电话
    pub phone: String,
    /// 备注
    pub remark: String,
}

impl Record {
    /// Composite deduplication key: (class, name, activity name)
    pub fn dedup_key(&self) -> (String, String, String) {
        (
            self.class_name.clone(),
            self.name.clone(),
            self.activity_name.clone(),
        )
    }

    /// Score type label, defaulting to the institutional academic-score label
    pub fn score_type_label(&self) -> &str {
        if self.score_type.trim().is_empty() {
            DEFAULT_SCORE_TYPE
        } else {
            &self.score_type
        }
    }
}

// =============================================================================
// Validation Outcomes
// =============================================================================

/// Reason a row was routed to the invalid channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidReason {
    /// Trimmed name or activity name was empty
    EmptyNameOrActivity,
    /// Duplicate of an earlier row under the composite key
    Duplicate,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::EmptyNameOrActivity => write!(f, "姓名为空或活动名称为空"),
            InvalidReason::Duplicate => write!(f, "重复数据"),
        }
    }
}

/// A rejected row together with its reason and user-facing row number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidRecord {
    pub record: Record,
    pub reason: InvalidReason,
    /// 1-based row number including the header row, as shown in the source sheet
    pub row_index: usize,
}

/// Aggregate statistics over one source sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceStats {
    /// Total number of data rows in the sheet
    pub total: usize,
    /// Rows that passed validation and deduplication
    pub valid: usize,
    /// Rows routed to the invalid channel
    pub invalid: usize,
    /// Distinct administrative classes among valid rows
    pub classes: usize,
    /// Distinct activity types among valid rows
    pub activity_types: usize,
}

/// Result of normalization, validation and deduplication
///
/// Every input row appears in exactly one of `valid`/`invalid`.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    pub valid: Vec<Record>,
    pub invalid: Vec<InvalidRecord>,
    pub stats: SourceStats,
}

// =============================================================================
// Attendance Outcomes
// =============================================================================

/// A record classified as unattended, with the classifier's reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnattendedRecord {
    pub record: Record,
    /// 未考勤原因
    pub reason: String,
}

/// Total, disjoint partition of records by attendance status
#[derive(Debug, Clone, Default)]
pub struct AttendanceResult {
    pub attended: Vec<Record>,
    pub unattended: Vec<UnattendedRecord>,
}

// =============================================================================
// Export Templates
// =============================================================================

/// The two institutional roster layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Dual-column layout grouped by score (activities and lectures)
    Activity,
    /// Single-column layout sorted by award tier (competitions)
    Competition,
}

impl TemplateKind {
    /// Select the layout for a source activity type (活动/讲座 → activity,
    /// 比赛 → competition, anything else defaults to activity)
    pub fn for_activity_type(activity_type: &str) -> Self {
        match activity_type {
            "比赛" => TemplateKind::Competition,
            _ => TemplateKind::Activity,
        }
    }

    /// Number of logical output columns for this layout
    pub fn column_count(&self) -> usize {
        self.column_widths().len()
    }

    /// Display column widths for this layout, before unit conversion
    pub fn column_widths(&self) -> Vec<f64> {
        match self {
            TemplateKind::Competition => COMPETITION_COLUMN_WIDTHS.to_vec(),
            TemplateKind::Activity => {
                let mut widths = ACTIVITY_BLOCK_COLUMN_WIDTHS.to_vec();
                widths.extend_from_slice(ACTIVITY_BLOCK_COLUMN_WIDTHS);
                widths
            }
        }
    }
}

/// Font sizes in points for the styled output rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub title: f64,
    pub note: f64,
    pub body: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: font_sizes::TITLE,
            note: font_sizes::NOTE,
            body: font_sizes::BODY,
        }
    }
}

/// Display row heights before unit conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowHeights {
    pub title: f64,
    pub note: f64,
    pub header: f64,
    pub body: f64,
}

impl Default for RowHeights {
    fn default() -> Self {
        Self {
            title: row_heights::TITLE,
            note: row_heights::NOTE,
            header: row_heights::HEADER,
            body: row_heights::BODY,
        }
    }
}

/// Export template descriptor, immutable per export call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    pub title: String,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_note: Option<String>,
    #[serde(default)]
    pub font_sizes: FontSizes,
    #[serde(default)]
    pub row_heights: RowHeights,
}

impl Template {
    /// Create an activity-layout template
    pub fn activity(title: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            kind: TemplateKind::Activity,
            title: title.into(),
            note: note.into(),
            custom_note: None,
            font_sizes: FontSizes::default(),
            row_heights: RowHeights::default(),
        }
    }

    /// Create a competition-layout template
    pub fn competition(title: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            kind: TemplateKind::Competition,
            title: title.into(),
            note: note.into(),
            custom_note: None,
            font_sizes: FontSizes::default(),
            row_heights: RowHeights::default(),
        }
    }

    /// Default institutional title for an export
    pub fn default_title(term: &str, activity_name: &str) -> String {
        format!("{term}工学院{activity_name}加分名单")
    }

    /// Default note for the competition layout
    pub fn default_competition_note(score_type: &str) -> String {
        format!("注：以下同学加{score_type}，具体分数如下")
    }

    /// Attach a trailing custom note row
    pub fn with_custom_note(mut self, note: impl Into<String>) -> Self {
        self.custom_note = Some(note.into());
        self
    }
}

// =============================================================================
// Score Groups
// =============================================================================

/// Records sharing one (score, score type) pair, one note+header+data block
/// of the activity layout. Constructed fresh per export and discarded after
/// the layout is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGroup {
    pub score: f64,
    pub score_type: String,
    pub records: Vec<Record>,
}
