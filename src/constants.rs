//! Application constants for the roster processor
//!
//! This module contains the required-field vocabulary, keyword sets, layout
//! defaults and unit-conversion factors used throughout the application.

// =============================================================================
// Source Workbook Layout
// =============================================================================

/// Sheet name the source workbook must contain
pub const SOURCE_SHEET_NAME: &str = "数据源";

/// The 15 required columns of the source sheet, in canonical order
pub const REQUIRED_FIELDS: &[&str] = &[
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

/// Offset from a 0-based data row index to the row number shown to users
/// (1-based numbering plus the header row)
pub const ROW_INDEX_OFFSET: usize = 2;

// =============================================================================
// Attendance Keywords
// =============================================================================

/// Default remark keywords signaling attendance
pub const DEFAULT_ATTENDED_KEYWORDS: &[&str] = &["已考勤", "到场", "参与"];

/// Remark keywords signaling absence, lateness, early leave or leave of absence
pub const ABSENCE_KEYWORDS: &[&str] = &["缺勤", "迟到", "早退", "请假"];

/// Exact remark value that always counts as attended
pub const FULL_ATTENDANCE_REMARK: &str = "全勤";

// =============================================================================
// Sorting Vocabulary
// =============================================================================

/// Class-name keywords identifying the affiliated engineering college
pub const ENGINEERING_CLASS_KEYWORDS: &[&str] = &[
    "网络工程",
    "软件工程",
    "软件工程卓越工程师班",
    "通信工程",
    "食品",
    "食品超越班",
    "食品营养",
    "数字媒体本",
    "数字媒体创意班",
    "大数据",
    "电子信息工程",
    "人工智能",
    "人工智能物联网班",
];

/// Award tier vocabulary, ranked highest priority first
pub const AWARD_TIERS: &[&str] = &["一等奖", "二等奖", "三等奖", "优秀奖", "参与奖"];

/// Sentinel priority for awards matching no known tier (sorts after all tiers)
pub const AWARD_PRIORITY_UNMATCHED: usize = 999;

// =============================================================================
// Output Workbook Layout
// =============================================================================

/// Sheet name of the generated roster workbook
pub const ROSTER_SHEET_NAME: &str = "加分名单";

/// Sheet name of the generated blacklist workbook
pub const BLACKLIST_SHEET_NAME: &str = "黑名单";

/// Blacklist column headers: class, name, student id, reason
pub const BLACKLIST_HEADERS: &[&str] = &["班级", "姓名", "学号", "未考勤原因"];

/// Header labels for the competition layout (5 logical columns)
pub const COMPETITION_HEADERS: &[&str] = &["序号", "班级", "姓名", "奖项", "加分数"];

/// Header labels for one 3-column block of the activity layout
pub const ACTIVITY_BLOCK_HEADERS: &[&str] = &["序号", "班级", "姓名"];

/// Display column widths for the competition layout
pub const COMPETITION_COLUMN_WIDTHS: &[f64] = &[4.75, 27.0, 8.25, 16.25, 7.25];

/// Display column widths for one 3-column block of the activity layout
/// (the block is repeated twice across the sheet)
pub const ACTIVITY_BLOCK_COLUMN_WIDTHS: &[f64] = &[4.75, 27.0, 8.25];

/// Score type label used when a record carries none
pub const DEFAULT_SCORE_TYPE: &str = "学业分";

/// Output font for every styled cell
pub const OUTPUT_FONT_NAME: &str = "微软雅黑";

/// Default display row heights, before unit conversion
pub mod row_heights {
    pub const TITLE: f64 = 69.0;
    pub const NOTE: f64 = 24.5;
    pub const HEADER: f64 = 20.0;
    pub const BODY: f64 = 20.0;
}

/// Default font sizes in points
pub mod font_sizes {
    pub const TITLE: f64 = 18.0;
    pub const NOTE: f64 = 12.0;
    pub const BODY: f64 = 11.0;
}

// =============================================================================
// Unit Conversion
// =============================================================================

/// Row height multiplier from display units to writer units
pub const ROW_HEIGHT_FACTOR: f64 = 1.5;

/// Column width conversion tiers keyed by display width magnitude.
///
/// The writer's width/height units are not a linear transform of the visually
/// intended size; these multipliers were empirically derived against the
/// institutional paper form and must be reproduced exactly.
pub mod width_tiers {
    /// Narrow columns (such as sequence numbers): width <= 5
    pub const NARROW_LIMIT: f64 = 5.0;
    pub const NARROW_FACTOR: f64 = 1.161;

    /// Medium columns (such as names): width <= 10
    pub const MEDIUM_LIMIT: f64 = 10.0;
    pub const MEDIUM_FACTOR: f64 = 1.080;

    /// Wide columns (such as awards): width <= 20
    pub const WIDE_LIMIT: f64 = 20.0;
    pub const WIDE_FACTOR: f64 = 1.039;

    /// Extra wide columns (such as class names)
    pub const EXTRA_WIDE_FACTOR: f64 = 1.024;
}
