//! Configuration for attendance classification and sorting.
//!
//! The keyword and tier vocabularies are injected configuration rather than
//! embedded literals so the same pipeline can serve other institutions and so
//! tie-break logic is directly unit testable. Defaults come from [`crate::constants`].

use crate::constants::{
    ABSENCE_KEYWORDS, AWARD_TIERS, DEFAULT_ATTENDED_KEYWORDS, ENGINEERING_CLASS_KEYWORDS,
    FULL_ATTENDANCE_REMARK,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// String collation used for every class/name comparison in a sort run.
///
/// The pipeline is deterministic only if one collation is used throughout, so
/// the sorter takes this from configuration instead of hardcoding a locale.
#[derive(Clone, Copy)]
pub enum Collation {
    /// Plain Unicode codepoint order
    Codepoint,
    /// Caller-supplied comparison function (for pinyin, stroke order, ...)
    Custom(fn(&str, &str) -> Ordering),
}

impl Collation {
    /// Compare two strings under this collation
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Codepoint => a.cmp(b),
            Collation::Custom(f) => f(a, b),
        }
    }
}

impl Default for Collation {
    fn default() -> Self {
        Collation::Codepoint
    }
}

impl std::fmt::Debug for Collation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collation::Codepoint => write!(f, "Collation::Codepoint"),
            Collation::Custom(_) => write!(f, "Collation::Custom(..)"),
        }
    }
}

/// Configuration for attendance classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceConfig {
    /// Remark keywords signaling attendance
    pub attended_keywords: Vec<String>,

    /// Remark keywords signaling absence, lateness, early leave or leave
    ///
    /// Absence keywords take precedence over attendance keywords.
    pub absence_keywords: Vec<String>,

    /// Exact remark value that always counts as attended
    pub full_attendance_remark: String,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            attended_keywords: to_owned(DEFAULT_ATTENDED_KEYWORDS),
            absence_keywords: to_owned(ABSENCE_KEYWORDS),
            full_attendance_remark: FULL_ATTENDANCE_REMARK.to_string(),
        }
    }
}

impl AttendanceConfig {
    /// Replace the attended keyword set
    pub fn with_attended_keywords(mut self, keywords: Vec<String>) -> Self {
        self.attended_keywords = keywords;
        self
    }

    /// Replace the absence keyword set
    pub fn with_absence_keywords(mut self, keywords: Vec<String>) -> Self {
        self.absence_keywords = keywords;
        self
    }
}

/// Configuration for the two sorting strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SorterConfig {
    /// Case-sensitive substring keywords identifying affiliated-college classes
    pub affiliated_class_keywords: Vec<String>,

    /// Award tier vocabulary, ranked highest priority first
    pub award_tiers: Vec<String>,

    /// Collation for class/name comparisons
    #[serde(skip, default)]
    pub collation: Collation,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            affiliated_class_keywords: to_owned(ENGINEERING_CLASS_KEYWORDS),
            award_tiers: to_owned(AWARD_TIERS),
            collation: Collation::default(),
        }
    }
}

impl SorterConfig {
    /// Replace the affiliated-college keyword list
    pub fn with_affiliated_class_keywords(mut self, keywords: Vec<String>) -> Self {
        self.affiliated_class_keywords = keywords;
        self
    }

    /// Replace the ranked award tier vocabulary
    pub fn with_award_tiers(mut self, tiers: Vec<String>) -> Self {
        self.award_tiers = tiers;
        self
    }

    /// Use a custom collation function
    pub fn with_collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attendance_config() {
        let config = AttendanceConfig::default();
        assert_eq!(config.attended_keywords, vec!["已考勤", "到场", "参与"]);
        assert_eq!(config.full_attendance_remark, "全勤");
        assert!(config.absence_keywords.contains(&"迟到".to_string()));
    }

    #[test]
    fn test_default_sorter_config_tiers_ranked() {
        let config = SorterConfig::default();
        assert_eq!(config.award_tiers.first().map(String::as_str), Some("一等奖"));
        assert_eq!(config.award_tiers.last().map(String::as_str), Some("参与奖"));
    }

    #[test]
    fn test_custom_collation_applies() {
        let reversed: fn(&str, &str) -> Ordering = |a, b| b.cmp(a);
        let config = SorterConfig::default().with_collation(Collation::Custom(reversed));
        assert_eq!(config.collation.compare("a", "b"), Ordering::Greater);
    }
}
