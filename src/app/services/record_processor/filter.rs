//! Multi-dimension record filtering
//!
//! Optional narrowing of the cleaned record set before export: by term,
//! activity type, activity-name substring, score type, score range, class and
//! college-hosted flag. All criteria are conjunctive; unset criteria pass
//! everything through.

use crate::app::models::Record;
use std::collections::BTreeSet;

/// Filter criteria over cleaned records
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Exact 学年学期 match
    pub term: Option<String>,
    /// Accepted 活动类型 values (empty = all)
    pub activity_types: Vec<String>,
    /// Case-insensitive substring of 活动名称
    pub activity_name: Option<String>,
    /// Exact 加分类型 match
    pub score_type: Option<String>,
    /// Inclusive lower bound on 加分分数
    pub min_score: Option<f64>,
    /// Inclusive upper bound on 加分分数
    pub max_score: Option<f64>,
    /// Accepted 行政班级 values (empty = all)
    pub classes: Vec<String>,
    /// Keep only rows hosted by the college (是否为工学院举办 = 是)
    pub college_hosted_only: bool,
}

impl RecordFilter {
    /// Create an empty filter that passes every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one academic term
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Restrict to a set of activity types
    pub fn with_activity_types(mut self, types: Vec<String>) -> Self {
        self.activity_types = types;
        self
    }

    /// Restrict by activity-name substring (case-insensitive)
    pub fn with_activity_name(mut self, needle: impl Into<String>) -> Self {
        self.activity_name = Some(needle.into());
        self
    }

    /// Restrict to one score type
    pub fn with_score_type(mut self, score_type: impl Into<String>) -> Self {
        self.score_type = Some(score_type.into());
        self
    }

    /// Restrict to an inclusive score range; either bound may be `None`
    pub fn with_score_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_score = min;
        self.max_score = max;
        self
    }

    /// Restrict to a set of administrative classes
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = classes;
        self
    }

    /// Keep only college-hosted rows
    pub fn college_hosted_only(mut self) -> Self {
        self.college_hosted_only = true;
        self
    }

    /// Whether a single record passes every set criterion
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(term) = &self.term
            && record.term != *term
        {
            return false;
        }

        if !self.activity_types.is_empty() && !self.activity_types.contains(&record.activity_type) {
            return false;
        }

        if let Some(needle) = &self.activity_name {
            let haystack = record.activity_name.to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }

        if let Some(score_type) = &self.score_type
            && record.score_type != *score_type
        {
            return false;
        }

        if let Some(min) = self.min_score
            && record.score < min
        {
            return false;
        }

        if let Some(max) = self.max_score
            && record.score > max
        {
            return false;
        }

        if !self.classes.is_empty() && !self.classes.contains(&record.class_name) {
            return false;
        }

        if self.college_hosted_only && record.college_hosted != "是" {
            return false;
        }

        true
    }

    /// Apply the filter, returning the surviving records in input order
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Distinct academic terms present in a record set, sorted
pub fn unique_terms(records: &[Record]) -> Vec<String> {
    unique_values(records, |r| &r.term)
}

/// Distinct activity types present in a record set, sorted
pub fn unique_activity_types(records: &[Record]) -> Vec<String> {
    unique_values(records, |r| &r.activity_type)
}

/// Distinct administrative classes present in a record set, sorted
pub fn unique_classes(records: &[Record]) -> Vec<String> {
    unique_values(records, |r| &r.class_name)
}

fn unique_values(records: &[Record], field: impl Fn(&Record) -> &String) -> Vec<String> {
    let set: BTreeSet<String> = records
        .iter()
        .map(field)
        .filter(|value| !value.is_empty())
        .cloned()
        .collect();
    set.into_iter().collect()
}
