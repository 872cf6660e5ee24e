//! Sorting strategies for roster export
//!
//! Both strategies first partition records into affiliated-college vs. other
//! using case-sensitive substring matches against the configured class-name
//! keywords; affiliated records are sorted and emitted before all
//! other-college records, never interleaved.
//!
//! - by-class: (class, name) within each partition
//! - by-award: (award tier priority, class, name) within each partition
//!
//! Comparisons are stable and every class/name comparison uses the one
//! collation carried by the configuration, so results are deterministic.

use std::cmp::Ordering;
use tracing::debug;

use crate::app::models::Record;
use crate::config::SorterConfig;
use crate::constants::AWARD_PRIORITY_UNMATCHED;

/// The two interchangeable sorting strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Partition, then (class, name) — activity/lecture rosters
    ByClass,
    /// Partition, then (award priority, class, name) — competition rosters
    ByAward,
}

/// Sort records for export under the given strategy
pub fn sort_records(
    records: Vec<Record>,
    strategy: SortStrategy,
    config: &SorterConfig,
) -> Vec<Record> {
    let (mut affiliated, mut others): (Vec<Record>, Vec<Record>) = records
        .into_iter()
        .partition(|record| is_affiliated(&record.class_name, config));

    debug!(
        "sorting {} affiliated and {} other-college records ({:?})",
        affiliated.len(),
        others.len(),
        strategy
    );

    let comparator = |a: &Record, b: &Record| match strategy {
        SortStrategy::ByClass => compare_by_class(a, b, config),
        SortStrategy::ByAward => compare_by_award(a, b, config),
    };

    affiliated.sort_by(comparator);
    others.sort_by(comparator);

    affiliated.extend(others);
    affiliated
}

/// Whether a class name belongs to the affiliated college
///
/// Case-sensitive substring match against the configured keyword list; empty
/// class names never match.
pub fn is_affiliated(class_name: &str, config: &SorterConfig) -> bool {
    let class_name = class_name.trim();
    if class_name.is_empty() {
        return false;
    }
    config
        .affiliated_class_keywords
        .iter()
        .any(|keyword| class_name.contains(keyword.as_str()))
}

/// Priority of an award string under the ranked tier vocabulary
///
/// 1 is the highest tier; awards matching no tier get the sentinel maximum so
/// they sort after all matched ones.
pub fn award_priority(award: &str, config: &SorterConfig) -> usize {
    let award = award.trim();
    config
        .award_tiers
        .iter()
        .position(|tier| award.contains(tier.as_str()))
        .map(|index| index + 1)
        .unwrap_or(AWARD_PRIORITY_UNMATCHED)
}

fn compare_by_class(a: &Record, b: &Record, config: &SorterConfig) -> Ordering {
    config
        .collation
        .compare(&a.class_name, &b.class_name)
        .then_with(|| config.collation.compare(&a.name, &b.name))
}

fn compare_by_award(a: &Record, b: &Record, config: &SorterConfig) -> Ordering {
    award_priority(&a.award, config)
        .cmp(&award_priority(&b.award, config))
        .then_with(|| compare_by_class(a, b, config))
}
