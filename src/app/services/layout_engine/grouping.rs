//! Score grouping for the dual-column activity layout
//!
//! Buckets the sorted record set by the (score amount, score type) pair and
//! orders groups by descending score. Each group becomes one note+header+data
//! block in the output; competition exports never group.

use tracing::debug;

use crate::app::models::{Record, ScoreGroup};

/// Bucket sorted records into score groups, highest score first
///
/// Group identity is the literal (score, score type) pair, with the score
/// type defaulting to the academic-score label when unset. Ties in score
/// retain bucket-insertion order, which follows the upstream sort, so the
/// grouping is deterministic.
pub fn group_by_score(records: Vec<Record>) -> Vec<ScoreGroup> {
    let mut groups: Vec<ScoreGroup> = Vec::new();

    for record in records {
        let score = record.score;
        let score_type = record.score_type_label().to_string();

        match groups
            .iter_mut()
            .find(|group| group.score == score && group.score_type == score_type)
        {
            Some(group) => group.records.push(record),
            None => groups.push(ScoreGroup {
                score,
                score_type,
                records: vec![record],
            }),
        }
    }

    groups.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!("bucketed records into {} score groups", groups.len());
    groups
}

/// Format a score the way the institutional note rows show it
/// (whole numbers without a decimal point)
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{score}")
    }
}
