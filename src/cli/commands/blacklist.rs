//! Blacklist command implementation
//!
//! Collects the rows that would not make it onto a roster (remark without an
//! attendance keyword, empty name/activity, duplicates) and writes them as a
//! flat blacklist workbook.

use crate::app::services::blacklist::{BlacklistRow, export_blacklist};
use crate::cli::args::BlacklistArgs;
use crate::config::AttendanceConfig;
use crate::Result;
use std::time::Instant;
use tracing::info;

use super::shared::{
    self, PipelineStats, classify_valid, read_workbook, validate_source, write_workbook,
};

/// Execute the blacklist command
pub async fn run_blacklist(args: BlacklistArgs) -> Result<PipelineStats> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    let start = Instant::now();
    let mut stats = PipelineStats::default();

    let bytes = read_workbook(&args.input_path).await?;
    let outcome = validate_source(&bytes)?;
    stats.rows_read = outcome.stats.total;
    stats.valid_records = outcome.stats.valid;
    stats.invalid_records = outcome.stats.invalid;

    let attendance_config = match &args.attended_keywords {
        Some(keywords) => {
            AttendanceConfig::default().with_attended_keywords(keywords.values.clone())
        }
        None => AttendanceConfig::default(),
    };
    let attendance = classify_valid(&outcome, &attendance_config);
    stats.unattended_records = attendance.unattended.len();

    let rows: Vec<BlacklistRow> = attendance
        .unattended
        .iter()
        .map(BlacklistRow::from)
        .chain(outcome.invalid.iter().map(BlacklistRow::from))
        .collect();
    info!("collected {} blacklist rows", rows.len());

    let buffer = export_blacklist(&rows)?;
    let output_path = args.get_output_path();
    write_workbook(&output_path, &buffer).await?;
    stats
        .output_sizes
        .push((output_path.display().to_string(), buffer.len() as u64));
    stats.exported_records = rows.len();
    stats.processing_time = start.elapsed();

    if args.show_progress() {
        shared::print_summary(&stats);
    }

    Ok(stats)
}
