//! Inspect command implementation
//!
//! Summarizes a source workbook without producing output files: validation
//! statistics, attendance split and the distinct terms, activity types and
//! classes found in the valid channel.

use crate::app::services::record_processor::{
    unique_activity_types, unique_classes, unique_terms,
};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::config::AttendanceConfig;
use crate::Result;
use colored::Colorize;
use std::time::Instant;

use super::shared::{self, PipelineStats, classify_valid, read_workbook, validate_source};

/// Execute the inspect command
pub async fn run_inspect(args: InspectArgs) -> Result<PipelineStats> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), false)?;

    let start = Instant::now();

    let bytes = read_workbook(&args.input_path).await?;
    let outcome = validate_source(&bytes)?;
    let attendance = classify_valid(&outcome, &AttendanceConfig::default());

    let stats = PipelineStats {
        rows_read: outcome.stats.total,
        valid_records: outcome.stats.valid,
        invalid_records: outcome.stats.invalid,
        unattended_records: attendance.unattended.len(),
        exported_records: 0,
        processing_time: start.elapsed(),
        output_sizes: Vec::new(),
    };

    let terms = unique_terms(&outcome.valid);
    let activity_types = unique_activity_types(&outcome.valid);
    let classes = unique_classes(&outcome.valid);

    match args.output_format {
        OutputFormat::Human => {
            println!();
            println!("{}", "数据源概览".bold());
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("  源数据行数: {}", stats.rows_read);
            println!("  有效记录:   {}", stats.valid_records.to_string().green());
            println!(
                "  无效记录:   {}",
                stats.invalid_records.to_string().yellow()
            );
            println!(
                "  未考勤记录: {}",
                stats.unattended_records.to_string().yellow()
            );
            println!();
            println!("  学年学期:   {}", terms.join("、"));
            println!("  活动类型:   {}", activity_types.join("、"));
            println!("  行政班级:   {} 个", classes.len());
            for class in &classes {
                println!("    {class}");
            }
            println!();
        }
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "rows_read": stats.rows_read,
                "valid_records": stats.valid_records,
                "invalid_records": stats.invalid_records,
                "unattended_records": stats.unattended_records,
                "terms": terms,
                "activity_types": activity_types,
                "classes": classes,
                "invalid": outcome.invalid,
                "unattended": attendance.unattended,
            });
            println!("{}", serde_json::to_string_pretty(&summary).unwrap_or_default());
        }
    }

    Ok(stats)
}
