//! Shared components for CLI commands
//!
//! Common statistics, logging setup, progress reporting and pipeline stages
//! used across the command implementations.

use crate::app::services::record_processor::{classify_attendance, process_records};
use crate::app::services::workbook_parser::WorkbookParser;
use crate::config::AttendanceConfig;
use crate::app::models::{AttendanceResult, ValidationOutcome};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Pipeline statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Number of data rows read from the source sheet
    pub rows_read: usize,
    /// Rows that passed validation and deduplication
    pub valid_records: usize,
    /// Rows routed to the invalid channel
    pub invalid_records: usize,
    /// Valid rows whose remark failed attendance classification
    pub unattended_records: usize,
    /// Rows written to the roster output
    pub exported_records: usize,
    /// Total pipeline time
    pub processing_time: Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl PipelineStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster_processor={log_level}")));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a spinner for the short pipeline stages
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Read a source workbook file into memory
pub async fn read_workbook(path: &Path) -> Result<Vec<u8>> {
    info!("Reading source workbook: {}", path.display());

    tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("failed to read '{}'", path.display()), e))
}

/// Write an output workbook buffer to disk
pub async fn write_workbook(path: &Path, buffer: &[u8]) -> Result<()> {
    tokio::fs::write(path, buffer)
        .await
        .map_err(|e| Error::io(format!("failed to write '{}'", path.display()), e))?;

    info!("Wrote {} bytes to {}", buffer.len(), path.display());
    Ok(())
}

/// Parse, validate and deduplicate a source workbook buffer
pub fn validate_source(bytes: &[u8]) -> Result<ValidationOutcome> {
    let parser = WorkbookParser::new();
    let rows = parser.parse_bytes(bytes)?;
    Ok(process_records(rows))
}

/// Run attendance classification over the valid channel
pub fn classify_valid(
    outcome: &ValidationOutcome,
    config: &AttendanceConfig,
) -> AttendanceResult {
    let result = classify_attendance(outcome.valid.clone(), config);
    info!(
        "attendance classification: {} attended, {} unattended",
        result.attended.len(),
        result.unattended.len()
    );
    result
}

/// Print the human-readable pipeline summary
pub fn print_summary(stats: &PipelineStats) {
    println!();
    println!("{}", "处理完成".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  源数据行数: {}", stats.rows_read);
    println!("  有效记录:   {}", stats.valid_records.to_string().green());
    if stats.invalid_records > 0 {
        println!("  无效记录:   {}", stats.invalid_records.to_string().yellow());
    }
    if stats.unattended_records > 0 {
        println!(
            "  未考勤记录: {}",
            stats.unattended_records.to_string().yellow()
        );
    }
    println!("  导出记录:   {}", stats.exported_records);
    println!("  处理耗时:   {:.2?}", stats.processing_time);

    if !stats.output_sizes.is_empty() {
        println!();
        println!("  输出文件:");
        for (filename, size) in &stats.output_sizes {
            println!("    {} ({})", filename.cyan(), PipelineStats::format_size(*size));
        }
    }
    println!();
}
