//! Export command implementation
//!
//! The main pipeline: read, validate, classify attendance, filter, and
//! render the styled roster workbook, optionally writing a blacklist of the
//! rows that fell out along the way.

use crate::app::models::{Record, Template, TemplateKind};
use crate::app::services::blacklist::{BlacklistRow, export_blacklist};
use crate::app::services::layout_engine::render_roster;
use crate::app::services::record_processor::RecordFilter;
use crate::cli::args::{ExportArgs, TemplateArg};
use crate::config::{AttendanceConfig, SorterConfig};
use crate::{Error, Result};
use std::time::Instant;
use tracing::info;

use super::shared::{
    self, PipelineStats, classify_valid, read_workbook, validate_source, write_workbook,
};

/// Execute the export command
pub async fn run_export(args: ExportArgs) -> Result<PipelineStats> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    let start = Instant::now();
    let mut stats = PipelineStats::default();

    let spinner = args
        .show_progress()
        .then(|| shared::create_spinner("读取源数据..."));

    let bytes = read_workbook(&args.input_path).await?;
    let outcome = validate_source(&bytes)?;
    stats.rows_read = outcome.stats.total;
    stats.valid_records = outcome.stats.valid;
    stats.invalid_records = outcome.stats.invalid;

    if let Some(pb) = &spinner {
        pb.set_message("考勤分类...");
    }

    let (records, unattended) = if args.skip_attendance {
        (outcome.valid.clone(), Vec::new())
    } else {
        let result = classify_valid(&outcome, &AttendanceConfig::default());
        (result.attended, result.unattended)
    };
    stats.unattended_records = unattended.len();

    let filter = build_filter(&args);
    let records = filter.apply(&records);
    if records.is_empty() {
        return Err(Error::configuration(
            "no records left to export after filtering",
        ));
    }
    stats.exported_records = records.len();

    if let Some(pb) = &spinner {
        pb.set_message("渲染名单...");
    }

    let template = build_template(&args, &records);
    info!(
        "rendering {} records with the {:?} layout",
        records.len(),
        template.kind
    );

    let buffer = render_roster(records, &template, &SorterConfig::default())?;
    let output_path = args.get_output_path();
    write_workbook(&output_path, &buffer).await?;
    stats
        .output_sizes
        .push((output_path.display().to_string(), buffer.len() as u64));

    if let Some(blacklist_path) = &args.blacklist_path {
        let rows: Vec<BlacklistRow> = unattended
            .iter()
            .map(BlacklistRow::from)
            .chain(outcome.invalid.iter().map(BlacklistRow::from))
            .collect();
        let buffer = export_blacklist(&rows)?;
        write_workbook(blacklist_path, &buffer).await?;
        stats
            .output_sizes
            .push((blacklist_path.display().to_string(), buffer.len() as u64));
    }

    stats.processing_time = start.elapsed();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    if args.show_progress() {
        shared::print_summary(&stats);
    }

    Ok(stats)
}

/// Build the record filter from the CLI arguments
fn build_filter(args: &ExportArgs) -> RecordFilter {
    let mut filter = RecordFilter::new();

    if let Some(term) = &args.term {
        filter = filter.with_term(term);
    }
    if let Some(types) = &args.activity_types {
        filter = filter.with_activity_types(types.values.clone());
    }
    if let Some(needle) = &args.activity_name {
        filter = filter.with_activity_name(needle);
    }
    if let Some(score_type) = &args.score_type {
        filter = filter.with_score_type(score_type);
    }
    filter = filter.with_score_range(args.min_score, args.max_score);
    if let Some(classes) = &args.classes {
        filter = filter.with_classes(classes.values.clone());
    }
    if args.college_hosted {
        filter = filter.college_hosted_only();
    }

    filter
}

/// Resolve the template from the CLI arguments and the filtered records
///
/// The layout is taken from `--template` when given, otherwise inferred from
/// the first record's activity type. Title and note fall back to the
/// institutional defaults built from the records.
fn build_template(args: &ExportArgs, records: &[Record]) -> Template {
    let first = &records[0];

    let kind = match args.template {
        Some(TemplateArg::Activity) => TemplateKind::Activity,
        Some(TemplateArg::Competition) => TemplateKind::Competition,
        None => TemplateKind::for_activity_type(&first.activity_type),
    };

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| Template::default_title(&first.term, &first.activity_name));
    let note = args
        .note
        .clone()
        .unwrap_or_else(|| Template::default_competition_note(first.score_type_label()));

    let mut template = match kind {
        TemplateKind::Activity => Template::activity(title, note),
        TemplateKind::Competition => Template::competition(title, note),
    };
    if let Some(custom_note) = &args.custom_note {
        template = template.with_custom_note(custom_note);
    }

    template
}
