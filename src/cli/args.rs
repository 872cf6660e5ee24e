//! Command-line argument definitions for the roster processor
//!
//! The complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the roster processor
///
/// Converts raw student activity/award spreadsheets into formatted
/// institutional bonus-point roster workbooks.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roster-processor",
    version,
    about = "Convert raw student activity spreadsheets into formatted bonus-point rosters",
    long_about = "Reads a raw activity/award workbook exported from the institutional system, \
                  validates and deduplicates its rows, classifies attendance from the remark \
                  column, and renders a styled roster workbook in the competition or activity \
                  layout. Rows that fail attendance or validation can be exported as a blacklist."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the roster processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Render a formatted roster workbook from a source spreadsheet (default command)
    Export(ExportArgs),
    /// Summarize a source spreadsheet without producing output files
    Inspect(InspectArgs),
    /// Export unattended and invalid rows as a blacklist workbook
    Blacklist(BlacklistArgs),
}

/// Arguments for the export command (main roster rendering)
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Input source workbook
    ///
    /// Must contain a sheet named 数据源 whose header row carries all 15
    /// required columns.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input source workbook (.xlsx)"
    )]
    pub input_path: PathBuf,

    /// Output path for the rendered roster workbook
    ///
    /// If not specified, defaults to 加分名单.xlsx in the current directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the rendered roster workbook"
    )]
    pub output_path: Option<PathBuf>,

    /// Roster layout to render
    ///
    /// If not specified, the layout is inferred from the activity type of the
    /// exported records: 比赛 selects the competition layout, everything else
    /// the dual-column activity layout.
    #[arg(
        short = 't',
        long = "template",
        value_enum,
        value_name = "LAYOUT",
        help = "Roster layout (inferred from activity type when omitted)"
    )]
    pub template: Option<TemplateArg>,

    /// Title for the roster's first row
    ///
    /// Defaults to {term}工学院{activity}加分名单 built from the exported
    /// records.
    #[arg(long = "title", value_name = "TEXT", help = "Roster title text")]
    pub title: Option<String>,

    /// Explanatory note under the title (competition layout only)
    #[arg(long = "note", value_name = "TEXT", help = "Roster note text")]
    pub note: Option<String>,

    /// Custom note appended after the data region
    #[arg(
        long = "custom-note",
        value_name = "TEXT",
        help = "Custom note row appended after the data region"
    )]
    pub custom_note: Option<String>,

    /// Restrict the export to one academic term (exact 学年学期 match)
    #[arg(long = "term", value_name = "TERM", help = "Only export rows of this term")]
    pub term: Option<String>,

    /// Restrict the export to specific activity types (comma-separated list)
    #[arg(
        long = "activity-types",
        value_name = "LIST",
        help = "Comma-separated activity types to export (e.g. 活动,讲座)"
    )]
    pub activity_types: Option<ValueList>,

    /// Restrict the export by activity-name substring (case-insensitive)
    #[arg(
        long = "activity",
        value_name = "TEXT",
        help = "Only export rows whose activity name contains this text"
    )]
    pub activity_name: Option<String>,

    /// Restrict the export to one score type (exact 加分类型 match)
    #[arg(
        long = "score-type",
        value_name = "TYPE",
        help = "Only export rows of this score type"
    )]
    pub score_type: Option<String>,

    /// Inclusive lower bound on the score
    #[arg(long = "min-score", value_name = "SCORE", help = "Minimum score to export")]
    pub min_score: Option<f64>,

    /// Inclusive upper bound on the score
    #[arg(long = "max-score", value_name = "SCORE", help = "Maximum score to export")]
    pub max_score: Option<f64>,

    /// Restrict the export to specific administrative classes (comma-separated list)
    #[arg(
        long = "classes",
        value_name = "LIST",
        help = "Comma-separated administrative classes to export"
    )]
    pub classes: Option<ValueList>,

    /// Keep only rows hosted by the college (是否为工学院举办 = 是)
    #[arg(long = "college-hosted", help = "Only export college-hosted rows")]
    pub college_hosted: bool,

    /// Skip attendance classification
    ///
    /// By default only rows whose remark carries an attendance keyword are
    /// exported; the rest go to the blacklist. This flag exports every valid
    /// row regardless of attendance.
    #[arg(
        long = "skip-attendance",
        help = "Export every valid row without attendance classification"
    )]
    pub skip_attendance: bool,

    /// Also write unattended and invalid rows to a blacklist workbook
    #[arg(
        short = 'b',
        long = "blacklist",
        value_name = "FILE",
        help = "Also write unattended/invalid rows to this workbook"
    )]
    pub blacklist_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (source summary without output)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input source workbook
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input source workbook (.xlsx)"
    )]
    pub input_path: PathBuf,

    /// Output format for the summary
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the summary"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the blacklist command
#[derive(Debug, Clone, Parser)]
pub struct BlacklistArgs {
    /// Input source workbook
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input source workbook (.xlsx)"
    )]
    pub input_path: PathBuf,

    /// Output path for the blacklist workbook
    ///
    /// If not specified, defaults to 黑名单.xlsx in the current directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the blacklist workbook"
    )]
    pub output_path: Option<PathBuf>,

    /// Override the attendance keywords (comma-separated list)
    ///
    /// A remark counts as attended when it contains any of these keywords.
    /// Defaults to 已考勤,到场,参与.
    #[arg(
        long = "attended-keywords",
        value_name = "LIST",
        help = "Comma-separated keywords marking a remark as attended"
    )]
    pub attended_keywords: Option<ValueList>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Roster layout options for the export command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateArg {
    /// Dual-column layout grouped by score
    Activity,
    /// Single-column layout sorted by award tier
    Competition,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated value lists
#[derive(Debug, Clone)]
pub struct ValueList {
    pub values: Vec<String>,
}

impl FromStr for ValueList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let values: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if values.is_empty() {
            return Err(Error::configuration("value list cannot be empty"));
        }

        Ok(ValueList { values })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ExportArgs {
    /// Validate the export command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input_path)?;

        if let Some(output_path) = &self.output_path {
            validate_output_parent(output_path)?;
        }
        if let Some(blacklist_path) = &self.blacklist_path {
            validate_output_parent(blacklist_path)?;
        }

        if let (Some(min), Some(max)) = (self.min_score, self.max_score)
            && min > max
        {
            return Err(Error::configuration(format!(
                "min-score ({min}) cannot exceed max-score ({max})"
            )));
        }

        Ok(())
    }

    /// Effective output path, defaulting to 加分名单.xlsx
    pub fn get_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("加分名单.xlsx"))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input_path)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

impl BlacklistArgs {
    /// Validate the blacklist command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input_path)?;

        if let Some(output_path) = &self.output_path {
            validate_output_parent(output_path)?;
        }

        Ok(())
    }

    /// Effective output path, defaulting to 黑名单.xlsx
    pub fn get_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("黑名单.xlsx"))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn validate_input_path(input_path: &PathBuf) -> Result<()> {
    if !input_path.exists() {
        return Err(Error::configuration(format!(
            "input file does not exist: {}",
            input_path.display()
        )));
    }

    if !input_path.is_file() {
        return Err(Error::configuration(format!(
            "input path is not a file: {}",
            input_path.display()
        )));
    }

    Ok(())
}

fn validate_output_parent(output_path: &std::path::Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(Error::configuration(format!(
            "output directory does not exist: {}",
            parent.display()
        )));
    }

    Ok(())
}
