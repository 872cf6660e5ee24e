//! Roster Processor Library
//!
//! A Rust library for converting raw student activity/award spreadsheets into
//! formatted institutional bonus-point roster workbooks.
//!
//! This library provides tools for:
//! - Parsing XLSX source workbooks with required-sheet and required-field checks
//! - Normalizing, validating and deduplicating activity records
//! - Classifying records by attendance status using keyword rules
//! - Sorting by administrative class or by award tier with college partitioning
//! - Grouping records by score for the dual-column activity layout
//! - Rendering styled roster workbooks with exact column/row unit conversion
//! - Exporting a flat blacklist of unattended/invalid rows

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod blacklist;
        pub mod layout_engine;
        pub mod record_processor;
        pub mod sorter;
        pub mod workbook_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Record, Template, TemplateKind, ValidationOutcome};
pub use config::{AttendanceConfig, SorterConfig};

/// Result type alias for the roster processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for roster processing operations
///
/// Only invocation-fatal conditions surface here. Per-row problems (empty
/// name/activity, duplicate key, failed attendance-keyword match) are data
/// outcomes routed into the `invalid`/`unattended` result channels instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Source workbook lacks the required data sheet
    #[error("missing required sheet '{sheet}' in source workbook")]
    MissingSheet { sheet: String },

    /// Source header row lacks required fields
    #[error("missing required columns: {}", fields.join("、"))]
    MissingFields { fields: Vec<String> },

    /// Underlying byte-decode failure when opening the source workbook
    #[error("failed to read source workbook: {message}")]
    WorkbookRead {
        message: String,
        #[source]
        source: Box<calamine::XlsxError>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Output-encoding failure while serializing a workbook
    #[error("workbook serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Box<rust_xlsxwriter::XlsxError>,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a missing-sheet error
    pub fn missing_sheet(sheet: impl Into<String>) -> Self {
        Self::MissingSheet {
            sheet: sheet.into(),
        }
    }

    /// Create a missing-fields error from the list of absent column names
    pub fn missing_fields(fields: Vec<String>) -> Self {
        Self::MissingFields { fields }
    }

    /// Create a workbook read error with context
    pub fn workbook_read(message: impl Into<String>, source: calamine::XlsxError) -> Self {
        Self::WorkbookRead {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: rust_xlsxwriter::XlsxError) -> Self {
        Self::Serialization {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<calamine::XlsxError> for Error {
    fn from(error: calamine::XlsxError) -> Self {
        Self::WorkbookRead {
            message: "workbook decoding failed".to_string(),
            source: Box::new(error),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::Serialization {
            message: "workbook encoding failed".to_string(),
            source: Box::new(error),
        }
    }
}
