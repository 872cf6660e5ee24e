//! Source workbook parser for activity/award spreadsheets
//!
//! This module decodes an in-memory XLSX byte buffer, locates the mandatory
//! `数据源` sheet, verifies the 15 required columns and converts each data row
//! into a typed [`Record`](crate::app::models::Record).
//!
//! ## Architecture
//!
//! - [`parser`] - Decoding orchestration, sheet and required-field checks
//! - [`record_parser`] - Header mapping and per-row cell conversion
//!
//! The parser is a pure function of the byte buffer: it performs no I/O and
//! leaves trimming, validity routing and deduplication to the record
//! processor downstream.
//!
//! ## Usage
//!
//! ```rust
//! use roster_processor::app::services::workbook_parser::WorkbookParser;
//!
//! # fn example(bytes: &[u8]) -> roster_processor::Result<()> {
//! let parser = WorkbookParser::new();
//! let rows = parser.parse_bytes(bytes)?;
//! println!("decoded {} source rows", rows.len());
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod record_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::WorkbookParser;
pub use record_parser::HeaderMap;
