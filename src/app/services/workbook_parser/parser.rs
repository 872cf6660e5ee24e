//! Core source workbook parser implementation
//!
//! Handles XLSX decoding from an in-memory buffer, the mandatory-sheet check
//! and required-field verification, and coordinates per-row conversion.

use calamine::{Reader, Xlsx};
use std::io::Cursor;
use tracing::{debug, info, warn};

use super::record_parser::{HeaderMap, parse_record};
use crate::app::models::Record;
use crate::constants::SOURCE_SHEET_NAME;
use crate::{Error, Result};

/// Parser for raw activity/award source workbooks
///
/// The parser focuses on essential functionality:
/// - Decoding the full byte buffer handed in by the caller
/// - Hard failure when the `数据源` sheet or any required column is absent
/// - Typed row conversion with numeric score coercion (unparseable → 0)
#[derive(Debug, Default)]
pub struct WorkbookParser;

impl WorkbookParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a source workbook byte buffer into records, in sheet order
    ///
    /// Record fields are carried untrimmed; downstream normalization owns
    /// whitespace handling and validity routing. Returned row order matches
    /// sheet order so row indices can be reconstructed by position.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Record>> {
        let mut workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| Error::workbook_read("could not open workbook buffer", e))?;

        if !workbook
            .sheet_names()
            .iter()
            .any(|name| name == SOURCE_SHEET_NAME)
        {
            return Err(Error::missing_sheet(SOURCE_SHEET_NAME));
        }

        let range = workbook
            .worksheet_range(SOURCE_SHEET_NAME)
            .map_err(|e| Error::workbook_read("could not read data sheet", e))?;

        let mut rows = range.rows();
        let header_row = match rows.next() {
            Some(row) => row,
            None => {
                warn!("data sheet is empty, no header row found");
                return Err(Error::missing_fields(
                    crate::constants::REQUIRED_FIELDS
                        .iter()
                        .map(|f| f.to_string())
                        .collect(),
                ));
            }
        };

        let header_map = HeaderMap::from_header_row(header_row)?;
        debug!("mapped {} source columns", header_map.len());

        let records: Vec<Record> = rows.map(|row| parse_record(row, &header_map)).collect();

        info!(
            "decoded {} data rows from sheet '{}'",
            records.len(),
            SOURCE_SHEET_NAME
        );

        Ok(records)
    }
}
