//! Record processing pipeline for activity records
//!
//! This module cleans decoded source rows and prepares them for layout. It
//! owns normalization, validity routing, deduplication, attendance
//! classification and the optional multi-dimension filter.
//!
//! # Architecture
//!
//! - [`processor`] - Normalization, validity routing, deduplication, stats
//! - [`attendance`] - Keyword-based attendance classification
//! - [`filter`] - Optional multi-dimension record filtering
//!
//! # Processing Philosophy
//!
//! Per-row problems are never errors. Rows with an empty name/activity or a
//! duplicate composite key are routed to the `invalid` channel with a reason
//! and their source row number; records whose remark fails the attendance
//! rules land in the `unattended` channel. The caller can present both
//! channels without aborting the run.

pub mod attendance;
pub mod filter;
pub mod processor;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use attendance::classify_attendance;
pub use filter::{RecordFilter, unique_activity_types, unique_classes, unique_terms};
pub use processor::process_records;
