//! Layout engine for formatted roster workbooks
//!
//! Consumes sorted (and, for the activity template, score-grouped) records
//! plus a [`Template`] descriptor and emits a styled spreadsheet buffer
//! mirroring the institutional paper form: title block, explanatory note,
//! column headers, single- or dual-column data region, optional trailing
//! custom note and a reinforced border around the full table region.
//!
//! ## Architecture
//!
//! - [`units`] - Display-to-writer unit conversion (empirical tier factors)
//! - [`style`] - Cell styles with four independently optional border edges
//! - [`document`] - The in-memory layout document built cell by cell
//! - [`grouping`] - Score grouping for the dual-column activity layout
//! - [`builder`] - Competition and activity document builders
//! - [`renderer`] - Serialization of a document into an XLSX byte buffer
//!
//! The engine never touches persistent storage; it hands back an in-memory
//! buffer and leaves download/save mechanics to the caller.

pub mod builder;
pub mod document;
pub mod grouping;
pub mod renderer;
pub mod style;
pub mod units;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{build_activity_document, build_competition_document};
pub use document::{Cell, CellValue, LayoutDocument, LayoutRow, MergeRange};
pub use grouping::group_by_score;
pub use renderer::render_document;
pub use style::{BorderEdges, CellStyle, EdgeStyle};

use crate::app::models::{Record, Template, TemplateKind};
use crate::app::services::sorter::{SortStrategy, sort_records};
use crate::config::SorterConfig;
use crate::Result;
use tracing::info;

/// Sort, group, lay out and serialize records into a roster buffer
///
/// Competition templates sort by award tier; activity templates sort by
/// class and are then grouped by (score, score type) into repeated
/// note+header+data blocks.
pub fn render_roster(
    records: Vec<Record>,
    template: &Template,
    sorter_config: &SorterConfig,
) -> Result<Vec<u8>> {
    let document = match template.kind {
        TemplateKind::Competition => {
            let sorted = sort_records(records, SortStrategy::ByAward, sorter_config);
            build_competition_document(&sorted, template)
        }
        TemplateKind::Activity => {
            let sorted = sort_records(records, SortStrategy::ByClass, sorter_config);
            let groups = group_by_score(sorted);
            build_activity_document(&groups, template)
        }
    };

    info!(
        "laid out roster document: {} rows x {} columns",
        document.rows.len(),
        document.column_count()
    );

    render_document(&document)
}
