//! Display-to-writer unit conversion
//!
//! The output format's width and height units are not a simple linear
//! transform of the visually intended size. Row heights scale by a fixed
//! factor; column widths use a four-tier multiplier keyed by the display
//! width magnitude. The tier factors were empirically derived against the
//! institutional paper form and must be reproduced exactly for visual
//! fidelity.

use crate::constants::{ROW_HEIGHT_FACTOR, width_tiers};

/// Convert a display row height to the writer's row height unit
pub fn convert_row_height(display_height: f64) -> f64 {
    display_height * ROW_HEIGHT_FACTOR
}

/// Convert a display column width to the writer's character-width unit
pub fn convert_column_width(display_width: f64) -> f64 {
    let factor = if display_width <= width_tiers::NARROW_LIMIT {
        width_tiers::NARROW_FACTOR
    } else if display_width <= width_tiers::MEDIUM_LIMIT {
        width_tiers::MEDIUM_FACTOR
    } else if display_width <= width_tiers::WIDE_LIMIT {
        width_tiers::WIDE_FACTOR
    } else {
        width_tiers::EXTRA_WIDE_FACTOR
    };
    display_width * factor
}
