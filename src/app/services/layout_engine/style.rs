//! Cell styles and border edge merging
//!
//! A cell's border is four independently optional edge descriptors. Border
//! reinforcement is a pure merge over immutable edge records: an edge is
//! taken from the receiving side only when the preferred side leaves it
//! unset, so inner edges set from the opposite direction are never clobbered.

use crate::app::models::FontSizes;

/// Border line styles supported by the layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    Thin,
    Medium,
}

/// Four independently optional border edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderEdges {
    pub top: Option<EdgeStyle>,
    pub left: Option<EdgeStyle>,
    pub bottom: Option<EdgeStyle>,
    pub right: Option<EdgeStyle>,
}

impl BorderEdges {
    /// No edges set
    pub const NONE: BorderEdges = BorderEdges {
        top: None,
        left: None,
        bottom: None,
        right: None,
    };

    /// All four edges in the given style
    pub fn all(style: EdgeStyle) -> Self {
        Self {
            top: Some(style),
            left: Some(style),
            bottom: Some(style),
            right: Some(style),
        }
    }

    /// Only the top edge set
    pub fn top(style: EdgeStyle) -> Self {
        Self {
            top: Some(style),
            ..Self::NONE
        }
    }

    /// Only the left edge set
    pub fn left(style: EdgeStyle) -> Self {
        Self {
            left: Some(style),
            ..Self::NONE
        }
    }

    /// Only the bottom edge set
    pub fn bottom(style: EdgeStyle) -> Self {
        Self {
            bottom: Some(style),
            ..Self::NONE
        }
    }

    /// Only the right edge set
    pub fn right(style: EdgeStyle) -> Self {
        Self {
            right: Some(style),
            ..Self::NONE
        }
    }

    /// Pure edge merge: keep this record's set edges, fill unset edges from
    /// `fallback`
    pub fn or(self, fallback: BorderEdges) -> BorderEdges {
        BorderEdges {
            top: self.top.or(fallback.top),
            left: self.left.or(fallback.left),
            bottom: self.bottom.or(fallback.bottom),
            right: self.right.or(fallback.right),
        }
    }
}

/// Style of one output cell
///
/// Every styled cell is centered both ways; the title is bold, notes are red
/// with text wrapping, matching the institutional form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub font_size: f64,
    pub bold: bool,
    pub red: bool,
    pub wrap: bool,
    pub border: BorderEdges,
}

impl CellStyle {
    /// Large bold centered title style
    pub fn title(fonts: &FontSizes) -> Self {
        Self {
            font_size: fonts.title,
            bold: true,
            red: false,
            wrap: true,
            border: BorderEdges::all(EdgeStyle::Thin),
        }
    }

    /// Red centered note style
    pub fn note(fonts: &FontSizes) -> Self {
        Self {
            font_size: fonts.note,
            bold: false,
            red: true,
            wrap: true,
            border: BorderEdges::all(EdgeStyle::Thin),
        }
    }

    /// Bold centered header style
    pub fn header(fonts: &FontSizes) -> Self {
        Self {
            font_size: fonts.body,
            bold: true,
            red: false,
            wrap: false,
            border: BorderEdges::all(EdgeStyle::Thin),
        }
    }

    /// Centered body style
    pub fn body(fonts: &FontSizes) -> Self {
        Self {
            font_size: fonts.body,
            bold: false,
            red: false,
            wrap: false,
            border: BorderEdges::all(EdgeStyle::Thin),
        }
    }
}
