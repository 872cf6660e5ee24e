//! Tests for border edge merging

use crate::app::services::layout_engine::style::{BorderEdges, EdgeStyle};

#[test]
fn test_merge_fills_only_unset_edges() {
    let partial = BorderEdges {
        top: Some(EdgeStyle::Medium),
        left: None,
        bottom: None,
        right: Some(EdgeStyle::Thin),
    };

    let merged = partial.or(BorderEdges::all(EdgeStyle::Thin));

    // Set edges survive untouched, unset ones take the fallback
    assert_eq!(merged.top, Some(EdgeStyle::Medium));
    assert_eq!(merged.left, Some(EdgeStyle::Thin));
    assert_eq!(merged.bottom, Some(EdgeStyle::Thin));
    assert_eq!(merged.right, Some(EdgeStyle::Thin));
}

#[test]
fn test_merge_never_clobbers_opposite_direction() {
    // A cell whose bottom edge was set by the row below must keep it when
    // the outer top reinforcement merges in
    let existing = BorderEdges::bottom(EdgeStyle::Medium);
    let reinforced = BorderEdges::top(EdgeStyle::Thin).or(existing);

    assert_eq!(reinforced.top, Some(EdgeStyle::Thin));
    assert_eq!(reinforced.bottom, Some(EdgeStyle::Medium));
}

#[test]
fn test_merge_with_none_is_identity() {
    let edges = BorderEdges::all(EdgeStyle::Thin);
    assert_eq!(edges.or(BorderEdges::NONE), edges);
    assert_eq!(BorderEdges::NONE.or(edges), edges);
}
