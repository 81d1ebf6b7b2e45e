//! Position solver.
//!
//! Pure placement arithmetic: no I/O, no memoization. Caching belongs to the
//! [`controller`](crate::controller).
//!
//! Vertical: below the trigger when the visible area has room for the overlay
//! plus the gap, otherwise above it. There is no third tier.
//!
//! Horizontal: centered on the pointer, then clamped into the intersection of
//! the bounding container and the viewport, shrunk by the edge margin.

use flyout_api::{Coordinate, EdgeInset, GeometrySnapshot, ViewportMetrics};
use serde::{Deserialize, Serialize};

use crate::config::PositionConfig;

/// Which side of the trigger the overlay ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Below,
    Above,
}

/// Full solver result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub coordinate: Coordinate,
    pub side: Side,
    /// An above-placement starts higher than `scroll_y + inset.top`.
    ///
    /// Informational only; the coordinate is not adjusted.
    pub clipped_top: bool,
}

/// Solve with the default constants.
pub fn solve(
    snapshot: &GeometrySnapshot,
    metrics: &ViewportMetrics,
    inset: &EdgeInset,
) -> Coordinate {
    solve_with(&PositionConfig::default(), snapshot, metrics, inset)
}

/// Solve with tuned constants.
pub fn solve_with(
    config: &PositionConfig,
    snapshot: &GeometrySnapshot,
    metrics: &ViewportMetrics,
    inset: &EdgeInset,
) -> Coordinate {
    place(config, snapshot, metrics, inset).coordinate
}

/// Compute the overlay placement.
pub fn place(
    config: &PositionConfig,
    snapshot: &GeometrySnapshot,
    metrics: &ViewportMetrics,
    inset: &EdgeInset,
) -> Placement {
    let (y, side) = vertical(config.gap, snapshot, metrics, inset);
    let x = horizontal(config, snapshot, metrics);

    let clipped_top = side == Side::Above && y < metrics.scroll_y + inset.top;

    Placement {
        coordinate: Coordinate::new(x, y),
        side,
        clipped_top,
    }
}

fn vertical(
    gap: f32,
    snapshot: &GeometrySnapshot,
    metrics: &ViewportMetrics,
    inset: &EdgeInset,
) -> (f32, Side) {
    let space_below = metrics.visible_bottom() - snapshot.trigger_bottom - inset.bottom;
    let required = metrics.overlay_height + gap;

    if space_below >= required {
        (snapshot.trigger_bottom + gap, Side::Below)
    } else {
        (snapshot.trigger_top - metrics.overlay_height - gap, Side::Above)
    }
}

fn horizontal(
    config: &PositionConfig,
    snapshot: &GeometrySnapshot,
    metrics: &ViewportMetrics,
) -> f32 {
    let margin = config.edge_margin.for_viewport(metrics.viewport_width);

    let left = snapshot.container_offset_left.max(0.0) + margin;
    let right = (snapshot.container_offset_left + snapshot.container_width)
        .min(metrics.viewport_width)
        - margin;

    let centered = snapshot.pointer_x - metrics.overlay_width / 2.0;

    // Not f32::clamp: an overlay wider than the band inverts the bounds.
    centered.min(right - metrics.overlay_width).max(left)
}
