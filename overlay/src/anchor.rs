//! Panel placement relative to the native Actions window.

use slotwatch_core::host::AddonMetrics;
use slotwatch_types::AnchorSide;

use crate::{Point, Size};

/// Pick the panel position for the current frame.
///
/// `Auto` puts the panel immediately right of the native window and
/// falls back to the left edge when the panel would run off the visible
/// area. `Left`/`Right` force a side regardless of room. The panel
/// always shares the window's top edge.
pub fn anchor_position(
    addon: AddonMetrics,
    panel_width: f32,
    viewport: Size,
    side: AnchorSide,
) -> Point {
    let right_edge = addon.x + addon.width;
    let place_left = match side {
        AnchorSide::Left => true,
        AnchorSide::Right => false,
        AnchorSide::Auto => right_edge + panel_width > viewport.width,
    };

    if place_left {
        Point { x: addon.x - panel_width, y: addon.y }
    } else {
        Point { x: right_edge, y: addon.y }
    }
}
