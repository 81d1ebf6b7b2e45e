//! Geometry inputs and outputs of the positioning pipeline.

use serde::{Deserialize, Serialize};

use crate::primitives::{Rect, Size};

/// Extent used for container fields when no bounding container is supplied.
///
/// Large enough that the container term never becomes the binding
/// constraint against any real viewport.
pub const UNCONSTRAINED_EXTENT: f32 = 100_000.0;

/// Trigger and container geometry captured at the moment of interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometrySnapshot {
    /// Top of the trigger element in page coordinates.
    pub trigger_top: f32,
    /// Bottom of the trigger element in page coordinates.
    pub trigger_bottom: f32,
    /// Horizontal page coordinate of the pointer.
    pub pointer_x: f32,
    #[serde(default)]
    pub container_offset_top: f32,
    #[serde(default)]
    pub container_offset_left: f32,
    #[serde(default = "unconstrained")]
    pub container_height: f32,
    #[serde(default = "unconstrained")]
    pub container_width: f32,
}

fn unconstrained() -> f32 {
    UNCONSTRAINED_EXTENT
}

impl GeometrySnapshot {
    /// A snapshot whose container fields carry the unconstrained sentinel.
    pub fn unconstrained(trigger_top: f32, trigger_bottom: f32, pointer_x: f32) -> Self {
        Self {
            trigger_top,
            trigger_bottom,
            pointer_x,
            container_offset_top: 0.0,
            container_offset_left: 0.0,
            container_height: UNCONSTRAINED_EXTENT,
            container_width: UNCONSTRAINED_EXTENT,
        }
    }

    /// Replace the container fields with a real bounding box.
    pub fn within(mut self, container: Rect) -> Self {
        self.container_offset_top = container.y;
        self.container_offset_left = container.x;
        self.container_height = container.height;
        self.container_width = container.width;
        self
    }
}

/// The overlay's own measured box plus the current scroll/viewport state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportMetrics {
    pub overlay_width: f32,
    pub overlay_height: f32,
    pub scroll_y: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl ViewportMetrics {
    pub fn new(overlay: Size, scroll_y: f32, viewport: Size) -> Self {
        Self {
            overlay_width: overlay.width,
            overlay_height: overlay.height,
            scroll_y,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
        }
    }

    /// Bottom edge of the visible area in page coordinates.
    pub fn visible_bottom(&self) -> f32 {
        self.viewport_height + self.scroll_y
    }
}

/// Caller-supplied margin kept clear at the top and bottom of the usable region.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInset {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub bottom: f32,
}

impl EdgeInset {
    pub const ZERO: Self = Self { top: 0.0, bottom: 0.0 };

    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }
}

/// Top-left page coordinate at which the overlay is placed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Value for the absolute `top` style property.
    pub fn css_top(&self) -> String {
        format!("{}px", self.y)
    }

    /// Value for the absolute `left` style property.
    pub fn css_left(&self) -> String {
        format!("{}px", self.x)
    }
}
