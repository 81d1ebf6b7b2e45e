//! Inbound notifications from the view layer.

use serde::{Deserialize, Serialize};

use crate::geometry::GeometrySnapshot;
use crate::primitives::{Point, Rect};

/// A pointer-enter interaction on a trigger element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorEvent {
    /// Pointer position at the moment of interaction.
    pub pointer: Point,
    /// Offset box of the interacted-with element.
    pub trigger: Rect,
}

impl AnchorEvent {
    pub fn new(pointer: Point, trigger: Rect) -> Self {
        Self { pointer, trigger }
    }
}

/// The externally controlled properties of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayProps {
    /// Whether the view layer currently shows the overlay.
    #[serde(default)]
    pub visible: bool,
    /// Geometry override supplied by the owner instead of a sampled event.
    #[serde(default)]
    pub position: Option<GeometrySnapshot>,
}

impl OverlayProps {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn shown() -> Self {
        Self {
            visible: true,
            position: None,
        }
    }

    pub fn with_position(mut self, position: GeometrySnapshot) -> Self {
        self.position = Some(position);
        self
    }
}
