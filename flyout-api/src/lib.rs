//! Flyout API - Shared value types for the overlay positioning engine.

mod event;
mod geometry;
pub mod primitives;

pub use event::*;
pub use geometry::*;
pub use primitives::{Point, Rect, Size};
