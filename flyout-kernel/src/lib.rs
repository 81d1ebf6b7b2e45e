//! Flyout Kernel - viewport-aware overlay positioning.
//!
//! The pipeline has three stages:
//! - [`sampler`] turns a trigger interaction into a [`GeometrySnapshot`]
//! - [`solver`] computes where the overlay goes, flipping above the trigger
//!   when there is no room below
//! - [`controller`] owns the per-overlay cache and writes the result onto the
//!   rendered node through an imperative handle
//!
//! [`GeometrySnapshot`]: flyout_api::GeometrySnapshot

pub mod config;
pub mod controller;
pub mod error;
pub mod sampler;
pub mod solver;

pub use config::{EdgeMargin, PositionConfig};
pub use controller::{OverlayController, OverlayHandle, ViewportProbe};
pub use error::{ConfigError, MeasureError};
pub use sampler::sample;
pub use solver::{Placement, Side, place, solve, solve_with};
