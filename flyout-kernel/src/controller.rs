//! Overlay lifecycle controller.
//!
//! Bridges trigger interactions and owner property changes to the solver,
//! and owns the only mutable state in the pipeline: the cached coordinate.
//!
//! Positions are written straight onto the rendered node through an
//! [`OverlayHandle`] instead of going through a property-driven re-render.
//! Everything runs synchronously inside one event handler: measure, sample,
//! solve and write complete before the call returns.

use flyout_api::{
    AnchorEvent, Coordinate, EdgeInset, GeometrySnapshot, OverlayProps, Rect, Size,
    ViewportMetrics,
};
use tracing::{debug, trace};

use crate::config::PositionConfig;
use crate::error::MeasureError;
use crate::sampler::sample;
use crate::solver::place;

/// Imperative handle onto the rendered overlay node.
pub trait OverlayHandle {
    /// Current rendered client box of the node.
    fn client_size(&self) -> Size;

    /// Apply `position` as absolute `top`/`left`.
    fn write_position(&mut self, position: Coordinate);
}

/// Global scroll and viewport state.
pub trait ViewportProbe {
    fn scroll_y(&self) -> f32;
    fn viewport_size(&self) -> Size;
}

/// Per-overlay cache.
///
/// `cached` is only ever set from a successful solve. It is cleared when
/// owner-supplied geometry changes (visible or not), when the inset changes,
/// on unmount, and on [`OverlayController::invalidate`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct OverlayState {
    cached: Option<Coordinate>,
    /// Geometry of the last solve, reused when an override is withdrawn.
    last_snapshot: Option<GeometrySnapshot>,
    /// The override changed while hidden; the next show must re-solve.
    pending_geometry: bool,
}

impl OverlayState {
    fn cached(&self) -> Option<Coordinate> {
        self.cached
    }

    fn last_snapshot(&self) -> Option<GeometrySnapshot> {
        self.last_snapshot
    }

    fn store(&mut self, snapshot: GeometrySnapshot, coordinate: Coordinate) {
        self.cached = Some(coordinate);
        self.last_snapshot = Some(snapshot);
    }

    fn invalidate(&mut self) {
        self.cached = None;
    }
}

/// Positions one overlay instance.
pub struct OverlayController<H> {
    handle: Option<H>,
    config: PositionConfig,
    /// Last successful measurement.
    metrics: ViewportMetrics,
    state: OverlayState,
}

impl<H: OverlayHandle> OverlayController<H> {
    pub fn new(config: PositionConfig) -> Self {
        Self {
            handle: None,
            config,
            metrics: ViewportMetrics::default(),
            state: OverlayState::default(),
        }
    }

    /// Attach the rendered node.
    pub fn mount(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    /// Detach the rendered node. The cached coordinate goes with it.
    pub fn unmount(&mut self) -> Option<H> {
        self.state.invalidate();
        self.handle.take()
    }

    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn config(&self) -> &PositionConfig {
        &self.config
    }

    /// Change the vertical inset. A different inset drops the cached coordinate.
    pub fn set_inset(&mut self, inset: EdgeInset) {
        if self.config.inset != inset {
            self.config.inset = inset;
            self.state.invalidate();
        }
    }

    pub fn metrics(&self) -> &ViewportMetrics {
        &self.metrics
    }

    pub fn cached(&self) -> Option<Coordinate> {
        self.state.cached()
    }

    /// Drop the cached coordinate so the next interaction re-solves.
    pub fn invalidate(&mut self) {
        self.state.invalidate();
    }

    /// Read the overlay's rendered box and the viewport.
    ///
    /// On failure nothing is updated.
    pub fn measure(&mut self, probe: &impl ViewportProbe) -> Result<ViewportMetrics, MeasureError> {
        let handle = self.handle.as_ref().ok_or(MeasureError::NotMounted)?;
        let size = handle.client_size();
        if size.is_empty_box() {
            return Err(MeasureError::ZeroExtent {
                width: size.width,
                height: size.height,
            });
        }

        let metrics = ViewportMetrics::new(size, probe.scroll_y(), probe.viewport_size());
        trace!(?metrics, "measured overlay");
        self.metrics = metrics;
        Ok(metrics)
    }

    /// Pointer entered the trigger.
    ///
    /// Reuses the cached coordinate when there is one; otherwise runs the
    /// full measure, sample, solve pipeline.
    pub fn on_anchor_enter(
        &mut self,
        event: &AnchorEvent,
        container: Option<&Rect>,
        probe: &impl ViewportProbe,
    ) -> Option<Coordinate> {
        if let Some(coordinate) = self.state.cached() {
            debug!(x = coordinate.x, y = coordinate.y, "reusing cached overlay position");
            self.apply(coordinate);
            return Some(coordinate);
        }

        let snapshot = sample(event, container);
        self.reposition(snapshot, probe)
    }

    /// The owner changed the overlay's properties.
    ///
    /// While visible, a new geometry override always re-solves and replaces
    /// the cache. While hidden nothing is measured, but a changed override
    /// drops the cache and forces a re-solve on the next show, even if that
    /// show carries the same override as the last hidden update.
    ///
    /// Withdrawing the override re-solves against the last sampled anchor.
    /// With no anchor sampled yet there is nothing to solve against, so the
    /// cache is left empty and nothing is measured.
    pub fn on_external_update(
        &mut self,
        previous: &OverlayProps,
        current: &OverlayProps,
        probe: &impl ViewportProbe,
    ) -> Option<Coordinate> {
        let geometry_changed = current.position != previous.position;

        if !current.visible {
            if geometry_changed {
                trace!("override changed while hidden, dropping cached position");
                self.state.invalidate();
                self.state.pending_geometry = true;
            }
            return None;
        }
        if !geometry_changed && !self.state.pending_geometry {
            return None;
        }

        self.state.pending_geometry = false;
        self.state.invalidate();
        let Some(snapshot) = current.position.or(self.state.last_snapshot()) else {
            debug!(?previous, ?current, "geometry override withdrawn with no prior anchor");
            return None;
        };
        self.reposition(snapshot, probe)
    }

    fn reposition(
        &mut self,
        snapshot: GeometrySnapshot,
        probe: &impl ViewportProbe,
    ) -> Option<Coordinate> {
        let metrics = match self.measure(probe) {
            Ok(metrics) => metrics,
            Err(e) => {
                debug!(error = %e, "skipping overlay positioning");
                return None;
            }
        };

        let placement = place(&self.config, &snapshot, &metrics, &self.config.inset);
        let coordinate = placement.coordinate;
        debug!(
            x = coordinate.x,
            y = coordinate.y,
            side = ?placement.side,
            clipped_top = placement.clipped_top,
            "overlay positioned"
        );

        self.state.store(snapshot, coordinate);
        self.apply(coordinate);
        Some(coordinate)
    }

    fn apply(&mut self, coordinate: Coordinate) {
        if let Some(handle) = self.handle.as_mut() {
            handle.write_position(coordinate);
        }
    }
}

impl<H: OverlayHandle> Default for OverlayController<H> {
    fn default() -> Self {
        Self::new(PositionConfig::default())
    }
}
