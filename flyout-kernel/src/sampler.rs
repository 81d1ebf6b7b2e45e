//! Geometry sampling.
//!
//! Turns a trigger interaction into a normalized [`GeometrySnapshot`].

use flyout_api::{AnchorEvent, GeometrySnapshot, Rect};

/// Capture trigger and container geometry for one interaction.
///
/// Without a bounding container the snapshot carries the unconstrained
/// sentinel, so only the viewport can bind in the solver.
pub fn sample(event: &AnchorEvent, container: Option<&Rect>) -> GeometrySnapshot {
    let trigger_top = event.trigger.y;
    let snapshot = GeometrySnapshot::unconstrained(
        trigger_top,
        trigger_top + event.trigger.height,
        event.pointer.x,
    );
    match container {
        Some(container) => snapshot.within(*container),
        None => snapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flyout_api::{Point, UNCONSTRAINED_EXTENT};

    fn event() -> AnchorEvent {
        AnchorEvent::new(Point::new(100.0, 0.0), Rect::new(0.0, 20.0, 0.0, 1000.0))
    }

    #[test]
    fn without_container() {
        let s = sample(&event(), None);
        assert_eq!(s.pointer_x, 100.0);
        assert_eq!(s.trigger_top, 20.0);
        assert_eq!(s.trigger_bottom, 1020.0);
        assert_eq!(s.container_offset_top, 0.0);
        assert_eq!(s.container_offset_left, 0.0);
        assert_eq!(s.container_height, UNCONSTRAINED_EXTENT);
        assert_eq!(s.container_width, UNCONSTRAINED_EXTENT);
    }

    #[test]
    fn with_container() {
        let wrapper = Rect::new(100.0, 50.0, 300.0, 200.0);
        let s = sample(&event(), Some(&wrapper));
        assert_eq!(s.pointer_x, 100.0);
        assert_eq!(s.trigger_top, 20.0);
        assert_eq!(s.trigger_bottom, 1020.0);
        assert_eq!(s.container_offset_top, 50.0);
        assert_eq!(s.container_height, 200.0);
        assert_eq!(s.container_offset_left, 100.0);
        assert_eq!(s.container_width, 300.0);
    }

    #[test]
    fn only_pointer_x_is_read() {
        let a = AnchorEvent::new(Point::new(42.0, 7.0), Rect::new(3.0, 10.0, 80.0, 30.0));
        let b = AnchorEvent::new(Point::new(42.0, 900.0), Rect::new(500.0, 10.0, 1.0, 30.0));
        assert_eq!(sample(&a, None), sample(&b, None));
    }
}
