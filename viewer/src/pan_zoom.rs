//! Wheel-zoom and drag-pan state machine for one map image container.
//!
//! The host measures the container and image before forwarding each event
//! (see [`PanZoom::set_geometry`]) because the permissible translate range
//! depends on both sizes and on the current scale. Every handler that changes
//! what is on screen returns the [`Transform`] to paint; handlers return
//! `None` when nothing visible changed.

#[cfg(test)]
#[path = "pan_zoom_test.rs"]
mod pan_zoom_test;

use crate::consts::{MAX_SCALE, MIN_SCALE, PAN_DAMPING, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::geom::{Bounds, Point, Size, strict_bounds};
use crate::transform::Transform;

/// Gesture state of a pan/zoom container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The user is dragging the image.
    Dragging {
        /// Cursor position minus the translate at pointer-down.
        anchor: Point,
    },
}

/// Pan/zoom state for a single map container.
#[derive(Debug, Clone)]
pub struct PanZoom {
    scale: f64,
    translate: Point,
    state: PanState,
    container: Size,
    image: Size,
}

impl Default for PanZoom {
    fn default() -> Self {
        Self::new(Size::default(), Size::default())
    }
}

impl PanZoom {
    #[must_use]
    pub fn new(container: Size, image: Size) -> Self {
        Self { scale: MIN_SCALE, translate: Point::default(), state: PanState::Idle, container, image }
    }

    /// Refresh the measured container and image sizes.
    pub fn set_geometry(&mut self, container: Size, image: Size) {
        self.container = container;
        self.image = image;
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn translate(&self) -> Point {
        self.translate
    }

    #[must_use]
    pub fn state(&self) -> PanState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PanState::Dragging { .. })
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.scale, self.translate)
    }

    /// Translate range for the current scale.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        strict_bounds(self.container, self.image, self.scale)
    }

    /// Zoom toward `cursor` (container-relative). Positive `delta_y` zooms out.
    ///
    /// Returns `None` when the scale is already pinned at the relevant limit.
    pub fn on_wheel(&mut self, cursor: Point, delta_y: f64) -> Option<Transform> {
        let factor = if delta_y > 0.0 { ZOOM_OUT_FACTOR } else { ZOOM_IN_FACTOR };
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return None;
        }

        let ratio = new_scale / self.scale;
        let zoomed = Point::new(
            cursor.x - ratio * (cursor.x - self.translate.x),
            cursor.y - ratio * (cursor.y - self.translate.y),
        );
        self.scale = new_scale;
        self.translate = self.bounds().clamp(zoomed);
        Some(self.transform())
    }

    /// Start a drag at client position `client`.
    pub fn on_pointer_down(&mut self, client: Point) {
        let anchor = Point::new(client.x - self.translate.x, client.y - self.translate.y);
        self.state = PanState::Dragging { anchor };
    }

    /// Continue a drag. No-op when idle.
    pub fn on_pointer_move(&mut self, client: Point) -> Option<Transform> {
        let PanState::Dragging { anchor } = self.state else {
            return None;
        };
        let raw = Point::new((client.x - anchor.x) * PAN_DAMPING, (client.y - anchor.y) * PAN_DAMPING);
        self.translate = self.bounds().clamp(raw);
        Some(self.transform())
    }

    /// End a drag. Returns whether a drag was actually in progress.
    pub fn on_pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = PanState::Idle;
        was_dragging
    }

    /// Reset to the unzoomed, centered view.
    pub fn on_double_click(&mut self) -> Transform {
        self.scale = MIN_SCALE;
        self.translate = Point::default();
        self.state = PanState::Idle;
        self.transform()
    }
}
