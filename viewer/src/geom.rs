//! Plain geometry: points, sizes, window rectangles, and pan bounds.
//!
//! Everything here is in CSS pixels. [`strict_bounds`] is the one piece of
//! real math: it decides how far a zoomed map image may be translated before
//! it would uncover empty space inside its container.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in screen or container space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// On-screen geometry of a floating window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Rectangle anchored at the origin covering `size`.
    #[must_use]
    pub fn filling(size: Size) -> Self {
        Self { left: 0.0, top: 0.0, width: size.width, height: size.height }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Inclusive translation range for a given zoom scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Clamp a translate into this range.
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: p.x.max(self.min_x).min(self.max_x),
            y: p.y.max(self.min_y).min(self.max_y),
        }
    }

    /// Whether `p` lies inside the range (edges included).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Compute the translate range that keeps a scaled image covering its container.
///
/// The image is first fitted into the container (`min(image, container)` per
/// axis), then scaled. An axis whose scaled size does not exceed the container
/// gets a zero range; otherwise the range is `±(scaled - container) / 2 / scale`.
#[must_use]
pub fn strict_bounds(container: Size, image: Size, scale: f64) -> Bounds {
    let scaled_w = image.width.min(container.width) * scale;
    let scaled_h = image.height.min(container.height) * scale;

    let mut bounds = Bounds::default();
    if scaled_w > container.width {
        bounds.max_x = (scaled_w - container.width) / 2.0 / scale;
        bounds.min_x = -bounds.max_x;
    }
    if scaled_h > container.height {
        bounds.max_y = (scaled_h - container.height) / 2.0 / scale;
        bounds.min_y = -bounds.max_y;
    }
    bounds
}
