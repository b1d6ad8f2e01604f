#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::geom::Point;

/// Visual transform for a map image: scale first, then translate.
///
/// The translate is applied in scaled space, so the host must write the
/// composed string exactly as produced by [`Transform::to_css`] for zoom to
/// stay centered on the supplied translate rather than the element origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 }
    }
}

impl Transform {
    #[must_use]
    pub fn new(scale: f64, translate: Point) -> Self {
        Self { scale, translate_x: translate.x, translate_y: translate.y }
    }

    #[must_use]
    pub fn translate(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    /// CSS `transform` property value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("scale({}) translate({}px, {}px)", self.scale, self.translate_x, self.translate_y)
    }
}
