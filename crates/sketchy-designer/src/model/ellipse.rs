use sketchy_core::geometry::EPSILON;
use sketchy_core::{Color, Point};

use super::{extent_through, swept_angle, DrawingShape};

/// Ellipse described by its center and radii.
///
/// Through the [`DrawingShape`] contract the width and height of an ellipse
/// are its radii, which is also what the drawing file stores.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignEllipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    /// Rotation angle in degrees, clockwise on screen
    pub rotation: f64,
    pub fill: Color,
}

impl DesignEllipse {
    pub fn new(center: Point, rx: f64, ry: f64, fill: Color) -> Self {
        Self {
            center,
            rx,
            ry,
            rotation: 0.0,
            fill,
        }
    }
}

impl DrawingShape for DesignEllipse {
    fn rotate(&mut self, curr: Point, prev: Point) {
        self.rotation -= swept_angle(self.center, curr, prev);
    }

    fn translate(&mut self, curr: Point, prev: Point) {
        self.center = self.center + (curr - prev);
    }

    fn resize(&mut self, drag: Point) {
        let (rx, ry) = extent_through(self.center, self.rotation, drag);
        self.rx = rx;
        self.ry = ry;
    }

    fn contains(&self, local: Point) -> bool {
        let dx = (local.x - self.center.x).abs();
        let dy = (local.y - self.center.y).abs();
        let (rx, ry) = (self.rx, self.ry);

        // Degenerate ellipses collapse to a segment or to their center.
        match (rx <= EPSILON, ry <= EPSILON) {
            (true, true) => dx <= EPSILON && dy <= EPSILON,
            (true, false) => dx <= EPSILON && dy <= ry,
            (false, true) => dy <= EPSILON && dx <= rx,
            (false, false) => (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0,
        }
    }

    fn color(&self) -> Color {
        self.fill
    }

    fn set_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn angle(&self) -> f64 {
        self.rotation
    }

    fn set_angle(&mut self, angle: f64) {
        self.rotation = angle;
    }

    fn width(&self) -> f64 {
        self.rx
    }

    fn set_width(&mut self, width: f64) {
        self.rx = width;
    }

    fn height(&self) -> f64 {
        self.ry
    }

    fn set_height(&mut self, height: f64) {
        self.ry = height;
    }
}
