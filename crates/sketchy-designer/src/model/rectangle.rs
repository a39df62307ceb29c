use sketchy_core::{Color, Point};

use super::{extent_through, swept_angle, DrawingShape};

#[derive(Debug, Clone, PartialEq)]
pub struct DesignRectangle {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    /// Rotation angle in degrees, clockwise on screen
    pub rotation: f64,
    pub fill: Color,
}

impl DesignRectangle {
    /// Creates a rectangle from its unrotated top-left corner.
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            width,
            height,
            center: Point::new(x + width / 2.0, y + height / 2.0),
            rotation: 0.0,
            fill,
        }
    }

    pub fn from_center(center: Point, width: f64, height: f64, fill: Color) -> Self {
        Self {
            width,
            height,
            center,
            rotation: 0.0,
            fill,
        }
    }

    /// Top-left corner of the unrotated rectangle.
    pub fn origin(&self) -> Point {
        Point::new(
            self.center.x - self.width / 2.0,
            self.center.y - self.height / 2.0,
        )
    }
}

impl DrawingShape for DesignRectangle {
    fn rotate(&mut self, curr: Point, prev: Point) {
        self.rotation -= swept_angle(self.center, curr, prev);
    }

    fn translate(&mut self, curr: Point, prev: Point) {
        self.center = self.center + (curr - prev);
    }

    fn resize(&mut self, drag: Point) {
        let (width, height) = extent_through(self.center, self.rotation, drag);
        self.width = width;
        self.height = height;
    }

    fn contains(&self, local: Point) -> bool {
        (local.x - self.center.x).abs() <= self.width / 2.0
            && (local.y - self.center.y).abs() <= self.height / 2.0
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
        self.width
    }

    fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_height(&mut self, height: f64) {
        self.height = height;
    }
}
