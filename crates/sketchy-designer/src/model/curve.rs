use sketchy_core::{Color, Point};

use super::DrawingShape;

/// Freehand stroke drawn with the pen tool.
///
/// Points are only appended while the stroke is being drawn. A curve has no
/// rotation and is never hit by selection, so `rotate`, `resize` and the
/// size setters leave it unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignCurve {
    points: Vec<Point>,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl DesignCurve {
    pub fn new(start: Point, stroke: Color, stroke_width: f64) -> Self {
        Self {
            points: vec![start],
            stroke,
            stroke_width,
        }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first_point(&self) -> Point {
        self.points.first().copied().unwrap_or_default()
    }

    /// Points after the first one.
    pub fn remaining_points(&self) -> &[Point] {
        self.points.get(1..).unwrap_or(&[])
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.points.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        )
    }
}

impl DrawingShape for DesignCurve {
    fn rotate(&mut self, _curr: Point, _prev: Point) {}

    fn translate(&mut self, curr: Point, prev: Point) {
        let delta = curr - prev;
        for point in &mut self.points {
            *point = *point + delta;
        }
    }

    fn resize(&mut self, _drag: Point) {}

    fn contains(&self, _local: Point) -> bool {
        false
    }

    fn color(&self) -> Color {
        self.stroke
    }

    fn set_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn center(&self) -> Point {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
    }

    fn set_center(&mut self, center: Point) {
        let current = self.center();
        self.translate(center, current);
    }

    fn angle(&self) -> f64 {
        0.0
    }

    fn set_angle(&mut self, _angle: f64) {}

    fn width(&self) -> f64 {
        let (min_x, _, max_x, _) = self.bounds();
        max_x - min_x
    }

    fn set_width(&mut self, _width: f64) {}

    fn height(&self) -> f64 {
        let (_, min_y, _, max_y) = self.bounds();
        max_y - min_y
    }

    fn set_height(&mut self, _height: f64) {}
}
