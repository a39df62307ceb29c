use std::fmt;

use sketchy_core::{rotate_point, Color, Point};

mod curve;
mod ellipse;
mod rectangle;

pub use curve::DesignCurve;
pub use ellipse::DesignEllipse;
pub use rectangle::DesignRectangle;

/// Uniform transform/selection contract shared by every drawable entity.
///
/// Points passed to `rotate` and `translate` are pointer positions: `curr`
/// is where the pointer is now and `prev` where it was on the previous
/// event.
pub trait DrawingShape {
    /// Turns the shape by the angle swept by the pointer around its center.
    fn rotate(&mut self, curr: Point, prev: Point);
    /// Moves the shape by `curr - prev`.
    fn translate(&mut self, curr: Point, prev: Point);
    /// Resizes symmetrically about the center: width and height become twice
    /// the drag point's offset from the center along the local axes.
    fn resize(&mut self, drag: Point);
    /// Containment test in the shape's unrotated local frame.
    fn contains(&self, local: Point) -> bool;

    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
    fn center(&self) -> Point;
    fn set_center(&mut self, center: Point);
    /// Rotation in degrees.
    fn angle(&self) -> f64;
    fn set_angle(&mut self, angle: f64);
    fn width(&self) -> f64;
    fn set_width(&mut self, width: f64);
    fn height(&self) -> f64;
    fn set_height(&mut self, height: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Rectangle,
    Ellipse,
    Curve,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::Curve => "Curve",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
    Curve(DesignCurve),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Curve(_) => ShapeType::Curve,
        }
    }

    /// Curves are drawn and saved but are not part of the selectable shape list.
    pub fn is_curve(&self) -> bool {
        matches!(self, Shape::Curve(_))
    }

    pub fn as_curve_mut(&mut self) -> Option<&mut DesignCurve> {
        match self {
            Shape::Curve(curve) => Some(curve),
            _ => None,
        }
    }

    /// Hit test against a canvas point: the point is rotated into the local
    /// frame about the current center before the containment test.
    pub fn hit(&self, point: Point) -> bool {
        let local = rotate_point(point, self.center(), self.angle());
        self.contains(local)
    }
}

impl DrawingShape for Shape {
    fn rotate(&mut self, curr: Point, prev: Point) {
        match self {
            Shape::Rectangle(s) => s.rotate(curr, prev),
            Shape::Ellipse(s) => s.rotate(curr, prev),
            Shape::Curve(s) => s.rotate(curr, prev),
        }
    }

    fn translate(&mut self, curr: Point, prev: Point) {
        match self {
            Shape::Rectangle(s) => s.translate(curr, prev),
            Shape::Ellipse(s) => s.translate(curr, prev),
            Shape::Curve(s) => s.translate(curr, prev),
        }
    }

    fn resize(&mut self, drag: Point) {
        match self {
            Shape::Rectangle(s) => s.resize(drag),
            Shape::Ellipse(s) => s.resize(drag),
            Shape::Curve(s) => s.resize(drag),
        }
    }

    fn contains(&self, local: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains(local),
            Shape::Ellipse(s) => s.contains(local),
            Shape::Curve(s) => s.contains(local),
        }
    }

    fn color(&self) -> Color {
        match self {
            Shape::Rectangle(s) => s.color(),
            Shape::Ellipse(s) => s.color(),
            Shape::Curve(s) => s.color(),
        }
    }

    fn set_color(&mut self, color: Color) {
        match self {
            Shape::Rectangle(s) => s.set_color(color),
            Shape::Ellipse(s) => s.set_color(color),
            Shape::Curve(s) => s.set_color(color),
        }
    }

    fn center(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.center(),
            Shape::Ellipse(s) => s.center(),
            Shape::Curve(s) => s.center(),
        }
    }

    fn set_center(&mut self, center: Point) {
        match self {
            Shape::Rectangle(s) => s.set_center(center),
            Shape::Ellipse(s) => s.set_center(center),
            Shape::Curve(s) => s.set_center(center),
        }
    }

    fn angle(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.angle(),
            Shape::Ellipse(s) => s.angle(),
            Shape::Curve(s) => s.angle(),
        }
    }

    fn set_angle(&mut self, angle: f64) {
        match self {
            Shape::Rectangle(s) => s.set_angle(angle),
            Shape::Ellipse(s) => s.set_angle(angle),
            Shape::Curve(s) => s.set_angle(angle),
        }
    }

    fn width(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.width(),
            Shape::Ellipse(s) => s.width(),
            Shape::Curve(s) => s.width(),
        }
    }

    fn set_width(&mut self, width: f64) {
        match self {
            Shape::Rectangle(s) => s.set_width(width),
            Shape::Ellipse(s) => s.set_width(width),
            Shape::Curve(s) => s.set_width(width),
        }
    }

    fn height(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.height(),
            Shape::Ellipse(s) => s.height(),
            Shape::Curve(s) => s.height(),
        }
    }

    fn set_height(&mut self, height: f64) {
        match self {
            Shape::Rectangle(s) => s.set_height(height),
            Shape::Ellipse(s) => s.set_height(height),
            Shape::Curve(s) => s.set_height(height),
        }
    }
}

/// Angle swept (degrees) from `prev` to `curr` around `center`, in the sense
/// that is subtracted from the current rotation.
pub(crate) fn swept_angle(center: Point, curr: Point, prev: Point) -> f64 {
    prev.angle_from(center) - curr.angle_from(center)
}

/// Twice the offset of `drag` from `center` along the axes of a shape
/// rotated by `angle`. A rectangle uses this as its full width and height,
/// an ellipse as its radii.
pub(crate) fn extent_through(center: Point, angle: f64, drag: Point) -> (f64, f64) {
    let local = rotate_point(drag, center, angle);
    (
        2.0 * (local.x - center.x).abs(),
        2.0 * (local.y - center.y).abs(),
    )
}
