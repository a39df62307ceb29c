//! Serialization and deserialization for drawing files.
//!
//! A drawing file is a stream of whitespace-separated tokens. Every field is
//! written on its own line, and each object becomes one record in display
//! order:
//!
//! ```text
//! rectangle R G B x y width height angle     (x, y: unrotated top-left corner)
//! ellipse   R G B cx cy rx ry angle          (cx, cy: center; rx, ry: radii)
//! line      R G B x0 y0 stroke_width count c1 c2 ...
//! ```
//!
//! For curves `count` is the number of coordinates that follow the first
//! point (twice the number of remaining points); they are written together
//! on a single line. Any tag other than `rectangle` or `ellipse` reads as a
//! curve.

use std::fmt::Display;
use std::path::Path;

use sketchy_core::{Color, FormatError, Point, Result};

use crate::canvas::{Canvas, DrawingObject};
use crate::model::{DrawingShape, Shape};

pub const RECTANGLE_TAG: &str = "rectangle";
pub const ELLIPSE_TAG: &str = "ellipse";
pub const CURVE_TAG: &str = "line";

/// One decoded object.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Rectangle {
        color: Color,
        /// Unrotated top-left corner
        origin: Point,
        width: f64,
        height: f64,
        angle: f64,
    },
    Ellipse {
        color: Color,
        center: Point,
        /// Radii, stored in the `width` and `height` fields of the file
        rx: f64,
        ry: f64,
        angle: f64,
    },
    Curve {
        color: Color,
        stroke_width: f64,
        points: Vec<Point>,
    },
}

impl Record {
    pub fn from_object(obj: &DrawingObject) -> Self {
        match &obj.shape {
            Shape::Rectangle(rect) => Record::Rectangle {
                color: rect.fill,
                origin: rect.origin(),
                width: rect.width,
                height: rect.height,
                angle: rect.rotation,
            },
            Shape::Ellipse(ellipse) => Record::Ellipse {
                color: ellipse.fill,
                center: ellipse.center,
                rx: ellipse.rx,
                ry: ellipse.ry,
                angle: ellipse.rotation,
            },
            Shape::Curve(curve) => Record::Curve {
                color: curve.stroke,
                stroke_width: curve.stroke_width,
                points: curve.points().to_vec(),
            },
        }
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Record::Rectangle {
                color,
                origin,
                width,
                height,
                angle,
            } => {
                field(out, RECTANGLE_TAG);
                write_color(out, *color);
                for value in [origin.x, origin.y, *width, *height, *angle] {
                    field(out, value);
                }
            }
            Record::Ellipse {
                color,
                center,
                rx,
                ry,
                angle,
            } => {
                field(out, ELLIPSE_TAG);
                write_color(out, *color);
                for value in [center.x, center.y, *rx, *ry, *angle] {
                    field(out, value);
                }
            }
            Record::Curve {
                color,
                stroke_width,
                points,
            } => {
                let first = points.first().copied().unwrap_or_default();
                let rest = points.get(1..).unwrap_or(&[]);
                field(out, CURVE_TAG);
                write_color(out, *color);
                field(out, first.x);
                field(out, first.y);
                field(out, stroke_width);
                field(out, rest.len() * 2);
                let coords = rest
                    .iter()
                    .flat_map(|p| [p.x, p.y])
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                field(out, coords);
            }
        }
    }
}

/// Appends one field on its own line.
fn field(out: &mut String, value: impl Display) {
    out.push_str(&value.to_string());
    out.push('\n');
}

fn write_color(out: &mut String, color: Color) {
    field(out, color.r);
    field(out, color.g);
    field(out, color.b);
}

/// Complete drawing file: the records of every object, bottom to top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingFile {
    pub records: Vec<Record>,
}

impl DrawingFile {
    /// Snapshot of the canvas in save (display) order.
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Self {
            records: canvas.saveables().map(Record::from_object).collect(),
        }
    }

    pub fn encode(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            record.write_to(&mut out);
        }
        out
    }

    /// Parses a whole token stream. Nothing is returned unless every record
    /// decodes.
    pub fn decode(input: &str) -> std::result::Result<Self, FormatError> {
        let mut reader = TokenReader::new(input);
        let mut records = Vec::new();
        while let Some(tag) = reader.next_tag() {
            let record = match tag {
                RECTANGLE_TAG => {
                    let color = reader.color()?;
                    let origin = Point::new(reader.number("x")?, reader.number("y")?);
                    Record::Rectangle {
                        color,
                        origin,
                        width: reader.number("width")?,
                        height: reader.number("height")?,
                        angle: reader.number("angle")?,
                    }
                }
                ELLIPSE_TAG => {
                    let color = reader.color()?;
                    let center = Point::new(reader.number("x")?, reader.number("y")?);
                    Record::Ellipse {
                        color,
                        center,
                        rx: reader.number("width")?,
                        ry: reader.number("height")?,
                        angle: reader.number("angle")?,
                    }
                }
                _ => {
                    let color = reader.color()?;
                    let first = Point::new(reader.number("x")?, reader.number("y")?);
                    let stroke_width = reader.number("stroke width")?;
                    let count = reader.coordinate_count()?;
                    let mut points = vec![first];
                    for _ in 0..count / 2 {
                        points.push(Point::new(
                            reader.number("coordinate")?,
                            reader.number("coordinate")?,
                        ));
                    }
                    Record::Curve {
                        color,
                        stroke_width,
                        points,
                    }
                }
            };
            records.push(record);
        }
        Ok(Self { records })
    }

    /// Replaces the canvas contents with these records. Ids of the rebuilt
    /// objects are returned in display order.
    pub fn restore(&self, canvas: &mut Canvas) -> Vec<u64> {
        canvas.clear();
        self.records
            .iter()
            .map(|record| restore_record(canvas, record))
            .collect()
    }

    /// Save the drawing to file in a single write.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.encode())?;
        Ok(())
    }

    /// Load and decode a drawing file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::decode(&content)?)
    }
}

fn restore_record(canvas: &mut Canvas, record: &Record) -> u64 {
    match record {
        Record::Rectangle {
            color,
            origin,
            width,
            height,
            angle,
        } => {
            let center = Point::new(origin.x + width / 2.0, origin.y + height / 2.0);
            let id = canvas.add_rectangle(center, *color);
            set_geometry(canvas, id, *width, *height, *angle);
            id
        }
        Record::Ellipse {
            color,
            center,
            rx,
            ry,
            angle,
        } => {
            let id = canvas.add_ellipse(*center, *color);
            set_geometry(canvas, id, *rx, *ry, *angle);
            id
        }
        Record::Curve {
            color,
            stroke_width,
            points,
        } => {
            let first = points.first().copied().unwrap_or_default();
            let id = canvas.add_curve(first, *color, *stroke_width);
            for point in points.iter().skip(1) {
                canvas.extend_curve(id, *point);
            }
            id
        }
    }
}

fn set_geometry(canvas: &mut Canvas, id: u64, width: f64, height: f64, angle: f64) {
    if let Some(obj) = canvas.get_shape_mut(id) {
        obj.shape.set_width(width);
        obj.shape.set_height(height);
        obj.shape.set_angle(angle);
    }
}

/// Whitespace tokenizer that tracks which record it is in for error reports.
struct TokenReader<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    record: usize,
    started: bool,
}

impl<'a> TokenReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
            record: 0,
            started: false,
        }
    }

    fn next_tag(&mut self) -> Option<&'a str> {
        let tag = self.tokens.next()?;
        if self.started {
            self.record += 1;
        }
        self.started = true;
        Some(tag)
    }

    fn token(&mut self, field: &'static str) -> std::result::Result<&'a str, FormatError> {
        self.tokens.next().ok_or(FormatError::UnexpectedEnd {
            record: self.record,
            field,
        })
    }

    fn number(&mut self, field: &'static str) -> std::result::Result<f64, FormatError> {
        let token = self.token(field)?;
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(FormatError::InvalidNumber {
                record: self.record,
                field,
                token: token.to_string(),
            }),
        }
    }

    fn integer(&mut self, field: &'static str) -> std::result::Result<i64, FormatError> {
        let token = self.token(field)?;
        token.parse::<i64>().map_err(|_| FormatError::InvalidNumber {
            record: self.record,
            field,
            token: token.to_string(),
        })
    }

    fn channel(&mut self, field: &'static str) -> std::result::Result<u8, FormatError> {
        let value = self.integer(field)?;
        u8::try_from(value).map_err(|_| FormatError::ChannelOutOfRange {
            record: self.record,
            field,
            value,
        })
    }

    fn color(&mut self) -> std::result::Result<Color, FormatError> {
        Ok(Color::rgb(
            self.channel("red")?,
            self.channel("green")?,
            self.channel("blue")?,
        ))
    }

    fn coordinate_count(&mut self) -> std::result::Result<usize, FormatError> {
        let count = self.integer("coordinate count")?;
        if count < 0 || count % 2 != 0 {
            return Err(FormatError::InvalidCoordinateCount {
                record: self.record,
                count,
            });
        }
        usize::try_from(count).map_err(|_| FormatError::InvalidCoordinateCount {
            record: self.record,
            count,
        })
    }
}
