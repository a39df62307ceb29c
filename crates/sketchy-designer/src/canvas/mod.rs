//! Canvas for drawing and manipulating shapes.
//!
//! The canvas owns every drawable object in an arena keyed by id and keeps
//! two orderings over it:
//!
//! - the display stack, bottom to top, which is also the order objects are
//!   saved in (the "saveables")
//! - the shape order, which lists rectangles and ellipses only and drives
//!   the adjacency rule used when raising or lowering
//!
//! Every structural change goes through the canvas so both orderings and
//! the arena stay consistent.

mod operations;

use std::collections::HashMap;

use sketchy_core::{Color, Point, StateError};

use crate::model::{
    DesignCurve as Curve, DesignEllipse as Ellipse, DesignRectangle as Rectangle, Shape,
    ShapeType,
};

/// Tools selectable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingMode {
    Select,
    Pen,
    Rectangle,
    Ellipse,
}

impl DrawingMode {
    /// Modes whose drag gesture sizes the shape just created.
    pub fn creates_shape(&self) -> bool {
        matches!(self, DrawingMode::Rectangle | DrawingMode::Ellipse)
    }
}

/// Where an object sits in both orderings.
///
/// `shape_index` is `None` for curves, which are not part of the shape order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub shape_index: Option<usize>,
    pub display_index: usize,
}

/// Drawing object on the canvas that can be selected and manipulated.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub id: u64,
    pub shape: Shape,
    pub selected: bool,
}

impl DrawingObject {
    /// Creates a new drawing object.
    pub fn new(id: u64, shape: Shape) -> Self {
        Self {
            id,
            shape,
            selected: false,
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    pub fn is_curve(&self) -> bool {
        self.shape.is_curve()
    }
}

/// Canvas state managing shapes and drawing operations.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    objects: HashMap<u64, DrawingObject>,
    display_order: Vec<u64>,
    shape_order: Vec<u64>,
    selected_id: Option<u64>,
    mode: Option<DrawingMode>,
    next_id: u64,
}

impl Canvas {
    /// Creates a new, empty canvas with no tool chosen.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Sets the drawing mode.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = Some(mode);
    }

    /// Gets the current drawing mode, `None` until a tool has been chosen.
    pub fn mode(&self) -> Option<DrawingMode> {
        self.mode
    }

    /// Number of objects on the canvas, curves included.
    pub fn len(&self) -> usize {
        self.display_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display_order.is_empty()
    }

    /// Number of rectangles and ellipses on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shape_order.len()
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    /// Adds a zero-size rectangle centered on `at`.
    pub fn add_rectangle(&mut self, at: Point, fill: Color) -> u64 {
        self.add_shape(Shape::Rectangle(Rectangle::from_center(at, 0.0, 0.0, fill)))
    }

    /// Adds a zero-size ellipse centered on `at`.
    pub fn add_ellipse(&mut self, at: Point, fill: Color) -> u64 {
        self.add_shape(Shape::Ellipse(Ellipse::new(at, 0.0, 0.0, fill)))
    }

    /// Starts a curve at `start`.
    pub fn add_curve(&mut self, start: Point, stroke: Color, stroke_width: f64) -> u64 {
        self.add_shape(Shape::Curve(Curve::new(start, stroke, stroke_width)))
    }

    /// Adds a shape on top of the display stack (and at the end of the shape
    /// order unless it is a curve).
    pub fn add_shape(&mut self, shape: Shape) -> u64 {
        let id = self.generate_id();
        if !shape.is_curve() {
            self.shape_order.push(id);
        }
        self.display_order.push(id);
        self.objects.insert(id, DrawingObject::new(id, shape));
        tracing::trace!("Added object {} at display index {}", id, self.display_order.len() - 1);
        id
    }

    /// Gets a reference to an object by ID.
    pub fn get_shape(&self, id: u64) -> Option<&DrawingObject> {
        self.objects.get(&id)
    }

    /// Gets a mutable reference to an object by ID.
    pub fn get_shape_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.objects.get_mut(&id)
    }

    pub fn contains_id(&self, id: u64) -> bool {
        self.objects.contains_key(&id)
    }

    /// Appends a point to a curve. Returns `false` when `id` is not a curve
    /// on the canvas.
    pub fn extend_curve(&mut self, id: u64, point: Point) -> bool {
        match self.objects.get_mut(&id).and_then(|obj| obj.shape.as_curve_mut()) {
            Some(curve) => {
                curve.add_point(point);
                true
            }
            None => false,
        }
    }

    /// Position of `id` in the display stack.
    pub fn display_index(&self, id: u64) -> Option<usize> {
        self.display_order.iter().position(|&other| other == id)
    }

    /// Position of `id` in the shape order.
    pub fn shape_index(&self, id: u64) -> Option<usize> {
        self.shape_order.iter().position(|&other| other == id)
    }

    pub fn placement(&self, id: u64) -> Option<Placement> {
        Some(Placement {
            shape_index: self.shape_index(id),
            display_index: self.display_index(id)?,
        })
    }

    /// Ids in display order, bottom to top.
    pub fn display_ids(&self) -> &[u64] {
        &self.display_order
    }

    /// Shape ids in shape order.
    pub fn shape_ids(&self) -> &[u64] {
        &self.shape_order
    }

    /// Objects bottom to top with their display index, for rendering.
    pub fn display_items(&self) -> impl Iterator<Item = (usize, &DrawingObject)> + '_ {
        self.saveables().enumerate()
    }

    /// Every persistable object in save (= display) order.
    pub fn saveables(&self) -> impl Iterator<Item = &DrawingObject> + '_ {
        self.display_order
            .iter()
            .filter_map(move |id| self.objects.get(id))
    }

    /// Rectangles and ellipses in shape order.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> + '_ {
        self.shape_order
            .iter()
            .filter_map(move |id| self.objects.get(id))
    }

    /// Selects a shape, deselecting the previous one first. Curves and
    /// unknown ids are ignored and leave the selection unchanged.
    pub fn select(&mut self, id: u64) -> bool {
        match self.objects.get(&id) {
            Some(obj) if !obj.is_curve() => {}
            _ => return false,
        }
        self.deselect();
        if let Some(obj) = self.objects.get_mut(&id) {
            obj.selected = true;
        }
        self.selected_id = Some(id);
        true
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        if let Some(previous) = self.selected_id.take() {
            if let Some(obj) = self.objects.get_mut(&previous) {
                obj.selected = false;
            }
        }
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn selected(&self) -> Option<&DrawingObject> {
        self.selected_id.and_then(|id| self.objects.get(&id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut DrawingObject> {
        let id = self.selected_id?;
        self.objects.get_mut(&id)
    }

    /// Finds the topmost shape under `point`, scanning the display stack from
    /// the top. Each candidate is tested in its own rotated frame.
    pub fn hit_test(&self, point: Point) -> Option<u64> {
        self.display_order.iter().rev().copied().find(|id| {
            self.objects
                .get(id)
                .is_some_and(|obj| !obj.is_curve() && obj.shape.hit(point))
        })
    }

    /// Removes every object and the selection. The chosen tool is kept.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.display_order.clear();
        self.shape_order.clear();
        self.selected_id = None;
    }

    pub(crate) fn object_mut(&mut self, id: u64) -> Result<&mut DrawingObject, StateError> {
        self.objects
            .get_mut(&id)
            .ok_or(StateError::UnknownObject { id })
    }
}
