//! Canvas type definitions: DrawingMode, DrawingObject.

use vecedit_core::{Color, Point, Rect};

use crate::model::{Shape, ShapeType};

/// Active tool for the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Select,
    Rectangle,
    Ellipse,
    Triangle,
}

/// A committed shape on the canvas together with its appearance and
/// selection state.
#[derive(Debug, Clone)]
pub struct DrawingObject {
    pub id: u64,
    pub name: String,
    pub shape: Shape,
    /// Set from the active tool color at creation and fixed afterwards.
    pub fill_color: Color,
    pub selected: bool,
    /// Cursor-to-origin vector captured at move start; `Some` only while
    /// a move session is active.
    pub move_offset: Option<Point>,
}

impl DrawingObject {
    /// Creates a new unselected drawing object.
    pub fn new(id: u64, shape: Shape, fill_color: Color) -> Self {
        let name = match shape.shape_type() {
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::Triangle => "Triangle",
        }
        .to_string();

        Self {
            id,
            name,
            shape,
            fill_color,
            selected: false,
            move_offset: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.shape.contains(point)
    }
}
