//! Interactive editor state.
//!
//! The tool, tool color, and pointer gesture phases live here, between
//! the window toolkit and the canvas. The canvas itself knows nothing of
//! tools or drawing modes beyond the active `DrawingMode` flag; the
//! implicit {idle, drawing, moving} state machine is this module's.

use tracing::debug;
use vecedit_core::constants::{DEFAULT_FILL, MIN_SHAPE_DIMENSION, PREVIEW_ALPHA};
use vecedit_core::{Color, Point, Rect};

use crate::canvas::{Canvas, DrawingMode};
use crate::model::{Ellipse, Rectangle, Shape, Triangle};

/// Pointer gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    /// Dragging out a new shape from the anchor point.
    Drawing { start: Point, current: Point },
    /// Dragging the selected shape.
    Moving,
}

/// Headless editor: owns the canvas plus the UI-side state (active tool,
/// tool color, gesture phase). A window toolkit feeds pointer and
/// keyboard events in and reads frames back out through the renderer.
#[derive(Debug, Clone)]
pub struct EditorState {
    canvas: Canvas,
    current_color: Color,
    gesture: Option<Gesture>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            current_color: DEFAULT_FILL,
            gesture: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Color applied to newly created shapes.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Sets the tool color for shapes created from now on; committed
    /// shapes keep the color they were created with.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Switches tools, abandoning any gesture in progress.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.canvas.set_mode(mode);
        self.gesture = None;
    }

    pub fn mode(&self) -> DrawingMode {
        self.canvas.mode()
    }

    /// Pointer pressed. In select mode this hit-tests and, on a hit,
    /// begins a move session; in a draw mode it anchors a new gesture.
    pub fn pointer_down(&mut self, p: Point) {
        match self.canvas.mode() {
            DrawingMode::Select => {
                if self.canvas.select_at(p).is_some() {
                    self.canvas.start_move(p);
                    self.gesture = Some(Gesture::Moving);
                }
            }
            _ => {
                self.gesture = Some(Gesture::Drawing {
                    start: p,
                    current: p,
                });
            }
        }
    }

    /// Pointer dragged.
    pub fn pointer_move(&mut self, p: Point) {
        match &mut self.gesture {
            Some(Gesture::Moving) => self.canvas.update_move(p),
            Some(Gesture::Drawing { current, .. }) => *current = p,
            None => {}
        }
    }

    /// Pointer released: ends a move session, or commits the drawn shape
    /// when the gesture exceeds the minimum size in both dimensions.
    pub fn pointer_up(&mut self, p: Point) {
        match self.gesture.take() {
            Some(Gesture::Moving) => self.canvas.end_move(),
            Some(Gesture::Drawing { start, .. }) => self.commit_gesture(start, p),
            None => {}
        }
    }

    /// Delete-key action: removes the selected shape, if any.
    pub fn delete_selected(&mut self) {
        self.canvas.remove_selected();
    }

    /// Half-transparent preview of the drag gesture in progress, for the
    /// renderer. `None` while idle, moving, or in select mode.
    pub fn pending_shape(&self) -> Option<(Shape, Color)> {
        let Some(Gesture::Drawing { start, current }) = self.gesture else {
            return None;
        };
        let shape = shape_for_mode(self.canvas.mode(), Rect::from_corners(start, current))?;
        Some((shape, self.current_color.with_alpha(PREVIEW_ALPHA)))
    }

    fn commit_gesture(&mut self, start: Point, end: Point) {
        let rect = Rect::from_corners(start, end);
        if rect.size.width <= MIN_SHAPE_DIMENSION || rect.size.height <= MIN_SHAPE_DIMENSION {
            debug!(
                width = rect.size.width,
                height = rect.size.height,
                "discarding degenerate gesture"
            );
            return;
        }
        if let Some(shape) = shape_for_mode(self.canvas.mode(), rect) {
            self.canvas.add_shape(shape, self.current_color);
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

fn shape_for_mode(mode: DrawingMode, rect: Rect) -> Option<Shape> {
    match mode {
        DrawingMode::Select => None,
        DrawingMode::Rectangle => Some(Shape::Rectangle(Rectangle::new(rect.location, rect.size))),
        DrawingMode::Ellipse => Some(Shape::Ellipse(Ellipse::new(rect.location, rect.size))),
        DrawingMode::Triangle => Some(Shape::Triangle(Triangle::new(rect.location, rect.size))),
    }
}
