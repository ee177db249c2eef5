//! Canvas for drawing and manipulating shapes.

mod operations;
mod types;

pub use types::{DrawingMode, DrawingObject};

use tracing::debug;
use vecedit_core::{Color, Point, Size};

use crate::model::{Ellipse, Rectangle, Shape, Triangle};
use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;

/// Canvas state managing shapes and selection.
///
/// The canvas performs no validation on added shapes: callers are
/// expected to pre-filter degenerate sizes (the editor's gesture filter
/// does exactly that).
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    pub shape_store: ShapeStore,
    pub selection_manager: SelectionManager,
    mode: DrawingMode,
}

impl Canvas {
    /// Creates an empty canvas in select mode.
    pub fn new() -> Self {
        Self {
            shape_store: ShapeStore::new(),
            selection_manager: SelectionManager::new(),
            mode: DrawingMode::Select,
        }
    }

    /// Sets the active tool.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
    }

    /// Gets the active tool.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    /// Appends a shape at the top of the z-order.
    pub fn add_shape(&mut self, shape: Shape, fill_color: Color) -> u64 {
        let id = self.shape_store.generate_id();
        let object = DrawingObject::new(id, shape, fill_color);
        debug!(id, name = %object.name, "adding shape");
        self.shape_store.insert(object);
        id
    }

    /// Adds a rectangle to the canvas.
    pub fn add_rectangle(&mut self, location: Point, size: Size, fill_color: Color) -> u64 {
        self.add_shape(Shape::Rectangle(Rectangle::new(location, size)), fill_color)
    }

    /// Adds an ellipse to the canvas.
    pub fn add_ellipse(&mut self, location: Point, size: Size, fill_color: Color) -> u64 {
        self.add_shape(Shape::Ellipse(Ellipse::new(location, size)), fill_color)
    }

    /// Adds a triangle to the canvas.
    pub fn add_triangle(&mut self, location: Point, size: Size, fill_color: Color) -> u64 {
        self.add_shape(Shape::Triangle(Triangle::new(location, size)), fill_color)
    }

    /// Selects the topmost shape at the given point; clears the
    /// selection either way.
    pub fn select_at(&mut self, point: Point) -> Option<u64> {
        self.selection_manager.select_at(&mut self.shape_store, point)
    }

    /// Deselects whatever is selected. Idempotent.
    pub fn clear_selection(&mut self) {
        self.selection_manager.deselect_all(&mut self.shape_store);
    }

    /// Removes the selected shape, if any.
    pub fn remove_selected(&mut self) -> Option<DrawingObject> {
        self.selection_manager.remove_selected(&mut self.shape_store)
    }

    /// ID of the selected shape.
    pub fn selected_id(&self) -> Option<u64> {
        self.selection_manager.selected_id()
    }

    /// Read-only accessor for the selected shape.
    pub fn selected_shape(&self) -> Option<&DrawingObject> {
        let id = self.selection_manager.selected_id()?;
        self.shape_store.get(id)
    }

    /// Iterates shapes in draw order, back to front.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.shape_store.iter()
    }

    /// Gets a reference to a shape by ID.
    pub fn get_shape(&self, id: u64) -> Option<&DrawingObject> {
        self.shape_store.get(id)
    }

    /// Gets a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.shape_store.get_mut(id)
    }

    /// Clears all shapes and the selection.
    pub fn clear(&mut self) {
        self.shape_store.clear();
        self.selection_manager.deselect_all(&mut self.shape_store);
    }
}
