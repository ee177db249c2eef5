//! Move operations for Canvas.

use vecedit_core::Point;

use super::Canvas;

impl Canvas {
    /// Begins a move session anchored at the cursor. No-op without a
    /// selection.
    pub fn start_move(&mut self, cursor: Point) {
        self.selection_manager.start_move(&mut self.shape_store, cursor);
    }

    /// Tracks the cursor during a move session. Silently ignored unless
    /// a session is active.
    pub fn update_move(&mut self, cursor: Point) {
        self.selection_manager.update_move(&mut self.shape_store, cursor);
    }

    /// Ends the move session. No-op without a selection.
    pub fn end_move(&mut self) {
        self.selection_manager.end_move(&mut self.shape_store);
    }

    /// Translates the selected shape by (dx, dy) outside of any move
    /// session (keyboard nudges). No-op without a selection.
    pub fn move_selected(&mut self, dx: i32, dy: i32) {
        let Some(id) = self.selection_manager.selected_id() else {
            return;
        };
        if let Some(obj) = self.shape_store.get_mut(id) {
            obj.shape.translate(Point::new(dx, dy));
        }
    }
}
