//! Selection state and the drag-move session for canvas shapes.

use tracing::debug;
use vecedit_core::Point;

use crate::canvas::DrawingObject;
use crate::shape_store::ShapeStore;

/// Tracks which shape is selected and carries the move session.
///
/// Selection is held as a stable shape ID rather than an index or a
/// reference, so removing shapes can never leave it dangling.
///
/// # Invariant
///
/// Before and after every public operation: when `selected_id` is
/// `Some(id)`, the store contains `id`, that object's `selected` flag is
/// set, and no other object's flag is. A `move_offset` is present only on
/// the selected object and only between `start_move` and `end_move`.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<u64>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected shape, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Deselects all shapes and clears the selection cursor. Idempotent.
    ///
    /// Clearing the selection also ends any move session: a stale offset
    /// on an unselected shape would outlive its gesture.
    pub fn deselect_all(&mut self, store: &mut ShapeStore) {
        for obj in store.iter_mut() {
            obj.selected = false;
            obj.move_offset = None;
        }
        self.selected_id = None;
    }

    /// Selects the topmost shape at the given point.
    ///
    /// Clears any existing selection first, then scans draw order from
    /// the END toward the start so the most-recently-added shape wins
    /// ties. Returns `None` with the selection left cleared when no shape
    /// contains the point.
    pub fn select_at(&mut self, store: &mut ShapeStore, point: Point) -> Option<u64> {
        self.deselect_all(store);

        let hit = store
            .iter()
            .rev()
            .find(|obj| obj.contains_point(point))
            .map(|obj| obj.id);

        if let Some(id) = hit {
            if let Some(obj) = store.get_mut(id) {
                obj.selected = true;
            }
            self.selected_id = Some(id);
            debug!(id, x = point.x, y = point.y, "selected shape");
        }
        self.selected_id
    }

    /// Removes the selected shape from the store and clears the
    /// selection. No-op without a selection; calling it twice is safe.
    pub fn remove_selected(&mut self, store: &mut ShapeStore) -> Option<DrawingObject> {
        let id = self.selected_id.take()?;
        let removed = store.remove(id);
        if removed.is_some() {
            debug!(id, "removed selected shape");
        }
        removed
    }

    /// Begins a move session: records the cursor-to-origin vector on the
    /// selected shape so later updates track the cursor without drift.
    /// No-op without a selection.
    pub fn start_move(&mut self, store: &mut ShapeStore, cursor: Point) {
        let Some(id) = self.selected_id else { return };
        if let Some(obj) = store.get_mut(id) {
            obj.move_offset = Some(cursor - obj.shape.location());
        }
    }

    /// Repositions the selected shape so the captured offset keeps the
    /// cursor anchored to the same spot on it. Silently ignored unless a
    /// move session is active.
    pub fn update_move(&mut self, store: &mut ShapeStore, cursor: Point) {
        let Some(id) = self.selected_id else { return };
        if let Some(obj) = store.get_mut(id) {
            if let Some(offset) = obj.move_offset {
                obj.shape.set_location(cursor - offset);
            }
        }
    }

    /// Ends the move session, clearing the stored offset. No-op without
    /// a selection.
    pub fn end_move(&mut self, store: &mut ShapeStore) {
        let Some(id) = self.selected_id else { return };
        if let Some(obj) = store.get_mut(id) {
            obj.move_offset = None;
        }
    }
}
