//! Integration tests for the canvas: selection, z-order, move sessions,
//! and removal.

use vecedit_canvas::Canvas;
use vecedit_core::{Color, Point, Size};

fn canvas_with_rect() -> (Canvas, u64) {
    let mut canvas = Canvas::new();
    let id = canvas.add_rectangle(Point::new(0, 0), Size::new(10, 10), Color::BLUE);
    (canvas, id)
}

#[test]
fn select_at_hits_topmost_on_overlap() {
    let mut canvas = Canvas::new();
    let rect_id = canvas.add_rectangle(Point::new(10, 10), Size::new(50, 50), Color::BLUE);
    let ellipse_id = canvas.add_ellipse(Point::new(20, 20), Size::new(30, 30), Color::RED);

    // Both bounding boxes contain (25,25); the later-added ellipse wins.
    assert_eq!(canvas.select_at(Point::new(25, 25)), Some(ellipse_id));
    assert_eq!(canvas.selected_id(), Some(ellipse_id));

    // Only the rectangle contains (15,15).
    assert_eq!(canvas.select_at(Point::new(15, 15)), Some(rect_id));

    // Nothing contains (5,5); the previous selection is cleared.
    assert_eq!(canvas.select_at(Point::new(5, 5)), None);
    assert_eq!(canvas.selected_id(), None);
    assert!(canvas.shapes().all(|obj| !obj.selected));
}

#[test]
fn selection_flag_is_exclusive() {
    let mut canvas = Canvas::new();
    let a = canvas.add_rectangle(Point::new(0, 0), Size::new(20, 20), Color::BLUE);
    let b = canvas.add_rectangle(Point::new(0, 0), Size::new(20, 20), Color::RED);

    canvas.select_at(Point::new(5, 5));
    assert_eq!(canvas.selected_id(), Some(b));
    assert!(!canvas.get_shape(a).unwrap().selected);
    assert!(canvas.get_shape(b).unwrap().selected);
}

#[test]
fn move_session_same_point_is_identity() {
    let (mut canvas, _id) = canvas_with_rect();
    canvas.select_at(Point::new(5, 5));

    canvas.start_move(Point::new(5, 5));
    canvas.update_move(Point::new(5, 5));
    assert_eq!(canvas.selected_shape().unwrap().shape.location(), Point::new(0, 0));
}

#[test]
fn move_session_shifts_by_cursor_delta() {
    let (mut canvas, _id) = canvas_with_rect();
    canvas.select_at(Point::new(5, 5));

    canvas.start_move(Point::new(5, 5));
    canvas.update_move(Point::new(15, 15));
    assert_eq!(canvas.selected_shape().unwrap().shape.location(), Point::new(10, 10));

    canvas.end_move();
    let obj = canvas.selected_shape().unwrap();
    assert_eq!(obj.shape.location(), Point::new(10, 10));
    assert_eq!(obj.move_offset, None);
}

#[test]
fn move_session_tracks_without_drift() {
    let (mut canvas, _id) = canvas_with_rect();
    canvas.select_at(Point::new(7, 3));

    canvas.start_move(Point::new(7, 3));
    canvas.update_move(Point::new(20, 20));
    canvas.update_move(Point::new(30, 10));
    canvas.update_move(Point::new(7, 3));
    // Returning the cursor to its anchor returns the shape to its origin.
    assert_eq!(canvas.selected_shape().unwrap().shape.location(), Point::new(0, 0));
}

#[test]
fn update_move_without_start_is_ignored() {
    let (mut canvas, _id) = canvas_with_rect();
    canvas.select_at(Point::new(5, 5));

    canvas.update_move(Point::new(100, 100));
    assert_eq!(canvas.selected_shape().unwrap().shape.location(), Point::new(0, 0));
}

#[test]
fn move_operations_without_selection_are_noops() {
    let (mut canvas, _id) = canvas_with_rect();

    canvas.start_move(Point::new(5, 5));
    canvas.update_move(Point::new(50, 50));
    canvas.end_move();
    assert_eq!(canvas.get_shape(1).unwrap().shape.location(), Point::new(0, 0));
}

#[test]
fn remove_selected_removes_and_clears() {
    let mut canvas = Canvas::new();
    let a = canvas.add_rectangle(Point::new(0, 0), Size::new(10, 10), Color::BLUE);
    let b = canvas.add_rectangle(Point::new(20, 20), Size::new(10, 10), Color::RED);

    canvas.select_at(Point::new(5, 5));
    let removed = canvas.remove_selected().expect("a shape was selected");
    assert_eq!(removed.id, a);
    assert_eq!(canvas.shape_count(), 1);
    assert_eq!(canvas.selected_id(), None);

    // Second call is a no-op.
    assert!(canvas.remove_selected().is_none());
    assert_eq!(canvas.shape_count(), 1);
    assert!(canvas.get_shape(b).is_some());
}

#[test]
fn clear_selection_is_idempotent() {
    let (mut canvas, id) = canvas_with_rect();
    canvas.select_at(Point::new(5, 5));

    canvas.clear_selection();
    let after_once: Vec<bool> = canvas.shapes().map(|o| o.selected).collect();
    assert_eq!(canvas.selected_id(), None);

    canvas.clear_selection();
    let after_twice: Vec<bool> = canvas.shapes().map(|o| o.selected).collect();
    assert_eq!(after_once, after_twice);
    assert!(canvas.get_shape(id).is_some());
}

#[test]
fn selecting_elsewhere_ends_any_move_session() {
    let mut canvas = Canvas::new();
    canvas.add_rectangle(Point::new(0, 0), Size::new(10, 10), Color::BLUE);
    let b = canvas.add_rectangle(Point::new(50, 50), Size::new(10, 10), Color::RED);

    canvas.select_at(Point::new(5, 5));
    canvas.start_move(Point::new(5, 5));

    canvas.select_at(Point::new(55, 55));
    assert_eq!(canvas.selected_id(), Some(b));
    // The first shape's session did not survive the reselection.
    assert!(canvas.shapes().all(|o| o.move_offset.is_none() || o.id == b));
    assert_eq!(canvas.get_shape(1).unwrap().move_offset, None);
}

#[test]
fn fill_color_is_fixed_at_creation() {
    let mut canvas = Canvas::new();
    let id = canvas.add_triangle(Point::new(0, 0), Size::new(10, 10), Color::GREEN);
    assert_eq!(canvas.get_shape(id).unwrap().fill_color, Color::GREEN);
}
