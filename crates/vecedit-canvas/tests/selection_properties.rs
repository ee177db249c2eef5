//! Property tests for hit-testing and selection invariants.

use proptest::prelude::*;
use vecedit_canvas::Canvas;
use vecedit_core::{Color, Point, Rect, Size};

#[derive(Debug, Clone, Copy)]
enum Kind {
    Rectangle,
    Ellipse,
    Triangle,
}

fn arb_shape() -> impl Strategy<Value = (Kind, Point, Size)> {
    (
        prop_oneof![
            Just(Kind::Rectangle),
            Just(Kind::Ellipse),
            Just(Kind::Triangle)
        ],
        (-50i32..150, -50i32..150).prop_map(|(x, y)| Point::new(x, y)),
        (3i32..80, 3i32..80).prop_map(|(w, h)| Size::new(w, h)),
    )
}

fn add(canvas: &mut Canvas, kind: Kind, location: Point, size: Size) -> u64 {
    match kind {
        Kind::Rectangle => canvas.add_rectangle(location, size, Color::BLUE),
        Kind::Ellipse => canvas.add_ellipse(location, size, Color::BLUE),
        Kind::Triangle => canvas.add_triangle(location, size, Color::BLUE),
    }
}

proptest! {
    /// `select_at` returns the LAST-added shape whose bounding box
    /// contains the probe point, or none when no box does. Hit-testing
    /// is the box test for every variant, so the expectation is uniform.
    #[test]
    fn select_at_returns_last_added_container(
        shapes in proptest::collection::vec(arb_shape(), 0..12),
        px in -60i32..220,
        py in -60i32..220,
    ) {
        let probe = Point::new(px, py);
        let mut canvas = Canvas::new();
        let mut ids = Vec::new();
        for &(kind, location, size) in &shapes {
            ids.push(add(&mut canvas, kind, location, size));
        }

        let expected = shapes
            .iter()
            .zip(&ids)
            .rev()
            .find(|((_, location, size), _)| Rect::new(*location, *size).contains(probe))
            .map(|(_, &id)| id);

        prop_assert_eq!(canvas.select_at(probe), expected);
    }

    /// After any `select_at`, at most one shape carries the selected
    /// flag, and it is exactly the one reported.
    #[test]
    fn at_most_one_shape_is_flagged(
        shapes in proptest::collection::vec(arb_shape(), 0..12),
        px in -60i32..220,
        py in -60i32..220,
    ) {
        let mut canvas = Canvas::new();
        for &(kind, location, size) in &shapes {
            add(&mut canvas, kind, location, size);
        }

        let hit = canvas.select_at(Point::new(px, py));
        let flagged: Vec<u64> = canvas
            .shapes()
            .filter(|o| o.selected)
            .map(|o| o.id)
            .collect();

        match hit {
            Some(id) => prop_assert_eq!(flagged, vec![id]),
            None => prop_assert!(flagged.is_empty()),
        }
    }

    /// A start/update/end move session translates the shape by exactly
    /// the cursor delta, regardless of where the session was anchored.
    #[test]
    fn move_session_shifts_by_exact_delta(
        (kind, location, size) in arb_shape(),
        dx in -40i32..40,
        dy in -40i32..40,
    ) {
        let mut canvas = Canvas::new();
        add(&mut canvas, kind, location, size);

        // Anchor inside the bounding box so select_at hits.
        let anchor = location + Point::new(1, 1);
        prop_assert!(canvas.select_at(anchor).is_some());

        canvas.start_move(anchor);
        canvas.update_move(anchor + Point::new(dx, dy));
        canvas.end_move();

        let obj = canvas.selected_shape().unwrap();
        prop_assert_eq!(obj.shape.location(), location + Point::new(dx, dy));
        prop_assert_eq!(obj.move_offset, None);
    }
}
