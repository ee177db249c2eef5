use anyhow::Context;
use tracing::info;

use vecedit::{init_logging, render_editor, Color, DrawingMode, EditorState, Point};

const FRAME_WIDTH: u32 = 480;
const FRAME_HEIGHT: u32 = 280;

/// Headless demo: drives the editor through the same pointer events a
/// window toolkit would deliver, then writes the rendered canvas to a
/// PNG in the working directory.
fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!(version = vecedit::VERSION, built = vecedit::BUILD_DATE, "starting vecedit");

    let mut editor = EditorState::new();

    // Drag out one shape of each kind.
    editor.set_mode(DrawingMode::Rectangle);
    editor.pointer_down(Point::new(40, 40));
    editor.pointer_move(Point::new(120, 100));
    editor.pointer_up(Point::new(200, 150));

    editor.set_mode(DrawingMode::Ellipse);
    editor.set_color(Color::rgb(200, 60, 60));
    editor.pointer_down(Point::new(140, 110));
    editor.pointer_up(Point::new(280, 220));

    editor.set_mode(DrawingMode::Triangle);
    editor.set_color(Color::rgb(60, 160, 90));
    editor.pointer_down(Point::new(310, 60));
    editor.pointer_up(Point::new(430, 200));

    // Select the ellipse where it overlaps the rectangle and drag it.
    editor.set_mode(DrawingMode::Select);
    editor.pointer_down(Point::new(180, 140));
    editor.pointer_move(Point::new(200, 160));
    editor.pointer_up(Point::new(200, 160));

    let frame = render_editor(&editor, FRAME_WIDTH, FRAME_HEIGHT)?;
    frame
        .save("vecedit-canvas.png")
        .context("saving rendered canvas")?;

    info!(
        shapes = editor.canvas().shape_count(),
        selected = ?editor.canvas().selected_id(),
        "wrote vecedit-canvas.png"
    );
    Ok(())
}
