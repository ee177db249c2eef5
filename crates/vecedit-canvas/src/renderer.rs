//! Canvas renderer.
//!
//! Renders shapes to an image buffer for display in the UI using
//! tiny-skia for anti-aliased 2D rendering. Shapes are painted in draw
//! order, so later entries cover earlier ones; this agrees with the
//! hit-test priority, where the topmost shape wins ties. The selected
//! shape additionally gets a dashed outline along its own path, leaving
//! its stored geometry untouched.

use image::RgbaImage;
use tiny_skia::{FillRule, Paint, Pixmap, Stroke, StrokeDash, Transform};
use vecedit_core::{constants, Color, Error, Result};

use crate::canvas::{Canvas, DrawingObject};
use crate::editor_state::EditorState;
use crate::model::Shape;

fn to_skia(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Renders all canvas shapes onto a fresh background.
pub fn render_canvas(canvas: &Canvas, width: u32, height: u32) -> Result<RgbaImage> {
    let mut pixmap = new_surface(width, height)?;
    for obj in canvas.shapes() {
        draw_object(&mut pixmap, obj);
    }
    Ok(into_image(&pixmap))
}

/// Renders the editor's canvas plus the half-transparent preview of any
/// drag gesture in progress.
pub fn render_editor(editor: &EditorState, width: u32, height: u32) -> Result<RgbaImage> {
    let mut pixmap = new_surface(width, height)?;
    for obj in editor.canvas().shapes() {
        draw_object(&mut pixmap, obj);
    }
    if let Some((shape, color)) = editor.pending_shape() {
        fill_shape(&mut pixmap, &shape, color);
    }
    Ok(into_image(&pixmap))
}

fn new_surface(width: u32, height: u32) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(width, height).ok_or(Error::Surface { width, height })?;
    pixmap.fill(to_skia(constants::CANVAS_BACKGROUND));
    Ok(pixmap)
}

fn draw_object(pixmap: &mut Pixmap, obj: &DrawingObject) {
    fill_shape(pixmap, &obj.shape, obj.fill_color);
    if obj.selected {
        stroke_selection(pixmap, &obj.shape);
    }
}

fn fill_shape(pixmap: &mut Pixmap, shape: &Shape, color: Color) {
    let Some(path) = shape.path() else { return };
    let mut paint = Paint::default();
    paint.set_color(to_skia(color));
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

fn stroke_selection(pixmap: &mut Pixmap, shape: &Shape) {
    let Some(path) = shape.path() else { return };
    let mut paint = Paint::default();
    paint.set_color(to_skia(constants::SELECTION_OUTLINE));
    paint.anti_alias = true;
    let stroke = Stroke {
        width: constants::SELECTION_STROKE_WIDTH,
        dash: StrokeDash::new(constants::SELECTION_DASH.to_vec(), 0.0),
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

fn into_image(pixmap: &Pixmap) -> RgbaImage {
    // The background is opaque, so every composited pixel ends up with
    // alpha 255 and premultiplied equals straight RGBA.
    let data = pixmap.data();
    let width = pixmap.width();
    RgbaImage::from_fn(width, pixmap.height(), |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        image::Rgba([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]])
    })
}
