//! Behavior and rendering constants shared across VecEdit.

use crate::color::Color;

/// A drag gesture must exceed this in BOTH dimensions (strictly greater)
/// or the shape is discarded before it reaches the canvas.
pub const MIN_SHAPE_DIMENSION: i32 = 2;

/// Default fill color applied to new shapes until the user picks another.
pub const DEFAULT_FILL: Color = Color::BLUE;

/// Canvas background fill.
pub const CANVAS_BACKGROUND: Color = Color::WHITE;

/// Dash pattern for the selected shape's outline, in pixels on/off.
pub const SELECTION_DASH: [f32; 2] = [2.0, 2.0];

/// Stroke width of the selection outline.
pub const SELECTION_STROKE_WIDTH: f32 = 1.0;

/// Color of the selection outline.
pub const SELECTION_OUTLINE: Color = Color::BLACK;

/// Alpha applied to the rubber-band preview while a shape is dragged out.
pub const PREVIEW_ALPHA: u8 = 128;
