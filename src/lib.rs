//! # VecEdit
//!
//! A small vector-drawing tool: rectangles, ellipses, and triangles on
//! an in-memory canvas, with single selection, drag-to-move, delete, and
//! per-shape fill colors. The drawing exists only for the session; there
//! is no persistence and no undo.
//!
//! ## Architecture
//!
//! VecEdit is organized as a workspace:
//!
//! 1. **vecedit-core** - geometry, colors, constants, errors
//! 2. **vecedit-canvas** - shape model, store, selection, move sessions,
//!    renderer, and the headless editor state
//! 3. **vecedit** - this crate: re-exports plus the demo binary
//!
//! Everything is synchronous and single-threaded; canvas operations run
//! to completion on the thread that delivers the input event.

pub use vecedit_canvas as canvas;

pub use vecedit_core::{constants, Color, Error, Point, Rect, Result, Size};

pub use vecedit_canvas::{
    render_canvas, render_editor, Canvas, DrawingMode, DrawingObject, EditorState, Ellipse,
    Rectangle, SelectionManager, Shape, ShapeStore, ShapeType, Triangle,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
