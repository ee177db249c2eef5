//! # VecEdit Canvas
//!
//! The drawing model and everything that manipulates it.
//!
//! ## Core Components
//!
//! - **Model**: the closed set of drawable shapes (rectangle, ellipse,
//!   triangle), each occupying an integer bounding box
//! - **ShapeStore**: ordered storage where insertion order is z-order
//! - **SelectionManager**: the single-selection cursor and the drag-move
//!   session
//! - **Canvas**: the facade the UI layer talks to
//! - **Renderer**: tiny-skia rasterization of the canvas into an image
//!   buffer, with selection and preview indicators
//! - **EditorState**: the tool/color/gesture state machine that turns raw
//!   pointer and keyboard events into canvas operations
//!
//! ## Architecture
//!
//! ```text
//! EditorState (tool, color, gesture phase)
//!   └── Canvas
//!         ├── ShapeStore (shapes, z-order)
//!         └── SelectionManager (selected id, move session)
//!
//! Renderer (Canvas or EditorState -> RgbaImage)
//! ```
//!
//! Everything is synchronous and single-threaded; operations run to
//! completion on the thread that delivers the input event.

pub mod canvas;
pub mod editor_state;
pub mod model;
pub mod renderer;
pub mod selection_manager;
pub mod shape_store;

pub use canvas::{Canvas, DrawingMode, DrawingObject};
pub use editor_state::EditorState;
pub use model::{Ellipse, Rectangle, Shape, ShapeType, Triangle};
pub use renderer::{render_canvas, render_editor};
pub use selection_manager::SelectionManager;
pub use shape_store::ShapeStore;
