//! # VecEdit Core
//!
//! Fundamental types shared across VecEdit:
//! - Integer geometry primitives (`Point`, `Size`, `Rect`) in canvas
//!   pixel space
//! - RGBA colors and the default palette
//! - Behavior constants (minimum shape size, selection outline style)
//! - Error types for the rendering boundary
//!
//! The shape model and everything that manipulates it live in
//! `vecedit-canvas`; this crate has no dependencies beyond `thiserror`.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
