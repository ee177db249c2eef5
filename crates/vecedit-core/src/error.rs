//! Error handling for VecEdit.
//!
//! The shape model itself is total: moving with nothing selected,
//! removing with nothing selected, and selecting over empty canvas are
//! all silent no-ops rather than errors. The only fallible boundary is
//! rendering, where a degenerate target surface cannot be allocated.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// VecEdit error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Render target with a zero dimension.
    #[error("cannot allocate a {width}x{height} render surface")]
    Surface {
        /// Requested surface width in pixels.
        width: u32,
        /// Requested surface height in pixels.
        height: u32,
    },
}

/// Result alias used throughout VecEdit.
pub type Result<T> = std::result::Result<T, Error>;
