//! Render failure types.

use std::io;

use thiserror::Error;

/// Failures surfaced by a single draw.
///
/// Shape violations are detected before any output is written. I/O and
/// color-lookup failures can occur mid-draw; output already flushed stays
/// on screen, there is no rollback.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("grid must contain at least one row and one column")]
    EmptyGrid,

    #[error("grid is not rectangular: row {row} has {found} columns, expected {expected}")]
    InvalidGridShape {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("color code {code} is not registered (scheme has {registered} entries)")]
    ColorNotRegistered { code: usize, registered: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}
