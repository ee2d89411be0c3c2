//! Grid cells and shape validation.
//!
//! A grid is a slice of rows, each row a `Vec<Cell>`. Rows outer, columns
//! inner. Grids are transient: callers build one per draw and the renderer
//! never retains it.

use crate::error::RenderError;

/// Index into a caller-registered color scheme.
pub type ColorCode = usize;

/// One labeled, colorable unit of grid content.
///
/// `content` must not contain newlines; each cell renders on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub content: String,
    pub color_code: ColorCode,
}

impl Cell {
    pub fn new(content: impl Into<String>, color_code: ColorCode) -> Self {
        Self {
            content: content.into(),
            color_code,
        }
    }

    /// Cell with the default color code 0.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, 0)
    }
}

/// Validate that `grid` is non-empty and rectangular, returning its column
/// count.
///
/// A grid with no rows, or whose first row has no columns, is `EmptyGrid`.
/// A later row with a different column count is `InvalidGridShape`.
pub fn column_count(grid: &[Vec<Cell>]) -> Result<usize, RenderError> {
    let expected = grid.first().map(Vec::len).ok_or(RenderError::EmptyGrid)?;
    if expected == 0 {
        return Err(RenderError::EmptyGrid);
    }
    for (row, cells) in grid.iter().enumerate().skip(1) {
        if cells.len() != expected {
            return Err(RenderError::InvalidGridShape {
                row,
                found: cells.len(),
                expected,
            });
        }
    }
    Ok(expected)
}
