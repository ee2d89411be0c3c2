//! Glyph configuration for borders, corners, and intersections.
//!
//! `GlyphSet` stores the general form: one glyph per boundary slot. The two
//! common configurations are presets over it: a fixed Unicode heavy-box set,
//! and a free-form three-string set (row, column, corner) that fills every
//! boundary slot with the same corner string.

/// Corner glyphs, one per grid corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corners {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

/// Intersection glyphs where separator rows meet cell borders.
///
/// `top`/`bottom` sit on the outer horizontal edges, `left`/`right` on the
/// outer vertical edges, `center` where interior boundaries cross.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersections {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub center: String,
}

/// Position of a separator row within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Top,
    Middle,
    Bottom,
}

/// The full set of border glyphs used to draw a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    /// Horizontal border fill, repeated `cell_width` times per column.
    pub horizontal: String,
    /// Vertical border between and around cells on value lines.
    pub vertical: String,
    pub corners: Corners,
    pub intersections: Intersections,
}

impl GlyphSet {
    /// Unicode heavy box-drawing preset.
    pub fn heavy_box() -> Self {
        Self {
            horizontal: "━".to_string(),
            vertical: "┃".to_string(),
            corners: Corners {
                top_left: "┏".to_string(),
                top_right: "┓".to_string(),
                bottom_left: "┗".to_string(),
                bottom_right: "┛".to_string(),
            },
            intersections: Intersections {
                top: "┳".to_string(),
                bottom: "┻".to_string(),
                left: "┣".to_string(),
                right: "┫".to_string(),
                center: "╋".to_string(),
            },
        }
    }

    /// Free-form preset from three separator strings.
    ///
    /// `row` fills horizontal borders, `col` draws vertical borders, and
    /// `corner` is used at every corner and intersection position.
    pub fn separators(
        row: impl Into<String>,
        col: impl Into<String>,
        corner: impl Into<String>,
    ) -> Self {
        let corner = corner.into();
        Self {
            horizontal: row.into(),
            vertical: col.into(),
            corners: Corners {
                top_left: corner.clone(),
                top_right: corner.clone(),
                bottom_left: corner.clone(),
                bottom_right: corner.clone(),
            },
            intersections: Intersections {
                top: corner.clone(),
                bottom: corner.clone(),
                left: corner.clone(),
                right: corner.clone(),
                center: corner,
            },
        }
    }

    /// Leading, inter-column, and trailing glyphs for a separator row at `at`.
    pub fn boundary(&self, at: Boundary) -> (&str, &str, &str) {
        match at {
            Boundary::Top => (
                &self.corners.top_left,
                &self.intersections.top,
                &self.corners.top_right,
            ),
            Boundary::Middle => (
                &self.intersections.left,
                &self.intersections.center,
                &self.intersections.right,
            ),
            Boundary::Bottom => (
                &self.corners.bottom_left,
                &self.intersections.bottom,
                &self.corners.bottom_right,
            ),
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::heavy_box()
    }
}

/// Immutable cell geometry plus glyphs for one `MatrixDisplay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixStyle {
    pub cell_width: usize,
    pub cell_height: usize,
    pub glyphs: GlyphSet,
}

impl MatrixStyle {
    /// Style with the heavy-box glyph preset.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(cell_width: usize, cell_height: usize) -> Self {
        Self::with_glyphs(cell_width, cell_height, GlyphSet::heavy_box())
    }

    /// Style with an explicit glyph set.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_glyphs(cell_width: usize, cell_height: usize, glyphs: GlyphSet) -> Self {
        assert!(
            cell_width > 0 && cell_height > 0,
            "cell dimensions must be positive"
        );
        Self {
            cell_width,
            cell_height,
            glyphs,
        }
    }
}
