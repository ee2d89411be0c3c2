//! MatrixDisplay: draws a grid of cells as a bordered table.
//!
//! A draw is a single stateless pass: one separator row above the first data
//! row, between every pair of data rows, and below the last, with each data
//! row rendered as `cell_height` lines of centered, color-scoped content.
//! The display holds only its immutable style; grids are borrowed per call.

use crate::align::centered;
use crate::error::RenderError;
use crate::grid::{column_count, Cell};
use crate::sink::{ColorScope, Sink};
use crate::style::{Boundary, MatrixStyle};

pub struct MatrixDisplay {
    style: MatrixStyle,
}

impl MatrixDisplay {
    pub fn new(style: MatrixStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &MatrixStyle {
        &self.style
    }

    /// Printed width hint: `(cell_width + 1) * columns`.
    ///
    /// Historical quirk, kept for caller compatibility: the count covers
    /// each cell plus its trailing border but not the leading border column,
    /// so actual output is one glyph wider than reported.
    pub fn width_in_chars(&self, grid: &[Vec<Cell>]) -> Result<usize, RenderError> {
        let columns = column_count(grid)?;
        Ok((self.style.cell_width + 1) * columns)
    }

    /// Draw the whole grid into `sink`.
    ///
    /// Fails before writing anything if the grid is empty or not
    /// rectangular. For `R` rows the output is exactly `R + 1` separator
    /// lines and `R * cell_height` value lines, and is byte-identical across
    /// repeated calls with the same grid and style. Content wider than
    /// `cell_width` is written unclipped and will push its row out of
    /// alignment.
    pub fn print<S: Sink>(&self, sink: &mut S, grid: &[Vec<Cell>]) -> Result<(), RenderError> {
        let columns = column_count(grid)?;
        self.separator_row(sink, columns, Boundary::Top)?;
        for (i, row) in grid.iter().enumerate() {
            self.value_block(sink, row)?;
            let at = if i + 1 == grid.len() {
                Boundary::Bottom
            } else {
                Boundary::Middle
            };
            self.separator_row(sink, columns, at)?;
        }
        sink.flush()
    }

    fn separator_row<S: Sink>(
        &self,
        sink: &mut S,
        columns: usize,
        at: Boundary,
    ) -> Result<(), RenderError> {
        let (left, inner, right) = self.style.glyphs.boundary(at);
        sink.write_str(left)?;
        for column in 0..columns {
            for _ in 0..self.style.cell_width {
                sink.write_str(&self.style.glyphs.horizontal)?;
            }
            sink.write_str(if column + 1 == columns { right } else { inner })?;
        }
        sink.end_line()
    }

    /// One data row: vertical padding around a single centered content line.
    fn value_block<S: Sink>(&self, sink: &mut S, row: &[Cell]) -> Result<(), RenderError> {
        let top_pad = (self.style.cell_height - 1) / 2;
        let bottom_pad = self.style.cell_height - 1 - top_pad;
        for _ in 0..top_pad {
            self.padding_line(sink, row.len())?;
        }
        self.content_line(sink, row)?;
        for _ in 0..bottom_pad {
            self.padding_line(sink, row.len())?;
        }
        Ok(())
    }

    /// Blank value line: same column structure, no content, no color.
    fn padding_line<S: Sink>(&self, sink: &mut S, columns: usize) -> Result<(), RenderError> {
        let blank = " ".repeat(self.style.cell_width);
        sink.write_str(&self.style.glyphs.vertical)?;
        for _ in 0..columns {
            sink.write_str(&blank)?;
            sink.write_str(&self.style.glyphs.vertical)?;
        }
        sink.end_line()
    }

    fn content_line<S: Sink>(&self, sink: &mut S, row: &[Cell]) -> Result<(), RenderError> {
        sink.write_str(&self.style.glyphs.vertical)?;
        for cell in row {
            let mut scope = ColorScope::enter(sink, cell.color_code)?;
            scope.write_str(&centered(&cell.content, self.style.cell_width))?;
            scope.finish()?;
            sink.write_str(&self.style.glyphs.vertical)?;
        }
        sink.end_line()
    }
}
