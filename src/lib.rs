//! Bordered text-grid rendering for character terminals.
//!
//! Draws a rectangular matrix of labeled, individually colored cells as a
//! bordered table, with configurable box-drawing glyphs and fixed per-cell
//! dimensions. Output goes through a [`Sink`]: a crossterm terminal backend
//! for interactive use, or a plain writer for capture and piping.
//!
//! ```
//! use matrix_display::{Cell, MatrixDisplay, MatrixStyle, PlainSink};
//!
//! let display = MatrixDisplay::new(MatrixStyle::new(3, 1));
//! let grid = vec![vec![Cell::plain("A"), Cell::plain("B")]];
//!
//! let mut sink = PlainSink::new(Vec::new());
//! display.print(&mut sink, &grid).unwrap();
//! let out = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(out, "┏━━━┳━━━┓\n┃ A ┃ B ┃\n┗━━━┻━━━┛\n");
//! ```

pub mod align;
pub mod display;
pub mod error;
pub mod grid;
pub mod sink;
pub mod style;
pub mod term;

pub use align::{aligned_left, aligned_right, centered, positioned, Alignment};
pub use display::MatrixDisplay;
pub use error::RenderError;
pub use grid::{Cell, ColorCode};
pub use sink::{ColorScope, PlainSink, Sink};
pub use style::{Boundary, Corners, GlyphSet, Intersections, MatrixStyle};
pub use term::{ColorScheme, TerminalGuard, TerminalSink};
