//! Demo binary: renders a 2048-style board with the heavy-box preset.
//!
//! Registers a color scheme keyed by tile value, draws once, and waits for
//! any key before restoring the terminal.

use anyhow::Result;
use crossterm::event;
use crossterm::style::Color;

use matrix_display::{
    Cell, ColorScheme, MatrixDisplay, MatrixStyle, TerminalGuard, TerminalSink,
};

fn main() -> Result<()> {
    let guard = TerminalGuard::enter()?;

    let result = run();

    // Always try to restore terminal state.
    let _ = guard.restore();
    result
}

fn run() -> Result<()> {
    let mut sink = TerminalSink::new(tile_scheme());
    let display = MatrixDisplay::new(MatrixStyle::new(7, 3));

    display.print(&mut sink, &sample_board())?;

    // Wait for any input event before leaving.
    let _ = event::read()?;
    Ok(())
}

/// One background per power of two, code 0 for empty tiles.
fn tile_scheme() -> ColorScheme {
    ColorScheme::black_on(&[
        Color::DarkGrey,
        Color::White,
        Color::Grey,
        Color::Yellow,
        Color::DarkYellow,
        Color::Red,
        Color::DarkRed,
        Color::Magenta,
        Color::DarkMagenta,
        Color::Cyan,
        Color::Blue,
        Color::Green,
    ])
}

fn sample_board() -> Vec<Vec<Cell>> {
    let values: [[u32; 4]; 4] = [
        [2, 4, 8, 16],
        [32, 64, 128, 256],
        [512, 1024, 2048, 0],
        [0, 0, 4, 2],
    ];
    values
        .iter()
        .map(|row| row.iter().map(|&v| tile_cell(v)).collect())
        .collect()
}

fn tile_cell(value: u32) -> Cell {
    if value == 0 {
        Cell::plain("")
    } else {
        // 2 -> code 1, 4 -> code 2, ... 2048 -> code 11.
        Cell::new(value.to_string(), value.trailing_zeros() as usize)
    }
}
