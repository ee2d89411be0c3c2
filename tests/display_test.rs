//! Black-box rendering scenarios against a capture sink.

use matrix_display::{
    Cell, ColorCode, GlyphSet, MatrixDisplay, MatrixStyle, PlainSink, RenderError, Sink,
};

fn render(display: &MatrixDisplay, grid: &[Vec<Cell>]) -> String {
    let mut sink = PlainSink::new(Vec::new());
    display.print(&mut sink, grid).expect("print");
    String::from_utf8(sink.into_inner()).expect("utf8")
}

#[test]
fn heavy_box_single_row() {
    let display = MatrixDisplay::new(MatrixStyle::new(3, 1));
    let grid = vec![vec![Cell::plain("A"), Cell::plain("B")]];
    assert_eq!(
        render(&display, &grid),
        "┏━━━┳━━━┓\n\
         ┃ A ┃ B ┃\n\
         ┗━━━┻━━━┛\n"
    );
}

#[test]
fn heavy_box_cell_height_three_pads_above_and_below() {
    let display = MatrixDisplay::new(MatrixStyle::new(3, 3));
    let grid = vec![vec![Cell::plain("A"), Cell::plain("B")]];
    assert_eq!(
        render(&display, &grid),
        "┏━━━┳━━━┓\n\
         ┃   ┃   ┃\n\
         ┃ A ┃ B ┃\n\
         ┃   ┃   ┃\n\
         ┗━━━┻━━━┛\n"
    );
}

#[test]
fn heavy_box_interior_boundary_uses_all_intersections() {
    let display = MatrixDisplay::new(MatrixStyle::new(3, 1));
    let grid = vec![
        vec![Cell::plain("A"), Cell::plain("B")],
        vec![Cell::plain("C"), Cell::plain("D")],
    ];
    assert_eq!(
        render(&display, &grid),
        "┏━━━┳━━━┓\n\
         ┃ A ┃ B ┃\n\
         ┣━━━╋━━━┫\n\
         ┃ C ┃ D ┃\n\
         ┗━━━┻━━━┛\n"
    );
}

#[test]
fn separator_preset_uses_corner_string_at_every_boundary() {
    let style = MatrixStyle::with_glyphs(3, 1, GlyphSet::separators("-", "|", "+"));
    let display = MatrixDisplay::new(style);
    let grid = vec![vec![Cell::plain("A")], vec![Cell::plain("B")]];
    assert_eq!(
        render(&display, &grid),
        "+---+\n\
         | A |\n\
         +---+\n\
         | B |\n\
         +---+\n"
    );
}

#[test]
fn line_counts_match_rows_and_cell_height() {
    let display = MatrixDisplay::new(MatrixStyle::new(4, 2));
    let grid: Vec<Vec<Cell>> = (0..3)
        .map(|r| (0..2).map(|c| Cell::plain(format!("{r}{c}"))).collect())
        .collect();
    let out = render(&display, &grid);

    let lines: Vec<&str> = out.lines().collect();
    // R + 1 separators plus R * cell_height value lines.
    assert_eq!(lines.len(), 4 + 3 * 2);
    let separators = lines
        .iter()
        .filter(|l| l.starts_with('┏') || l.starts_with('┣') || l.starts_with('┗'))
        .count();
    assert_eq!(separators, 4);
    let value_lines = lines.iter().filter(|l| l.starts_with('┃')).count();
    assert_eq!(value_lines, 6);
}

#[test]
fn repeated_draws_are_byte_identical() {
    let display = MatrixDisplay::new(MatrixStyle::new(5, 2));
    let grid = vec![
        vec![Cell::new("2", 1), Cell::new("4", 2)],
        vec![Cell::plain(""), Cell::new("16", 4)],
    ];
    assert_eq!(render(&display, &grid), render(&display, &grid));
}

#[test]
fn ragged_grid_fails_before_any_output() {
    let display = MatrixDisplay::new(MatrixStyle::new(3, 1));
    let grid = vec![
        vec![Cell::plain("A")],
        vec![Cell::plain("B"), Cell::plain("C")],
    ];
    let mut sink = PlainSink::new(Vec::new());
    let err = display.print(&mut sink, &grid).unwrap_err();
    assert!(matches!(err, RenderError::InvalidGridShape { row: 1, .. }));
    assert!(sink.into_inner().is_empty());
}

#[test]
fn empty_grid_fails_before_any_output() {
    let display = MatrixDisplay::new(MatrixStyle::new(3, 1));
    let mut sink = PlainSink::new(Vec::new());
    let err = display.print(&mut sink, &[]).unwrap_err();
    assert!(matches!(err, RenderError::EmptyGrid));
    assert!(sink.into_inner().is_empty());
}

/// Sink that records attribute events alongside text, for asserting where
/// color scopes open and close.
#[derive(Default)]
struct TraceSink {
    events: Vec<String>,
}

impl Sink for TraceSink {
    fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
        self.events.push(format!("text:{s}"));
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), RenderError> {
        self.events.push("eol".to_string());
        Ok(())
    }

    fn set_color(&mut self, code: ColorCode) -> Result<(), RenderError> {
        self.events.push(format!("set:{code}"));
        Ok(())
    }

    fn reset_color(&mut self, code: ColorCode) -> Result<(), RenderError> {
        self.events.push(format!("reset:{code}"));
        Ok(())
    }
}

#[test]
fn content_cells_are_color_scoped_in_order() {
    let display = MatrixDisplay::new(MatrixStyle::new(3, 1));
    let grid = vec![vec![Cell::new("A", 2), Cell::new("B", 5)]];
    let mut sink = TraceSink::default();
    display.print(&mut sink, &grid).unwrap();

    let attrs: Vec<&str> = sink
        .events
        .iter()
        .filter(|e| e.starts_with("set") || e.starts_with("reset"))
        .map(String::as_str)
        .collect();
    assert_eq!(attrs, ["set:2", "reset:2", "set:5", "reset:5"]);

    // The colored text sits strictly between its set and reset.
    let set = sink.events.iter().position(|e| e == "set:2").unwrap();
    assert_eq!(sink.events[set + 1], "text: A ");
    assert_eq!(sink.events[set + 2], "reset:2");
}

#[test]
fn separator_and_padding_lines_carry_no_color() {
    let display = MatrixDisplay::new(MatrixStyle::new(3, 3));
    let grid = vec![vec![Cell::new("A", 1)]];
    let mut sink = TraceSink::default();
    display.print(&mut sink, &grid).unwrap();

    // One scope for the single content cell, nothing else.
    let sets = sink.events.iter().filter(|e| e.starts_with("set")).count();
    assert_eq!(sets, 1);
}

#[test]
fn width_hint_counts_cells_and_trailing_borders() {
    let display = MatrixDisplay::new(MatrixStyle::new(3, 1));
    let grid = vec![vec![Cell::plain("A"), Cell::plain("B"), Cell::plain("C")]];
    assert_eq!(display.width_in_chars(&grid).unwrap(), 12);
}
