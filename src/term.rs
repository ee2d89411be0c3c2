//! Crossterm-backed terminal sink and environment scope.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::error::RenderError;
use crate::grid::ColorCode;
use crate::sink::Sink;

/// Caller-registered color pairs, indexed by `ColorCode`.
///
/// Register once, before the first draw. The renderer never range-checks
/// codes itself; an unregistered code surfaces from this layer as
/// `ColorNotRegistered`.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pairs: Vec<(Color, Color)>,
}

impl ColorScheme {
    /// Scheme from explicit (foreground, background) pairs.
    pub fn new(pairs: Vec<(Color, Color)>) -> Self {
        Self { pairs }
    }

    /// Black text over each given background, the way classic curses
    /// schemes register their pairs.
    pub fn black_on(backgrounds: &[Color]) -> Self {
        Self::new(backgrounds.iter().map(|&bg| (Color::Black, bg)).collect())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn pair(&self, code: ColorCode) -> Result<(Color, Color), RenderError> {
        self.pairs
            .get(code)
            .copied()
            .ok_or(RenderError::ColorNotRegistered {
                code,
                registered: self.pairs.len(),
            })
    }
}

/// `Sink` over stdout using queued crossterm commands.
///
/// Commands accumulate in the stdout buffer and reach the terminal on
/// `flush`; `MatrixDisplay::print` flushes once at the end of a draw.
/// Lines end with `\r\n` for raw mode.
pub struct TerminalSink {
    stdout: Stdout,
    scheme: ColorScheme,
}

impl TerminalSink {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            stdout: io::stdout(),
            scheme,
        }
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }
}

impl Sink for TerminalSink {
    fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
        self.stdout.queue(Print(s))?;
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), RenderError> {
        self.stdout.queue(Print("\r\n"))?;
        Ok(())
    }

    fn set_color(&mut self, code: ColorCode) -> Result<(), RenderError> {
        let (fg, bg) = self.scheme.pair(code)?;
        self.stdout.queue(SetForegroundColor(fg))?;
        self.stdout.queue(SetBackgroundColor(bg))?;
        self.stdout.queue(SetAttribute(Attribute::Bold))?;
        Ok(())
    }

    fn reset_color(&mut self, _code: ColorCode) -> Result<(), RenderError> {
        self.stdout.queue(SetAttribute(Attribute::NormalIntensity))?;
        self.stdout.queue(ResetColor)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Raw-mode + alternate-screen scope for the process lifetime.
///
/// Entering switches to the alternate screen, hides the cursor, and disables
/// line wrap. `restore` undoes all of it and reports failures; `Drop` covers
/// early exits best-effort.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self, RenderError> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.queue(terminal::EnterAlternateScreen)?;
        stdout.queue(cursor::Hide)?;
        stdout.queue(terminal::DisableLineWrap)?;
        stdout.flush()?;
        Ok(Self { restored: false })
    }

    /// Restore the terminal, propagating failures.
    pub fn restore(mut self) -> Result<(), RenderError> {
        self.restored = true;
        Self::teardown()
    }

    fn teardown() -> Result<(), RenderError> {
        let mut stdout = io::stdout();
        stdout.queue(ResetColor)?;
        stdout.queue(SetAttribute(Attribute::Reset))?;
        stdout.queue(terminal::EnableLineWrap)?;
        stdout.queue(cursor::Show)?;
        stdout.queue(terminal::LeaveAlternateScreen)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            let _ = Self::teardown();
        }
    }
}
