//! Output and attribute capabilities consumed by the renderer.
//!
//! The renderer never talks to a terminal directly; it drives a `Sink`.
//! `TerminalSink` (in `term`) implements it over crossterm, `PlainSink`
//! implements it over any `io::Write` with attributes discarded.

use std::io::Write;

use crate::error::RenderError;
use crate::grid::ColorCode;

/// Character output plus global attribute control.
///
/// Attribute state is global to the underlying stream: `set_color` and
/// `reset_color` are strictly paired and never overlap. Use `ColorScope`
/// rather than calling them directly.
pub trait Sink {
    fn write_str(&mut self, s: &str) -> Result<(), RenderError>;

    fn end_line(&mut self) -> Result<(), RenderError>;

    /// Activate the color pair for `code` plus bold emphasis.
    fn set_color(&mut self, code: ColorCode) -> Result<(), RenderError>;

    /// Deactivate bold then the color pair, in reverse activation order.
    fn reset_color(&mut self, code: ColorCode) -> Result<(), RenderError>;

    fn flush(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Scoped color activation.
///
/// Activates color + bold on entry and deactivates on exit, on every exit
/// path. The happy path should call `finish`, which consumes the scope and
/// propagates deactivation failures; `Drop` covers early exits and can only
/// release best-effort. Scopes do not nest: attribute state is global, so at
/// most one scope may be live per sink.
pub struct ColorScope<'a, S: Sink + ?Sized> {
    sink: &'a mut S,
    code: ColorCode,
    armed: bool,
}

impl<'a, S: Sink + ?Sized> ColorScope<'a, S> {
    pub fn enter(sink: &'a mut S, code: ColorCode) -> Result<Self, RenderError> {
        sink.set_color(code)?;
        Ok(Self {
            sink,
            code,
            armed: true,
        })
    }

    /// Write text inside the scope.
    pub fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
        self.sink.write_str(s)
    }

    /// Release the scope, propagating the deactivation result.
    pub fn finish(mut self) -> Result<(), RenderError> {
        self.armed = false;
        self.sink.reset_color(self.code)
    }
}

impl<S: Sink + ?Sized> Drop for ColorScope<'_, S> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.sink.reset_color(self.code);
        }
    }
}

/// A sink over any `io::Write` that discards color attributes.
///
/// Lines end with `\n`. Useful for piping grid output to a file or buffer,
/// and as the capture sink in tests.
pub struct PlainSink<W: Write> {
    out: W,
}

impl<W: Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for PlainSink<W> {
    fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
        self.out.write_all(s.as_bytes())?;
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), RenderError> {
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn set_color(&mut self, _code: ColorCode) -> Result<(), RenderError> {
        Ok(())
    }

    fn reset_color(&mut self, _code: ColorCode) -> Result<(), RenderError> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        self.out.flush()?;
        Ok(())
    }
}
