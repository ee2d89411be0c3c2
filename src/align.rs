//! Pure text alignment helpers.
//!
//! Widths are measured in characters (`chars().count()`), not bytes.
//! Content that already fills or overflows its field is returned unchanged;
//! nothing here clips, so oversized content can push a row out of alignment
//! in the caller's layout.

/// Pad `content` to exactly `width` characters with `offset` leading spaces.
///
/// Overflowing content (`len >= width`) passes through unchanged. Otherwise
/// the result is `offset` spaces, the content, then the trailing spaces
/// needed to reach `width`. An offset too large for the remaining space is
/// clamped so the result stays exactly `width` characters.
pub fn positioned(content: impl AsRef<str>, width: usize, offset: usize) -> String {
    let content = content.as_ref();
    let len = content.chars().count();
    if len >= width {
        return content.to_owned();
    }
    let offset = offset.min(width - len);
    let left = " ".repeat(offset);
    let right = " ".repeat(width - len - offset);
    let mut line = String::with_capacity(left.len() + content.len() + right.len());
    line.push_str(&left);
    line.push_str(content);
    line.push_str(&right);
    line
}

/// Content flush against the left edge of the field.
pub fn aligned_left(content: impl AsRef<str>, width: usize) -> String {
    positioned(content, width, 0)
}

/// Content flush against the right edge of the field.
pub fn aligned_right(content: impl AsRef<str>, width: usize) -> String {
    let len = content.as_ref().chars().count();
    positioned(content, width, width.saturating_sub(len))
}

/// Content centered in the field.
///
/// Odd padding biases one character to the left (floor division).
pub fn centered(content: impl AsRef<str>, width: usize) -> String {
    let len = content.as_ref().chars().count();
    positioned(content, width, width.saturating_sub(len) / 2)
}

/// Horizontal placement of cell content within its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Format `content` into a `width`-character field at this alignment.
    pub fn format(self, content: impl AsRef<str>, width: usize) -> String {
        match self {
            Alignment::Left => aligned_left(content, width),
            Alignment::Right => aligned_right(content, width),
            Alignment::Center => centered(content, width),
        }
    }
}
