//! Segmenter: cuts the cheat database into blocks at `_S` lines.

use crate::config::START_MARKER;
use crate::types::Block;

/// Whether `line` opens a new block.
///
/// A start line begins with the marker once leading whitespace is removed.
#[must_use]
pub fn is_start_line(line: &str) -> bool {
    line.trim_start().starts_with(START_MARKER)
}

/// Lazy iterator over the blocks of a cheat database.
///
/// Text before the first start line is skipped. Each block runs up to, but
/// not including, the next start line, so every block is an exact slice of
/// the input.
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    input: &'a str,
    /// Byte offset of the next unread start line, if any.
    next_start: Option<usize>,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            next_start: find_start_line(input, 0),
        }
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start?;

        // The block's own header line never ends it; search from the line after.
        let after_header = line_end(self.input, start);
        let end = match find_start_line(self.input, after_header) {
            Some(next) => {
                self.next_start = Some(next);
                next
            }
            None => {
                self.next_start = None;
                self.input.len()
            }
        };

        Some(Block::new(start, &self.input[start..end]))
    }
}

/// Split `input` into blocks.
pub fn segment(input: &str) -> Segmenter<'_> {
    Segmenter::new(input)
}

/// Split the first line off `text`.
///
/// `\r\n`, `\n` and a lone `\r` all end a line. Returns the line without
/// its terminator and the byte length of the line with it.
pub(crate) fn split_first_line(text: &str) -> (&str, usize) {
    match text.find(['\r', '\n']) {
        Some(pos) if text[pos..].starts_with("\r\n") => (&text[..pos], pos + 2),
        Some(pos) => (&text[..pos], pos + 1),
        None => (text, text.len()),
    }
}

/// Byte offset just past the line starting at `from` (terminator included).
fn line_end(input: &str, from: usize) -> usize {
    from + split_first_line(&input[from..]).1
}

/// Offset of the first start line at or after `from`.
///
/// `from` must be the beginning of a line.
fn find_start_line(input: &str, from: usize) -> Option<usize> {
    let mut offset = from;
    while offset < input.len() {
        let (line, len) = split_first_line(&input[offset..]);
        if is_start_line(line) {
            return Some(offset);
        }
        offset += len;
    }
    None
}
