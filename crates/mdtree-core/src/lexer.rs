//! Line lexer and block splitter.
//!
//! The lexer walks the input one line at a time using `memchr` for newline
//! scanning. Blocks are runs of lines separated by empty lines; a line that
//! only holds spaces does not separate blocks.
//!
//! Lines and blocks borrow directly from the input.

use crate::span::Span;
use memchr::memchr;

const FENCE: &str = "```";

/// A single line from the input with its source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text, without the trailing `\n` or `\r\n`.
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Line<'a> {
    /// A separator line: nothing at all between the line breaks.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// Whether the line opens or closes a code fence.
    ///
    /// A line such as ```` ```code``` ```` that opens and closes on the same
    /// line does not count.
    #[inline]
    pub fn is_fence(&self) -> bool {
        let trimmed = self.trimmed();
        match trimmed.strip_prefix(FENCE) {
            Some(rest) => !rest.ends_with(FENCE),
            None => false,
        }
    }
}

/// Peek/consume access to the lines of a document.
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    peeked: Option<Line<'a>>,
}

impl<'a> Lexer<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            peeked: None,
        }
    }

    /// Peek at the next line without consuming it.
    #[inline]
    pub fn peek_line(&mut self) -> Option<&Line<'a>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line();
        }
        self.peeked.as_ref()
    }

    /// Consume and return the next line.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        if let Some(line) = self.peeked.take() {
            return Some(line);
        }
        self.read_line()
    }

    /// Skip separator lines and return how many were skipped.
    #[inline]
    pub fn skip_empty_lines(&mut self) -> usize {
        let mut count = 0;
        while let Some(line) = self.peek_line() {
            if !line.is_empty() {
                break;
            }
            self.next_line();
            count += 1;
        }
        count
    }

    fn read_line(&mut self) -> Option<Line<'a>> {
        let bytes = self.input.as_bytes();
        if self.offset >= bytes.len() {
            return None;
        }

        let start = self.offset;
        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };

        // CRLF input: the `\r` belongs to the line break, not the text
        let text_end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < bytes.len() { end + 1 } else { end };

        // `\n` and `\r` are ASCII, so both ends are char boundaries
        Some(Line {
            text: &self.input[start..text_end],
            span: Span::new(start, text_end),
        })
    }
}

/// Split a document into trimmed, non-empty blocks.
///
/// Each block comes with the span of its trimmed text. With `fence_aware`
/// set, empty lines between an opening and a closing fence stay inside the
/// block instead of ending it.
///
/// ```rust
/// use mdtree_core::lexer::split_blocks;
///
/// let blocks = split_blocks("# Title\n\n\n  Some text\nmore\n", false);
/// let texts: Vec<&str> = blocks.iter().map(|(text, _)| *text).collect();
/// assert_eq!(texts, ["# Title", "Some text\nmore"]);
/// ```
pub fn split_blocks(input: &str, fence_aware: bool) -> Vec<(&str, Span)> {
    let mut lexer = Lexer::new(input);
    let mut blocks = Vec::new();

    loop {
        lexer.skip_empty_lines();
        let first = match lexer.next_line() {
            Some(line) => line,
            None => break,
        };

        let mut in_fence = fence_aware && first.is_fence();
        let mut span = first.span;

        while let Some(line) = lexer.peek_line() {
            if line.is_empty() && !in_fence {
                break;
            }
            if fence_aware && line.is_fence() {
                in_fence = !in_fence;
            }
            span = span.merge(line.span);
            lexer.next_line();
        }

        if let Some(block) = trim_block(input, span) {
            blocks.push(block);
        }
    }

    blocks
}

fn trim_block(input: &str, raw: Span) -> Option<(&str, Span)> {
    let text = raw.slice(input);
    let leading = text.len() - text.trim_start().len();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let start = raw.start + leading;
    Some((trimmed, Span::new(start, start + trimmed.len())))
}
