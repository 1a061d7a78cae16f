//! Intermediate types produced between the Markdown text and the HTML tree.
//!
//! Both are transient: blocks and spans borrow from the document (or from a
//! reflowed line of it) and are dropped once the node tree is built.

use crate::span::Span;

/// A typed fragment of inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSpan<'a> {
    /// Text with no markup.
    Plain(&'a str),
    /// `**bold**`
    Bold(&'a str),
    /// `_italic_`
    Italic(&'a str),
    /// `` `code` ``
    Code(&'a str),
    /// `![alt](url)`
    Image { alt: &'a str, url: &'a str },
    /// `[label](url)`
    Link { label: &'a str, url: &'a str },
}

impl<'a> TextSpan<'a> {
    /// Whether later tokenizer passes may still split this span.
    #[inline]
    pub fn is_plain(&self) -> bool {
        matches!(self, TextSpan::Plain(_))
    }
}

/// Structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    /// Heading with its level, 1 through 6.
    Heading(u8),
    /// Fenced code, rendered verbatim.
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockType {
    /// The element a block of this type is wrapped in.
    ///
    /// Heading levels outside 1 through 6 are clamped, so a hand-built
    /// `Heading(0)` renders as `h1` and `Heading(9)` as `h6`.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "p",
            BlockType::Heading(0 | 1) => "h1",
            BlockType::Heading(2) => "h2",
            BlockType::Heading(3) => "h3",
            BlockType::Heading(4) => "h4",
            BlockType::Heading(5) => "h5",
            BlockType::Heading(6..) => "h6",
            BlockType::Code => "pre",
            BlockType::Quote => "blockquote",
            BlockType::UnorderedList => "ul",
            BlockType::OrderedList => "ol",
        }
    }

    /// Short lowercase name, used by tooling output.
    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading(_) => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
        }
    }
}

/// One blank-line-delimited chunk of a document, already classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Trimmed block text, borrowed from the document.
    pub text: &'a str,
    /// Where `text` sits in the document.
    pub span: Span,
    pub kind: BlockType,
}
