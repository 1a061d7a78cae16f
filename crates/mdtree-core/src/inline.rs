//! Inline tokenizer.
//!
//! Text is split in fixed passes, each pass only touching spans that are
//! still plain:
//!
//! 1. `**bold**`
//! 2. `_italic_`
//! 3. `` `code` ``
//! 4. `![alt](url)` images
//! 5. `[label](url)` links
//!
//! Images are extracted before links, so the `[...](...)` inside an image
//! is never read as a link. A delimiter that occurs an odd number of times
//! is an error; broken image or link syntax is left as plain text.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::TextSpan;
use crate::error::{Error, Result};
use crate::node::{HtmlNode, LeafNode};

/// `![alt](url)`: alt may not contain `]`, url may not contain `)`.
static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").unwrap());

/// `[label](url)`: label may not contain `]`, url may not contain `)`.
static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap());

/// Tokenize a run of text into typed spans.
///
/// ```rust
/// use mdtree_core::ast::TextSpan;
/// use mdtree_core::inline::text_to_spans;
///
/// let spans = text_to_spans("a **b** [c](d)").unwrap();
/// assert_eq!(
///     spans,
///     [
///         TextSpan::Plain("a "),
///         TextSpan::Bold("b"),
///         TextSpan::Plain(" "),
///         TextSpan::Link { label: "c", url: "d" },
///     ]
/// );
/// ```
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan<'_>>> {
    let spans = vec![TextSpan::Plain(text)];
    let spans = split_delimiter(spans, "**", TextSpan::Bold)?;
    let spans = split_delimiter(spans, "_", TextSpan::Italic)?;
    let spans = split_delimiter(spans, "`", TextSpan::Code)?;
    let spans = split_images(spans);
    let spans = split_links(spans);

    trace!("tokenized {} bytes into {} spans", text.len(), spans.len());
    Ok(spans)
}

/// Tokenize `text` and convert every span into a leaf node.
pub fn text_to_nodes(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(text_to_spans(text)?
        .into_iter()
        .map(|span| HtmlNode::Leaf(span.into()))
        .collect())
}

/// Split every plain span on `delimiter`.
///
/// Segments alternate between plain text and the delimited kind, so a
/// well-formed split always yields an odd number of segments. Empty
/// segments at either end (text starting or ending on a delimiter) are
/// dropped, as are empty plain segments between two delimited runs.
pub fn split_delimiter<'a>(
    spans: Vec<TextSpan<'a>>,
    delimiter: &'static str,
    delimited: fn(&'a str) -> TextSpan<'a>,
) -> Result<Vec<TextSpan<'a>>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let parts: Vec<&'a str> = text.split(delimiter).collect();
        if parts.len() == 1 {
            out.push(span);
            continue;
        }
        if parts.len() % 2 == 0 {
            return Err(Error::unpaired_delimiter(delimiter));
        }

        let last = parts.len() - 1;
        for (i, part) in parts.into_iter().enumerate() {
            let is_plain = i % 2 == 0;
            if part.is_empty() && (i == 0 || i == last || is_plain) {
                continue;
            }
            if is_plain {
                out.push(TextSpan::Plain(part));
            } else {
                out.push(delimited(part));
            }
        }
    }

    Ok(out)
}

/// Pull `![alt](url)` images out of plain spans.
pub fn split_images(spans: Vec<TextSpan<'_>>) -> Vec<TextSpan<'_>> {
    split_pattern(spans, &IMAGE_PATTERN, |alt, url| TextSpan::Image { alt, url })
}

/// Pull `[label](url)` links out of plain spans.
pub fn split_links(spans: Vec<TextSpan<'_>>) -> Vec<TextSpan<'_>> {
    split_pattern(spans, &LINK_PATTERN, |label, url| TextSpan::Link { label, url })
}

fn split_pattern<'a>(
    spans: Vec<TextSpan<'a>>,
    pattern: &Regex,
    matched: fn(&'a str, &'a str) -> TextSpan<'a>,
) -> Vec<TextSpan<'a>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut prev_end = 0;
        for caps in pattern.captures_iter(text) {
            let whole = caps.get_match();
            let (_, [first, second]) = caps.extract();

            if whole.start() > prev_end {
                out.push(TextSpan::Plain(&text[prev_end..whole.start()]));
            }
            out.push(matched(first, second));
            prev_end = whole.end();
        }

        if prev_end == 0 {
            out.push(span);
        } else if prev_end < text.len() {
            out.push(TextSpan::Plain(&text[prev_end..]));
        }
    }

    out
}

impl From<TextSpan<'_>> for LeafNode {
    fn from(span: TextSpan<'_>) -> Self {
        match span {
            TextSpan::Plain(text) => LeafNode::text(text),
            TextSpan::Bold(text) => LeafNode::new("b", text),
            TextSpan::Italic(text) => LeafNode::new("i", text),
            TextSpan::Code(text) => LeafNode::new("code", text),
            // an image without a source gets no attributes at all
            TextSpan::Image { url: "", .. } => LeafNode::new("img", ""),
            TextSpan::Image { alt, url } => LeafNode::new("img", "")
                .with_attr("src", url)
                .with_attr("alt", alt),
            TextSpan::Link { label, url } => LeafNode::new("a", label).with_attr("href", url),
        }
    }
}
