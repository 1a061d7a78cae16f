//! Document builder.
//!
//! Splits a document into blocks, classifies each one and builds its
//! subtree. Every block becomes one child of a root `<div>`, in document
//! order. The first error ends the build; there is no per-block recovery.

use log::debug;

use crate::ast::{Block, BlockType};
use crate::classify::{classify, ordered_marker};
use crate::error::Result;
use crate::inline::text_to_nodes;
use crate::lexer::split_blocks;
use crate::node::{HtmlNode, LeafNode, ParentNode};

const FENCE: &str = "```";

/// Switches for behavior that differs from the plain block rules.
///
/// Both are off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Keep empty lines inside a fenced code block instead of letting them
    /// end the block.
    pub fence_aware_blocks: bool,
    /// Tokenize heading text for bold, italic, code, images and links.
    /// When off, heading text is placed in the heading verbatim.
    pub inline_headings: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fence_aware_blocks(mut self, enabled: bool) -> Self {
        self.fence_aware_blocks = enabled;
        self
    }

    pub fn with_inline_headings(mut self, enabled: bool) -> Self {
        self.inline_headings = enabled;
        self
    }
}

/// Markdown to HTML tree converter.
///
/// Holds no state besides its options; one parser can convert any number
/// of documents.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Options,
}

impl Parser {
    #[inline]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Split `markdown` into classified blocks.
    pub fn blocks<'a>(&self, markdown: &'a str) -> Vec<Block<'a>> {
        split_blocks(markdown, self.options.fence_aware_blocks)
            .into_iter()
            .map(|(text, span)| Block {
                text,
                span,
                kind: classify(text),
            })
            .collect()
    }

    /// Build the node tree for a whole document.
    pub fn to_html_node(&self, markdown: &str) -> Result<ParentNode> {
        let blocks = self.blocks(markdown);
        let mut root = ParentNode::new("div", Vec::with_capacity(blocks.len()));

        for (i, block) in blocks.iter().enumerate() {
            debug!(
                "block {} is {:?} at bytes {}..{}",
                i, block.kind, block.span.start, block.span.end
            );
            let node = self
                .block_to_node(block)
                .map_err(|e| e.in_block(block.span))?;
            root.push(node);
        }

        Ok(root)
    }

    /// Build the node tree and render it.
    pub fn render(&self, markdown: &str) -> Result<String> {
        self.to_html_node(markdown)?.to_html()
    }

    /// Build the subtree for one classified block.
    pub fn block_to_node(&self, block: &Block<'_>) -> Result<HtmlNode> {
        let text = block.text;
        let node = match block.kind {
            BlockType::Paragraph => paragraph_node(text)?,
            BlockType::Heading(level) => self.heading_node(text, level)?,
            BlockType::Code => code_node(text),
            BlockType::Quote => quote_node(text)?,
            BlockType::UnorderedList => list_node(text, BlockType::UnorderedList)?,
            BlockType::OrderedList => list_node(text, BlockType::OrderedList)?,
        };
        Ok(node)
    }

    fn heading_node(&self, block: &str, level: u8) -> Result<HtmlNode> {
        let tag = BlockType::Heading(level).tag();
        // everything after the first space, `#` token and that space removed
        let content = block.split_once(' ').map_or("", |(_, rest)| rest);

        if self.options.inline_headings {
            Ok(ParentNode::new(tag, text_to_nodes(content)?).into())
        } else {
            Ok(LeafNode::new(tag, content).into())
        }
    }
}

/// Reflow a paragraph onto one line and tokenize it.
fn paragraph_node(block: &str) -> Result<HtmlNode> {
    let text = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(ParentNode::new("p", text_to_nodes(&text)?).into())
}

/// `<pre><code>` holding the non-blank lines between the fences.
///
/// Text on the opening fence line counts as code.
fn code_node(block: &str) -> HtmlNode {
    let inner = block.split(FENCE).nth(1).unwrap_or("");

    let mut code = inner
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    code.push('\n');

    ParentNode::new("pre", vec![LeafNode::new("code", code).into()]).into()
}

/// A quote is one paragraph of text, placed directly in `<blockquote>`.
///
/// Bare `>` lines are dropped; the rest lose the `>` and at most one
/// space. Only one `>` is removed, so `>> a` keeps `> a`.
fn quote_node(block: &str) -> Result<HtmlNode> {
    let text = block
        .lines()
        .filter(|line| line.trim().chars().count() > 1)
        .map(|line| {
            let rest = line.strip_prefix('>').unwrap_or(line);
            rest.strip_prefix(' ').unwrap_or(rest)
        })
        .collect::<Vec<_>>()
        .join(" ");

    Ok(ParentNode::new("blockquote", text_to_nodes(&text)?).into())
}

/// One `<li>` per line, each tokenized on its own.
fn list_node(block: &str, kind: BlockType) -> Result<HtmlNode> {
    let mut items: Vec<HtmlNode> = Vec::new();

    for (i, line) in block.lines().enumerate() {
        let content = match kind {
            BlockType::OrderedList => line.strip_prefix(ordered_marker(i + 1).as_str()),
            _ => line.strip_prefix("- "),
        }
        .unwrap_or(line);

        items.push(ParentNode::new("li", text_to_nodes(content)?).into());
    }

    Ok(ParentNode::new(kind.tag(), items).into())
}

/// The trimmed, non-empty blocks of `markdown`, unclassified.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    split_blocks(markdown, false)
        .into_iter()
        .map(|(text, _)| text)
        .collect()
}
