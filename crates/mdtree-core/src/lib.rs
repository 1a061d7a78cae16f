//! # mdtree core
//!
//! Converts Markdown text into a tree of HTML nodes and renders the tree to
//! an HTML string.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = mdtree_core::render_markdown_to_html("# Title\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>");
//! ```
//!
//! ## Pipeline
//!
//! 1. [`lexer`] splits the document into blank-line-delimited blocks
//! 2. [`classify`] decides each block's type from its prefixes
//! 3. [`parser`] builds the subtree for each block
//! 4. [`inline`] tokenizes the text of every block except fenced code
//! 5. [`node`] renders the finished tree
//!
//! Any error aborts the whole document:
//!
//! ```rust
//! use mdtree_core::{render_markdown_to_html, ErrorKind};
//!
//! let err = render_markdown_to_html("some `unclosed code").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnpairedDelimiter);
//! ```
//!
//! ## Options
//!
//! [`Options`] switches on fence-aware block splitting and inline markup in
//! headings. Both are off by default.

pub mod ast;
pub mod classify;
pub mod error;
pub mod inline;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod span;

pub use ast::{Block, BlockType, TextSpan};
pub use error::{Error, ErrorKind, Result};
pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use parser::{markdown_to_blocks, Options, Parser};

/// Build the HTML node tree for a document with default options.
pub fn markdown_to_html_node(markdown: &str) -> Result<ParentNode> {
    Parser::default().to_html_node(markdown)
}

/// Render a document to an HTML string with default options.
pub fn render_markdown_to_html(markdown: &str) -> Result<String> {
    Parser::default().render(markdown)
}

/// The text of the first `# ` line, trimmed.
///
/// ```rust
/// assert_eq!(mdtree_core::extract_title("intro\n#  Hello  \n").unwrap(), "Hello");
/// ```
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::NoTitleFound)
}
