use crate::span::Span;
use thiserror::Error as ThisError;

/// Error kinds for categorizing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An inline delimiter was opened but never closed
    UnpairedDelimiter,
    /// A leaf node reached rendering without a value
    MissingValue,
    /// A parent node reached rendering without a tag
    MissingTag,
    /// A parent node reached rendering without a child list
    MissingChildren,
    /// No `# ` title line in the document
    NoTitleFound,
}

/// Everything that can abort a render.
///
/// There is no recovery: the first error ends the document and no partial
/// HTML is produced.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// `**`, `_` or `` ` `` occurs an odd number of times in one run of text.
    #[error("unpaired delimiter \"{delimiter}\"{}", describe_span(.span))]
    UnpairedDelimiter {
        delimiter: &'static str,
        /// Source span of the block containing the text, when known.
        span: Option<Span>,
    },

    #[error("leaf node {} has no value", describe_tag(.tag))]
    MissingValue { tag: Option<String> },

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },

    #[error("no title found: the document has no line starting with `# `")]
    NoTitleFound,
}

impl Error {
    /// Create an error for a delimiter that does not close.
    pub fn unpaired_delimiter(delimiter: &'static str) -> Self {
        Self::UnpairedDelimiter {
            delimiter,
            span: None,
        }
    }

    /// Attach the span of the block being processed.
    ///
    /// Errors that already carry a span, and errors that have no use for
    /// one, are returned unchanged.
    pub fn in_block(self, block: Span) -> Self {
        match self {
            Self::UnpairedDelimiter {
                delimiter,
                span: None,
            } => Self::UnpairedDelimiter {
                delimiter,
                span: Some(block),
            },
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnpairedDelimiter { .. } => ErrorKind::UnpairedDelimiter,
            Self::MissingValue { .. } => ErrorKind::MissingValue,
            Self::MissingTag => ErrorKind::MissingTag,
            Self::MissingChildren { .. } => ErrorKind::MissingChildren,
            Self::NoTitleFound => ErrorKind::NoTitleFound,
        }
    }
}

fn describe_span(span: &Option<Span>) -> String {
    match span {
        Some(span) => format!(" in block at bytes {}..{}", span.start, span.end),
        None => String::new(),
    }
}

fn describe_tag(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!("<{}>", tag),
        None => "(text)".to_string(),
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
