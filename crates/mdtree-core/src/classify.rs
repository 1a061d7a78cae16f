//! Block classification.
//!
//! A block's type is decided by its prefixes alone. Rules are tried in a
//! fixed order and the first match wins:
//!
//! | Rule | Type |
//! |------|------|
//! | first space-separated token is `#` to `######` | heading |
//! | first line opens a fence and last line starts with one | code |
//! | every line starts with `>` | quote |
//! | every line starts with `- ` | unordered list |
//! | line `i` starts with `{i + 1}. ` | ordered list |
//! | anything else | paragraph |

use crate::ast::BlockType;

/// Classify one trimmed block.
///
/// ```rust
/// use mdtree_core::ast::BlockType;
/// use mdtree_core::classify::classify;
///
/// assert_eq!(classify("## heading 2"), BlockType::Heading(2));
/// assert_eq!(classify("1. one\n2. two"), BlockType::OrderedList);
/// assert_eq!(classify("2. one\n3. two"), BlockType::Paragraph);
/// ```
pub fn classify(block: &str) -> BlockType {
    let first_token = block.split(' ').next().unwrap_or("");

    if let Some(level) = heading_level(first_token) {
        return BlockType::Heading(level);
    }

    let first_line = block.split('\n').next().unwrap_or("");
    let last_line = block.split('\n').next_back().unwrap_or("");

    if first_line.trim().starts_with("```") && last_line.starts_with("```") {
        return BlockType::Code;
    }

    if first_token.starts_with('>') && block.split('\n').all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if block.split('\n').all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }

    if block
        .split('\n')
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_marker(i + 1)))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Level of a heading marker token, if `token` is one.
pub fn heading_level(token: &str) -> Option<u8> {
    if (1..=6).contains(&token.len()) && token.bytes().all(|b| b == b'#') {
        Some(token.len() as u8)
    } else {
        None
    }
}

/// The marker that must open item `number` of an ordered list, e.g. `3. `.
pub fn ordered_marker(number: usize) -> String {
    format!("{}. ", number)
}
