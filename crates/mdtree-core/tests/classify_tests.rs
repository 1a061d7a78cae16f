//! Tests for block classification and block splitting

use mdtree_core::classify::{classify, heading_level, ordered_marker};
use mdtree_core::lexer::{split_blocks, Lexer};
use mdtree_core::span::Span;
use mdtree_core::{markdown_to_blocks, BlockType};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Classification
// ============================================================================

#[rstest]
#[case("\nsome paragraph\nwithout any special characters", BlockType::Paragraph)]
#[case("# heading 1", BlockType::Heading(1))]
#[case("## heading 2", BlockType::Heading(2))]
#[case("###### heading 6", BlockType::Heading(6))]
#[case("####### seven is too many", BlockType::Paragraph)]
#[case("#no space", BlockType::Paragraph)]
#[case("#", BlockType::Heading(1))]
#[case("```\ndef foo():\n    return \"bar\"\n```", BlockType::Code)]
#[case("```rust\nfn main() {}\n```", BlockType::Code)]
#[case("```", BlockType::Code)]
#[case("```\nnever closed", BlockType::Paragraph)]
#[case("> first quote\n> second quote", BlockType::Quote)]
#[case(">\n> after a bare marker", BlockType::Quote)]
#[case("> quote\nthen not", BlockType::Paragraph)]
#[case("- something\n- something else", BlockType::UnorderedList)]
#[case("- something\n-missing space", BlockType::Paragraph)]
#[case("1. First\n2. Second\n3. Third", BlockType::OrderedList)]
#[case("2. First\n2. Second\n4. Third", BlockType::Paragraph)]
#[case("2. Starts at two", BlockType::Paragraph)]
#[case("1. First\n3. Skips", BlockType::Paragraph)]
#[case("1. Mixed\n- markers", BlockType::Paragraph)]
#[case("01. Zero padded", BlockType::Paragraph)]
fn test_classify(#[case] block: &str, #[case] expected: BlockType) {
    assert_eq!(classify(block), expected);
    // a pure function of its input
    assert_eq!(classify(block), classify(block));
}

#[test]
fn test_heading_wins_over_other_rules() {
    assert_eq!(classify("# - not a list"), BlockType::Heading(1));
}

#[test]
fn test_ten_item_ordered_list() {
    let block = (1..=10)
        .map(|i| format!("{}. item {}", i, i))
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(classify(&block), BlockType::OrderedList);
}

#[test]
fn test_heading_level() {
    assert_eq!(heading_level("###"), Some(3));
    assert_eq!(heading_level(""), None);
    assert_eq!(heading_level("#a"), None);
    assert_eq!(heading_level("#######"), None);
}

#[test]
fn test_ordered_marker() {
    assert_eq!(ordered_marker(1), "1. ");
    assert_eq!(ordered_marker(12), "12. ");
}

#[rstest]
#[case(BlockType::Paragraph, "p")]
#[case(BlockType::Heading(1), "h1")]
#[case(BlockType::Heading(4), "h4")]
#[case(BlockType::Heading(6), "h6")]
#[case(BlockType::Heading(0), "h1")]
#[case(BlockType::Heading(9), "h6")]
#[case(BlockType::Code, "pre")]
#[case(BlockType::Quote, "blockquote")]
#[case(BlockType::UnorderedList, "ul")]
#[case(BlockType::OrderedList, "ol")]
fn test_block_type_tag(#[case] kind: BlockType, #[case] tag: &str) {
    assert_eq!(kind.tag(), tag);
}

// ============================================================================
// Block Splitting
// ============================================================================

#[test]
fn test_markdown_to_blocks() {
    let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
    ";
    assert_eq!(
        markdown_to_blocks(md),
        [
            "This is **bolded** paragraph",
            "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
            "- This is a list\n- with items",
        ]
    );
}

#[test]
fn test_many_empty_lines_are_one_separator() {
    assert_eq!(markdown_to_blocks("a\n\n\n\n\nb\n\n"), ["a", "b"]);
}

#[test]
fn test_whitespace_line_does_not_separate() {
    assert_eq!(markdown_to_blocks("a\n   \nb"), ["a\n   \nb"]);
}

#[test]
fn test_crlf_separators() {
    assert_eq!(markdown_to_blocks("a\r\n\r\nb\r\n"), ["a", "b"]);
}

#[test]
fn test_empty_document_has_no_blocks() {
    assert!(markdown_to_blocks("").is_empty());
    assert!(markdown_to_blocks("\n\n   \n").is_empty());
}

#[test]
fn test_block_spans_cover_trimmed_text() {
    let input = "# T\n\n  para\n";
    let blocks = split_blocks(input, false);
    assert_eq!(
        blocks,
        [("# T", Span::new(0, 3)), ("para", Span::new(7, 11))]
    );
    for (text, span) in blocks {
        assert_eq!(span.slice(input), text);
    }
}

#[test]
fn test_blank_line_ends_code_block_by_default() {
    let input = "```\na\n\nb\n```";
    let texts: Vec<&str> = split_blocks(input, false)
        .into_iter()
        .map(|(text, _)| text)
        .collect();
    assert_eq!(texts, ["```\na", "b\n```"]);
}

#[test]
fn test_fence_aware_keeps_code_block_together() {
    let input = "intro\n\n```\na\n\nb\n```\n\noutro";
    let texts: Vec<&str> = split_blocks(input, true)
        .into_iter()
        .map(|(text, _)| text)
        .collect();
    assert_eq!(texts, ["intro", "```\na\n\nb\n```", "outro"]);
}

#[test]
fn test_fence_aware_ignores_one_line_fences() {
    let input = "```inline```\n\nnext";
    let texts: Vec<&str> = split_blocks(input, true)
        .into_iter()
        .map(|(text, _)| text)
        .collect();
    assert_eq!(texts, ["```inline```", "next"]);
}

#[test]
fn test_lexer_peek_and_next() {
    let mut lexer = Lexer::new("one\n\ntwo");
    assert_eq!(lexer.peek_line().map(|l| l.text), Some("one"));
    assert_eq!(lexer.next_line().map(|l| l.text), Some("one"));
    assert_eq!(lexer.skip_empty_lines(), 1);
    let line = lexer.next_line().unwrap();
    assert_eq!(line.text, "two");
    assert_eq!(line.span, Span::new(5, 8));
    assert!(lexer.next_line().is_none());
}
