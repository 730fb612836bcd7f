//! End-to-end conversion tests: raw transcript source through the block
//! lexer and out as HTML.

use chatdown_renderer::MarkdownConverter;
use pretty_assertions::assert_eq;

#[test]
fn test_markdown_passthrough() {
    let converter = MarkdownConverter::new();
    let html = converter.convert_html("# Title\n\nSome *emphasis* here.\n");
    assert_eq!(html, "<h1>Title</h1>\n<p>Some <em>emphasis</em> here.</p>\n");
}

#[test]
fn test_details_block_round_trip() {
    let converter = MarkdownConverter::new();
    let src = "<details>\n<summary>Click</summary>\nHidden text\n</details>";
    let html = converter.convert_html(src);
    assert_eq!(
        html,
        "<details >\n  <summary>Click</summary>\n  Hidden text\n  </details>"
    );
}

#[test]
fn test_details_attributes_preserved() {
    let converter = MarkdownConverter::new();
    let src = "<details open=\"true\" id=\"x\">\nBody\n</details>";
    let html = converter.convert_html(src);
    assert_eq!(
        html,
        "<details open=\"true\" id=\"x\">\n  \n  Body\n  </details>"
    );
}

#[test]
fn test_think_block_emitted_literally() {
    let converter = MarkdownConverter::new();
    let html = converter.convert_html("<think>let me see</think>");
    assert_eq!(html, "<think>let me see</think>");
}

#[test]
fn test_mixed_document() {
    let converter = MarkdownConverter::new();
    let src = "intro paragraph\n\n<think>weighing options</think>\n\n## Answer\n\n<details>\n<summary>Steps</summary>\n1. one\n</details>";
    let html = converter.convert_html(src);

    assert!(html.contains("<p>intro paragraph</p>"));
    assert!(html.contains("<think>weighing options</think>"));
    assert!(html.contains("<h2>Answer</h2>"));
    assert!(html.contains("<summary>Steps</summary>"));
}

#[test]
fn test_nested_details_kept_in_outer_body() {
    let converter = MarkdownConverter::new();
    let src = "<details>\nouter\n<details>\ninner\n</details>\n</details>";
    let html = converter.convert_html(src);
    // The whole nested span is one details token; the inner block stays in
    // the outer body verbatim.
    assert!(html.starts_with("<details >"));
    assert!(html.ends_with("</details>"));
    assert!(html.contains("inner"));
}

#[test]
fn test_unterminated_construct_falls_back_to_markdown() {
    let converter = MarkdownConverter::new();
    let html = converter.convert_html("<details>\nstill open\n");
    // Never recognized as a details block; pulldown-cmark handles the text.
    assert!(html.contains("still open"));
    assert!(!html.contains("<summary>"));
}

#[test]
fn test_nested_think_token_tree() {
    let converter = MarkdownConverter::new();
    let tokens = converter.block_tokens("<think>outer <think>inner</think> text</think>");
    assert_eq!(tokens.len(), 1);

    let chatdown_extensions::BlockToken::Think(outer) = &tokens[0] else {
        panic!("expected a think token");
    };
    assert_eq!(outer.text, "outer <think>inner</think> text");
    assert!(
        outer
            .tokens
            .iter()
            .any(|t| matches!(t, chatdown_extensions::BlockToken::Think(_)))
    );
}
