//! Markdown-to-HTML conversion with chat-transcript block extensions.
//!
//! Plugs the extensions from `chatdown-extensions` into a complete pipeline:
//! a line-oriented block lexer offers each registered extension the chance to
//! claim the remaining source, unclaimed text falls through to
//! `pulldown-cmark`, and the resulting token stream is rendered to HTML.
//!
//! # Quick Start
//!
//! ```
//! use chatdown_renderer::MarkdownConverter;
//!
//! let converter = MarkdownConverter::new();
//! let html = converter.convert_html("<think>hmm</think>\n\n# Hello");
//! assert!(html.contains("<think>hmm</think>"));
//! assert!(html.contains("<h1>Hello</h1>"));
//! ```
//!
//! # Architecture
//!
//! - [`BlockLexer`]: drives extension recognition and implements the
//!   host-side `BlockTokenizer` re-entry point for recursive constructs
//! - [`MarkdownConverter`]: builder-style entry point mapping tokens to HTML

mod converter;
mod lexer;

pub use converter::MarkdownConverter;
pub use lexer::BlockLexer;
