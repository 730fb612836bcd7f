//! Block-level markdown extensions for chat transcripts.
//!
//! This crate provides two custom block constructs that the base markdown
//! grammar does not understand:
//!
//! - **Details** ([`DetailsExtension`]): a collapsible `<details>` ...
//!   `</details>` container with an optional `<summary>` line and
//!   `key="value"` attributes on the opening tag
//! - **Think** ([`ThinkExtension`]): a `<think>` ... `</think>` block whose
//!   interior is itself markdown and is recursively block-tokenized
//!
//! # Architecture
//!
//! Extensions implement the [`BlockExtension`] trait: a cheap `start` probe
//! that the host calls against every remaining source prefix, a `tokenize`
//! operation that consumes a prefix into a [`BlockToken`], and a `render`
//! operation that turns the token back into an HTML fragment. The host's own
//! block tokenization is injected through the [`BlockTokenizer`] trait so the
//! think extension can re-enter it for nested content without a global.
//!
//! Recognition never fails loudly: every operation returns `None` to mean
//! "not an instance of this construct, fall through to default handling".
//!
//! The one nontrivial piece is [`find_matching_close`], the depth-counting
//! scanner that locates the true closing tag of a possibly-nested construct
//! with plain substring probes (naive regular expressions cannot express
//! unbounded symmetric nesting).
//!
//! # Example
//!
//! ```
//! use chatdown_extensions::{BlockTokenizer, DetailsExtension, BlockExtension, BlockToken};
//!
//! struct NoopLexer;
//! impl BlockTokenizer for NoopLexer {
//!     fn block_tokens(&self, _text: &str) -> Vec<BlockToken> {
//!         Vec::new()
//!     }
//! }
//!
//! let ext = DetailsExtension;
//! let src = "<details>\n<summary>Click</summary>\nHidden\n</details>";
//! let token = ext.tokenize(src, &NoopLexer).unwrap();
//! match token {
//!     BlockToken::Details(block) => {
//!         assert_eq!(block.summary, "Click");
//!         assert_eq!(block.text, "Hidden");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

mod attrs;
mod details;
mod extension;
mod scanner;
mod think;
mod token;

pub use attrs::Attributes;
pub use details::DetailsExtension;
pub use extension::{BlockExtension, BlockTokenizer, ExtensionSet, chat_extensions};
pub use scanner::find_matching_close;
pub use think::ThinkExtension;
pub use token::{BlockToken, DetailsBlock, ThinkBlock};
