//! Think blocks.
//!
//! Recognizes `<think>` ... `</think>` spans whose interior is itself
//! markdown. The closing tag is found with the same depth-counting scanner
//! details blocks use, so nested `<think>` tags keep the outer span balanced;
//! the interior is then recursively re-tokenized through the host's block
//! tokenization, which is how nested think blocks become child tokens.

use crate::extension::{BlockExtension, BlockTokenizer};
use crate::scanner::find_matching_close;
use crate::token::{BlockToken, ThinkBlock};

const OPEN_TAG: &str = "<think>";
const CLOSE_TAG: &str = "</think>";

/// Block extension for `<think>` blocks.
pub struct ThinkExtension;

impl BlockExtension for ThinkExtension {
    fn name(&self) -> &'static str {
        "think"
    }

    fn start(&self, src: &str) -> Option<usize> {
        src.starts_with(OPEN_TAG).then_some(0)
    }

    fn tokenize(&self, src: &str, lexer: &dyn BlockTokenizer) -> Option<BlockToken> {
        if !src.starts_with(OPEN_TAG) {
            return None;
        }
        let end = find_matching_close(src, OPEN_TAG, CLOSE_TAG)?;

        let raw = &src[..end];
        let text = raw[OPEN_TAG.len()..end - CLOSE_TAG.len()].trim();

        Some(BlockToken::Think(ThinkBlock {
            raw: raw.to_owned(),
            text: text.to_owned(),
            tokens: lexer.block_tokens(text),
        }))
    }

    /// Re-emits the literal trimmed interior; child tokens are not
    /// re-serialized. Relies on nothing rewriting the content between
    /// tokenization and rendering.
    fn render(&self, token: &BlockToken) -> Option<String> {
        let BlockToken::Think(block) = token else {
            return None;
        };
        Some(format!("<think>{}</think>", block.text))
    }
}
