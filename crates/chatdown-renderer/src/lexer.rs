//! Block lexer.
//!
//! Walks the source offering each registered extension the chance to claim
//! the remaining prefix; unclaimed text accumulates into plain markdown runs
//! for the host engine. Since every construct opens with a `<` tag, the
//! cursor jumps between `<` candidates rather than probing every byte.

use chatdown_extensions::{BlockToken, BlockTokenizer, ExtensionSet};

/// Drives extension recognition over raw source text.
///
/// Holds no state of its own beyond the extension set; tokenization is a pure
/// function of the input, which is what lets think blocks re-enter
/// [`block_tokens`](BlockTokenizer::block_tokens) recursively through the
/// `BlockTokenizer` impl.
pub struct BlockLexer<'a> {
    extensions: &'a ExtensionSet,
}

impl<'a> BlockLexer<'a> {
    /// Create a lexer over the given extension set.
    #[must_use]
    pub fn new(extensions: &'a ExtensionSet) -> Self {
        Self { extensions }
    }

    /// Offer the remaining source to each extension.
    ///
    /// Extensions whose `start` probe claims the prefix get the first
    /// tokenize attempt; the rest are still attempted afterwards, since a
    /// tokenizer may accept more than its probe admits (an attributed
    /// `<details open="true">` opening). A tokenize failure falls through.
    fn claim(&self, rest: &str) -> Option<BlockToken> {
        for ext in self.extensions.iter() {
            if ext.start(rest).is_some()
                && let Some(token) = ext.tokenize(rest, self)
            {
                return Some(token);
            }
        }
        for ext in self.extensions.iter() {
            if ext.start(rest).is_none()
                && let Some(token) = ext.tokenize(rest, self)
            {
                return Some(token);
            }
        }
        None
    }
}

impl BlockTokenizer for BlockLexer<'_> {
    fn block_tokens(&self, text: &str) -> Vec<BlockToken> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut plain_start = 0;

        while pos < text.len() {
            let rest = &text[pos..];
            if let Some(token) = self.claim(rest) {
                tracing::debug!(
                    "{} extension claimed {} bytes at offset {pos}",
                    token.name(),
                    token.raw().len()
                );
                if plain_start < pos {
                    tokens.push(BlockToken::Markdown(text[plain_start..pos].to_owned()));
                }
                pos += token.raw().len();
                plain_start = pos;
                tokens.push(token);
            } else {
                // Unclaimed: skip ahead to the next `<` that could open a
                // construct, accumulating plain text along the way.
                let skip = usize::from(rest.starts_with('<'));
                pos += rest[skip..].find('<').map_or(rest.len(), |i| i + skip);
            }
        }

        if plain_start < text.len() {
            tokens.push(BlockToken::Markdown(text[plain_start..].to_owned()));
        }

        tokens
    }
}
