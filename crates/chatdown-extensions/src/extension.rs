//! Extension contract and registry.
//!
//! A block extension is the four-operation capability set the host pipeline
//! dispatches to: a name, a cheap claim probe, a tokenizer, and a renderer.
//! The host's own block tokenization is injected through [`BlockTokenizer`]
//! so extensions that re-enter it (think blocks) stay testable with a stub.

use crate::details::DetailsExtension;
use crate::think::ThinkExtension;
use crate::token::BlockToken;

/// Host-supplied block tokenization re-entry point.
///
/// Implemented by the host's lexer and passed to [`BlockExtension::tokenize`]
/// so an extension can recursively tokenize nested content. Everything is a
/// pure function of the input text; implementations take `&self`.
pub trait BlockTokenizer {
    /// Run full block tokenization over `text`.
    fn block_tokens(&self, text: &str) -> Vec<BlockToken>;
}

/// A block-level extension: recognize a source prefix and render the
/// resulting token.
///
/// All recognition failures are `None`, meaning "fall through to other
/// handling" — never an error.
pub trait BlockExtension: Send + Sync {
    /// Extension name, matched against [`BlockToken::name`] when the host
    /// dispatches rendering.
    fn name(&self) -> &'static str;

    /// Cheap claim probe: `Some(0)` if this extension wants to tokenize the
    /// given source prefix. Called against every remaining prefix, so this
    /// must be O(length of a fixed literal).
    ///
    /// A probe may be narrower than [`tokenize`](Self::tokenize); the host
    /// still attempts tokenizers whose probes declined.
    fn start(&self, src: &str) -> Option<usize>;

    /// Consume a prefix of `src` into a token, or `None` if `src` does not
    /// begin with this construct. The consumed span is `token.raw()`.
    fn tokenize(&self, src: &str, lexer: &dyn BlockTokenizer) -> Option<BlockToken>;

    /// Render a token produced by this extension to an HTML fragment.
    /// Returns `None` for tokens owned by other extensions.
    fn render(&self, token: &BlockToken) -> Option<String>;
}

/// Ordered collection of block extensions.
///
/// A pure value with no process-wide lifecycle; the host owns any singleton
/// behavior.
///
/// # Example
///
/// ```
/// use chatdown_extensions::{ExtensionSet, DetailsExtension};
///
/// let set = ExtensionSet::new().with(DetailsExtension);
/// assert!(set.find("details").is_some());
/// ```
#[derive(Default)]
pub struct ExtensionSet {
    extensions: Vec<Box<dyn BlockExtension>>,
}

impl ExtensionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extension, preserving registration order.
    #[must_use]
    pub fn with<E: BlockExtension + 'static>(mut self, extension: E) -> Self {
        self.extensions.push(Box::new(extension));
        self
    }

    /// Iterate over extensions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn BlockExtension> {
        self.extensions.iter().map(|ext| &**ext)
    }

    /// Look up an extension by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&dyn BlockExtension> {
        self.iter().find(|ext| ext.name() == name)
    }
}

/// The chat-transcript extension set: details blocks, then think blocks.
#[must_use]
pub fn chat_extensions() -> ExtensionSet {
    ExtensionSet::new()
        .with(DetailsExtension)
        .with(ThinkExtension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_factory_registers_both_extensions() {
        let set = chat_extensions();
        let names: Vec<_> = set.iter().map(BlockExtension::name).collect();
        assert_eq!(names, vec!["details", "think"]);
    }

    #[test]
    fn test_find_by_name() {
        let set = chat_extensions();
        assert!(set.find("think").is_some());
        assert!(set.find("nope").is_none());
    }

    #[test]
    fn test_start_probes_are_mutually_exclusive() {
        let set = chat_extensions();
        let inputs = [
            "<details>\nbody\n</details>",
            "<think>body</think>",
            "plain paragraph",
            "<detailsish>",
            "",
        ];
        for input in inputs {
            let claims = set.iter().filter(|e| e.start(input).is_some()).count();
            assert!(claims <= 1, "more than one claim for {input:?}");
        }
    }

    #[test]
    fn test_probes_total_over_arbitrary_input() {
        let set = chat_extensions();
        // Every input gets a definite verdict; probes never panic.
        for input in ["", "<", "<d", "<think", "\u{1f600}<details>", "</details>"] {
            for ext in set.iter() {
                let _ = ext.start(input);
            }
        }
    }
}
