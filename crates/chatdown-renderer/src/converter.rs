//! Markdown converter with chat-transcript extensions.

use chatdown_extensions::{BlockToken, BlockTokenizer, ExtensionSet, chat_extensions};
use pulldown_cmark::{Options, Parser, html};

use crate::lexer::BlockLexer;

/// Markdown to HTML converter configuration.
///
/// Runs the block lexer over the source, then renders the token stream:
/// plain markdown runs go through `pulldown-cmark`, extension tokens dispatch
/// back to the extension that produced them.
///
/// # Example
///
/// ```
/// use chatdown_renderer::MarkdownConverter;
///
/// let converter = MarkdownConverter::new();
/// let html = converter.convert_html("**bold** text");
/// assert_eq!(html, "<p><strong>bold</strong> text</p>\n");
/// ```
pub struct MarkdownConverter {
    gfm: bool,
    extensions: ExtensionSet,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter {
    /// Create a converter with the chat extension set and GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gfm: true,
            extensions: chat_extensions(),
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Replace the extension set.
    #[must_use]
    pub fn extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    fn get_parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.gfm {
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TASKLISTS);
        }
        options
    }

    /// Tokenize the source into the block token stream without rendering.
    #[must_use]
    pub fn block_tokens(&self, markdown_text: &str) -> Vec<BlockToken> {
        BlockLexer::new(&self.extensions).block_tokens(markdown_text)
    }

    /// Convert markdown to HTML.
    #[must_use]
    pub fn convert_html(&self, markdown_text: &str) -> String {
        let options = self.get_parser_options();
        let tokens = self.block_tokens(markdown_text);

        let mut out = String::with_capacity(markdown_text.len());
        for token in &tokens {
            match token {
                BlockToken::Markdown(text) => {
                    let parser = Parser::new_ext(text, options);
                    html::push_html(&mut out, parser);
                }
                other => {
                    // Dispatch back to the owning extension's renderer.
                    let rendered = self
                        .extensions
                        .find(other.name())
                        .and_then(|ext| ext.render(other));
                    match rendered {
                        Some(fragment) => out.push_str(&fragment),
                        // No registered renderer for this token; fall back
                        // to the consumed source so nothing is lost.
                        None => out.push_str(other.raw()),
                    }
                }
            }
        }

        out
    }
}
