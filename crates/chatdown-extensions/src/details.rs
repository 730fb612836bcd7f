//! Collapsible details blocks.
//!
//! Recognizes `<details ...>` ... `</details>` spans, splitting off an
//! optional leading `<summary>` line and `key="value"` attributes from the
//! opening tag. Nested details blocks are handled by the depth-counting
//! scanner, so the span always closes at the outer `</details>`.

use std::sync::LazyLock;

use regex::Regex;

use crate::attrs::Attributes;
use crate::extension::{BlockExtension, BlockTokenizer};
use crate::scanner::find_matching_close;
use crate::token::{BlockToken, DetailsBlock};

/// Opening-tag line: `<details`, optional attributes, `>`, newline.
static DETAILS_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<details(\s+[^>]*)?>\n").unwrap());

/// Leading `<summary>` line of the interior.
static SUMMARY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<summary>(.*?)</summary>\n").unwrap());

const CLOSE_TAG: &str = "</details>";

/// Block extension for `<details>` containers.
pub struct DetailsExtension;

impl BlockExtension for DetailsExtension {
    fn name(&self) -> &'static str {
        "details"
    }

    /// Claims only the bare `<details>` opening. The tokenizer accepts
    /// attributed openings too; the host compensates by attempting
    /// tokenizers whose probes declined.
    fn start(&self, src: &str) -> Option<usize> {
        src.starts_with("<details>").then_some(0)
    }

    fn tokenize(&self, src: &str, _lexer: &dyn BlockTokenizer) -> Option<BlockToken> {
        let open_tag = DETAILS_OPEN.find(src)?.as_str();
        let end = find_matching_close(src, "<details", CLOSE_TAG)?;

        let raw = &src[..end];
        let attributes = Attributes::parse(open_tag);

        // Interior: drop the opening line and the trailing `</details>`.
        let mut text = raw[open_tag.len()..raw.len() - CLOSE_TAG.len()].trim();
        let mut summary = "";
        if let Some(caps) = SUMMARY_LINE.captures(text) {
            summary = caps.get(1).map_or("", |m| m.as_str()).trim();
            text = text[caps.get(0).map_or(0, |m| m.as_str().len())..].trim();
        }

        Some(BlockToken::Details(DetailsBlock {
            raw: raw.to_owned(),
            summary: summary.to_owned(),
            text: text.to_owned(),
            attributes,
        }))
    }

    /// Re-emits the wrapper with attributes serialized in insertion order.
    /// `text` is emitted verbatim, no re-escaping (callers control the
    /// source).
    fn render(&self, token: &BlockToken) -> Option<String> {
        let BlockToken::Details(block) = token else {
            return None;
        };

        let summary = if block.summary.is_empty() {
            String::new()
        } else {
            format!("<summary>{}</summary>", block.summary)
        };

        Some(format!(
            "<details {}>\n  {}\n  {}\n  </details>",
            block.attributes.to_fragment(),
            summary,
            block.text,
        ))
    }
}
