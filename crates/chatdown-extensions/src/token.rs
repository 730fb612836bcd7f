//! Block token model.
//!
//! Tokens are the intermediate representation between recognition and
//! rendering: created once when a tokenizer matches a span, immutable, and
//! consumed exactly once by the corresponding renderer.

use crate::attrs::Attributes;

/// A recognized block-level span.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockToken {
    /// A collapsible `<details>` container.
    Details(DetailsBlock),
    /// A `<think>` block with recursively tokenized content.
    Think(ThinkBlock),
    /// A run of source text owned by the host markdown engine.
    Markdown(String),
}

impl BlockToken {
    /// Name of the extension that produced this token, used by the host to
    /// dispatch rendering. Plain markdown runs have no owning extension.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Details(_) => "details",
            Self::Think(_) => "think",
            Self::Markdown(_) => "markdown",
        }
    }

    /// The exact consumed source substring. The host advances its cursor by
    /// this span's length after each produced token.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Details(block) => &block.raw,
            Self::Think(block) => &block.raw,
            Self::Markdown(text) => text,
        }
    }
}

/// Token for a `<details>` ... `</details>` block.
///
/// `raw` always begins with `<details` and ends with `</details>`; its
/// interior equals `text` plus, if present, the consumed `<summary>` line
/// that was stripped into `summary`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetailsBlock {
    /// Exact consumed source span.
    pub raw: String,
    /// Text of the `<summary>` line, empty when absent.
    pub summary: String,
    /// Interior content with the summary line stripped, trimmed.
    pub text: String,
    /// Attributes from the opening tag.
    pub attributes: Attributes,
}

/// Token for a `<think>` ... `</think>` block.
///
/// `raw` begins with `<think>` and ends at the first `</think>`; `tokens` is
/// the full block tokenization of `text`, so think tokens form a tree whose
/// depth equals the nesting depth of `<think>` occurrences in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThinkBlock {
    /// Exact consumed source span.
    pub raw: String,
    /// Trimmed interior content.
    pub text: String,
    /// Recursive block tokenization of `text`.
    pub tokens: Vec<BlockToken>,
}
