//! Matching-delimiter scanner.
//!
//! Finds the closing tag that balances an opening tag in the presence of
//! nested same-named tags. A single left-to-right pass with substring probes;
//! no regex engine, no tree parser.

/// Find the index just past the closing tag that balances the opening tag.
///
/// `src` is assumed to begin with `open` at position 0. `open` and `close`
/// must be disjoint literals (neither may occur at a position where the other
/// matches); this is a precondition, not checked. At each position the open
/// probe is tried before the close probe.
///
/// Returns `None` if the input ends before nesting depth returns to zero.
/// Callers must treat `None` as "not actually an instance of the construct",
/// never as a parse error.
///
/// # Example
///
/// ```
/// use chatdown_extensions::find_matching_close;
///
/// let src = "<details>a<details>b</details>c</details>";
/// assert_eq!(find_matching_close(src, "<details", "</details>"), Some(41));
/// assert_eq!(find_matching_close("<details>no close", "<details", "</details>"), None);
/// ```
#[must_use]
pub fn find_matching_close(src: &str, open: &str, close: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut index = open.len();

    while index < src.len() {
        let rest = &src[index..];
        if rest.starts_with(open) {
            depth += 1;
        } else if rest.starts_with(close) {
            depth -= 1;
            if depth == 0 {
                return Some(index + close.len());
            }
        }
        // Advance one character, staying on a UTF-8 boundary.
        index += rest.chars().next().map_or(1, char::len_utf8);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unnested_close() {
        let src = "<think>hello</think>";
        assert_eq!(find_matching_close(src, "<think>", "</think>"), Some(20));
    }

    #[test]
    fn test_nested_close() {
        // Must end at the outer close (41), not the inner one (24 + 10 - 4).
        let src = "<details>a<details>b</details>c</details>";
        assert_eq!(find_matching_close(src, "<details", "</details>"), Some(41));
    }

    #[test]
    fn test_deeply_nested() {
        let src = "<d><d><d>x</d></d></d>";
        assert_eq!(find_matching_close(src, "<d>", "</d>"), Some(src.len()));
    }

    #[test]
    fn test_unbalanced_returns_none() {
        assert_eq!(
            find_matching_close("<details>no close", "<details", "</details>"),
            None
        );
        assert_eq!(
            find_matching_close("<details><details></details>", "<details", "</details>"),
            None
        );
    }

    #[test]
    fn test_trailing_text_ignored() {
        let src = "<d>body</d> and more";
        assert_eq!(find_matching_close(src, "<d>", "</d>"), Some(11));
    }

    #[test]
    fn test_multibyte_content() {
        let src = "<d>héllo — ユニコード</d>";
        assert_eq!(find_matching_close(src, "<d>", "</d>"), Some(src.len()));
    }

    #[test]
    fn test_open_probe_tried_first() {
        // An opening tag directly after the first body char still bumps depth.
        let src = "<d><d></d></d>";
        assert_eq!(find_matching_close(src, "<d>", "</d>"), Some(14));
    }
}
