//! Attribute extraction from opening-tag fragments.
//!
//! Parses the `key="value"` pairs of an opening tag like
//! `<details open="true" id="x">` into an ordered mapping.

use std::sync::LazyLock;

use regex::Regex;

static ATTR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)="([^"]*)""#).unwrap());

/// Ordered string-to-string attribute mapping.
///
/// Iteration follows insertion order. Re-inserting an existing key overwrites
/// its value but keeps the key at its first-insertion position, so the
/// parse → serialize → parse round trip is stable.
///
/// Values are taken verbatim; quotes are not escapable inside a value and no
/// validation or HTML escaping is performed here (escaping, if any, is the
/// renderer's responsibility).
///
/// # Example
///
/// ```
/// use chatdown_extensions::Attributes;
///
/// let attrs = Attributes::parse(r#"<details open="true" id="x">"#);
/// assert_eq!(attrs.get("open"), Some("true"));
/// assert_eq!(attrs.to_fragment(), r#"open="true" id="x""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Create an empty attribute mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract all `key="value"` pairs from an opening-tag fragment,
    /// left to right.
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        let mut attrs = Self::new();
        for caps in ATTR_PATTERN.captures_iter(fragment) {
            attrs.insert(&caps[1], &caps[2]);
        }
        attrs
    }

    /// Insert a key/value pair, overwriting the value if the key exists.
    pub fn insert(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_owned();
        } else {
            self.0.push((key.to_owned(), value.to_owned()));
        }
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize back to space-separated `key="value"` pairs in iteration
    /// order. Re-parsing the result reproduces the same mapping.
    #[must_use]
    pub fn to_fragment(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!(r#"{k}="{v}""#))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
