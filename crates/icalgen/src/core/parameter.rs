//! Property parameter types (RFC 5545 §3.2).

use super::Value;

/// Canonical wire form of a property or parameter name: ASCII uppercase,
/// underscores replaced by hyphens (`delegated_from` → `DELEGATED-FROM`).
pub(crate) fn canonical_name(name: &str) -> String {
    name.to_ascii_uppercase().replace('_', "-")
}

/// An insertion-ordered mapping from parameter name to value.
///
/// Used both as a parameter argument (`;CN=...;ROLE=...`) and as a
/// property value with named sub-fields (recurrence rules). Names are
/// canonicalized on insert. Rendering is always in sorted-by-name order
/// regardless of insertion order, so output is deterministic; the one
/// exception is the FREQ-first rule for value-position mappings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamMap {
    entries: Vec<(String, Value)>,
}

impl ParamMap {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Inserts a name/value pair, replacing any existing entry with the
    /// same canonical name.
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        let name = canonical_name(name);
        self.entries.retain(|(n, _)| *n != name);
        self.entries.push((name, value.into()));
    }

    /// Inserts a name/value pair, consuming and returning the mapping.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value stored under the given name, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        let name = canonical_name(name);
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Returns whether the mapping holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// One argument in a content line's parameter list.
///
/// Either a bare token rendered verbatim, or a mapping rendered as
/// sorted `NAME=VALUE` pairs. Multiple mappings in one call are each
/// sorted independently and concatenated in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamArg {
    /// Pre-formed parameter text, appended as-is.
    Token(String),
    /// Named parameters, rendered in sorted order.
    Mapping(ParamMap),
}

impl From<&str> for ParamArg {
    fn from(s: &str) -> Self {
        Self::Token(s.to_string())
    }
}

impl From<String> for ParamArg {
    fn from(s: String) -> Self {
        Self::Token(s)
    }
}

impl From<ParamMap> for ParamArg {
    fn from(map: ParamMap) -> Self {
        Self::Mapping(map)
    }
}
