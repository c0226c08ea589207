use indexmap::IndexMap;
use serde_json::Value;

/// Insertion-ordered mapping from an original literal value (stringified) to
/// the placeholder name chosen for it.
///
/// Keyed by value, so a later acceptance of the same stringified literal
/// overwrites the stored name. Name uniqueness is not enforced; two different
/// literals may end up sharing a placeholder name.
#[derive(Debug, Default)]
pub struct PlaceholderRegistry {
    entries: IndexMap<String, String>,
}

/// Stringify a scalar the way it keys the registry: strings contribute their
/// raw contents, every other scalar its JSON rendering (`50` -> `"50"`).
pub fn scalar_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a placeholder assignment. Last write wins for a repeated
    /// original value; first-insertion position is kept.
    pub fn record(&mut self, original_value: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(original_value.into(), name.into());
    }

    /// Entries as `(original_value, name)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
