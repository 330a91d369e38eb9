use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A verbatim quote from the source text that supports a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Exact snippet from the document.
    pub quote: String,
    /// Human-readable position, e.g. "line 5" or "lines 5-7".
    pub location: String,
}

impl Evidence {
    pub fn new(quote: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            location: location.into(),
        }
    }

    /// Evidence for a single 1-based line.
    pub fn at_line(quote: impl Into<String>, line: usize) -> Self {
        Self::new(quote, format!("line {line}"))
    }

    /// Evidence for an inclusive 1-based line range. Collapses to `line N`
    /// when the range covers one line.
    pub fn at_lines(quote: impl Into<String>, start: usize, end: usize) -> Self {
        if end <= start {
            Self::at_line(quote, start)
        } else {
            Self::new(quote, format!("lines {start}-{end}"))
        }
    }
}

/// Extracted value: either one block of text or an ordered list of items.
///
/// Serialized untagged, so the wire shape is a JSON string or array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Flat text used by keyword rules. List items are joined by a space.
    pub fn as_text(&self) -> String {
        match self {
            Self::Scalar(s) => s.clone(),
            Self::List(items) => items.join(" "),
        }
    }

    /// Non-empty trimmed entries. A non-blank scalar yields one entry.
    pub fn items(&self) -> Vec<String> {
        match self {
            Self::Scalar(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Vec::new()
                } else {
                    vec![trimmed.to_string()]
                }
            }
            Self::List(items) => items
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Value equality for diffing: lists compare as sorted multisets,
    /// scalars as strings. A scalar never equals a list.
    pub fn equivalent(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (Self::List(a), Self::List(b)) => {
                let mut a = a.clone();
                let mut b = b.clone();
                a.sort();
                b.sort();
                a == b
            }
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            _ => false,
        }
    }
}

/// A single extracted field with its value and supporting evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedField {
    pub value: FieldValue,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

impl ExtractedField {
    pub fn new(value: FieldValue, evidence: Vec<Evidence>) -> Self {
        Self { value, evidence }
    }

    pub fn text(&self) -> String {
        self.value.as_text()
    }
}

/// Field name → extracted field, keeping insertion order.
///
/// Insertion order is the structuring registry order; it survives a JSON
/// round trip. Absence of a key means the field was not found, which is
/// distinct from a present field with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, ExtractedField)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, name: impl Into<String>, field: ExtractedField) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = field,
            None => self.entries.push((name, field)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ExtractedField> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Flat text of a field, or empty when the field is absent.
    pub fn text_of(&self, name: &str) -> String {
        self.get(name).map(ExtractedField::text).unwrap_or_default()
    }

    /// Trimmed items of a field, or empty when the field is absent.
    pub fn items_of(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(|f| f.value.items())
            .unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtractedField)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ExtractedField)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, ExtractedField)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldMapVisitor;

        impl<'de> Visitor<'de> for FieldMapVisitor {
            type Value = FieldMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field name to extracted field")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FieldMap, A::Error> {
                let mut map = FieldMap::new();
                while let Some((k, v)) = access.next_entry::<String, ExtractedField>()? {
                    map.insert(k, v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FieldMapVisitor)
    }
}
