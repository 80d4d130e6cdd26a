//! The intermediate unit handed from the record parsers to the bulk writer.

use std::fmt;

/// Name of the single document field a record contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Bag-of-words context built from token counts.
    Context,
    /// A surface form pointing at the entity.
    SurfaceForm,
    /// Number of times the entity was linked.
    UriCount,
}

impl FieldName {
    /// The field name as it appears in the indexed document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::SurfaceForm => "sf",
            Self::UriCount => "uriCount",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value that is already a complete JSON literal.
///
/// The writer embeds the value verbatim, so encoding happens once, here.
/// Strings are quoted and escaped by [`FieldValue::string`]; numbers are
/// checked by [`FieldValue::raw_number`] and kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue(String);

impl FieldValue {
    /// Encode `value` as a JSON string literal.
    pub fn string(value: &str) -> Self {
        Self(serde_json::Value::String(value.to_owned()).to_string())
    }

    /// Accept `literal` as an unsigned JSON integer, unchanged.
    ///
    /// Returns `None` unless the literal is a run of ASCII digits without
    /// a leading zero (a lone `0` is fine).
    pub fn raw_number(literal: &str) -> Option<Self> {
        let digits_only = !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit());
        let leading_zero = literal.len() > 1 && literal.starts_with('0');
        if digits_only && !leading_zero {
            Some(Self(literal.to_owned()))
        } else {
            None
        }
    }

    /// The encoded JSON literal.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One record, reduced to a document id and a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    /// Document id, taken from the wiki URL.
    pub identifier: String,
    /// Field the record populates.
    pub field: FieldName,
    /// Pre-encoded JSON value of the field.
    pub value: FieldValue,
}

impl Triple {
    /// Create a new triple.
    pub fn new(identifier: impl Into<String>, field: FieldName, value: FieldValue) -> Self {
        Self {
            identifier: identifier.into(),
            field,
            value,
        }
    }
}
