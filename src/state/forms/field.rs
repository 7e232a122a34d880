//! Form field value objects and static field descriptions

use super::steps::Step;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Ordered, duplicate-free selections
    Multi(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for multiselect values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Multi(_) => "",
        }
    }

    /// Get the selections (returns an empty slice for text values)
    pub fn as_multi(&self) -> &[String] {
        match self {
            FieldValue::Multi(v) => v,
            FieldValue::Text(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Multi(v) => v.is_empty(),
        }
    }
}

/// Input kind of a field, drives both rendering and editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Url,
    LongText,
    MultiSelect,
}

impl FieldKind {
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::LongText)
    }

    pub fn accepts_typing(&self) -> bool {
        !matches!(self, FieldKind::MultiSelect)
    }
}

/// Format rule applied to a present (or required) value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// At least N characters
    MinLength(usize),
    /// Absolute URL
    AbsoluteUrl,
    /// Email address
    Email,
    /// 10 digits, first digit 6-9
    IndianMobile,
    /// At least one selection, every selection a known marketing plan
    CatalogSelection,
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Draft key
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub rule: FormatRule,
    /// Message shown for any failure of this field
    pub message: &'static str,
    pub step: Step,
}
