//! In-progress onboarding record
//!
//! Keyed by field name only, so values for keys the schema does not know
//! about are kept rather than rejected.

use super::field::FieldValue;
use std::collections::BTreeMap;

/// Field values accumulated across all steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<String, FieldValue>,
}

impl Draft {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text value, replacing whatever was stored
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.values
            .insert(name.to_string(), FieldValue::Text(value.into()));
    }

    /// Add or remove one selection of a multiselect field.
    ///
    /// Including a value twice keeps a single occurrence; excluding an
    /// absent value does nothing.
    pub fn toggle_multi_value(&mut self, name: &str, value: &str, included: bool) {
        let entry = self
            .values
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::Multi(Vec::new()));
        if matches!(entry, FieldValue::Text(_)) {
            *entry = FieldValue::Multi(Vec::new());
        }
        if let FieldValue::Multi(selected) = entry {
            let present = selected.iter().any(|s| s == value);
            if included && !present {
                selected.push(value.to_string());
            } else if !included && present {
                selected.retain(|s| s != value);
            }
        }
    }

    /// Read-only copy for submission
    pub fn snapshot(&self) -> Draft {
        self.clone()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text value of a field, empty when unset
    pub fn text(&self, name: &str) -> &str {
        self.values.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    /// Selections of a multiselect field, empty when unset
    pub fn selections(&self, name: &str) -> &[String] {
        self.values
            .get(name)
            .map(FieldValue::as_multi)
            .unwrap_or(&[])
    }

    pub fn is_selected(&self, name: &str, value: &str) -> bool {
        self.selections(name).iter().any(|s| s == value)
    }

    /// Append a typed character to a text field
    pub fn push_char(&mut self, name: &str, c: char) {
        match self.values.get_mut(name) {
            Some(FieldValue::Text(s)) => s.push(c),
            Some(FieldValue::Multi(_)) => {}
            None => self.set_field(name, c.to_string()),
        }
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, name: &str) {
        if let Some(FieldValue::Text(s)) = self.values.get_mut(name) {
            s.pop();
        }
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.values.values().all(FieldValue::is_empty)
    }

    /// Drop every value (new session)
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = Draft::new();
        assert!(draft.is_empty());
        assert_eq!(draft.text("company"), "");
        assert!(draft.selections("services").is_empty());
    }

    #[test]
    fn test_set_field_replaces_value() {
        let mut draft = Draft::new();
        draft.set_field("company", "Acme");
        draft.set_field("company", "Acme Co.");
        assert_eq!(draft.text("company"), "Acme Co.");
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let mut draft = Draft::new();
        draft.set_field("referrer", "newsletter");
        assert_eq!(draft.text("referrer"), "newsletter");
    }

    #[test]
    fn test_toggle_include_twice_is_single() {
        let mut draft = Draft::new();
        draft.toggle_multi_value("services", "custom", true);
        draft.toggle_multi_value("services", "custom", true);
        assert_eq!(draft.selections("services"), &["custom".to_string()]);
    }

    #[test]
    fn test_toggle_exclude_absent_is_noop() {
        let mut draft = Draft::new();
        draft.toggle_multi_value("services", "social-media", true);
        let before = draft.clone();
        draft.toggle_multi_value("services", "custom", false);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_toggle_exclude_removes() {
        let mut draft = Draft::new();
        draft.toggle_multi_value("services", "social-media", true);
        draft.toggle_multi_value("services", "custom", true);
        draft.toggle_multi_value("services", "social-media", false);
        assert_eq!(draft.selections("services"), &["custom".to_string()]);
        assert!(!draft.is_selected("services", "social-media"));
    }

    #[test]
    fn test_toggle_keeps_selection_order() {
        let mut draft = Draft::new();
        for id in ["custom", "brand-building", "social-media"] {
            draft.toggle_multi_value("services", id, true);
        }
        assert_eq!(
            draft.selections("services"),
            &[
                "custom".to_string(),
                "brand-building".to_string(),
                "social-media".to_string()
            ]
        );
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut draft = Draft::new();
        draft.push_char("phone", '9');
        draft.push_char("phone", '8');
        assert_eq!(draft.text("phone"), "98");
        draft.pop_char("phone");
        assert_eq!(draft.text("phone"), "9");
        draft.pop_char("missing");
        assert_eq!(draft.text("missing"), "");
    }

    #[test]
    fn test_push_char_ignores_multiselect() {
        let mut draft = Draft::new();
        draft.toggle_multi_value("services", "custom", true);
        draft.push_char("services", 'x');
        assert_eq!(draft.selections("services"), &["custom".to_string()]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut draft = Draft::new();
        draft.set_field("company", "Acme");
        let snap = draft.snapshot();
        draft.set_field("company", "Other");
        assert_eq!(snap.text("company"), "Acme");
    }

    #[test]
    fn test_clear_empties_all() {
        let mut draft = Draft::new();
        draft.set_field("company", "Acme");
        draft.toggle_multi_value("services", "custom", true);
        draft.clear();
        assert!(draft.is_empty());
        assert!(draft.get("company").is_none());
    }
}
