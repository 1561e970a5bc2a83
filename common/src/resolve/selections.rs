//! Sauce/sides/drinks and user-choice selection decoding.
//!
//! `selectedSidesNames` / `selectedDrinksNames` arrive in whatever shape the
//! backend happened to store: a JSON-encoded string, a native array, or
//! nothing. Decoding never fails outward; malformed payloads collapse to an
//! empty list (the caller logs them via [`malformed_name_list`]).

use std::collections::HashMap;

use serde_json::Value;

use crate::model::order::{ChosenItem, UserChoiceDetails};

/// One labeled group of a user-choice deal ("sides", "pizza", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    pub label: String,
    pub items: Vec<ChosenItem>,
}

/// Decodes a loose side/drink selection field into identifiers.
pub fn parse_name_list(raw: Option<&Value>) -> Vec<String> {
    match raw {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => collect_strings(items),
        Some(Value::String(encoded)) => match serde_json::from_str::<Value>(encoded) {
            Ok(Value::Array(items)) => collect_strings(&items),
            // A bare string that isn't JSON at all, or decodes to a
            // non-array: treated as empty rather than an error.
            _ => Vec::new(),
        },
        Some(_) => Vec::new(),
    }
}

/// True when the field carried something that [`parse_name_list`] had to
/// throw away. Lets the view log parse failures without the core depending
/// on a logger.
pub fn malformed_name_list(raw: Option<&Value>) -> bool {
    match raw {
        None | Some(Value::Null) => false,
        Some(Value::Array(_)) => false,
        Some(Value::String(encoded)) => {
            encoded.trim().is_empty()
                || !matches!(serde_json::from_str::<Value>(encoded), Ok(Value::Array(_)))
        }
        Some(_) => true,
    }
}

fn collect_strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect()
}

/// Resolves opaque side/drink identifiers to display names. Identifiers
/// missing from the lookup pass through verbatim.
pub fn resolve_names(ids: Vec<String>, lookup: &HashMap<String, String>) -> Vec<String> {
    ids.into_iter()
        .map(|id| lookup.get(&id).cloned().unwrap_or(id))
        .collect()
}

/// Flattens the selected-items mapping into labeled groups, preserving the
/// backend's category labels. Empty groups are kept so the view can show
/// what a category contributed nothing to.
pub fn choice_groups(details: &UserChoiceDetails) -> Vec<ChoiceGroup> {
    details
        .selected_items
        .iter()
        .map(|(label, items)| ChoiceGroup {
            label: label.clone(),
            items: items.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_encoded_string_decodes_to_ids() {
        let raw = json!("[\"side1\",\"side2\"]");
        assert_eq!(parse_name_list(Some(&raw)), vec!["side1", "side2"]);
    }

    #[test]
    fn native_array_passes_through() {
        let raw = json!(["drink1"]);
        assert_eq!(parse_name_list(Some(&raw)), vec!["drink1"]);
    }

    #[test]
    fn malformed_json_is_an_empty_list_not_an_error() {
        let raw = json!("not valid json");
        assert!(parse_name_list(Some(&raw)).is_empty());
        assert!(malformed_name_list(Some(&raw)));
    }

    #[test]
    fn absent_and_empty_fields_are_not_flagged() {
        assert!(parse_name_list(None).is_empty());
        assert!(!malformed_name_list(None));

        let empty = json!("[]");
        assert!(parse_name_list(Some(&empty)).is_empty());
        assert!(!malformed_name_list(Some(&empty)));
    }

    #[test]
    fn unresolved_ids_render_verbatim() {
        let mut lookup = HashMap::new();
        lookup.insert("side1".to_string(), "Fries".to_string());
        let names = resolve_names(vec!["side1".into(), "ghost".into()], &lookup);
        assert_eq!(names, vec!["Fries", "ghost"]);
    }

    #[test]
    fn groups_preserve_labels_and_quantities() {
        let mut details = UserChoiceDetails {
            name: "Family Feast".into(),
            ..Default::default()
        };
        details.selected_items.insert(
            "sides".into(),
            vec![ChosenItem {
                name: "Wedges".into(),
                quantity: 2,
            }],
        );
        let groups = choice_groups(&details);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "sides");
        assert_eq!(groups[0].items[0].quantity, 2);
    }
}
