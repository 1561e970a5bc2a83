//! Display-name resolution per item kind.

use crate::model::order::OrderItem;
use crate::resolve::kind::ItemKind;

/// Human-readable name for one order item. `kind` must come from
/// [`crate::resolve::kind::classify`] on the same item.
pub fn display_name(item: &OrderItem, kind: ItemKind) -> String {
    match kind {
        ItemKind::ComboStyle => {
            let base = item
                .combo_style_item
                .as_ref()
                .and_then(|rel| non_empty(rel.name.as_deref()))
                .unwrap_or("Combo Style Item");
            match non_empty(item.size.as_deref()) {
                Some(size) => format!("{} ({})", base, size),
                None => base.to_string(),
            }
        }
        ItemKind::UserChoice => item
            .user_choice_details
            .as_ref()
            .and_then(|details| non_empty(Some(details.name.as_str())))
            .unwrap_or("User Choice Deal")
            .to_string(),
        ItemKind::Combo => item
            .combo
            .as_ref()
            .and_then(|rel| non_empty(rel.name.as_deref()))
            .unwrap_or("Combo Item")
            .to_string(),
        ItemKind::OtherItem => item
            .other_item
            .as_ref()
            .and_then(|rel| non_empty(rel.name.as_deref()))
            .or_else(|| {
                item.other_item
                    .as_ref()
                    .and_then(|rel| non_empty(rel.title.as_deref()))
            })
            .or_else(|| non_empty(item.title.as_deref()))
            .or_else(|| non_empty(item.name.as_deref()))
            .unwrap_or("Other Item")
            .to_string(),
        ItemKind::LegacyUserChoice => "User Choice Deal (Legacy)".to_string(),
        ItemKind::Pizza => item
            .pizza
            .as_ref()
            .and_then(|pizza| non_empty(pizza.name.as_deref()))
            .unwrap_or("Custom Pizza")
            .to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::order::{PizzaSummary, RelationSummary, UserChoiceDetails};
    use crate::resolve::kind::classify;

    #[test]
    fn combo_style_name_includes_size() {
        let item = OrderItem {
            combo_style_item_id: Some("csi1".into()),
            size: Some("Large".into()),
            combo_style_item: Some(RelationSummary {
                name: Some("Wrap Meal".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(display_name(&item, classify(&item)), "Wrap Meal (Large)");
    }

    #[test]
    fn combo_style_falls_back_to_generic_label() {
        let item = OrderItem {
            combo_style_item_id: Some("csi1".into()),
            size: Some("Small".into()),
            ..Default::default()
        };
        assert_eq!(
            display_name(&item, classify(&item)),
            "Combo Style Item (Small)"
        );
    }

    #[test]
    fn user_choice_without_a_name_never_renders_empty() {
        let item = OrderItem {
            user_choice_id: Some("uc1".into()),
            user_choice_details: Some(UserChoiceDetails::default()),
            ..Default::default()
        };
        assert_eq!(display_name(&item, classify(&item)), "User Choice Deal");
    }

    #[test]
    fn other_item_walks_the_fallback_chain() {
        let item = OrderItem {
            is_other_item: true,
            title: Some("Garlic Bread".into()),
            other_item: Some(RelationSummary::default()),
            ..Default::default()
        };
        assert_eq!(display_name(&item, classify(&item)), "Garlic Bread");

        let bare = OrderItem {
            is_other_item: true,
            ..Default::default()
        };
        assert_eq!(display_name(&bare, classify(&bare)), "Other Item");
    }

    #[test]
    fn orphan_pizza_is_a_custom_pizza() {
        let item = OrderItem {
            price: Some(10.0),
            ..Default::default()
        };
        assert_eq!(display_name(&item, classify(&item)), "Custom Pizza");
    }

    #[test]
    fn pizza_relation_name_wins_over_fallback() {
        let item = OrderItem {
            pizza_id: Some("p1".into()),
            pizza: Some(PizzaSummary {
                name: Some("Margherita".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(display_name(&item, classify(&item)), "Margherita");
    }

    #[test]
    fn legacy_deal_uses_the_fixed_label() {
        let item = OrderItem {
            price: Some(75.0),
            ..Default::default()
        };
        assert_eq!(
            display_name(&item, classify(&item)),
            "User Choice Deal (Legacy)"
        );
    }
}
