//! Item-kind classification.
//!
//! The order-item payload carries no explicit discriminator; the kind is
//! inferred from which reference fields are populated. Classification runs
//! once per item and everything downstream (name, image, modifications)
//! switches on the resulting [`ItemKind`].

use crate::model::order::OrderItem;

/// Items lacking every catalog reference id but priced above this threshold
/// are treated as pre-migration user-choice deal records. Known-fragile
/// heuristic: a legitimately priced standalone item over the threshold with
/// no reference ids would be misclassified. Kept on purpose to match the
/// backend's historical data; see `looks_like_legacy_deal`.
pub const LEGACY_PRICE_THRESHOLD: f64 = 50.0;

/// Rendering branch for one order item. Priority-ordered: the classifier
/// checks variants in declaration order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    ComboStyle,
    UserChoice,
    Combo,
    OtherItem,
    LegacyUserChoice,
    Pizza,
}

/// Decides which rendering branch applies to `item`.
///
/// Priority (first match wins): combo-style reference, user-choice reference
/// or named details, combo flag, other-item flag, the legacy price heuristic,
/// and finally plain pizza as the fallback branch.
pub fn classify(item: &OrderItem) -> ItemKind {
    if item.combo_style_item_id.is_some() {
        return ItemKind::ComboStyle;
    }
    if item.user_choice_id.is_some() || has_named_user_choice_details(item) {
        return ItemKind::UserChoice;
    }
    if item.is_combo {
        return ItemKind::Combo;
    }
    if item.is_other_item {
        return ItemKind::OtherItem;
    }
    if looks_like_legacy_deal(item) {
        return ItemKind::LegacyUserChoice;
    }
    ItemKind::Pizza
}

fn has_named_user_choice_details(item: &OrderItem) -> bool {
    item.user_choice_details
        .as_ref()
        .is_some_and(|details| !details.name.trim().is_empty())
}

fn has_reference_id(item: &OrderItem) -> bool {
    item.pizza_id.is_some()
        || item.combo_id.is_some()
        || item.other_item_id.is_some()
        || item.combo_style_item_id.is_some()
        || item.user_choice_id.is_some()
}

/// Items spawned from a flexible meal deal carry the deal's id. Such
/// sub-items have no independent customization, so the modification differ
/// is skipped for them even when a pizza id is present.
pub fn in_user_choice_meal(item: &OrderItem) -> bool {
    item.pizza_builder_deal_id.is_some()
}

/// The legacy-orphan heuristic: no catalog reference of any kind, but a price
/// above [`LEGACY_PRICE_THRESHOLD`]. Isolated here so the branch stays
/// auditable.
pub fn looks_like_legacy_deal(item: &OrderItem) -> bool {
    !has_reference_id(item) && item.price.is_some_and(|price| price > LEGACY_PRICE_THRESHOLD)
}
