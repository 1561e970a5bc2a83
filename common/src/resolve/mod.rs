//! Order item resolver.
//!
//! Given a raw order item (whose shape varies with the catalog entity it
//! references), produces everything the order-details view needs: the
//! rendering branch, a display name, an image path, and a structured
//! modifications block. Pure and network-free; the view owns the fetches and
//! feeds their results back in through [`RecipeCache`] and the id→name
//! lookup.
//!
//! Nothing here ever fails outward. Malformed payloads, missing baselines
//! and unresolved identifiers all degrade to a neutral renderable value.

use std::collections::HashMap;

use crate::model::order::OrderItem;

pub mod diff;
pub mod image;
pub mod kind;
pub mod name;
pub mod recipe_cache;
pub mod selections;

pub use diff::{DiffState, ToppingLine, diff_toppings, plain_lines};
pub use image::{PLACEHOLDER_IMAGE, image_path, placeholder};
pub use kind::{
    ItemKind, LEGACY_PRICE_THRESHOLD, classify, in_user_choice_meal, looks_like_legacy_deal,
};
pub use name::display_name;
pub use recipe_cache::{RecipeCache, RecipeSlot, recipe_from_response};
pub use selections::{
    ChoiceGroup, choice_groups, malformed_name_list, parse_name_list, resolve_names,
};

/// Structured content of the modifications panel for one item.
#[derive(Debug, Clone, PartialEq)]
pub enum Modifications {
    /// Baseline fetch still in flight ("Loading modifications...").
    Loading,
    /// Nothing to show ("No modifications available").
    None,
    /// Topping diff for a plain pizza. `compared` is false when no baseline
    /// was available and the lines carry no coloring. Ingredients are listed
    /// but never compared.
    Pizza {
        toppings: Vec<ToppingLine>,
        ingredients: Vec<ToppingLine>,
        compared: bool,
    },
    /// Combo-style meal customizations.
    Meal {
        sauce: Option<String>,
        sides: Vec<String>,
        drinks: Vec<String>,
        meal_deal: bool,
    },
    /// User-choice deal selections. Empty groups render "No items selected".
    UserChoice { groups: Vec<ChoiceGroup> },
    /// A user-choice deal whose details record never arrived
    /// ("No user choice details available").
    UserChoiceMissing,
}

/// Everything the view renders for one order item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub kind: ItemKind,
    pub name: String,
    pub image_path: String,
    pub modifications: Modifications,
}

/// Resolves one order item into its display model.
///
/// `in_user_choice_meal` marks items that belong to a user-choice meal; such
/// sub-items have no independent customization and skip the diff entirely,
/// even when they nominally carry a pizza id.
pub fn resolve_item(
    item: &OrderItem,
    recipes: &RecipeCache,
    lookup: &HashMap<String, String>,
    image_base: &str,
    in_user_choice_meal: bool,
) -> ItemView {
    let kind = classify(item);
    ItemView {
        kind,
        name: display_name(item, kind),
        image_path: image_path(item, kind, image_base),
        modifications: resolve_modifications(item, kind, recipes, lookup, in_user_choice_meal),
    }
}

fn resolve_modifications(
    item: &OrderItem,
    kind: ItemKind,
    recipes: &RecipeCache,
    lookup: &HashMap<String, String>,
    in_user_choice_meal: bool,
) -> Modifications {
    match kind {
        ItemKind::ComboStyle => {
            let sauce = item
                .sauce
                .clone()
                .filter(|sauce| !sauce.trim().is_empty());
            let sides = resolve_names(
                parse_name_list(item.selected_sides_names.as_ref()),
                lookup,
            );
            let drinks = resolve_names(
                parse_name_list(item.selected_drinks_names.as_ref()),
                lookup,
            );
            if sauce.is_none() && sides.is_empty() && drinks.is_empty() {
                Modifications::None
            } else {
                Modifications::Meal {
                    sauce,
                    sides,
                    drinks,
                    meal_deal: item.is_meal_deal,
                }
            }
        }
        ItemKind::UserChoice => match &item.user_choice_details {
            Some(details) => Modifications::UserChoice {
                groups: choice_groups(details),
            },
            None => Modifications::UserChoiceMissing,
        },
        ItemKind::Combo | ItemKind::OtherItem | ItemKind::LegacyUserChoice => Modifications::None,
        ItemKind::Pizza => pizza_modifications(item, recipes, in_user_choice_meal),
    }
}

fn pizza_modifications(
    item: &OrderItem,
    recipes: &RecipeCache,
    in_user_choice_meal: bool,
) -> Modifications {
    if in_user_choice_meal {
        return Modifications::None;
    }
    if item.order_toppings.is_empty() && item.order_ingredients.is_empty() {
        return Modifications::None;
    }

    let ingredients = plain_lines(&item.order_ingredients);

    // An inlined default recipe on the nested relation makes the lazy fetch
    // unnecessary for this item.
    if let Some(inline) = item
        .pizza
        .as_ref()
        .and_then(|pizza| pizza.default_toppings.as_deref())
    {
        return Modifications::Pizza {
            toppings: diff_toppings(&item.order_toppings, Some(inline)),
            ingredients,
            compared: true,
        };
    }

    let Some(pizza_id) = item.pizza_id.as_deref() else {
        return Modifications::Pizza {
            toppings: plain_lines(&item.order_toppings),
            ingredients,
            compared: false,
        };
    };

    match recipes.get(pizza_id) {
        Some(RecipeSlot::Ready(recipe)) => Modifications::Pizza {
            toppings: diff_toppings(&item.order_toppings, Some(&recipe.default_toppings)),
            ingredients,
            compared: true,
        },
        Some(RecipeSlot::Failed) => Modifications::Pizza {
            toppings: plain_lines(&item.order_toppings),
            ingredients,
            compared: false,
        },
        Some(RecipeSlot::Pending) | None => Modifications::Loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{BaseRecipe, DefaultTopping};
    use crate::model::order::{OrderTopping, RelationSummary, UserChoiceDetails};
    use serde_json::json;

    fn topping(name: &str, quantity: u32) -> OrderTopping {
        OrderTopping {
            name: name.to_string(),
            quantity,
            price: None,
            include: true,
        }
    }

    fn no_lookup() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn failed_baseline_fetch_still_renders_toppings() {
        let item = OrderItem {
            pizza_id: Some("p1".into()),
            order_toppings: vec![topping("Cheese", 2)],
            ..Default::default()
        };
        let mut recipes = RecipeCache::new();
        recipes.begin("p1");
        recipes.fail("p1");

        let view = resolve_item(&item, &recipes, &no_lookup(), "", false);
        match view.modifications {
            Modifications::Pizza {
                toppings, compared, ..
            } => {
                assert!(!compared);
                assert_eq!(toppings.len(), 1);
                assert_eq!(toppings[0].state, DiffState::Uncompared);
            }
            other => panic!("expected pizza modifications, got {:?}", other),
        }
    }

    #[test]
    fn pending_baseline_shows_loading() {
        let item = OrderItem {
            pizza_id: Some("p1".into()),
            order_toppings: vec![topping("Cheese", 1)],
            ..Default::default()
        };
        let mut recipes = RecipeCache::new();
        recipes.begin("p1");

        let view = resolve_item(&item, &recipes, &no_lookup(), "", false);
        assert_eq!(view.modifications, Modifications::Loading);
    }

    #[test]
    fn ready_baseline_produces_a_compared_diff() {
        let item = OrderItem {
            pizza_id: Some("p1".into()),
            order_toppings: vec![topping("Cheese", 1), topping("Jalapenos", 1)],
            order_ingredients: vec![topping("Tomato Sauce", 1)],
            ..Default::default()
        };
        let mut recipes = RecipeCache::new();
        recipes.begin("p1");
        recipes.fulfill(
            "p1",
            BaseRecipe {
                default_toppings: vec![DefaultTopping::new("Cheese", 1)],
                ..Default::default()
            },
        );

        let view = resolve_item(&item, &recipes, &no_lookup(), "", false);
        match view.modifications {
            Modifications::Pizza {
                toppings,
                ingredients,
                compared,
            } => {
                assert!(compared);
                assert_eq!(toppings[0].state, DiffState::Default);
                assert_eq!(toppings[1].state, DiffState::Modified);
                assert_eq!(ingredients[0].state, DiffState::Uncompared);
            }
            other => panic!("expected pizza modifications, got {:?}", other),
        }
    }

    #[test]
    fn inline_default_recipe_skips_the_cache() {
        let item = OrderItem {
            pizza_id: Some("p1".into()),
            pizza: Some(crate::model::order::PizzaSummary {
                default_toppings: Some(vec![DefaultTopping::new("Cheese", 1)]),
                ..Default::default()
            }),
            order_toppings: vec![topping("Cheese", 1)],
            ..Default::default()
        };
        // Empty cache on purpose: the inline recipe must be enough.
        let view = resolve_item(&item, &RecipeCache::new(), &no_lookup(), "", false);
        match view.modifications {
            Modifications::Pizza {
                toppings, compared, ..
            } => {
                assert!(compared);
                assert_eq!(toppings[0].state, DiffState::Default);
            }
            other => panic!("expected pizza modifications, got {:?}", other),
        }
    }

    #[test]
    fn user_choice_sub_item_skips_the_diff() {
        let item = OrderItem {
            pizza_id: Some("p1".into()),
            order_toppings: vec![topping("Cheese", 1)],
            ..Default::default()
        };
        let view = resolve_item(&item, &RecipeCache::new(), &no_lookup(), "", true);
        assert_eq!(view.modifications, Modifications::None);
    }

    #[test]
    fn invalid_sides_json_renders_no_modifications() {
        let item = OrderItem {
            combo_style_item_id: Some("csi1".into()),
            selected_sides_names: Some(json!("not valid json")),
            ..Default::default()
        };
        let view = resolve_item(&item, &RecipeCache::new(), &no_lookup(), "", false);
        assert_eq!(view.kind, ItemKind::ComboStyle);
        assert_eq!(view.modifications, Modifications::None);
    }

    #[test]
    fn missing_details_and_empty_selections_are_distinct_states() {
        let missing = OrderItem {
            user_choice_id: Some("uc1".into()),
            ..Default::default()
        };
        let view = resolve_item(&missing, &RecipeCache::new(), &no_lookup(), "", false);
        assert_eq!(view.modifications, Modifications::UserChoiceMissing);

        let empty = OrderItem {
            user_choice_id: Some("uc1".into()),
            user_choice_details: Some(UserChoiceDetails {
                name: "Family Feast".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let view = resolve_item(&empty, &RecipeCache::new(), &no_lookup(), "", false);
        assert_eq!(
            view.modifications,
            Modifications::UserChoice { groups: Vec::new() }
        );
    }

    #[test]
    fn combo_style_meal_end_to_end() {
        let item = OrderItem {
            combo_style_item_id: Some("csi1".into()),
            size: Some("Large".into()),
            combo_style_item: Some(RelationSummary {
                name: Some("Wrap Meal".into()),
                ..Default::default()
            }),
            sauce: Some("BBQ".into()),
            selected_sides_names: Some(json!("[\"side1\"]")),
            selected_drinks_names: Some(json!("[]")),
            is_meal_deal: true,
            ..Default::default()
        };
        let mut lookup = HashMap::new();
        lookup.insert("side1".to_string(), "Fries".to_string());

        let view = resolve_item(&item, &RecipeCache::new(), &lookup, "", false);
        assert_eq!(view.name, "Wrap Meal (Large)");
        assert_eq!(view.image_path, "/images/combostyle-csi1.png");
        assert_eq!(
            view.modifications,
            Modifications::Meal {
                sauce: Some("BBQ".into()),
                sides: vec!["Fries".into()],
                drinks: Vec::new(),
                meal_deal: true,
            }
        );
    }
}
