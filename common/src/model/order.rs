//! Wire shapes for the order-detail endpoint.
//!
//! An `OrderItem` is deliberately loose: depending on which catalog entity it
//! references, any subset of the optional fields below may be present. The
//! resolver (`crate::resolve`) classifies each item exactly once and all
//! rendering switches on that classification; nothing downstream should sniff
//! these raw optionals again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::catalog::DefaultTopping;

/// One order as returned by `GET /api/orders/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// A single line of an order. Read-only in this subsystem: fetched once per
/// order-details view and discarded on navigation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub pizza_id: Option<String>,
    #[serde(default)]
    pub combo_id: Option<String>,
    #[serde(default)]
    pub other_item_id: Option<String>,
    #[serde(default)]
    pub combo_style_item_id: Option<String>,
    #[serde(default)]
    pub user_choice_id: Option<String>,
    #[serde(default)]
    pub pizza_builder_deal_id: Option<String>,

    #[serde(default)]
    pub is_combo: bool,
    #[serde(default)]
    pub is_other_item: bool,
    #[serde(default)]
    pub is_meal_deal: bool,

    #[serde(default)]
    pub size: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub sauce: Option<String>,
    /// Either a JSON-encoded string (`"[\"side1\"]"`) or a native array of
    /// identifiers. Decoded tolerantly by `resolve::selections`.
    #[serde(default)]
    pub selected_sides_names: Option<serde_json::Value>,
    /// Same loose encoding as `selected_sides_names`.
    #[serde(default)]
    pub selected_drinks_names: Option<serde_json::Value>,

    #[serde(default)]
    pub order_toppings: Vec<OrderTopping>,
    #[serde(default)]
    pub order_ingredients: Vec<OrderTopping>,

    #[serde(default)]
    pub user_choice_details: Option<UserChoiceDetails>,

    #[serde(default)]
    pub pizza: Option<PizzaSummary>,
    #[serde(default)]
    pub combo: Option<RelationSummary>,
    #[serde(default)]
    pub combo_style_item: Option<RelationSummary>,
    #[serde(default)]
    pub user_choice: Option<RelationSummary>,
    #[serde(default)]
    pub other_item: Option<RelationSummary>,
}

/// A topping or ingredient line as customized on this order item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTopping {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_include")]
    pub include: bool,
}

/// Nested relation object carried for combos, combo-style items, user-choice
/// deals and "other" items. Only naming and artwork fields are relevant here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Nested pizza relation. When the backend inlines `default_toppings` the
/// differ uses them directly and no baseline fetch is issued for the item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PizzaSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub default_toppings: Option<Vec<DefaultTopping>>,
    #[serde(default)]
    pub default_ingredients: Option<Vec<DefaultTopping>>,
}

/// What the customer picked from each configured category of a flexible
/// meal deal. Keys are free-form category-type labels ("sides", "pizza", ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChoiceDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub selected_items: BTreeMap<String, Vec<ChosenItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChosenItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

fn default_include() -> bool {
    true
}
