//! Per-view baseline recipe cache.
//!
//! Baseline recipes are fetched lazily, one network call per distinct pizza
//! id, and memoized for the lifetime of the order-details view. The slot is
//! marked [`RecipeSlot::Pending`] *before* the request is spawned, so a
//! re-render burst cannot issue a second request for the same id.

use std::collections::HashMap;

use serde_json::Value;

use crate::model::catalog::BaseRecipe;

#[derive(Debug, Clone, PartialEq)]
pub enum RecipeSlot {
    /// A fetch is in flight. No retry, no timeout: a stalled request leaves
    /// the panel in its loading state.
    Pending,
    Ready(BaseRecipe),
    /// The fetch failed; behaves as a synthetic empty baseline so rendering
    /// continues without comparison coloring.
    Failed,
}

/// In-flight-deduplicating memo of baseline recipes, keyed by pizza id.
#[derive(Debug, Default)]
pub struct RecipeCache {
    slots: HashMap<String, RecipeSlot>,
}

impl RecipeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the slot for `pizza_id`. Returns `true` exactly once per id;
    /// the caller starts a fetch only on `true`.
    pub fn begin(&mut self, pizza_id: &str) -> bool {
        if self.slots.contains_key(pizza_id) {
            return false;
        }
        self.slots.insert(pizza_id.to_string(), RecipeSlot::Pending);
        true
    }

    pub fn fulfill(&mut self, pizza_id: &str, recipe: BaseRecipe) {
        self.slots
            .insert(pizza_id.to_string(), RecipeSlot::Ready(recipe));
    }

    pub fn fail(&mut self, pizza_id: &str) {
        self.slots.insert(pizza_id.to_string(), RecipeSlot::Failed);
    }

    pub fn get(&self, pizza_id: &str) -> Option<&RecipeSlot> {
        self.slots.get(pizza_id)
    }
}

/// Normalizes the `GET /getPizzaById/{id}` response to a single record.
///
/// The backend answers with any of `{"data": {...}}`, a bare object, or a
/// one-element array; all three collapse to one `BaseRecipe`. Anything else
/// yields `None` and the caller records a failed fetch.
pub fn recipe_from_response(value: Value) -> Option<BaseRecipe> {
    let record = match value {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data")?,
        object @ Value::Object(_) => object,
        Value::Array(mut items) => {
            if items.is_empty() {
                return None;
            }
            items.remove(0)
        }
        _ => return None,
    };
    serde_json::from_value(record).ok()
}
