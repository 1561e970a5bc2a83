//! Component state for the order-details view.
//!
//! Holds the fetched order, the per-view baseline recipe cache, and the
//! side/drink id → name lookup table. All of it is discarded on navigation;
//! nothing here outlives the view.

use std::collections::HashMap;

use common::model::order::OrderDetail;
use common::resolve::RecipeCache;

/// Statuses staff can move an order to.
pub const ORDER_STATUSES: [&str; 5] = [
    "Pending",
    "Preparing",
    "Out for Delivery",
    "Completed",
    "Cancelled",
];

/// Main state container for the `OrderDetailsComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct OrderDetailsComponent {
    /// The order as last fetched. `None` until the first fetch resolves.
    pub order: Option<OrderDetail>,

    /// Set when the order fetch failed outright; the view shows an error
    /// screen instead of a perpetual loading state.
    pub order_failed: bool,

    /// Memoized baseline recipes, keyed by pizza id. At most one fetch is
    /// started per distinct id for the lifetime of the view.
    pub recipes: RecipeCache,

    /// Flattened side/drink id → display-name table. Empty until the catalog
    /// fetch resolves; unresolved identifiers render verbatim.
    pub lookup: HashMap<String, String>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl OrderDetailsComponent {
    pub fn new() -> Self {
        Self {
            order: None,
            order_failed: false,
            recipes: RecipeCache::new(),
            lookup: HashMap::new(),
            loaded: false,
        }
    }
}
