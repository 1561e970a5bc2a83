//! Properties for the order-details component.

use yew::prelude::*;

/// Configuration passed from the parent page.
#[derive(Properties, PartialEq, Clone)]
pub struct OrderDetailsProps {
    /// The order to load on first render. With `None` the component renders
    /// a neutral "no order selected" screen and issues no requests.
    #[prop_or_default]
    pub order_id: Option<String>,
}
