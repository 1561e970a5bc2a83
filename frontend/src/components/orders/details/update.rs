//! Update function for the order-details component.
//!
//! Follows an Elm-style architecture: receives the current
//! `OrderDetailsComponent` state, the `Context`, and a `Msg`, mutates the
//! state accordingly, and returns a `bool` indicating whether the view should
//! re-render.
//!
//! Key behaviors
//! - Storing the fetched order and kicking off one baseline-recipe fetch per
//!   distinct pizza id (`RecipeCache::begin` claims the slot before the
//!   request is spawned, so re-renders cannot duplicate a request).
//! - Treating a failed recipe fetch as a synthetic empty baseline; the panel
//!   then renders without comparison coloring instead of erroring.
//! - Persisting status changes via a backend POST with toast feedback.
//!
//! Recipe fetches are fire-and-forget: no cancellation on teardown, no
//! timeout, no retries. A stalled request leaves that item's panel in its
//! "Loading modifications..." state.

use gloo_console::warn;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::order::{OrderDetail, OrderItem};
use common::resolve::{
    ItemKind, classify, in_user_choice_meal, malformed_name_list, recipe_from_response,
};

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::OrderDetailsComponent;

/// Central update function for the component.
pub fn update(
    component: &mut OrderDetailsComponent,
    ctx: &Context<OrderDetailsComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::OrderLoaded(order) => {
            log_malformed_selections(&order);
            start_recipe_fetches(component, ctx, &order);
            component.order = Some(order);
            component.order_failed = false;
            true
        }
        Msg::OrderFailed => {
            component.order_failed = true;
            true
        }
        Msg::CatalogLoaded(lookup) => {
            component.lookup = lookup;
            true
        }
        Msg::RecipeLoaded { pizza_id, recipe } => {
            component.recipes.fulfill(&pizza_id, recipe);
            true
        }
        Msg::RecipeFailed { pizza_id } => {
            component.recipes.fail(&pizza_id);
            true
        }
        Msg::SetStatus(status) => {
            let Some(order_id) = component.order.as_ref().map(|order| order.id.clone()) else {
                return false;
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::post(&format!("/api/orders/{}/status", order_id))
                    .json(&serde_json::json!({ "status": status }))
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) if response.status() == 200 => {
                        link.send_message(Msg::StatusSaved(status));
                        show_toast("Order status updated.");
                    }
                    Ok(response) => {
                        show_toast(&format!(
                            "Could not update order status: {}",
                            response.text().await.unwrap_or_default()
                        ));
                    }
                    Err(err) => {
                        show_toast(&format!("Could not update order status: {}", err));
                    }
                }
            });

            false
        }
        Msg::StatusSaved(status) => {
            if let Some(order) = &mut component.order {
                order.status = status;
            }
            true
        }
    }
}

/// Issues at most one `GET /getPizzaById/{id}` per distinct pizza id among
/// the order's plain-pizza items. Items with an inlined default recipe and
/// sub-items of a user-choice meal need no baseline.
fn start_recipe_fetches(
    component: &mut OrderDetailsComponent,
    ctx: &Context<OrderDetailsComponent>,
    order: &OrderDetail,
) {
    for item in &order.items {
        if classify(item) != ItemKind::Pizza || in_user_choice_meal(item) {
            continue;
        }
        if item
            .pizza
            .as_ref()
            .is_some_and(|pizza| pizza.default_toppings.is_some())
        {
            continue;
        }
        let Some(pizza_id) = item.pizza_id.clone() else {
            continue;
        };
        if !component.recipes.begin(&pizza_id) {
            continue;
        }

        let link = ctx.link().clone();
        spawn_local(async move {
            let failed = Msg::RecipeFailed {
                pizza_id: pizza_id.clone(),
            };
            match Request::get(&format!("/getPizzaById/{}", pizza_id))
                .send()
                .await
            {
                Ok(resp) if resp.status() == 200 => match resp.json::<serde_json::Value>().await {
                    Ok(value) => match recipe_from_response(value) {
                        Some(recipe) => link.send_message(Msg::RecipeLoaded { pizza_id, recipe }),
                        None => {
                            warn!(format!(
                                "Unrecognized pizza envelope for id {}",
                                pizza_id
                            ));
                            link.send_message(failed);
                        }
                    },
                    Err(err) => {
                        warn!(format!("Pizza {} decode failed: {}", pizza_id, err));
                        link.send_message(failed);
                    }
                },
                _ => {
                    warn!(format!("Baseline recipe fetch failed for pizza {}", pizza_id));
                    link.send_message(failed);
                }
            }
        });
    }
}

/// Malformed side/drink payloads are logged here, then treated as empty by
/// the resolver.
fn log_malformed_selections(order: &OrderDetail) {
    for (index, item) in order.items.iter().enumerate() {
        log_malformed_field(
            index,
            item,
            item.selected_sides_names.as_ref(),
            "selectedSidesNames",
        );
        log_malformed_field(
            index,
            item,
            item.selected_drinks_names.as_ref(),
            "selectedDrinksNames",
        );
    }
}

fn log_malformed_field(index: usize, item: &OrderItem, raw: Option<&serde_json::Value>, field: &str) {
    if malformed_name_list(raw) {
        warn!(format!(
            "Malformed {} on item {} ({}); treating as empty",
            field,
            index,
            item_reference(item)
        ));
    }
}

/// Best reference id available for naming an item in logs, whatever its
/// kind. Mirrors the classifier's priority order.
fn item_reference(item: &OrderItem) -> &str {
    item.combo_style_item_id
        .as_deref()
        .or(item.user_choice_id.as_deref())
        .or(item.combo_id.as_deref())
        .or(item.other_item_id.as_deref())
        .or(item.pizza_id.as_deref())
        .or(item.pizza_builder_deal_id.as_deref())
        .unwrap_or("no reference id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_reference_falls_back_through_every_id_kind() {
        let combo_style = OrderItem {
            combo_style_item_id: Some("csi1".into()),
            pizza_id: Some("p1".into()),
            ..Default::default()
        };
        assert_eq!(item_reference(&combo_style), "csi1");

        let other = OrderItem {
            other_item_id: Some("o2".into()),
            ..Default::default()
        };
        assert_eq!(item_reference(&other), "o2");

        let pizza = OrderItem {
            pizza_id: Some("p1".into()),
            ..Default::default()
        };
        assert_eq!(item_reference(&pizza), "p1");

        assert_eq!(item_reference(&OrderItem::default()), "no reference id");
    }
}
