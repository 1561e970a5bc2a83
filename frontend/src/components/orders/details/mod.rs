//! Order details: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `OrderDetailsProps`, `OrderDetailsComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, fetch the order and the sides/drinks catalog. Baseline
//!   recipe fetches are issued from `update` once the order items are known.

use std::collections::HashMap;

use gloo_console::warn;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::catalog::SidesDrinksCatalog;
use common::model::order::OrderDetail;

mod helpers;
mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use props::OrderDetailsProps;
pub use state::OrderDetailsComponent;

impl Component for OrderDetailsComponent {
    type Message = Msg;
    type Properties = OrderDetailsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        OrderDetailsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let Some(order_id) = ctx.props().order_id.clone() else {
                return;
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get(&format!("/api/orders/{}", order_id))
                    .send()
                    .await;

                match response {
                    Ok(resp) if resp.status() == 200 => match resp.json::<OrderDetail>().await {
                        Ok(order) => link.send_message(Msg::OrderLoaded(order)),
                        Err(err) => {
                            warn!(format!("Order payload could not be decoded: {}", err));
                            link.send_message(Msg::OrderFailed);
                        }
                    },
                    _ => link.send_message(Msg::OrderFailed),
                }
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get("/api/catalog/sides-drinks").send().await;

                match response {
                    Ok(resp) if resp.status() == 200 => {
                        match resp.json::<SidesDrinksCatalog>().await {
                            Ok(catalog) => {
                                link.send_message(Msg::CatalogLoaded(catalog.into_lookup()))
                            }
                            Err(err) => {
                                warn!(format!("Sides/drinks catalog decode failed: {}", err));
                                link.send_message(Msg::CatalogLoaded(HashMap::new()));
                            }
                        }
                    }
                    _ => {
                        // Identifiers render verbatim without the table.
                        warn!("Sides/drinks catalog unreachable");
                        link.send_message(Msg::CatalogLoaded(HashMap::new()));
                    }
                }
            });
        }
    }
}
