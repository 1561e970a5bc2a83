//! View rendering for the order-details component.
//!
//! One screen: an order header with a status selector, and an items table.
//! Each row resolves its item through `common::resolve::resolve_item` and
//! renders the returned display model; raw order-item fields are never
//! re-inspected here. Diff coloring, meal badges and the various
//! empty/loading fallback strings all come out of the `Modifications` block.

use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::order::{ChosenItem, OrderDetail, OrderItem};
use common::resolve::{
    ChoiceGroup, ItemView, Modifications, ToppingLine, in_user_choice_meal, placeholder,
    resolve_item,
};

use super::helpers::{IMAGE_BASE, format_price};
use super::messages::Msg;
use super::state::{ORDER_STATUSES, OrderDetailsComponent};
use super::styles;

/// Main view function for the order-details component.
pub fn view(component: &OrderDetailsComponent, ctx: &Context<OrderDetailsComponent>) -> Html {
    let content = if ctx.props().order_id.is_none() {
        notice("No order selected.")
    } else if component.order_failed {
        notice("Order could not be loaded.")
    } else if let Some(order) = &component.order {
        build_order(component, ctx.link(), order)
    } else {
        notice("Loading order...")
    };

    html! {
        <div class="order-details-root">{ content }</div>
    }
}

fn notice(text: &str) -> Html {
    html! {
        <p style={styles::MUTED}>{ text }</p>
    }
}

fn build_order(
    component: &OrderDetailsComponent,
    link: &Scope<OrderDetailsComponent>,
    order: &OrderDetail,
) -> Html {
    html! {
        <>
            { build_header(link, order) }
            { build_items_table(component, order) }
        </>
    }
}

/// Order id, customer line and the status selector.
fn build_header(link: &Scope<OrderDetailsComponent>, order: &OrderDetail) -> Html {
    let current = order.status.as_str();

    html! {
        <div class="order-header">
            <h2>{ format!("Order {}", order.id) }</h2>
            {
                if let Some(customer) = &order.customer_name {
                    html! { <p>{ format!("Customer: {}", customer) }</p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(created) = &order.created_at {
                    html! { <p style={styles::MUTED}>{ format!("Placed: {}", created) }</p> }
                } else {
                    html! {}
                }
            }
            <label>
                {"Status: "}
                <select onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetStatus(select.value())
                })}>
                    {
                        for ORDER_STATUSES.iter().map(|status| html! {
                            <option value={*status} selected={*status == current}>{ *status }</option>
                        })
                    }
                </select>
            </label>
        </div>
    }
}

fn build_items_table(component: &OrderDetailsComponent, order: &OrderDetail) -> Html {
    if order.items.is_empty() {
        return notice("This order has no items.");
    }

    html! {
        <table style={styles::ITEMS_TABLE}>
            <thead>
                <tr>
                    <th style={styles::CELL}></th>
                    <th style={styles::CELL}>{"Item"}</th>
                    <th style={styles::CELL}>{"Size"}</th>
                    <th style={styles::CELL}>{"Qty"}</th>
                    <th style={styles::CELL}>{"Price"}</th>
                    <th style={styles::CELL}>{"Modifications"}</th>
                </tr>
            </thead>
            <tbody>
                { for order.items.iter().map(|item| build_item_row(component, item)) }
            </tbody>
        </table>
    }
}

fn build_item_row(component: &OrderDetailsComponent, item: &OrderItem) -> Html {
    let resolved = resolve_item(
        item,
        &component.recipes,
        &component.lookup,
        IMAGE_BASE,
        in_user_choice_meal(item),
    );

    html! {
        <tr>
            <td style={styles::CELL}>{ build_item_image(&resolved) }</td>
            <td style={styles::CELL}>{ resolved.name.clone() }</td>
            <td style={styles::CELL}>{ item.size.clone().unwrap_or_default() }</td>
            <td style={styles::CELL}>{ item.quantity }</td>
            <td style={styles::CELL}>{ format_price(item.price) }</td>
            <td style={styles::CELL}>{ build_modifications(&resolved.modifications) }</td>
        </tr>
    }
}

/// Image cell; a load failure swaps in the placeholder asset.
fn build_item_image(resolved: &ItemView) -> Html {
    let onerror = Callback::from(|e: Event| {
        if let Some(img) = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
        {
            let fallback = placeholder(IMAGE_BASE);
            if img.src().ends_with(&fallback) {
                return;
            }
            img.set_src(&fallback);
        }
    });

    html! {
        <img
            src={resolved.image_path.clone()}
            alt={resolved.name.clone()}
            style={styles::ITEM_IMAGE}
            {onerror}
        />
    }
}

fn build_modifications(modifications: &Modifications) -> Html {
    match modifications {
        Modifications::Loading => notice("Loading modifications..."),
        Modifications::None => notice("No modifications available"),
        Modifications::Pizza {
            toppings,
            ingredients,
            ..
        } => build_pizza_panel(toppings, ingredients),
        Modifications::Meal {
            sauce,
            sides,
            drinks,
            meal_deal,
        } => build_meal_panel(sauce.as_deref(), sides, drinks, *meal_deal),
        Modifications::UserChoice { groups } => build_user_choice_panel(groups),
        Modifications::UserChoiceMissing => notice("No user choice details available"),
    }
}

fn build_pizza_panel(toppings: &[ToppingLine], ingredients: &[ToppingLine]) -> Html {
    html! {
        <>
            <ul style="list-style:none; margin:0; padding:0;">
                { for toppings.iter().map(build_topping_line) }
            </ul>
            {
                if ingredients.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul style="list-style:none; margin:4px 0 0; padding:0;">
                            { for ingredients.iter().map(build_topping_line) }
                        </ul>
                    }
                }
            }
        </>
    }
}

fn build_topping_line(line: &ToppingLine) -> Html {
    let text = if line.quantity > 1 {
        format!("{} x{}", line.name, line.quantity)
    } else {
        line.name.clone()
    };

    html! {
        <li style={styles::topping_line_style(line.state)}>{ text }</li>
    }
}

fn build_meal_panel(
    sauce: Option<&str>,
    sides: &[String],
    drinks: &[String],
    meal_deal: bool,
) -> Html {
    html! {
        <div>
            {
                if let Some(sauce) = sauce {
                    badge(&format!("Sauce: {}", sauce))
                } else {
                    html! {}
                }
            }
            { for sides.iter().map(|name| badge(name)) }
            { for drinks.iter().map(|name| badge(name)) }
            {
                if meal_deal {
                    html! { <span style={styles::MEAL_DEAL_BADGE}>{"Meal Deal"}</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_user_choice_panel(groups: &[ChoiceGroup]) -> Html {
    if groups.is_empty() {
        return notice("No items selected");
    }

    html! {
        <div>
            {
                for groups.iter().map(|group| html! {
                    <div>
                        <span style={styles::GROUP_LABEL}>{ format!("{}:", group.label) }</span>
                        { for group.items.iter().map(build_chosen_badge) }
                    </div>
                })
            }
        </div>
    }
}

fn build_chosen_badge(item: &ChosenItem) -> Html {
    let text = if item.quantity > 1 {
        format!("{} x{}", item.name, item.quantity)
    } else {
        item.name.clone()
    };
    badge(&text)
}

fn badge(text: &str) -> Html {
    html! {
        <span style={styles::BADGE}>{ text }</span>
    }
}
