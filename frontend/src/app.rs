use crate::components::orders::details::OrderDetailsComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <OrderDetailsComponent order_id={current_order_id()} />
            </div>
        }
    }
}

/// Reads the order id from the `?order=` query parameter.
fn current_order_id() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("order").filter(|id| !id.is_empty())
}
