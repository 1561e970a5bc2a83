//! Utility functions for the order-details component.

use super::styles;

/// Base URL the image-serving endpoint is rooted at. Paths produced by the
/// resolver are appended to this verbatim.
pub const IMAGE_BASE: &str = "";

/// Formats a price for the items table; absent prices render as a dash.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    }
}

/// Displays a temporary notification message at the bottom of the screen.
/// The toast removes itself after a few seconds. Messages can embed backend
/// error text, so the content goes in as text, never as markup.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_attribute("style", styles::TOAST).ok();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}
