//! Inline style snippets for the order-details view.

use common::resolve::DiffState;

pub const BADGE: &str =
    "display:inline-block; padding:2px 8px; margin:2px; border-radius:10px; background:#eceff1; font-size:12px;";

pub const MEAL_DEAL_BADGE: &str =
    "display:inline-block; padding:2px 8px; margin:2px; border-radius:10px; background:#fff3e0; color:#ef6c00; font-weight:600; font-size:12px;";

pub const MUTED: &str = "color:#888; font-style:italic;";

pub const GROUP_LABEL: &str = "font-weight:600; margin-right:4px; text-transform:capitalize;";

pub const ITEM_IMAGE: &str = "width:48px; height:48px; object-fit:cover; border-radius:4px;";

pub const ITEMS_TABLE: &str = "width:100%; border-collapse:collapse; margin-top:12px;";

pub const CELL: &str = "padding:6px 8px; border-bottom:1px solid #e0e0e0; vertical-align:top;";

pub const TOAST: &str =
    "position:fixed; bottom:20px; left:50%; transform:translateX(-50%); background:rgba(0, 0, 0, 0.8); color:#fff; padding:10px 20px; border-radius:4px; z-index:10000; font-family:Arial, sans-serif;";

/// Coloring for one topping/ingredient line: green when it matches the
/// default recipe, orange when modified, red and struck when removed,
/// neutral when no baseline was available.
pub fn topping_line_style(state: DiffState) -> &'static str {
    match state {
        DiffState::Default => "color:#2e7d32;",
        DiffState::Modified => "color:#ef6c00; font-weight:600;",
        DiffState::Removed => "color:#c62828; text-decoration:line-through;",
        DiffState::Uncompared => "color:#455a64;",
    }
}
