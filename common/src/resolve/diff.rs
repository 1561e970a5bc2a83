//! Topping diff engine.
//!
//! Compares an item's current toppings against the pizza's default recipe and
//! tags every line with a visual state. The join key is the topping *name*,
//! matching the backend contract; names are assumed unique per pizza within
//! an order item (with duplicates, the last baseline entry wins).

use std::collections::HashMap;

use crate::model::catalog::DefaultTopping;
use crate::model::order::OrderTopping;

/// Visual state of one topping/ingredient line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffState {
    /// Present with the same quantity as the default recipe (neutral/green).
    Default,
    /// Added, or quantity changed from the default (orange). The two cases
    /// are deliberately not distinguished.
    Modified,
    /// Taken off the item, or present in the default recipe but absent from
    /// the order (red, struck).
    Removed,
    /// No baseline was available; rendered without comparison coloring.
    Uncompared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToppingLine {
    pub name: String,
    pub quantity: u32,
    pub state: DiffState,
}

/// Diffs `current` against `baseline`.
///
/// With a baseline: an included line with quantity >= 1 is `Default` when a
/// baseline entry of equal quantity exists, otherwise `Modified`; an excluded
/// or zero-quantity line is `Removed`; baseline toppings missing from the
/// order are appended as `Removed` so a struck row always names what was
/// taken off. Without a baseline every line is `Uncompared`.
pub fn diff_toppings(
    current: &[OrderTopping],
    baseline: Option<&[DefaultTopping]>,
) -> Vec<ToppingLine> {
    let Some(baseline) = baseline else {
        return plain_lines(current);
    };

    let defaults: HashMap<&str, &DefaultTopping> = baseline
        .iter()
        .filter(|topping| topping.include)
        .map(|topping| (topping.name.as_str(), topping))
        .collect();

    let mut lines: Vec<ToppingLine> = current
        .iter()
        .map(|topping| {
            let state = if !topping.include || topping.quantity == 0 {
                DiffState::Removed
            } else {
                match defaults.get(topping.name.as_str()) {
                    Some(default) if default.quantity == topping.quantity => DiffState::Default,
                    _ => DiffState::Modified,
                }
            };
            ToppingLine {
                name: topping.name.clone(),
                quantity: topping.quantity,
                state,
            }
        })
        .collect();

    for default in baseline.iter().filter(|topping| topping.include) {
        let mentioned = current.iter().any(|topping| topping.name == default.name);
        if !mentioned {
            lines.push(ToppingLine {
                name: default.name.clone(),
                quantity: default.quantity,
                state: DiffState::Removed,
            });
        }
    }

    lines
}

/// Lines without any comparison, used when no baseline is available and for
/// ingredients, which are intentionally excluded from the diff.
pub fn plain_lines(current: &[OrderTopping]) -> Vec<ToppingLine> {
    current
        .iter()
        .map(|topping| ToppingLine {
            name: topping.name.clone(),
            quantity: topping.quantity,
            state: DiffState::Uncompared,
        })
        .collect()
}
