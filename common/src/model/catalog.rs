//! Catalog shapes consumed as comparison baselines and lookup tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A pizza's out-of-the-box configuration, returned by
/// `GET /getPizzaById/{id}`. Used only as a comparison baseline for the
/// modification differ; never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRecipe {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub default_toppings: Vec<DefaultTopping>,
    #[serde(default)]
    pub default_ingredients: Vec<DefaultTopping>,
    #[serde(default)]
    pub base: Option<String>,
}

/// One entry of a pizza's default recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultTopping {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default = "default_include")]
    pub include: bool,
}

impl DefaultTopping {
    pub fn new(name: &str, quantity: u32) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            include: true,
        }
    }
}

/// Combined payload of the sides/drinks catalog endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidesDrinksCatalog {
    #[serde(default)]
    pub sides: Vec<CatalogEntry>,
    #[serde(default)]
    pub drinks: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

impl SidesDrinksCatalog {
    /// Flattens both lists into one id → display-name table. Built once per
    /// view; selection identifiers that miss the table render verbatim.
    pub fn into_lookup(self) -> HashMap<String, String> {
        self.sides
            .into_iter()
            .chain(self.drinks)
            .map(|entry| (entry.id, entry.name))
            .collect()
    }
}

fn default_quantity() -> u32 {
    1
}

fn default_include() -> bool {
    true
}
