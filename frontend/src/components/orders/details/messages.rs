use std::collections::HashMap;

use common::model::catalog::BaseRecipe;
use common::model::order::OrderDetail;

pub enum Msg {
    OrderLoaded(OrderDetail),
    OrderFailed,
    CatalogLoaded(HashMap<String, String>),
    RecipeLoaded { pizza_id: String, recipe: BaseRecipe },
    RecipeFailed { pizza_id: String },
    SetStatus(String),
    StatusSaved(String),
}
