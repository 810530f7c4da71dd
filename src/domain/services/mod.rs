//! Domain Services
//!
//! Catalog logic with no store access: search, aggregation, scaling and
//! id assignment.

mod ids;
mod scaling;
mod search;
mod shopping_list;

pub use ids::{DerivedIds, RandomIds};
pub use scaling::scale_recipe;
pub use search::{ingredient_name_index, IngredientNameIndex, SearchQuery};
pub use shopping_list::{ShoppingLine, ShoppingListBuilder};
