//! Domain Entities
//!
//! Catalog records with identity:
//! - `Category` - groups recipes
//! - `Ingredient` - canonical, uniquely named ingredient
//! - `Recipe` - the published-or-not unit of content

mod category;
mod ingredient;
mod named;
mod recipe;

pub use category::Category;
pub use ingredient::Ingredient;
pub use named::NamedEntity;
pub use recipe::{Recipe, RecipeIngredient};
