//! Application Layer
//!
//! Use cases that orchestrate the catalog.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Turns store outcomes into `CatalogError`s
//!
//! ## Use Cases
//!
//! - `IngredientUseCase` - Ingredient registry and name resolution
//! - `CategoryUseCase` - Category registry
//! - `RecipeUseCase` - Recipe engine: lifecycle, search, shopping lists, scaling
//! - `Catalog` - All three wired onto one store

pub mod catalog;
pub mod categories;
pub mod ingredients;
mod names;
pub mod recipes;
pub mod services;

pub use catalog::Catalog;
pub use categories::CategoryUseCase;
pub use ingredients::IngredientUseCase;
pub use recipes::{
    IngredientLineInput, NewRecipe, RecipeFilter, RecipePatch, RecipeUseCase, ShoppingList,
    SkipReason, SkippedRecipe, StatusCounts,
};
pub use services::{CategoryService, IngredientService, RecipeService};
