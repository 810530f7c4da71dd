//! recipebook - recipe catalog engine
//!
//! Manages recipes, their ingredients and categories over a pluggable store.
//! Recipes move through a draft → published → archived workflow; only
//! published recipes are readable, searchable, scalable and shoppable.
//!
//! Ingredient names are unique under trimmed, case-insensitive comparison,
//! and recipes refer to ingredients by id, so a rename shows up everywhere.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    Catalog, CategoryService, IngredientLineInput, IngredientService, NewRecipe, RecipeFilter,
    RecipePatch, RecipeService, ShoppingList, SkipReason, SkippedRecipe, StatusCounts,
};
pub use config::Config;
pub use domain::entities::{Category, Ingredient, Recipe, RecipeIngredient};
pub use domain::value_objects::{CategoryId, IngredientId, RecipeId, RecipeStatus};
pub use error::{CatalogError, CatalogResult, EntityKind, ErrorKind};
pub use infrastructure::InMemoryCatalogStore;
