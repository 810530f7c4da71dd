//! Service contracts
//!
//! Each registry and the recipe engine is consumed through one of these
//! traits, so callers never depend on which store backs them.

use crate::application::recipes::{
    NewRecipe, RecipeFilter, RecipePatch, ShoppingList, StatusCounts,
};
use crate::domain::entities::{Category, Ingredient, Recipe};
use crate::domain::value_objects::{CategoryId, IngredientId, RecipeId};
use crate::error::CatalogResult;

pub trait IngredientService: Send + Sync {
    fn list(&self) -> CatalogResult<Vec<Ingredient>>;
    fn get(&self, id: &IngredientId) -> CatalogResult<Ingredient>;
    /// Trimmed, case-insensitive exact match; `None` is not an error
    fn find_by_name(&self, name: &str) -> CatalogResult<Option<Ingredient>>;
    fn create(&self, name: &str) -> CatalogResult<Ingredient>;
    /// `None` leaves the name untouched
    fn update(&self, id: &IngredientId, name: Option<&str>) -> CatalogResult<Ingredient>;
    fn delete(&self, id: &IngredientId) -> CatalogResult<()>;
    /// Existing ingredient with this name, or a newly created one
    fn resolve(&self, name: &str) -> CatalogResult<Ingredient>;
}

pub trait CategoryService: Send + Sync {
    fn list(&self) -> CatalogResult<Vec<Category>>;
    fn get(&self, id: &CategoryId) -> CatalogResult<Category>;
    fn find_by_name(&self, name: &str) -> CatalogResult<Option<Category>>;
    fn create(&self, name: &str) -> CatalogResult<Category>;
    fn update(&self, id: &CategoryId, name: Option<&str>) -> CatalogResult<Category>;
    fn delete(&self, id: &CategoryId) -> CatalogResult<()>;
}

pub trait RecipeService: Send + Sync {
    /// Published recipes matching `filter`
    fn list(&self, filter: &RecipeFilter) -> CatalogResult<Vec<Recipe>>;
    /// A published recipe; drafts and archived recipes are NotFound
    fn get(&self, id: &RecipeId) -> CatalogResult<Recipe>;
    fn create(&self, input: NewRecipe) -> CatalogResult<Recipe>;
    fn update(&self, id: &RecipeId, patch: RecipePatch) -> CatalogResult<Recipe>;
    fn delete(&self, id: &RecipeId) -> CatalogResult<()>;
    fn publish(&self, id: &RecipeId) -> CatalogResult<Recipe>;
    fn archive(&self, id: &RecipeId) -> CatalogResult<Recipe>;
    fn shopping_list(&self, ids: &[RecipeId]) -> CatalogResult<ShoppingList>;
    /// A transient copy for `servings` portions; nothing is stored
    fn scale(&self, id: &RecipeId, servings: u32) -> CatalogResult<Recipe>;
    fn status_counts(&self) -> CatalogResult<StatusCounts>;
}
