//! RecipeRepository port
//!
//! Writes are conditional: inserts and replacements are rejected when the
//! recipe points at a category or ingredient the store no longer holds, and
//! replacements and removals only apply while the stored recipe still has
//! the status the caller validated against.

use crate::domain::entities::Recipe;
use crate::domain::value_objects::{RecipeId, RecipeStatus};

use super::store::{RecipeWrite, StoreResult};

pub trait RecipeRepository: Send + Sync {
    /// All recipes in insertion order, regardless of status
    fn recipes(&self) -> StoreResult<Vec<Recipe>>;

    fn recipe(&self, id: &RecipeId) -> StoreResult<Option<Recipe>>;

    fn insert_recipe(&self, recipe: Recipe) -> StoreResult<RecipeWrite<Recipe>>;

    fn replace_recipe_if(
        &self,
        recipe: Recipe,
        expected: RecipeStatus,
    ) -> StoreResult<RecipeWrite<Recipe>>;

    fn remove_recipe_if(
        &self,
        id: &RecipeId,
        expected: RecipeStatus,
    ) -> StoreResult<RecipeWrite<Recipe>>;
}
