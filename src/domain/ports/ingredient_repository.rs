//! IngredientRepository port

use crate::domain::entities::Ingredient;
use crate::domain::value_objects::{IngredientId, NormalizedName};

use super::store::{NameClaim, Removal, Rename, StoreResult};

pub trait IngredientRepository: Send + Sync {
    /// All ingredients in insertion order
    fn ingredients(&self) -> StoreResult<Vec<Ingredient>>;

    fn ingredient(&self, id: &IngredientId) -> StoreResult<Option<Ingredient>>;

    fn ingredient_by_name(&self, name: &NormalizedName) -> StoreResult<Option<Ingredient>>;

    /// Insert unless an ingredient with the same normalized name exists
    fn claim_ingredient(&self, ingredient: Ingredient) -> StoreResult<NameClaim<Ingredient>>;

    /// Rename unless the new normalized name belongs to another ingredient
    fn rename_ingredient(
        &self,
        id: &IngredientId,
        name: String,
    ) -> StoreResult<Rename<Ingredient>>;

    /// Remove unless any recipe, in any status, references it
    fn remove_unreferenced_ingredient(
        &self,
        id: &IngredientId,
    ) -> StoreResult<Removal<Ingredient>>;
}
