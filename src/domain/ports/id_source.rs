//! IdSource port

use crate::domain::value_objects::{CategoryId, IngredientId, NormalizedName, RecipeId};

/// Assigns identifiers to new records.
///
/// Called once per record about to be stored. The name or title is passed
/// so a source may derive ids that stay the same across runs.
pub trait IdSource: Send + Sync {
    fn category_id(&self, name: &NormalizedName) -> CategoryId;
    fn ingredient_id(&self, name: &NormalizedName) -> IngredientId;
    fn recipe_id(&self, title: &NormalizedName) -> RecipeId;
}
