//! Portion scaling
//!
//! Produces a transient copy; the input recipe is borrowed, never mutated.

use crate::domain::entities::Recipe;
use crate::error::{CatalogError, CatalogResult};

/// Scale every quantity by `target / recipe.servings`, without rounding
pub fn scale_recipe(recipe: &Recipe, target: u32) -> CatalogResult<Recipe> {
    if target == 0 {
        return Err(CatalogError::validation(
            "servings",
            "Servings must be greater than 0",
        ));
    }

    let factor = f64::from(target) / f64::from(recipe.servings);
    let mut scaled = recipe.clone();
    scaled.servings = target;
    for line in &mut scaled.ingredients {
        line.quantity *= factor;
    }
    Ok(scaled)
}
