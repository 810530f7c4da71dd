//! Recipe references typed on the command line

use crate::application::{Catalog, RecipeFilter};
use crate::domain::value_objects::{NormalizedName, RecipeId};
use crate::error::{CatalogError, CatalogResult, EntityKind};

/// Accept a recipe id, or the title of a published recipe.
///
/// Titles compare like names (trimmed, case-insensitive). When several
/// published recipes share a title the oldest one wins.
pub fn resolve_recipe(catalog: &Catalog, reference: &str) -> CatalogResult<RecipeId> {
    if let Ok(id) = reference.parse::<RecipeId>() {
        return Ok(id);
    }

    let wanted = NormalizedName::new(reference);
    catalog
        .recipes()
        .list(&RecipeFilter::new())?
        .into_iter()
        .find(|recipe| NormalizedName::new(&recipe.title) == wanted)
        .map(|recipe| recipe.id)
        .ok_or_else(|| CatalogError::not_found(EntityKind::Recipe, reference.trim()))
}
