//! Catalog
//!
//! Wires the two registries and the recipe engine onto one shared store.

use std::sync::Arc;

use crate::application::categories::CategoryUseCase;
use crate::application::ingredients::IngredientUseCase;
use crate::application::recipes::RecipeUseCase;
use crate::application::services::{CategoryService, IngredientService, RecipeService};
use crate::domain::ports::{CatalogStore, IdSource};
use crate::domain::services::RandomIds;

/// Entry point for callers that want all three services at once
#[derive(Clone)]
pub struct Catalog {
    categories: Arc<dyn CategoryService>,
    ingredients: Arc<dyn IngredientService>,
    recipes: Arc<dyn RecipeService>,
}

impl Catalog {
    /// Catalog whose new records get random ids
    pub fn new<S: CatalogStore + 'static>(store: Arc<S>) -> Self {
        Self::with_ids(store, Arc::new(RandomIds))
    }

    pub fn with_ids<S: CatalogStore + 'static>(store: Arc<S>, ids: Arc<dyn IdSource>) -> Self {
        let categories: Arc<dyn CategoryService> =
            Arc::new(CategoryUseCase::new(store.clone(), ids.clone()));
        let ingredients: Arc<dyn IngredientService> =
            Arc::new(IngredientUseCase::new(store.clone(), ids.clone()));
        let recipes: Arc<dyn RecipeService> = Arc::new(RecipeUseCase::new(
            store,
            categories.clone(),
            ingredients.clone(),
            ids,
        ));

        Self {
            categories,
            ingredients,
            recipes,
        }
    }

    pub fn categories(&self) -> &dyn CategoryService {
        self.categories.as_ref()
    }

    pub fn ingredients(&self) -> &dyn IngredientService {
        self.ingredients.as_ref()
    }

    pub fn recipes(&self) -> &dyn RecipeService {
        self.recipes.as_ref()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").finish_non_exhaustive()
    }
}
