//! Ingredient Registry
//!
//! Owns ingredient name uniqueness and resolves free-text names to
//! canonical ingredients for the recipe engine.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::names::{claimed, removed, renamed, required_name};
use crate::application::services::IngredientService;
use crate::domain::entities::Ingredient;
use crate::domain::ports::{CatalogStore, IdSource, NameClaim};
use crate::domain::value_objects::{IngredientId, NormalizedName};
use crate::error::{CatalogError, CatalogResult, EntityKind};

pub struct IngredientUseCase<S: CatalogStore> {
    store: Arc<S>,
    ids: Arc<dyn IdSource>,
}

impl<S: CatalogStore> IngredientUseCase<S> {
    pub fn new(store: Arc<S>, ids: Arc<dyn IdSource>) -> Self {
        Self { store, ids }
    }

    fn record(&self, name: String) -> Ingredient {
        let id = self.ids.ingredient_id(&NormalizedName::new(&name));
        Ingredient::new(name).with_id(id)
    }
}

impl<S: CatalogStore> IngredientService for IngredientUseCase<S> {
    fn list(&self) -> CatalogResult<Vec<Ingredient>> {
        Ok(self.store.ingredients()?)
    }

    fn get(&self, id: &IngredientId) -> CatalogResult<Ingredient> {
        self.store
            .ingredient(id)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Ingredient, id))
    }

    fn find_by_name(&self, name: &str) -> CatalogResult<Option<Ingredient>> {
        let key = NormalizedName::new(name);
        if key.is_empty() {
            return Ok(None);
        }
        Ok(self.store.ingredient_by_name(&key)?)
    }

    fn create(&self, name: &str) -> CatalogResult<Ingredient> {
        let name = required_name(name)?;
        let ingredient = claimed(
            EntityKind::Ingredient,
            self.store.claim_ingredient(self.record(name))?,
        )?;
        info!(id = %ingredient.id, name = %ingredient.name, "ingredient created");
        Ok(ingredient)
    }

    fn update(&self, id: &IngredientId, name: Option<&str>) -> CatalogResult<Ingredient> {
        let Some(name) = name else {
            return self.get(id);
        };
        let name = required_name(name)?;
        let ingredient = renamed(
            EntityKind::Ingredient,
            id,
            self.store.rename_ingredient(id, name)?,
        )?;
        info!(id = %ingredient.id, name = %ingredient.name, "ingredient renamed");
        Ok(ingredient)
    }

    fn delete(&self, id: &IngredientId) -> CatalogResult<()> {
        let result = removed(
            EntityKind::Ingredient,
            id,
            self.store.remove_unreferenced_ingredient(id)?,
        );
        match &result {
            Ok(ingredient) => info!(id = %id, name = %ingredient.name, "ingredient deleted"),
            Err(err) => warn!(id = %id, error = %err, "ingredient delete rejected"),
        }
        result.map(|_| ())
    }

    fn resolve(&self, name: &str) -> CatalogResult<Ingredient> {
        let name = required_name(name)?;
        if let Some(existing) = self.store.ingredient_by_name(&NormalizedName::new(&name))? {
            debug!(id = %existing.id, name = %existing.name, "ingredient resolved");
            return Ok(existing);
        }
        match self.store.claim_ingredient(self.record(name))? {
            NameClaim::Inserted(ingredient) => {
                info!(
                    id = %ingredient.id,
                    name = %ingredient.name,
                    "ingredient created on first reference"
                );
                Ok(ingredient)
            }
            NameClaim::Taken(existing) => {
                debug!(id = %existing.id, name = %existing.name, "ingredient resolved");
                Ok(existing)
            }
        }
    }
}
