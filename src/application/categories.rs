//! Category Registry
//!
//! Same uniqueness discipline as ingredients. Categories still used by a
//! recipe cannot be deleted.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::names::{claimed, removed, renamed, required_name};
use crate::application::services::CategoryService;
use crate::domain::entities::Category;
use crate::domain::ports::{CatalogStore, IdSource};
use crate::domain::value_objects::{CategoryId, NormalizedName};
use crate::error::{CatalogError, CatalogResult, EntityKind};

pub struct CategoryUseCase<S: CatalogStore> {
    store: Arc<S>,
    ids: Arc<dyn IdSource>,
}

impl<S: CatalogStore> CategoryUseCase<S> {
    pub fn new(store: Arc<S>, ids: Arc<dyn IdSource>) -> Self {
        Self { store, ids }
    }
}

impl<S: CatalogStore> CategoryService for CategoryUseCase<S> {
    fn list(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.store.categories()?)
    }

    fn get(&self, id: &CategoryId) -> CatalogResult<Category> {
        self.store
            .category(id)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Category, id))
    }

    fn find_by_name(&self, name: &str) -> CatalogResult<Option<Category>> {
        let key = NormalizedName::new(name);
        if key.is_empty() {
            return Ok(None);
        }
        Ok(self.store.category_by_name(&key)?)
    }

    fn create(&self, name: &str) -> CatalogResult<Category> {
        let name = required_name(name)?;
        let id = self.ids.category_id(&NormalizedName::new(&name));
        let category = claimed(
            EntityKind::Category,
            self.store.claim_category(Category::new(name).with_id(id))?,
        )?;
        info!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    fn update(&self, id: &CategoryId, name: Option<&str>) -> CatalogResult<Category> {
        let Some(name) = name else {
            return self.get(id);
        };
        let name = required_name(name)?;
        let category = renamed(
            EntityKind::Category,
            id,
            self.store.rename_category(id, name)?,
        )?;
        info!(id = %category.id, name = %category.name, "category renamed");
        Ok(category)
    }

    fn delete(&self, id: &CategoryId) -> CatalogResult<()> {
        let result = removed(
            EntityKind::Category,
            id,
            self.store.remove_unreferenced_category(id)?,
        );
        match &result {
            Ok(category) => info!(id = %id, name = %category.name, "category deleted"),
            Err(err) => warn!(id = %id, error = %err, "category delete rejected"),
        }
        result.map(|_| ())
    }
}
