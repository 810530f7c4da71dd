//! In-memory catalog store
//!
//! All three collections live behind one mutex so that guarded deletes and
//! recipe writes can check one collection against another atomically.
//! Nothing is persisted across process restarts.

use std::sync::{Mutex, MutexGuard};

use indexmap::IndexMap;

use crate::domain::entities::{Category, Ingredient, Recipe};
use crate::domain::ports::{
    CategoryRepository, IngredientRepository, NameClaim, RecipeRepository, RecipeWrite, Removal,
    Rename, StoreError, StoreResult,
};
use crate::domain::value_objects::{
    CategoryId, IngredientId, NormalizedName, RecipeId, RecipeStatus,
};

use super::named_table::NamedTable;

#[derive(Default)]
struct Tables {
    categories: NamedTable<Category>,
    ingredients: NamedTable<Ingredient>,
    recipes: IndexMap<RecipeId, Recipe>,
}

impl Tables {
    /// First dangling reference of `recipe`, if any
    fn dangling(&self, recipe: &Recipe) -> Option<RecipeWrite<Recipe>> {
        if !self.categories.contains(&recipe.category_id) {
            return Some(RecipeWrite::UnknownCategory(recipe.category_id));
        }
        recipe
            .ingredients
            .iter()
            .find(|line| !self.ingredients.contains(&line.ingredient_id))
            .map(|line| RecipeWrite::UnknownIngredient(line.ingredient_id))
    }
}

#[derive(Default)]
pub struct InMemoryCatalogStore {
    tables: Mutex<Tables>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self, collection: &'static str) -> StoreResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Poisoned { collection })
    }
}

impl CategoryRepository for InMemoryCatalogStore {
    fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.lock("categories")?.categories.all())
    }

    fn category(&self, id: &CategoryId) -> StoreResult<Option<Category>> {
        Ok(self.lock("categories")?.categories.get(id))
    }

    fn category_by_name(&self, name: &NormalizedName) -> StoreResult<Option<Category>> {
        Ok(self.lock("categories")?.categories.find(name))
    }

    fn claim_category(&self, category: Category) -> StoreResult<NameClaim<Category>> {
        Ok(self.lock("categories")?.categories.claim(category))
    }

    fn rename_category(&self, id: &CategoryId, name: String) -> StoreResult<Rename<Category>> {
        Ok(self.lock("categories")?.categories.rename(id, name))
    }

    fn remove_unreferenced_category(&self, id: &CategoryId) -> StoreResult<Removal<Category>> {
        let mut tables = self.lock("categories")?;
        if !tables.categories.contains(id) {
            return Ok(Removal::Missing);
        }
        let users = tables
            .recipes
            .values()
            .filter(|recipe| &recipe.category_id == id)
            .count();
        if users > 0 {
            return Ok(Removal::Referenced(users));
        }
        Ok(tables
            .categories
            .remove(id)
            .map_or(Removal::Missing, Removal::Removed))
    }
}

impl IngredientRepository for InMemoryCatalogStore {
    fn ingredients(&self) -> StoreResult<Vec<Ingredient>> {
        Ok(self.lock("ingredients")?.ingredients.all())
    }

    fn ingredient(&self, id: &IngredientId) -> StoreResult<Option<Ingredient>> {
        Ok(self.lock("ingredients")?.ingredients.get(id))
    }

    fn ingredient_by_name(&self, name: &NormalizedName) -> StoreResult<Option<Ingredient>> {
        Ok(self.lock("ingredients")?.ingredients.find(name))
    }

    fn claim_ingredient(&self, ingredient: Ingredient) -> StoreResult<NameClaim<Ingredient>> {
        Ok(self.lock("ingredients")?.ingredients.claim(ingredient))
    }

    fn rename_ingredient(
        &self,
        id: &IngredientId,
        name: String,
    ) -> StoreResult<Rename<Ingredient>> {
        Ok(self.lock("ingredients")?.ingredients.rename(id, name))
    }

    fn remove_unreferenced_ingredient(
        &self,
        id: &IngredientId,
    ) -> StoreResult<Removal<Ingredient>> {
        let mut tables = self.lock("ingredients")?;
        if !tables.ingredients.contains(id) {
            return Ok(Removal::Missing);
        }
        let users = tables
            .recipes
            .values()
            .filter(|recipe| recipe.references_ingredient(id))
            .count();
        if users > 0 {
            return Ok(Removal::Referenced(users));
        }
        Ok(tables
            .ingredients
            .remove(id)
            .map_or(Removal::Missing, Removal::Removed))
    }
}

impl RecipeRepository for InMemoryCatalogStore {
    fn recipes(&self) -> StoreResult<Vec<Recipe>> {
        Ok(self.lock("recipes")?.recipes.values().cloned().collect())
    }

    fn recipe(&self, id: &RecipeId) -> StoreResult<Option<Recipe>> {
        Ok(self.lock("recipes")?.recipes.get(id).cloned())
    }

    fn insert_recipe(&self, recipe: Recipe) -> StoreResult<RecipeWrite<Recipe>> {
        let mut tables = self.lock("recipes")?;
        if let Some(rejection) = tables.dangling(&recipe) {
            return Ok(rejection);
        }
        tables.recipes.insert(recipe.id, recipe.clone());
        Ok(RecipeWrite::Applied(recipe))
    }

    fn replace_recipe_if(
        &self,
        recipe: Recipe,
        expected: RecipeStatus,
    ) -> StoreResult<RecipeWrite<Recipe>> {
        let mut tables = self.lock("recipes")?;
        match tables.recipes.get(&recipe.id) {
            None => return Ok(RecipeWrite::Missing),
            Some(current) if current.status != expected => {
                return Ok(RecipeWrite::StatusChanged(current.status));
            }
            Some(_) => {}
        }
        if let Some(rejection) = tables.dangling(&recipe) {
            return Ok(rejection);
        }
        tables.recipes.insert(recipe.id, recipe.clone());
        Ok(RecipeWrite::Applied(recipe))
    }

    fn remove_recipe_if(
        &self,
        id: &RecipeId,
        expected: RecipeStatus,
    ) -> StoreResult<RecipeWrite<Recipe>> {
        let mut tables = self.lock("recipes")?;
        match tables.recipes.get(id) {
            None => Ok(RecipeWrite::Missing),
            Some(current) if current.status != expected => {
                Ok(RecipeWrite::StatusChanged(current.status))
            }
            Some(_) => Ok(tables
                .recipes
                .shift_remove(id)
                .map_or(RecipeWrite::Missing, RecipeWrite::Applied)),
        }
    }
}
