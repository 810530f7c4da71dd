//! Recipe Engine
//!
//! Validates and stores recipes, runs the publication workflow, and answers
//! the published-only read surface (get, list, shopping lists, scaling).

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::{CategoryService, IngredientService, RecipeService};
use crate::domain::entities::{Recipe, RecipeIngredient};
use crate::domain::ports::{CatalogStore, IdSource, RecipeWrite};
use crate::domain::services::{
    ingredient_name_index, scale_recipe, SearchQuery, ShoppingListBuilder,
};
use crate::domain::value_objects::{
    CategoryId, LifecycleAction, NormalizedName, RecipeId, RecipeStatus,
};
use crate::error::{CatalogError, CatalogResult, EntityKind, ErrorKind};

use super::input::{IngredientLineInput, NewRecipe, RecipePatch};
use super::result::{RecipeFilter, ShoppingList, SkipReason, StatusCounts};
use super::validation;

pub struct RecipeUseCase<S: CatalogStore> {
    store: Arc<S>,
    categories: Arc<dyn CategoryService>,
    ingredients: Arc<dyn IngredientService>,
    ids: Arc<dyn IdSource>,
}

impl<S: CatalogStore> RecipeUseCase<S> {
    pub fn new(
        store: Arc<S>,
        categories: Arc<dyn CategoryService>,
        ingredients: Arc<dyn IngredientService>,
        ids: Arc<dyn IdSource>,
    ) -> Self {
        Self {
            store,
            categories,
            ingredients,
            ids,
        }
    }

    /// Any recipe by id, regardless of status
    fn load(&self, id: &RecipeId) -> CatalogResult<Recipe> {
        self.store
            .recipe(id)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Recipe, id))
    }

    fn ensure_category(&self, id: &CategoryId) -> CatalogResult<()> {
        match self.categories.get(id) {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(category_missing()),
            Err(err) => Err(err),
        }
    }

    /// Validate every line first, then resolve names in input order
    fn resolve_lines(
        &self,
        lines: Vec<IngredientLineInput>,
    ) -> CatalogResult<Vec<RecipeIngredient>> {
        validation::ingredient_lines(lines)?
            .into_iter()
            .map(|line| {
                let ingredient = self.ingredients.resolve(&line.name)?;
                Ok(RecipeIngredient {
                    ingredient_id: ingredient.id,
                    quantity: line.quantity,
                    unit: line.unit,
                })
            })
            .collect()
    }

    fn transition(
        &self,
        id: &RecipeId,
        action: LifecycleAction,
        apply: fn(&mut Recipe) -> CatalogResult<()>,
    ) -> CatalogResult<Recipe> {
        let current = self.load(id)?;
        let mut next = current.clone();
        apply(&mut next)?;

        let recipe = written(id, action, self.store.replace_recipe_if(next, current.status)?)?;
        info!(
            id = %id,
            %action,
            from = %current.status,
            to = %recipe.status,
            "recipe status changed"
        );
        Ok(recipe)
    }
}

impl<S: CatalogStore> RecipeService for RecipeUseCase<S> {
    fn list(&self, filter: &RecipeFilter) -> CatalogResult<Vec<Recipe>> {
        let mut category_id = filter.category_id;

        if let Some(name) = filter.category_name.as_deref().filter(|n| !n.trim().is_empty()) {
            match self.categories.find_by_name(name)? {
                Some(category) => category_id = Some(category.id),
                None => {
                    debug!(category = %name.trim(), "unknown category name, empty result");
                    return Ok(Vec::new());
                }
            }
        }

        let mut recipes = self.store.recipes()?;

        if let Some(category_id) = category_id {
            recipes.retain(|recipe| recipe.category_id == category_id);
        }

        if let Some(query) = filter.search.as_deref().and_then(SearchQuery::parse) {
            let names = ingredient_name_index(&self.ingredients.list()?);
            recipes.retain(|recipe| query.matches(recipe, &names));
        }

        recipes.retain(Recipe::is_visible);
        debug!(count = recipes.len(), "recipes listed");
        Ok(recipes)
    }

    fn get(&self, id: &RecipeId) -> CatalogResult<Recipe> {
        let recipe = self.load(id)?;
        if !recipe.is_visible() {
            return Err(CatalogError::not_published(id));
        }
        Ok(recipe)
    }

    fn create(&self, input: NewRecipe) -> CatalogResult<Recipe> {
        let title = validation::title(&input.title)?;
        self.ensure_category(&input.category_id)?;
        let ingredients = self.resolve_lines(input.ingredients)?;
        let steps = input.steps;
        let servings = validation::servings(input.servings)?;

        let id = self.ids.recipe_id(&NormalizedName::new(&title));
        let draft = Recipe::draft(
            title,
            validation::description(input.description),
            ingredients,
            steps,
            servings,
            input.category_id,
        )
        .with_id(id);
        let recipe = written(&id, LifecycleAction::Edit, self.store.insert_recipe(draft)?)?;
        info!(id = %recipe.id, title = %recipe.title, "recipe drafted");
        Ok(recipe)
    }

    fn update(&self, id: &RecipeId, patch: RecipePatch) -> CatalogResult<Recipe> {
        let current = self.load(id)?;
        current.ensure_mutable(LifecycleAction::Edit)?;

        let mut updated = current.clone();
        if let Some(category_id) = patch.category_id {
            self.ensure_category(&category_id)?;
            updated.category_id = category_id;
        }
        if let Some(title) = patch.title {
            updated.title = validation::title(&title)?;
        }
        if let Some(description) = patch.description {
            updated.description = validation::description(Some(description));
        }
        if let Some(steps) = patch.steps {
            updated.steps = steps;
        }
        if let Some(servings) = patch.servings {
            updated.servings = validation::servings(servings)?;
        }
        if let Some(lines) = patch.ingredients {
            updated.ingredients = self.resolve_lines(lines)?;
        }

        let recipe = written(
            id,
            LifecycleAction::Edit,
            self.store.replace_recipe_if(updated, RecipeStatus::Draft)?,
        )?;
        info!(id = %id, "recipe updated");
        Ok(recipe)
    }

    fn delete(&self, id: &RecipeId) -> CatalogResult<()> {
        let removed = written(
            id,
            LifecycleAction::Delete,
            self.store.remove_recipe_if(id, RecipeStatus::Draft)?,
        )?;
        info!(id = %id, title = %removed.title, "recipe deleted");
        Ok(())
    }

    fn publish(&self, id: &RecipeId) -> CatalogResult<Recipe> {
        self.transition(id, LifecycleAction::Publish, Recipe::publish)
    }

    fn archive(&self, id: &RecipeId) -> CatalogResult<Recipe> {
        self.transition(id, LifecycleAction::Archive, Recipe::archive)
    }

    fn shopping_list(&self, ids: &[RecipeId]) -> CatalogResult<ShoppingList> {
        let mut list = ShoppingList::default();
        let mut builder = ShoppingListBuilder::new();
        let mut seen = HashSet::new();

        for id in ids {
            if !seen.insert(*id) {
                continue;
            }
            match self.store.recipe(id)? {
                None => list.add_skipped(*id, SkipReason::NotFound),
                Some(recipe) if !recipe.is_visible() => {
                    list.add_skipped(*id, SkipReason::NotPublished)
                }
                Some(recipe) => builder.add_recipe(&recipe),
            }
        }

        if !builder.is_empty() {
            let names: HashMap<_, _> = self
                .ingredients
                .list()?
                .into_iter()
                .map(|ingredient| (ingredient.id, ingredient.name))
                .collect();
            list.lines = builder.build(|id| names.get(id).cloned());
        }

        debug!(
            lines = list.lines.len(),
            skipped = list.skipped.len(),
            "shopping list built"
        );
        Ok(list)
    }

    fn scale(&self, id: &RecipeId, servings: u32) -> CatalogResult<Recipe> {
        let recipe = self.get(id)?;
        scale_recipe(&recipe, servings)
    }

    fn status_counts(&self) -> CatalogResult<StatusCounts> {
        let mut counts = StatusCounts::default();
        for recipe in self.store.recipes()? {
            counts.record(recipe.status);
        }
        Ok(counts)
    }
}

fn category_missing() -> CatalogError {
    CatalogError::validation("categoryId", "Category does not exist")
}

/// Translate a conditional store write into the catalog error taxonomy
fn written(
    id: &RecipeId,
    action: LifecycleAction,
    outcome: RecipeWrite<Recipe>,
) -> CatalogResult<Recipe> {
    match outcome {
        RecipeWrite::Applied(recipe) => Ok(recipe),
        RecipeWrite::Missing => Err(CatalogError::not_found(EntityKind::Recipe, id)),
        RecipeWrite::StatusChanged(status) => Err(status.reject(action)),
        RecipeWrite::UnknownCategory(_) => Err(category_missing()),
        RecipeWrite::UnknownIngredient(ingredient) => Err(CatalogError::validation(
            "ingredients",
            format!("Ingredient {ingredient} no longer exists"),
        )),
    }
}
