//! Recipe entity
//!
//! A recipe references its ingredients and category by id only, so renaming
//! an ingredient never requires touching the recipes that use it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    CategoryId, IngredientId, LifecycleAction, RecipeId, RecipeStatus,
};
use crate::error::CatalogResult;

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
    pub steps: Vec<String>,
    pub servings: u32,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub status: RecipeStatus,
}

impl Recipe {
    /// A fresh draft. Field validation happens before this is called.
    pub fn draft(
        title: String,
        description: Option<String>,
        ingredients: Vec<RecipeIngredient>,
        steps: Vec<String>,
        servings: u32,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: RecipeId::new(),
            title,
            description,
            ingredients,
            steps,
            servings,
            category_id,
            created_at: Utc::now(),
            status: RecipeStatus::Draft,
        }
    }

    pub fn with_id(mut self, id: RecipeId) -> Self {
        self.id = id;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.status.is_published()
    }

    pub fn references_ingredient(&self, id: &IngredientId) -> bool {
        self.ingredients.iter().any(|line| &line.ingredient_id == id)
    }

    pub fn ensure_mutable(&self, action: LifecycleAction) -> CatalogResult<()> {
        self.status.ensure_mutable(action)
    }

    pub fn publish(&mut self) -> CatalogResult<()> {
        self.status = self.status.publish()?;
        Ok(())
    }

    pub fn archive(&mut self) -> CatalogResult<()> {
        self.status = self.status.archive()?;
        Ok(())
    }
}
