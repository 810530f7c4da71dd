//! TOML Seed Catalog
//!
//! Describes a starting catalog in TOML and loads it through the public
//! services, so a seed can never bypass uniqueness, validation or the
//! publication workflow.
//!
//! ```toml
//! categories = ["Desserts"]
//! ingredients = ["Salt"]
//!
//! [[recipes]]
//! title = "Cake"
//! category = "Desserts"
//! servings = 4
//! steps = ["Mix", "Bake"]
//! status = "published"
//! ingredients = [{ name = "Sugar", quantity = 2, unit = "cup" }]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::application::recipes::{coerce_number, coerce_string_list};
use crate::application::{Catalog, IngredientLineInput, NewRecipe};
use crate::domain::value_objects::RecipeStatus;
use crate::error::CatalogError;

/// Errors raised while reading or applying a seed file
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("failed to parse seed file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("recipe '{recipe}' names unknown category '{category}'")]
    UnknownCategory { recipe: String, category: String },

    #[error("{context}: {source}")]
    Rejected {
        context: String,
        #[source]
        source: CatalogError,
    },
}

impl SeedError {
    fn rejected(context: impl Into<String>) -> impl FnOnce(CatalogError) -> SeedError {
        let context = context.into();
        move |source| SeedError::Rejected { context, source }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeedCatalog {
    #[serde(default)]
    pub categories: Vec<String>,
    /// Ingredients that exist up front, whether or not a recipe uses them
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub recipes: Vec<SeedRecipe>,
}

/// One recipe; its category is referenced by name
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedRecipe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientLineInput>,
    #[serde(default, deserialize_with = "coerce_string_list")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "coerce_number")]
    pub servings: f64,
    /// Reached through publish/archive after the draft is created
    #[serde(default)]
    pub status: RecipeStatus,
}

/// What a seed added to the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub ingredients: usize,
    pub recipes: usize,
}

/// Read and parse a seed file without touching any catalog
pub fn load_seed(path: &Path) -> Result<SeedCatalog, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|e| SeedError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let seed = SeedCatalog::from_toml_str(&content).map_err(|message| SeedError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    debug!(path = %path.display(), recipes = seed.recipes.len(), "seed file parsed");
    Ok(seed)
}

impl SeedCatalog {
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Create everything in order: categories, ingredients, then recipes.
    ///
    /// Stops at the first rejected entry; whatever was created before it
    /// stays in the catalog.
    pub fn apply(&self, catalog: &Catalog) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();

        for name in &self.categories {
            catalog
                .categories()
                .create(name)
                .map_err(SeedError::rejected(format!("category '{name}'")))?;
            summary.categories += 1;
        }

        for name in &self.ingredients {
            catalog
                .ingredients()
                .create(name)
                .map_err(SeedError::rejected(format!("ingredient '{name}'")))?;
            summary.ingredients += 1;
        }

        for recipe in &self.recipes {
            self.apply_recipe(catalog, recipe)?;
            summary.recipes += 1;
        }

        info!(
            categories = summary.categories,
            ingredients = summary.ingredients,
            recipes = summary.recipes,
            "seed applied"
        );
        Ok(summary)
    }

    fn apply_recipe(&self, catalog: &Catalog, seed: &SeedRecipe) -> Result<(), SeedError> {
        let context = format!("recipe '{}'", seed.title.trim());
        let category = catalog
            .categories()
            .find_by_name(&seed.category)
            .map_err(SeedError::rejected(context.clone()))?
            .ok_or_else(|| SeedError::UnknownCategory {
                recipe: seed.title.trim().to_string(),
                category: seed.category.clone(),
            })?;

        let draft = catalog
            .recipes()
            .create(NewRecipe {
                title: seed.title.clone(),
                description: seed.description.clone(),
                ingredients: seed.ingredients.clone(),
                steps: seed.steps.clone(),
                servings: seed.servings,
                category_id: category.id,
            })
            .map_err(SeedError::rejected(context.clone()))?;

        if seed.status != RecipeStatus::Draft {
            catalog
                .recipes()
                .publish(&draft.id)
                .map_err(SeedError::rejected(context.clone()))?;
        }
        if seed.status == RecipeStatus::Archived {
            catalog
                .recipes()
                .archive(&draft.id)
                .map_err(SeedError::rejected(context))?;
        }
        Ok(())
    }
}
