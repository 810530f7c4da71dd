//! Recipe text search
//!
//! Pure matching logic. Ingredient names come from a lookup table built once
//! per query, never from per-recipe store reads.

use std::collections::HashMap;

use crate::domain::entities::{Ingredient, Recipe};
use crate::domain::value_objects::IngredientId;

/// Lowercased ingredient names keyed by id
pub type IngredientNameIndex = HashMap<IngredientId, String>;

pub fn ingredient_name_index(ingredients: &[Ingredient]) -> IngredientNameIndex {
    ingredients
        .iter()
        .map(|ingredient| (ingredient.id, ingredient.name.to_lowercase()))
        .collect()
}

/// A normalized search needle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// `None` when the text is blank, meaning "no search filter"
    pub fn parse(text: &str) -> Option<Self> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            None
        } else {
            Some(Self(needle))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title, description, then ingredient names
    pub fn matches(&self, recipe: &Recipe, names: &IngredientNameIndex) -> bool {
        if recipe.title.to_lowercase().contains(&self.0) {
            return true;
        }
        if recipe
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&self.0))
        {
            return true;
        }
        recipe.ingredients.iter().any(|line| {
            names
                .get(&line.ingredient_id)
                .is_some_and(|name| name.contains(&self.0))
        })
    }
}
