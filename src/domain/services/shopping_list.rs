//! Shopping list consolidation
//!
//! Quantities are summed per (ingredient, unit). The same ingredient in two
//! different units yields two lines; no unit conversion happens here.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::entities::Recipe;
use crate::domain::value_objects::IngredientId;

/// One consolidated line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingLine {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Accumulates recipe ingredient lines, preserving first-appearance order
#[derive(Debug, Default)]
pub struct ShoppingListBuilder {
    totals: IndexMap<(IngredientId, String), f64>,
}

impl ShoppingListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_recipe(&mut self, recipe: &Recipe) {
        for line in &recipe.ingredients {
            *self
                .totals
                .entry((line.ingredient_id, line.unit.clone()))
                .or_insert(0.0) += line.quantity;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Resolve display names and produce the final lines
    pub fn build<F>(self, mut name_of: F) -> Vec<ShoppingLine>
    where
        F: FnMut(&IngredientId) -> Option<String>,
    {
        self.totals
            .into_iter()
            .map(|((ingredient_id, unit), quantity)| ShoppingLine {
                name: name_of(&ingredient_id).unwrap_or_default(),
                ingredient_id,
                quantity,
                unit,
            })
            .collect()
    }
}
