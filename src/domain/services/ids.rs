//! Id assignment
//!
//! `RandomIds` gives every record a fresh v4 id. `DerivedIds` hashes the
//! normalized name, so loading the same seed twice yields the same ids.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::ports::IdSource;
use crate::domain::value_objects::{CategoryId, IngredientId, NormalizedName, RecipeId};

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn category_id(&self, _name: &NormalizedName) -> CategoryId {
        CategoryId::new()
    }

    fn ingredient_id(&self, _name: &NormalizedName) -> IngredientId {
        IngredientId::new()
    }

    fn recipe_id(&self, _title: &NormalizedName) -> RecipeId {
        RecipeId::new()
    }
}

/// Name-based v5 ids.
///
/// The n-th request for the same name gets the key `name#n`, so recipes
/// sharing a title, or a name reused after a rename, never collide.
#[derive(Debug, Default)]
pub struct DerivedIds {
    issued: Mutex<HashMap<(&'static str, NormalizedName), u32>>,
}

impl DerivedIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(&self, collection: &'static str, name: &NormalizedName) -> String {
        // Counters stay consistent even if a holder panicked
        let mut issued = self.issued.lock().unwrap_or_else(PoisonError::into_inner);
        let count = issued.entry((collection, name.clone())).or_insert(0);
        let key = match *count {
            0 => name.to_string(),
            n => format!("{name}#{n}"),
        };
        *count += 1;
        key
    }
}

impl IdSource for DerivedIds {
    fn category_id(&self, name: &NormalizedName) -> CategoryId {
        CategoryId::derived(&self.key("category", name))
    }

    fn ingredient_id(&self, name: &NormalizedName) -> IngredientId {
        IngredientId::derived(&self.key("ingredient", name))
    }

    fn recipe_id(&self, title: &NormalizedName) -> RecipeId {
        RecipeId::derived(&self.key("recipe", title))
    }
}
