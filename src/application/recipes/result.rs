//! Recipe query result types

use serde::Serialize;

use crate::domain::services::ShoppingLine;
use crate::domain::value_objects::{CategoryId, RecipeId, RecipeStatus};

/// Filter for `list`. Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub category_id: Option<CategoryId>,
    /// Takes precedence over `category_id` when both are set
    pub category_name: Option<String>,
    pub search: Option<String>,
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category_id(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn with_category_name(mut self, name: impl Into<String>) -> Self {
        self.category_name = Some(name.into());
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }
}

/// Why a requested recipe contributed nothing to a shopping list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotFound,
    NotPublished,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotFound => write!(f, "not found"),
            SkipReason::NotPublished => write!(f, "not published"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecipe {
    pub id: RecipeId,
    pub reason: SkipReason,
}

/// Consolidated ingredient requirements across several recipes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    pub lines: Vec<ShoppingLine>,
    pub skipped: Vec<SkippedRecipe>,
}

impl ShoppingList {
    /// Every requested recipe contributed
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn add_skipped(&mut self, id: RecipeId, reason: SkipReason) {
        self.skipped.push(SkippedRecipe { id, reason });
    }
}

/// Recipe counts per lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub draft: usize,
    pub published: usize,
    pub archived: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: RecipeStatus) {
        match status {
            RecipeStatus::Draft => self.draft += 1,
            RecipeStatus::Published => self.published += 1,
            RecipeStatus::Archived => self.archived += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.draft + self.published + self.archived
    }
}
