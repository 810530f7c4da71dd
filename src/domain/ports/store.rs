//! Shared store outcomes
//!
//! Every write a use case needs is a single store call that reports what it
//! found, so check-then-act sequences never span two calls.

use crate::domain::value_objects::{CategoryId, IngredientId, RecipeStatus};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{collection} collection is unavailable: a previous writer panicked")]
    Poisoned { collection: &'static str },
}

/// Outcome of an insert keyed by normalized name
#[derive(Debug, Clone, PartialEq)]
pub enum NameClaim<T> {
    /// The record was stored
    Inserted(T),
    /// Another record already holds the name; nothing was stored
    Taken(T),
}

impl<T> NameClaim<T> {
    /// The stored record, whether it was just inserted or already present
    pub fn into_record(self) -> T {
        match self {
            NameClaim::Inserted(record) | NameClaim::Taken(record) => record,
        }
    }

    pub fn was_inserted(&self) -> bool {
        matches!(self, NameClaim::Inserted(_))
    }
}

/// Outcome of a rename
#[derive(Debug, Clone, PartialEq)]
pub enum Rename<T> {
    Renamed(T),
    Missing,
    /// The new name belongs to a different record
    Taken(T),
}

/// Outcome of a guarded delete on a named record
#[derive(Debug, Clone, PartialEq)]
pub enum Removal<T> {
    Removed(T),
    Missing,
    /// Still used by this many recipes; nothing was removed
    Referenced(usize),
}

/// Outcome of a recipe write
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeWrite<T> {
    Applied(T),
    Missing,
    /// The stored recipe is no longer in the expected status
    StatusChanged(RecipeStatus),
    /// The recipe names a category that no longer exists
    UnknownCategory(CategoryId),
    /// The recipe names an ingredient that no longer exists
    UnknownIngredient(IngredientId),
}
