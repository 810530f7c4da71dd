//! Error types for the recipe catalog
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::fmt;

use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::value_objects::{LifecycleAction, RecipeStatus};

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The collection an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    Ingredient,
    Recipe,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Category => write!(f, "Category"),
            EntityKind::Ingredient => write!(f, "Ingredient"),
            EntityKind::Recipe => write!(f, "Recipe"),
        }
    }
}

/// Coarse error taxonomy, suitable for mapping onto transport status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    InvalidState,
    Store,
}

/// Main error type for catalog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Malformed or missing input field
    #[error("{message}")]
    Validation { field: String, message: String },

    /// Id does not exist, or exists but is hidden by its status
    #[error("{message}")]
    NotFound {
        entity: EntityKind,
        id: String,
        message: String,
    },

    /// Name already taken, or entity still referenced on delete
    #[error("{message}")]
    Conflict { entity: EntityKind, message: String },

    /// Lifecycle transition or mutation attempted from a disallowed status
    #[error("{message}")]
    InvalidState {
        action: LifecycleAction,
        status: RecipeStatus,
        message: String,
    },

    /// The backing store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Plain "<Entity> not found"
    pub fn not_found(entity: EntityKind, id: impl fmt::Display) -> Self {
        CatalogError::NotFound {
            entity,
            id: id.to_string(),
            message: format!("{entity} not found"),
        }
    }

    /// A recipe that exists but is not visible through the public read surface
    pub fn not_published(id: impl fmt::Display) -> Self {
        CatalogError::NotFound {
            entity: EntityKind::Recipe,
            id: id.to_string(),
            message: "Only published recipes can be accessed".to_string(),
        }
    }

    pub fn duplicate_name(entity: EntityKind) -> Self {
        CatalogError::Conflict {
            entity,
            message: format!("{entity} name must be unique"),
        }
    }

    pub fn still_referenced(entity: EntityKind, recipes: usize) -> Self {
        let noun = match entity {
            EntityKind::Category => "category",
            EntityKind::Ingredient => "ingredient",
            EntityKind::Recipe => "recipe",
        };
        CatalogError::Conflict {
            entity,
            message: format!(
                "Cannot delete {noun} because it is used in {recipes} recipe{}",
                if recipes == 1 { "" } else { "s" }
            ),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation { .. } => ErrorKind::Validation,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::Conflict { .. } => ErrorKind::Conflict,
            CatalogError::InvalidState { .. } => ErrorKind::InvalidState,
            CatalogError::Store(_) => ErrorKind::Store,
        }
    }
}
