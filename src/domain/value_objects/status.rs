//! Recipe lifecycle status
//!
//! ```text
//! draft --publish--> published --archive--> archived
//! ```
//!
//! Only drafts may be edited or deleted, and nothing returns to draft.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecipeStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// Operations gated by [`RecipeStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Publish,
    Archive,
    Edit,
    Delete,
}

impl LifecycleAction {
    fn rejection(&self) -> &'static str {
        match self {
            LifecycleAction::Publish => "You can only publish draft recipes",
            LifecycleAction::Archive => "You can only archive published recipes",
            LifecycleAction::Edit => "Only draft recipes can be edited",
            LifecycleAction::Delete => "Only draft recipes can be deleted",
        }
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleAction::Publish => write!(f, "publish"),
            LifecycleAction::Archive => write!(f, "archive"),
            LifecycleAction::Edit => write!(f, "edit"),
            LifecycleAction::Delete => write!(f, "delete"),
        }
    }
}

impl RecipeStatus {
    pub const ALL: [RecipeStatus; 3] = [
        RecipeStatus::Draft,
        RecipeStatus::Published,
        RecipeStatus::Archived,
    ];

    pub fn is_draft(&self) -> bool {
        matches!(self, RecipeStatus::Draft)
    }

    pub fn is_published(&self) -> bool {
        matches!(self, RecipeStatus::Published)
    }

    /// Status reached by `publish`
    pub fn publish(self) -> CatalogResult<RecipeStatus> {
        match self {
            RecipeStatus::Draft => Ok(RecipeStatus::Published),
            other => Err(other.reject(LifecycleAction::Publish)),
        }
    }

    /// Status reached by `archive`
    pub fn archive(self) -> CatalogResult<RecipeStatus> {
        match self {
            RecipeStatus::Published => Ok(RecipeStatus::Archived),
            other => Err(other.reject(LifecycleAction::Archive)),
        }
    }

    /// Content mutations (edit, delete) are draft-only
    pub fn ensure_mutable(self, action: LifecycleAction) -> CatalogResult<()> {
        if self.is_draft() {
            Ok(())
        } else {
            Err(self.reject(action))
        }
    }

    /// The InvalidState error for attempting `action` from this status
    pub fn reject(self, action: LifecycleAction) -> CatalogError {
        CatalogError::InvalidState {
            action,
            status: self,
            message: action.rejection().to_string(),
        }
    }
}

impl fmt::Display for RecipeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeStatus::Draft => write!(f, "draft"),
            RecipeStatus::Published => write!(f, "published"),
            RecipeStatus::Archived => write!(f, "archived"),
        }
    }
}

impl FromStr for RecipeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(RecipeStatus::Draft),
            "published" | "public" => Ok(RecipeStatus::Published),
            "archived" => Ok(RecipeStatus::Archived),
            other => Err(format!("unknown recipe status '{other}'")),
        }
    }
}
