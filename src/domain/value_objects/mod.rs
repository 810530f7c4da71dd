//! Domain Value Objects
//!
//! Immutable value types: typed identifiers, normalized names and the
//! recipe lifecycle status.

mod ids;
mod name;
mod status;

pub use ids::{CategoryId, IngredientId, RecipeId};
pub use name::{display_name, NormalizedName};
pub use status::{LifecycleAction, RecipeStatus};
