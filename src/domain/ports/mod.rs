//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides the concrete store.

mod category_repository;
mod id_source;
mod ingredient_repository;
mod recipe_repository;
mod store;

pub use category_repository::CategoryRepository;
pub use id_source::IdSource;
pub use ingredient_repository::IngredientRepository;
pub use recipe_repository::RecipeRepository;
pub use store::{NameClaim, RecipeWrite, Removal, Rename, StoreError, StoreResult};

/// A store owning all three catalog collections.
///
/// Guarded deletes and recipe writes check one collection against another,
/// so the three repositories are expected to share one backing store.
pub trait CatalogStore: CategoryRepository + IngredientRepository + RecipeRepository {}

impl<T> CatalogStore for T where T: CategoryRepository + IngredientRepository + RecipeRepository {}
