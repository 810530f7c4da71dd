//! Recipe Engine
//!
//! Owns recipe records and their lifecycle. This module handles:
//! - Create/update validation and ingredient name resolution
//! - The draft → published → archived workflow
//! - Published-only listing with category and text filters
//! - Shopping-list consolidation and portion scaling

mod input;
mod result;
mod use_case;
mod validation;

pub(crate) use input::{number as coerce_number, string_list as coerce_string_list};
pub use input::{IngredientLineInput, NewRecipe, RecipePatch};
pub use result::{RecipeFilter, ShoppingList, SkipReason, SkippedRecipe, StatusCounts};
pub use use_case::RecipeUseCase;
