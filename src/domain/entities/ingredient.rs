//! Ingredient entity

use super::named::named_entity;
use crate::domain::value_objects::IngredientId;

named_entity!(
    /// A canonical ingredient, shared by every recipe that names it
    Ingredient,
    IngredientId
);
