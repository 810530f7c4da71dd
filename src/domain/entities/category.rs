//! Category entity

use super::named::named_entity;
use crate::domain::value_objects::CategoryId;

named_entity!(
    /// A recipe category ("Desserts", "Soups")
    Category,
    CategoryId
);
