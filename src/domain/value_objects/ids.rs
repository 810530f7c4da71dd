//! Typed identifiers
//!
//! Each catalog collection gets its own id type so a recipe id can never be
//! passed where an ingredient id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for name-derived identifiers
const NAMESPACE: Uuid = Uuid::from_u128(0x6d1f_3c2a_8b47_4e0f_9a53_2c71_b8e4_d019);

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident, $scope:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Stable identifier for `key`; equal keys always give equal ids
            pub fn derived(key: &str) -> Self {
                let scoped = format!("{}/{}", $scope, key);
                Self(Uuid::new_v5(&NAMESPACE, scoped.as_bytes()))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }
    };
}

catalog_id!(
    /// Identifier of a [`Category`](crate::domain::entities::Category)
    CategoryId,
    "category"
);
catalog_id!(
    /// Identifier of an [`Ingredient`](crate::domain::entities::Ingredient)
    IngredientId,
    "ingredient"
);
catalog_id!(
    /// Identifier of a [`Recipe`](crate::domain::entities::Recipe)
    RecipeId,
    "recipe"
);
