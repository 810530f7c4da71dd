//! Named catalog entities
//!
//! Categories and ingredients share one shape: an id, a unique display name
//! and a creation timestamp. Stores index them by [`NormalizedName`].

use std::fmt;
use std::hash::Hash;

use crate::domain::value_objects::NormalizedName;

pub trait NamedEntity: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + fmt::Display + Send + Sync + 'static;

    fn id(&self) -> Self::Id;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);

    fn normalized_name(&self) -> NormalizedName {
        NormalizedName::new(self.name())
    }
}

macro_rules! named_entity {
    ($(#[$meta:meta])* $name:ident, $id:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub id: $id,
            pub name: String,
            pub created_at: chrono::DateTime<chrono::Utc>,
        }

        impl $name {
            /// Build a record with a fresh id, stamped now.
            /// The caller is responsible for trimming `name`.
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    id: <$id>::new(),
                    name: name.into(),
                    created_at: chrono::Utc::now(),
                }
            }

            pub fn with_id(mut self, id: $id) -> Self {
                self.id = id;
                self
            }
        }

        impl $crate::domain::entities::NamedEntity for $name {
            type Id = $id;

            fn id(&self) -> $id {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn set_name(&mut self, name: String) {
                self.name = name;
            }
        }
    };
}

pub(crate) use named_entity;
