//! Name handling shared by the category and ingredient registries

use crate::domain::ports::{NameClaim, Removal, Rename};
use crate::domain::value_objects::display_name;
use crate::error::{CatalogError, CatalogResult, EntityKind};

pub(crate) fn required_name(raw: &str) -> CatalogResult<String> {
    display_name(raw).ok_or_else(|| CatalogError::validation("name", "Name is required"))
}

pub(crate) fn claimed<T>(entity: EntityKind, claim: NameClaim<T>) -> CatalogResult<T> {
    match claim {
        NameClaim::Inserted(record) => Ok(record),
        NameClaim::Taken(_) => Err(CatalogError::duplicate_name(entity)),
    }
}

pub(crate) fn renamed<T>(
    entity: EntityKind,
    id: impl std::fmt::Display,
    rename: Rename<T>,
) -> CatalogResult<T> {
    match rename {
        Rename::Renamed(record) => Ok(record),
        Rename::Missing => Err(CatalogError::not_found(entity, id)),
        Rename::Taken(_) => Err(CatalogError::duplicate_name(entity)),
    }
}

pub(crate) fn removed<T>(
    entity: EntityKind,
    id: impl std::fmt::Display,
    removal: Removal<T>,
) -> CatalogResult<T> {
    match removal {
        Removal::Removed(record) => Ok(record),
        Removal::Missing => Err(CatalogError::not_found(entity, id)),
        Removal::Referenced(recipes) => Err(CatalogError::still_referenced(entity, recipes)),
    }
}
