//! Catalog Factory
//!
//! Creates a catalog with infrastructure dependencies wired up.
//! This is the dependency injection point for the binary.

use std::path::Path;
use std::sync::Arc;

use crate::application::Catalog;
use crate::config::Config;
use crate::domain::services::DerivedIds;
use crate::infrastructure::{load_seed, InMemoryCatalogStore, SeedError, SeedSummary};

/// An empty catalog backed by the in-memory store
pub fn in_memory_catalog() -> Catalog {
    Catalog::new(Arc::new(InMemoryCatalogStore::new()))
}

/// A fresh in-memory catalog populated from a seed file.
///
/// Ids are derived from names and titles, so every load of the same seed
/// hands out the same ids.
pub fn catalog_from_seed(path: &Path) -> Result<(Catalog, SeedSummary), SeedError> {
    let seed = load_seed(path)?;
    let catalog = Catalog::with_ids(
        Arc::new(InMemoryCatalogStore::new()),
        Arc::new(DerivedIds::new()),
    );
    let summary = seed.apply(&catalog)?;
    Ok((catalog, summary))
}

/// The catalog described by `config`; empty when no seed is configured
pub fn catalog_for(config: &Config) -> Result<(Catalog, SeedSummary), SeedError> {
    match &config.catalog.seed {
        Some(path) => catalog_from_seed(path),
        None => Ok((in_memory_catalog(), SeedSummary::default())),
    }
}
