//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and file loaders.
//!
//! ## Structure
//!
//! - `repositories/` - Store implementations (in-memory)
//! - `seed` - TOML seed catalog loader

pub mod repositories;
pub mod seed;

// Re-export for convenience
pub use repositories::InMemoryCatalogStore;
pub use seed::{load_seed, SeedCatalog, SeedError, SeedSummary};
