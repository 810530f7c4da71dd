//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the catalog with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Builds catalogs (dependency injection)
//! - `lookup` - Resolves recipe references typed by users
//! - `output` - Views and renderers
//!
//! ## Usage
//!
//! ```ignore
//! use recipebook::presentation::factory;
//!
//! let (catalog, _summary) = factory::catalog_for(&config)?;
//! let recipes = catalog.recipes().list(&RecipeFilter::new())?;
//! ```

pub mod cli;
pub mod factory;
pub mod lookup;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{catalog_for, catalog_from_seed, in_memory_catalog};
pub use lookup::resolve_recipe;
