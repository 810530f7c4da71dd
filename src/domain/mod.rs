//! Domain Layer
//!
//! The recipe catalog's business rules, free of storage concerns.
//!
//! ## Structure
//!
//! - `entities/` - Category, Ingredient, Recipe
//! - `value_objects/` - Typed ids, NormalizedName, RecipeStatus
//! - `services/` - Search matching, shopping-list consolidation, scaling
//! - `ports/` - Repository traits implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No storage access** - Services operate on values handed to them
//! 2. **Ports & Adapters** - All store access goes through trait-defined ports
//! 3. **Atomic writes** - Every port write is a single conditional operation

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
