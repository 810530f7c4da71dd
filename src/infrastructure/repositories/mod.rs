//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod memory;
mod named_table;

pub use memory::InMemoryCatalogStore;
