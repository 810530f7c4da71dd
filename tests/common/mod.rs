//! Common test utilities for recipebook scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment (project dir, home dir) plus CLI runner
//! - Assertion macros: `assert_success!`, `assert_failure!`
//! - Fixtures: seed catalogs and library-level builders

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
