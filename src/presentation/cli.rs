//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--config, --seed, --json, --verbose) are inherited by all
//! subcommands and take precedence over config files and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, OutputFormat};
use crate::domain::value_objects::CategoryId;
use crate::logging;

/// recipebook - recipe catalog with a publication workflow
#[derive(Parser, Debug)]
#[command(name = "recipebook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./recipebook.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed catalog to load (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List published recipes
    Recipes {
        /// Only recipes in this category (id)
        #[arg(long, value_name = "ID")]
        category_id: Option<CategoryId>,

        /// Only recipes in this category (name, wins over --category-id)
        #[arg(long, value_name = "NAME")]
        category: Option<String>,

        /// Match title, description or ingredient names
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
    },

    /// Show one published recipe
    Show {
        /// Recipe id or exact title
        recipe: String,
    },

    /// Show a published recipe scaled to another number of servings
    Scale {
        /// Recipe id or exact title
        recipe: String,

        /// Target number of servings
        #[arg(long)]
        servings: u32,
    },

    /// Consolidated ingredient list for several recipes
    ShoppingList {
        /// Recipe ids or exact titles
        #[arg(required = true)]
        recipes: Vec<String>,
    },

    /// List all ingredients
    Ingredients,

    /// List all categories
    Categories,

    /// Load the seed and report what it contains
    Check,
}

impl Cli {
    /// Fold command-line flags into the resolved configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed) = &self.seed {
            config.catalog.seed = Some(seed.clone());
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        if let Some(level) = logging::verbosity_directive(self.verbose) {
            config.logging.level = level.to_string();
        }
    }
}
