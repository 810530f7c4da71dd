//! recipebook CLI - browse a recipe catalog loaded from a seed file
//!
//! Usage: recipebook [--seed <PATH>] <COMMAND>
//!
//! Commands:
//!   recipes        List published recipes (filters: --category, --search)
//!   show           Show one published recipe
//!   scale          Show a recipe scaled to another number of servings
//!   shopping-list  Consolidated ingredients for several recipes
//!   ingredients    List ingredients
//!   categories     List categories
//!   check          Validate the seed and report counts

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use recipebook::config::Config;
use recipebook::logging;
use recipebook::presentation::{factory, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (mut config, warnings) = Config::load_layered(cli.config.as_deref(), Some(&cwd))?;
    cli.apply_overrides(&mut config);

    logging::init(&config.logging.level).context("failed to initialise logging")?;
    for warning in &warnings {
        warn!(%warning, "config");
    }

    let (catalog, summary) = factory::catalog_for(&config)?;
    debug!(
        categories = summary.categories,
        ingredients = summary.ingredients,
        recipes = summary.recipes,
        "catalog ready"
    );

    let format = config.output.format;
    match cli.command {
        Commands::Recipes {
            category_id,
            category,
            search,
        } => commands::cmd_recipes(&catalog, category_id, category, search, format),
        Commands::Show { recipe } => commands::cmd_show(&catalog, &recipe, format),
        Commands::Scale { recipe, servings } => {
            commands::cmd_scale(&catalog, &recipe, servings, format)
        }
        Commands::ShoppingList { recipes } => {
            commands::cmd_shopping_list(&catalog, &recipes, format)
        }
        Commands::Ingredients => commands::cmd_ingredients(&catalog, format),
        Commands::Categories => commands::cmd_categories(&catalog, format),
        Commands::Check => commands::cmd_check(&catalog, &config, &warnings),
    }
}
