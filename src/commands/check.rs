//! `check`: load the configured seed and summarise it

use anyhow::Result;

use recipebook::config::{Config, ConfigWarning};
use recipebook::presentation::output::{self, CheckReport};
use recipebook::Catalog;

use super::emit;

pub fn cmd_check(catalog: &Catalog, config: &Config, warnings: &[ConfigWarning]) -> Result<()> {
    let report = CheckReport {
        seed: config.catalog.seed.clone(),
        categories: catalog.categories().list()?.len(),
        ingredients: catalog.ingredients().list()?.len(),
        recipes: catalog.recipes().status_counts()?,
        warnings: warnings.iter().map(ToString::to_string).collect(),
    };

    emit(config.output.format, &report, output::render_check)
}
