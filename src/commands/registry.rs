//! Registry listings

use anyhow::Result;

use recipebook::config::OutputFormat;
use recipebook::presentation::output;
use recipebook::Catalog;

use super::emit;

pub fn cmd_ingredients(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let ingredients = catalog.ingredients().list()?;
    emit(format, ingredients.as_slice(), output::render_ingredients)
}

pub fn cmd_categories(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let categories = catalog.categories().list()?;
    emit(format, categories.as_slice(), output::render_categories)
}
