//! Recipe command handlers: list, show, scale, shopping list

use anyhow::{anyhow, Result};

use recipebook::config::OutputFormat;
use recipebook::presentation::output::{self, Names, RecipeView, ShoppingReport};
use recipebook::presentation::resolve_recipe;
use recipebook::{Catalog, CategoryId, ErrorKind, RecipeFilter, RecipeId};

use super::emit;

pub fn cmd_recipes(
    catalog: &Catalog,
    category_id: Option<CategoryId>,
    category: Option<String>,
    search: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let filter = RecipeFilter {
        category_id,
        category_name: category,
        search,
    };
    let recipes = catalog.recipes().list(&filter)?;
    let names = Names::load(catalog)?;
    let views: Vec<RecipeView> = recipes
        .iter()
        .map(|recipe| RecipeView::new(recipe, &names))
        .collect();

    emit(format, views.as_slice(), output::render_recipe_list)
}

pub fn cmd_show(catalog: &Catalog, reference: &str, format: OutputFormat) -> Result<()> {
    let id = resolve(catalog, reference)?;
    let recipe = catalog.recipes().get(&id)?;
    let view = RecipeView::new(&recipe, &Names::load(catalog)?);

    emit(format, &view, output::render_recipe)
}

pub fn cmd_scale(
    catalog: &Catalog,
    reference: &str,
    servings: u32,
    format: OutputFormat,
) -> Result<()> {
    let id = resolve(catalog, reference)?;
    let scaled = catalog.recipes().scale(&id, servings)?;
    let view = RecipeView::new(&scaled, &Names::load(catalog)?);

    emit(format, &view, output::render_recipe)
}

pub fn cmd_shopping_list(
    catalog: &Catalog,
    references: &[String],
    format: OutputFormat,
) -> Result<()> {
    let mut ids = Vec::with_capacity(references.len());
    let mut unmatched = Vec::new();
    for reference in references {
        match resolve_recipe(catalog, reference) {
            Ok(id) => ids.push(id),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                unmatched.push(reference.trim().to_string())
            }
            Err(err) => return Err(err.into()),
        }
    }

    let report = ShoppingReport {
        list: catalog.recipes().shopping_list(&ids)?,
        unmatched,
    };
    emit(format, &report, output::render_shopping_list)
}

fn resolve(catalog: &Catalog, reference: &str) -> Result<RecipeId> {
    match resolve_recipe(catalog, reference) {
        Ok(id) => Ok(id),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(anyhow!(
            "no published recipe matches '{}'",
            reference.trim()
        )),
        Err(err) => Err(err.into()),
    }
}
