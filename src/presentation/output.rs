//! Output Rendering
//!
//! Recipes reference ingredients and categories by id. Views resolve those
//! ids to names once, then render either as plain text or as JSON.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::{Catalog, ShoppingList, StatusCounts};
use crate::domain::entities::{Category, Ingredient, NamedEntity, Recipe};
use crate::domain::services::ShoppingLine;
use crate::domain::value_objects::{CategoryId, IngredientId, RecipeId, RecipeStatus};
use crate::error::CatalogResult;

const UNKNOWN: &str = "(unknown)";

/// Id to display-name lookups for one render pass
#[derive(Debug, Default)]
pub struct Names {
    categories: HashMap<CategoryId, String>,
    ingredients: HashMap<IngredientId, String>,
}

impl Names {
    pub fn load(catalog: &Catalog) -> CatalogResult<Self> {
        Ok(Self::from_records(
            &catalog.categories().list()?,
            &catalog.ingredients().list()?,
        ))
    }

    pub fn from_records(categories: &[Category], ingredients: &[Ingredient]) -> Self {
        Self {
            categories: index(categories),
            ingredients: index(ingredients),
        }
    }

    fn category(&self, id: &CategoryId) -> &str {
        self.categories.get(id).map_or(UNKNOWN, String::as_str)
    }

    fn ingredient(&self, id: &IngredientId) -> &str {
        self.ingredients.get(id).map_or(UNKNOWN, String::as_str)
    }
}

fn index<E: NamedEntity>(records: &[E]) -> HashMap<E::Id, String> {
    records
        .iter()
        .map(|record| (record.id(), record.name().to_string()))
        .collect()
}

/// A recipe with names resolved, as shown to users
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    pub id: RecipeId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub category: String,
    pub servings: u32,
    pub status: RecipeStatus,
    pub created_at: DateTime<Utc>,
    pub ingredients: Vec<ShoppingLine>,
    pub steps: Vec<String>,
}

impl RecipeView {
    pub fn new(recipe: &Recipe, names: &Names) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            category_id: recipe.category_id,
            category: names.category(&recipe.category_id).to_string(),
            servings: recipe.servings,
            status: recipe.status,
            created_at: recipe.created_at,
            ingredients: recipe
                .ingredients
                .iter()
                .map(|line| ShoppingLine {
                    ingredient_id: line.ingredient_id,
                    name: names.ingredient(&line.ingredient_id).to_string(),
                    quantity: line.quantity,
                    unit: line.unit.clone(),
                })
                .collect(),
            steps: recipe.steps.clone(),
        }
    }
}

/// `shopping-list` result: the consolidated list, plus the references that
/// named no published recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingReport {
    #[serde(flatten)]
    pub list: ShoppingList,
    pub unmatched: Vec<String>,
}

/// Result of `check`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub seed: Option<PathBuf>,
    pub categories: usize,
    pub ingredients: usize,
    pub recipes: StatusCounts,
    pub warnings: Vec<String>,
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

pub fn render_recipe_list(recipes: &[RecipeView]) -> String {
    if recipes.is_empty() {
        return "No published recipes.\n".to_string();
    }

    let mut out = String::new();
    for recipe in recipes {
        let _ = writeln!(
            out,
            "{}  ({}, serves {})  {}",
            recipe.title, recipe.category, recipe.servings, recipe.id
        );
    }
    out
}

pub fn render_recipe(recipe: &RecipeView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.title);
    let _ = writeln!(out, "  id:       {}", recipe.id);
    let _ = writeln!(out, "  category: {}", recipe.category);
    let _ = writeln!(out, "  servings: {}", recipe.servings);
    let _ = writeln!(out, "  status:   {}", recipe.status);
    if let Some(description) = &recipe.description {
        let _ = writeln!(out, "\n  {description}");
    }

    out.push_str("\nIngredients:\n");
    for line in &recipe.ingredients {
        push_line(&mut out, line);
    }

    out.push_str("Steps:\n");
    if recipe.steps.is_empty() {
        out.push_str("  (none)\n");
    }
    for (i, step) in recipe.steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }
    out
}

pub fn render_shopping_list(report: &ShoppingReport) -> String {
    let list = &report.list;
    let mut out = String::new();
    if list.lines.is_empty() {
        out.push_str("Nothing to buy.\n");
    } else {
        out.push_str("Shopping list:\n");
        for line in &list.lines {
            push_line(&mut out, line);
        }
    }

    if !list.is_complete() || !report.unmatched.is_empty() {
        out.push_str("Skipped:\n");
        for skipped in &list.skipped {
            let _ = writeln!(out, "  - {}: {}", skipped.id, skipped.reason);
        }
        for reference in &report.unmatched {
            let _ = writeln!(out, "  - {reference}: no published recipe with this title");
        }
    }
    out
}

pub fn render_ingredients(ingredients: &[Ingredient]) -> String {
    render_named(ingredients, "No ingredients.")
}

pub fn render_categories(categories: &[Category]) -> String {
    render_named(categories, "No categories.")
}

fn render_named<E: NamedEntity>(records: &[E], empty: &str) -> String {
    if records.is_empty() {
        return format!("{empty}\n");
    }
    let width = records
        .iter()
        .map(|record| record.name().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{:<width$}  {}", record.name(), record.id());
    }
    out
}

pub fn render_check(report: &CheckReport) -> String {
    let mut out = String::new();
    match &report.seed {
        Some(path) => {
            let _ = writeln!(out, "Seed: {}", path.display());
        }
        None => out.push_str("Seed: none (empty catalog)\n"),
    }
    let counts = &report.recipes;
    let _ = writeln!(out, "  categories:  {}", report.categories);
    let _ = writeln!(out, "  ingredients: {}", report.ingredients);
    let _ = writeln!(
        out,
        "  recipes:     {} ({} draft, {} published, {} archived)",
        counts.total(),
        counts.draft,
        counts.published,
        counts.archived
    );
    for warning in &report.warnings {
        let _ = writeln!(out, "warning: {warning}");
    }
    out
}

fn push_line(out: &mut String, line: &ShoppingLine) {
    let _ = writeln!(out, "  - {} {} {}", line.quantity, line.unit, line.name);
}
