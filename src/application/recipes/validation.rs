//! Field-level validation shared by create and update

use crate::domain::value_objects::display_name;
use crate::error::{CatalogError, CatalogResult};

use super::input::IngredientLineInput;

/// An ingredient line that passed validation but is not yet resolved
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CheckedLine {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

pub(super) fn title(raw: &str) -> CatalogResult<String> {
    display_name(raw).ok_or_else(|| CatalogError::validation("title", "Title is required"))
}

pub(super) fn description(raw: Option<String>) -> Option<String> {
    raw.as_deref().and_then(display_name)
}

/// Servings must be a whole number above zero
pub(super) fn servings(raw: f64) -> CatalogResult<u32> {
    if raw.is_nan() || raw <= 0.0 {
        return Err(CatalogError::validation(
            "servings",
            "Servings must be greater than 0",
        ));
    }
    if raw.fract() != 0.0 || raw > f64::from(u32::MAX) {
        return Err(CatalogError::validation(
            "servings",
            "Servings must be a whole number",
        ));
    }
    Ok(raw as u32)
}

/// Trim every line and fail on the first violated field
pub(super) fn ingredient_lines(lines: Vec<IngredientLineInput>) -> CatalogResult<Vec<CheckedLine>> {
    if lines.is_empty() {
        return Err(CatalogError::validation(
            "ingredients",
            "Ingredients are required",
        ));
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let name = display_name(&line.name).ok_or_else(|| {
                CatalogError::validation(
                    format!("ingredients[{index}].name"),
                    "Ingredient name is required",
                )
            })?;
            if !line.quantity.is_finite() || line.quantity <= 0.0 {
                return Err(CatalogError::validation(
                    format!("ingredients[{index}].quantity"),
                    "Ingredient quantity must be > 0",
                ));
            }
            let unit = display_name(&line.unit).ok_or_else(|| {
                CatalogError::validation(
                    format!("ingredients[{index}].unit"),
                    "Ingredient unit is required",
                )
            })?;
            Ok(CheckedLine {
                name,
                quantity: line.quantity,
                unit,
            })
        })
        .collect()
}
