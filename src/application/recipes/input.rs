//! Recipe input types
//!
//! Inputs arrive loosely typed (seed files, CLI, a future HTTP layer), so
//! numeric fields accept numbers or numeric strings and steps accept any
//! scalar. Nothing here validates; see `validation`.

use serde::{Deserialize, Deserializer};

use crate::domain::value_objects::CategoryId;

/// One ingredient reference by free-text name
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLineInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "number")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

impl IngredientLineInput {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Input for `create`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientLineInput>,
    #[serde(default, deserialize_with = "string_list")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "number")]
    pub servings: f64,
    pub category_id: CategoryId,
}

/// Partial input for `update`; `None` leaves the stored field untouched
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePatch {
    #[serde(default)]
    pub title: Option<String>,
    /// A blank description clears it
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientLineInput>>,
    #[serde(default, deserialize_with = "optional_string_list")]
    pub steps: Option<Vec<String>>,
    #[serde(default, deserialize_with = "optional_number")]
    pub servings: Option<f64>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    /// Non-numeric text becomes NaN, which every positivity check rejects
    fn into_number(self) -> f64 {
        match self {
            Scalar::Number(n) => n,
            Scalar::Bool(b) => f64::from(u8::from(b)),
            Scalar::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        }
    }

    fn into_text(self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::deserialize(deserializer)?.into_number())
}

fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_number))
}

pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Vec::<Scalar>::deserialize(deserializer)?
        .into_iter()
        .map(Scalar::into_text)
        .collect())
}

fn optional_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Scalar>>::deserialize(deserializer)?
        .map(|steps| steps.into_iter().map(Scalar::into_text).collect()))
}
