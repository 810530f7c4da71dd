//! Reusable seed catalogs and builders.

use std::sync::Arc;

use recipebook::{
    Catalog, CategoryId, InMemoryCatalogStore, IngredientLineInput, NewRecipe, Recipe,
};

/// Two categories, four recipes in every status, shared ingredients
pub const KITCHEN_SEED: &str = r#"
categories = ["Desserts", "Soups"]
ingredients = ["Salt"]

[[recipes]]
title = "Chocolate Cake"
category = "Desserts"
description = "Dense and dark"
servings = 4
steps = ["Mix", "Bake"]
status = "published"
ingredients = [
    { name = "Sugar", quantity = 2, unit = "cup" },
    { name = "Cocoa", quantity = 3, unit = "tbsp" },
]

[[recipes]]
title = "Lemon Tart"
category = "Desserts"
servings = 6
steps = ["Bake crust", "Fill"]
status = "published"
ingredients = [
    { name = "sugar", quantity = 1, unit = "cup" },
    { name = "Lemon", quantity = 3, unit = "pcs" },
]

[[recipes]]
title = "Tomato Soup"
category = "Soups"
servings = 2
steps = ["Simmer"]
status = "published"
ingredients = [
    { name = "Tomato", quantity = 6, unit = "pcs" },
    { name = "Salt", quantity = 1, unit = "tsp" },
]

[[recipes]]
title = "Secret Stew"
category = "Soups"
servings = 4
status = "draft"
ingredients = [{ name = "Beef", quantity = 500, unit = "g" }]

[[recipes]]
title = "Old Gazpacho"
category = "Soups"
servings = 4
status = "archived"
ingredients = [{ name = "Tomato", quantity = 4, unit = "pcs" }]
"#;

pub fn empty_catalog() -> Catalog {
    Catalog::new(Arc::new(InMemoryCatalogStore::new()))
}

/// Input for a one-ingredient recipe
pub fn simple_recipe(
    title: &str,
    category: CategoryId,
    ingredient: &str,
    quantity: f64,
    unit: &str,
) -> NewRecipe {
    NewRecipe {
        title: title.to_string(),
        description: None,
        ingredients: vec![IngredientLineInput::new(ingredient, quantity, unit)],
        steps: vec!["Cook".to_string()],
        servings: 4.0,
        category_id: category,
    }
}

/// Create and publish in one go
pub fn publish_new(catalog: &Catalog, input: NewRecipe) -> Recipe {
    let draft = catalog.recipes().create(input).expect("create recipe");
    catalog.recipes().publish(&draft.id).expect("publish recipe")
}
