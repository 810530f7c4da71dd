//! Property tests for shopping lists and scaling.

use proptest::prelude::*;

use recipebook::{Catalog, IngredientLineInput, NewRecipe, Recipe};

use crate::common::{empty_catalog, publish_new};

const NAMES: &[&str] = &["Sugar", "Flour", "Salt"];
const UNITS: &[&str] = &["g", "cup"];

fn line() -> impl Strategy<Value = IngredientLineInput> {
    (0..NAMES.len(), 1u32..1000, 0..UNITS.len()).prop_map(|(n, q, u)| {
        IngredientLineInput::new(NAMES[n], f64::from(q) / 4.0, UNITS[u])
    })
}

fn recipes() -> impl Strategy<Value = Vec<Vec<IngredientLineInput>>> {
    proptest::collection::vec(proptest::collection::vec(line(), 1..5), 1..5)
}

fn publish_all(catalog: &Catalog, recipes: Vec<Vec<IngredientLineInput>>) -> Vec<Recipe> {
    let category = catalog.categories().create("Any").unwrap();
    recipes
        .into_iter()
        .enumerate()
        .map(|(i, ingredients)| {
            publish_new(
                catalog,
                NewRecipe {
                    title: format!("R{i}"),
                    description: None,
                    ingredients,
                    steps: Vec::new(),
                    servings: 4.0,
                    category_id: category.id,
                },
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Per unit, the shopping list total equals the sum of all
    /// recipe lines, and each (ingredient, unit) pair appears once.
    #[test]
    fn property_shopping_list_conserves_quantities(input in recipes()) {
        let catalog = empty_catalog();
        let published = publish_all(&catalog, input);
        let ids: Vec<_> = published.iter().map(|r| r.id).collect();

        let list = catalog.recipes().shopping_list(&ids).unwrap();
        prop_assert!(list.is_complete());

        for unit in UNITS {
            let expected: f64 = published
                .iter()
                .flat_map(|r| &r.ingredients)
                .filter(|l| l.unit == *unit)
                .map(|l| l.quantity)
                .sum();
            let actual: f64 = list
                .lines
                .iter()
                .filter(|l| l.unit == *unit)
                .map(|l| l.quantity)
                .sum();
            prop_assert!((expected - actual).abs() < 1e-9);
        }

        let mut keys: Vec<_> = list
            .lines
            .iter()
            .map(|l| (l.ingredient_id, l.unit.clone()))
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
    }

    /// PROPERTY: Scaling multiplies every quantity by target / servings and
    /// leaves the stored recipe untouched.
    #[test]
    fn property_scaling_is_linear(input in recipes(), target in 1u32..40) {
        let catalog = empty_catalog();
        let recipe = publish_all(&catalog, input).remove(0);

        let scaled = catalog.recipes().scale(&recipe.id, target).unwrap();
        prop_assert_eq!(scaled.servings, target);
        prop_assert_eq!(scaled.ingredients.len(), recipe.ingredients.len());

        let factor = f64::from(target) / f64::from(recipe.servings);
        for (before, after) in recipe.ingredients.iter().zip(&scaled.ingredients) {
            prop_assert!((before.quantity * factor - after.quantity).abs() < 1e-9);
            prop_assert_eq!(&before.unit, &after.unit);
            prop_assert_eq!(before.ingredient_id, after.ingredient_id);
        }

        let stored = catalog.recipes().get(&recipe.id).unwrap();
        prop_assert_eq!(stored, recipe);
    }
}
