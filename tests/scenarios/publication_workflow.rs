//! Scenario: Publishing a recipe
//!
//! Journey: An editor drafts a cake, publishes it, and then tries to change
//! it and to remove the sugar it depends on.
//!
//! Success Criteria:
//! - Drafts stay invisible until published
//! - Published content is frozen
//! - Ingredients in use cannot be deleted

use recipebook::{ErrorKind, IngredientLineInput, NewRecipe, RecipeFilter, RecipePatch, RecipeStatus};

use crate::assert_kind;
use crate::common::*;

/// SCENARIO: Cake from draft to archive
#[test]
fn scenario_cake_publication_journey() {
    let catalog = empty_catalog();

    // Step 1: Create the Desserts category
    let desserts = catalog.categories().create("Desserts").unwrap();

    // Step 2: Draft the cake
    let cake = catalog
        .recipes()
        .create(NewRecipe {
            title: "Cake".to_string(),
            description: None,
            ingredients: vec![IngredientLineInput::new("Sugar", 2.0, "cup")],
            steps: vec!["Mix".to_string(), "Bake".to_string()],
            servings: 4.0,
            category_id: desserts.id,
        })
        .unwrap();
    assert_eq!(cake.status, RecipeStatus::Draft);
    assert_kind!(catalog.recipes().get(&cake.id), ErrorKind::NotFound);
    assert!(catalog.recipes().list(&RecipeFilter::new()).unwrap().is_empty());

    // Step 3: Publish it; now it is readable
    let cake = catalog.recipes().publish(&cake.id).unwrap();
    assert_eq!(cake.status, RecipeStatus::Published);
    assert_eq!(catalog.recipes().get(&cake.id).unwrap().title, "Cake");
    assert_eq!(catalog.recipes().list(&RecipeFilter::new()).unwrap().len(), 1);

    // Step 4: Editing a published recipe is refused
    let patch = RecipePatch {
        title: Some("Better Cake".to_string()),
        ..RecipePatch::default()
    };
    assert_kind!(
        catalog.recipes().update(&cake.id, patch),
        ErrorKind::InvalidState
    );
    assert_kind!(catalog.recipes().delete(&cake.id), ErrorKind::InvalidState);

    // Step 5: Sugar is in use
    let sugar = catalog.ingredients().find_by_name("sugar").unwrap().unwrap();
    assert_kind!(catalog.ingredients().delete(&sugar.id), ErrorKind::Conflict);

    // Step 6: Archive; it disappears again and can never come back
    catalog.recipes().archive(&cake.id).unwrap();
    assert!(catalog.recipes().list(&RecipeFilter::new()).unwrap().is_empty());
    assert_kind!(catalog.recipes().publish(&cake.id), ErrorKind::InvalidState);
    assert_kind!(catalog.ingredients().delete(&sugar.id), ErrorKind::Conflict);
}

/// SCENARIO: Duplicate spellings collapse onto one ingredient
#[test]
fn scenario_ingredient_spellings_are_deduplicated() {
    let catalog = empty_catalog();
    let soups = catalog.categories().create("Soups").unwrap();

    publish_new(&catalog, simple_recipe("Broth", soups.id, "Onion", 1.0, "pcs"));
    publish_new(&catalog, simple_recipe("Stock", soups.id, "  ONION ", 2.0, "pcs"));

    assert_eq!(catalog.ingredients().list().unwrap().len(), 1);
    assert_kind!(catalog.ingredients().create("onion"), ErrorKind::Conflict);

    // Renaming propagates to every recipe through the shared id
    let onion = catalog.ingredients().find_by_name("onion").unwrap().unwrap();
    catalog
        .ingredients()
        .update(&onion.id, Some("Shallot"))
        .unwrap();
    let found = catalog
        .recipes()
        .list(&RecipeFilter::new().with_search("shallot"))
        .unwrap();
    assert_eq!(found.len(), 2);
}

/// SCENARIO: Drafts and archived recipes never leak through the CLI
#[test]
fn scenario_cli_hides_unpublished_recipes() {
    let env = TestEnv::with_seed(KITCHEN_SEED);

    let result = env.run(&["recipes"]);
    crate::assert_success!(result);
    assert!(result.stdout.contains("Chocolate Cake"));
    assert!(!result.stdout.contains("Secret Stew"));
    assert!(!result.stdout.contains("Old Gazpacho"));

    let result = env.run(&["show", "Secret Stew"]);
    crate::assert_failure!(result, "no published recipe matches 'Secret Stew'");

    let result = env.run(&["check"]);
    crate::assert_success!(result);
    assert!(result
        .stdout
        .contains("recipes:     5 (1 draft, 3 published, 1 archived)"));
}
