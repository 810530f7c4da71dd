//! Scenario: Planning the week's shopping
//!
//! Journey: A cook picks a few recipes, scales one for guests, and prints a
//! consolidated shopping list.
//!
//! Success Criteria:
//! - Same ingredient and unit are summed into one line
//! - Scaling never changes the stored recipe
//! - Unavailable recipes are reported, not fatal

use recipebook::{RecipeFilter, RecipeId, SkipReason};

use crate::common::*;

/// SCENARIO: Shopping list and scaling through the library
#[test]
fn scenario_shopping_for_two_desserts() {
    let catalog = empty_catalog();
    let desserts = catalog.categories().create("Desserts").unwrap();

    let cake = publish_new(&catalog, simple_recipe("Cake", desserts.id, "Sugar", 2.0, "cup"));
    let tart = publish_new(&catalog, simple_recipe("Tart", desserts.id, "sugar", 1.0, "cup"));
    let draft = catalog
        .recipes()
        .create(simple_recipe("Pie", desserts.id, "Apple", 3.0, "pcs"))
        .unwrap();
    let missing = RecipeId::new();

    let list = catalog
        .recipes()
        .shopping_list(&[cake.id, tart.id, draft.id, missing])
        .unwrap();

    assert_eq!(list.lines.len(), 1);
    assert_eq!(list.lines[0].name, "Sugar");
    assert_eq!(list.lines[0].quantity, 3.0);
    assert_eq!(list.lines[0].unit, "cup");
    let reasons: Vec<SkipReason> = list.skipped.iter().map(|s| s.reason).collect();
    assert_eq!(reasons, vec![SkipReason::NotPublished, SkipReason::NotFound]);

    // Guests are coming: double the cake
    let doubled = catalog.recipes().scale(&cake.id, 8).unwrap();
    assert_eq!(doubled.ingredients[0].quantity, 4.0);
    assert_eq!(catalog.recipes().get(&cake.id).unwrap().servings, 4);
    assert_eq!(catalog.recipes().list(&RecipeFilter::new()).unwrap().len(), 2);
}

/// SCENARIO: Shopping list and scaling through the CLI
#[test]
fn scenario_cli_shopping_list_by_title() {
    let env = TestEnv::with_seed(KITCHEN_SEED);

    let result = env.run(&["shopping-list", "Chocolate Cake", "lemon tart"]);
    crate::assert_success!(result);
    assert!(
        result.stdout.contains("  - 3 cup Sugar"),
        "sugar should be summed:\n{}",
        result.stdout
    );
    assert!(result.stdout.contains("  - 3 tbsp Cocoa"));
    assert!(result.stdout.contains("  - 3 pcs Lemon"));

    let result = env.run(&["scale", "Chocolate Cake", "--servings", "2"]);
    crate::assert_success!(result);
    assert!(result.stdout.contains("servings: 2"));
    assert!(result.stdout.contains("  - 1 cup Sugar"));
    assert!(result.stdout.contains("  - 1.5 tbsp Cocoa"));
}
