//! Property tests for the publication workflow.

use proptest::prelude::*;

use recipebook::{ErrorKind, RecipeFilter, RecipeStatus};

use crate::common::{empty_catalog, simple_recipe};

#[derive(Debug, Clone, Copy)]
enum Action {
    Publish,
    Archive,
}

fn actions() -> impl Strategy<Value = Vec<Action>> {
    proptest::collection::vec(
        prop_oneof![Just(Action::Publish), Just(Action::Archive)],
        0..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any sequence of transitions follows the state machine, and
    /// a recipe is visible exactly while it is published.
    #[test]
    fn property_transitions_follow_state_machine(steps in actions()) {
        let catalog = empty_catalog();
        let category = catalog.categories().create("Any").unwrap();
        let recipe = catalog
            .recipes()
            .create(simple_recipe("R", category.id, "Salt", 1.0, "g"))
            .unwrap();

        let mut expected = RecipeStatus::Draft;
        for step in steps {
            let result = match step {
                Action::Publish => catalog.recipes().publish(&recipe.id),
                Action::Archive => catalog.recipes().archive(&recipe.id),
            };
            let next = match (step, expected) {
                (Action::Publish, RecipeStatus::Draft) => Some(RecipeStatus::Published),
                (Action::Archive, RecipeStatus::Published) => Some(RecipeStatus::Archived),
                _ => None,
            };
            match next {
                Some(status) => {
                    prop_assert_eq!(result.unwrap().status, status);
                    expected = status;
                }
                None => prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidState),
            }

            let visible = catalog.recipes().get(&recipe.id).is_ok();
            prop_assert_eq!(visible, expected == RecipeStatus::Published);
            let listed = catalog.recipes().list(&RecipeFilter::new()).unwrap().len();
            prop_assert_eq!(listed == 1, expected == RecipeStatus::Published);
        }
    }

    /// PROPERTY: Every created recipe starts as a draft with a fresh id.
    #[test]
    fn property_creates_yield_distinct_drafts(count in 1usize..10) {
        let catalog = empty_catalog();
        let category = catalog.categories().create("Any").unwrap();

        let mut ids = Vec::new();
        for i in 0..count {
            let recipe = catalog
                .recipes()
                .create(simple_recipe(&format!("R{i}"), category.id, "Salt", 1.0, "g"))
                .unwrap();
            prop_assert_eq!(recipe.status, RecipeStatus::Draft);
            prop_assert!(!ids.contains(&recipe.id));
            ids.push(recipe.id);
        }
    }
}
