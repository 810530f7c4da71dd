//! Property tests for ingredient and category name uniqueness.

use proptest::prelude::*;

use recipebook::ErrorKind;

use crate::common::empty_catalog;

fn base_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z ]{0,15}[A-Za-z]").unwrap()
}

/// Same letters, random case, random surrounding whitespace
fn respelled(name: &str) -> impl Strategy<Value = String> {
    let chars: Vec<char> = name.chars().collect();
    (
        proptest::collection::vec(any::<bool>(), chars.len()),
        "[ \t]{0,3}",
        "[ \t]{0,3}",
    )
        .prop_map(move |(upper, lead, trail)| {
            let body: String = chars
                .iter()
                .zip(upper)
                .map(|(c, up)| {
                    if up {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect();
            format!("{lead}{body}{trail}")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A respelling of an existing ingredient is always a Conflict.
    #[test]
    fn property_respelled_ingredient_conflicts(
        (name, other) in base_name().prop_flat_map(|n| (Just(n.clone()), respelled(&n)))
    ) {
        let catalog = empty_catalog();
        catalog.ingredients().create(&name).unwrap();

        let err = catalog.ingredients().create(&other).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Conflict);
        prop_assert_eq!(catalog.ingredients().list().unwrap().len(), 1);
    }

    /// PROPERTY: Resolution never creates a second ingredient for a respelling.
    #[test]
    fn property_resolve_is_idempotent(
        (name, other) in base_name().prop_flat_map(|n| (Just(n.clone()), respelled(&n)))
    ) {
        let catalog = empty_catalog();
        let first = catalog.ingredients().resolve(&name).unwrap();
        let second = catalog.ingredients().resolve(&other).unwrap();

        prop_assert_eq!(first.id, second.id);
        prop_assert_eq!(first.name, name.trim().to_string());
    }

    /// PROPERTY: Any set of names yields at most one category per normalized form.
    #[test]
    fn property_categories_stay_unique(
        names in proptest::collection::vec(base_name(), 1..12)
    ) {
        let catalog = empty_catalog();
        for name in &names {
            let _ = catalog.categories().create(name);
        }

        let mut normalized: Vec<String> = catalog
            .categories()
            .list()
            .unwrap()
            .iter()
            .map(|c| c.name.trim().to_lowercase())
            .collect();
        let stored = normalized.len();
        normalized.sort();
        normalized.dedup();
        prop_assert_eq!(normalized.len(), stored);
    }
}
