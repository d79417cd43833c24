/// Property tests for attribute containers
///
/// Containers are the engine's only shared data shape; these properties pin
/// down immutability and the lexicographic iteration order diagnostics
/// depend on.
use proptest::prelude::*;
use variax_core::model::{AttributeContainer, AttributeValue};

fn arb_entries() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(("[a-e]{1,4}", "[a-e]{1,4}"), 0..6)
}

fn build(entries: &[(String, String)]) -> AttributeContainer {
    let mut builder = AttributeContainer::builder();
    for (name, value) in entries {
        builder = builder.attribute(name.clone(), AttributeValue::token(value.clone()));
    }
    builder.build()
}

proptest! {
    #[test]
    fn prop_iteration_is_lexicographic(entries in arb_entries()) {
        let container = build(&entries);
        let names: Vec<&str> = container.names().collect();

        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(names, sorted);
    }

    #[test]
    fn prop_with_value_never_mutates_the_receiver(
        entries in arb_entries(),
        name in "[a-e]{1,4}",
        value in "[a-e]{1,4}",
    ) {
        let base = build(&entries);
        let snapshot = base.clone();

        let extended = base.with_value(name.clone(), AttributeValue::token(value.clone()));

        // The receiver is untouched; the derived container holds the entry
        prop_assert_eq!(&base, &snapshot);
        prop_assert_eq!(
            extended.get(&name),
            Some(&AttributeValue::token(value))
        );
    }

    #[test]
    fn prop_lookup_agrees_with_last_write(entries in arb_entries()) {
        let container = build(&entries);

        for (name, _) in &entries {
            // The builder keeps the last write per name
            let expected = entries
                .iter()
                .rev()
                .find(|(n, _)| n == name)
                .map(|(_, v)| AttributeValue::token(v.clone()));
            prop_assert_eq!(container.get(name).cloned(), expected);
        }
    }

    #[test]
    fn prop_serialization_round_trips(entries in arb_entries()) {
        let container = build(&entries);
        let json = serde_json::to_string(&container).expect("Should serialize");
        let back: AttributeContainer =
            serde_json::from_str(&json).expect("Should deserialize");
        prop_assert_eq!(container, back);
    }
}
