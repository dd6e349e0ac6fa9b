//! Property-based tests over both action tables.
//!
//! Uses `proptest` to pick ordinals and argument counts and checks the layout
//! invariants every consumer relies on:
//! - ordinals are dense and match their row
//! - cumulative sizes step by each parameter's stack size
//! - names round-trip through the resolver
//! - argument checks agree with the declared arity

use nwscript_actions::{ActionType, CELL_SIZE, Error, MAX_PARAMETERS, Registry, Revision};
use proptest::prelude::*;

fn revision_strategy() -> impl Strategy<Value = Revision> {
    prop_oneof![Just(Revision::Nwn1), Just(Revision::Nwn2)]
}

fn action_strategy() -> impl Strategy<Value = (Revision, usize)> {
    revision_strategy()
        .prop_flat_map(|revision| (Just(revision), 0..revision.action_count()))
}

proptest! {
    #[test]
    fn ordinal_matches_position((revision, ordinal) in action_strategy()) {
        let action = revision.registry().get(ordinal).unwrap();
        prop_assert_eq!(action.ordinal() as usize, ordinal);
    }

    #[test]
    fn arity_and_array_shape((revision, ordinal) in action_strategy()) {
        let action = revision.registry().get(ordinal).unwrap();
        prop_assert!(action.min_parameters() <= action.max_parameters());
        prop_assert!(action.max_parameters() <= MAX_PARAMETERS);
        prop_assert_eq!(action.parameter_types().len(), action.max_parameters());
        prop_assert_eq!(action.parameter_cumulative_sizes().len(), action.max_parameters());
    }

    #[test]
    fn sizes_step_by_stack_size((revision, ordinal) in action_strategy()) {
        let action = revision.registry().get(ordinal).unwrap();
        let mut previous = 0;
        for (&ty, &size) in action.parameter_types().iter().zip(action.parameter_cumulative_sizes()) {
            prop_assert_ne!(ty, ActionType::Void);
            let step = size - previous;
            match ty {
                ActionType::Vector => {
                    prop_assert_eq!(step, 3 * CELL_SIZE);
                }
                ActionType::Action => {
                    prop_assert_eq!(step, 0);
                }
                _ => {
                    prop_assert_eq!(step, CELL_SIZE);
                }
            }
            previous = size;
        }
    }

    #[test]
    fn cells_cover_argument_bytes((revision, ordinal) in action_strategy()) {
        let action = revision.registry().get(ordinal).unwrap();
        let cells = action.parameter_cells().count() as u32;
        let total = action.arguments_size(action.max_parameters()).unwrap();
        prop_assert_eq!(cells * CELL_SIZE, total);
    }

    #[test]
    fn argument_count_check_matches_arity(
        (revision, ordinal) in action_strategy(),
        supplied in 0..=MAX_PARAMETERS + 1,
    ) {
        let action = revision.registry().get(ordinal).unwrap();
        let result = action.check_argument_count(supplied);
        if supplied < action.min_parameters() {
            let is_too_few = matches!(result, Err(Error::TooFewArguments { .. }));
            prop_assert!(is_too_few);
        } else if supplied > action.max_parameters() {
            let is_too_many = matches!(result, Err(Error::TooManyArguments { .. }));
            prop_assert!(is_too_many);
        } else {
            prop_assert!(result.is_ok());
            let offset = action.argument_offset(supplied.saturating_sub(1));
            if supplied > 0 {
                let popped = action.arguments_size(supplied).unwrap();
                prop_assert_eq!(offset, Some(-(popped as i32)));
            }
        }
    }

    #[test]
    fn out_of_range_past_end(revision in revision_strategy(), extra in 0i64..10_000) {
        let registry = revision.registry();
        let ordinal = registry.count() as i64 + extra;
        let is_out_of_range = matches!(registry.at(ordinal), Err(Error::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn negative_ordinals_rejected(revision in revision_strategy(), ordinal in i64::MIN..0) {
        let is_out_of_range = matches!(revision.registry().at(ordinal), Err(Error::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[cfg(feature = "names")]
    #[test]
    fn names_resolve_back((revision, ordinal) in action_strategy()) {
        let registry = revision.registry();
        let action = registry.get(ordinal).unwrap();
        prop_assert_eq!(registry.resolve_by_name(action.name()), Some(action.ordinal()));
    }

    #[test]
    fn arbitrary_names_never_panic(revision in revision_strategy(), name in "\\PC{0,24}") {
        let registry = revision.registry();
        if let Some(ordinal) = registry.resolve_by_name(&name) {
            prop_assert_eq!(registry.at(ordinal).unwrap().name(), name.as_str());
        }
    }
}

#[test]
fn iteration_is_ascending_and_complete() {
    for revision in Revision::ALL {
        let registry = revision.registry();
        let ordinals: Vec<u32> = registry.iter().map(|action| action.ordinal()).collect();
        assert_eq!(ordinals.len(), registry.count());
        assert!(ordinals.windows(2).all(|pair| pair[0] + 1 == pair[1]));

        // Restartable.
        assert_eq!(registry.iter().count(), registry.count());
        assert_eq!(registry.into_iter().len(), registry.count());
    }
}

#[test]
fn tables_are_valid() {
    for revision in Revision::ALL {
        revision.registry().validate().unwrap();
    }
}

#[cfg(not(feature = "names"))]
#[test]
fn elided_names_resolve_to_nothing() {
    let registry = Registry::nwn1();
    assert_eq!(registry.at(0u32).unwrap().name(), "");
    assert_eq!(registry.resolve_by_name("Random"), None);
}

#[cfg(feature = "names")]
#[test]
fn names_are_unique() {
    use std::collections::HashSet;

    for revision in Revision::ALL {
        let registry = Registry::for_revision(revision);
        let names: HashSet<_> = registry.iter().map(|action| action.name()).collect();
        assert_eq!(names.len(), registry.count(), "{revision}");
    }
}
