//! End-to-end checks against the shipped action tables.
//!
//! These pin ordinals that compiled scripts depend on. A failure here means a
//! table edit renumbered or reshaped an existing action.

use nwscript_actions::{ActionType, Error, Registry, Revision};

#[test]
fn test_nwn2_random_is_ordinal_zero() {
    let registry = Registry::nwn2();
    assert_eq!(registry.count(), 1058);

    let random = registry.at(0u32).unwrap();
    assert_eq!(random.ordinal(), 0);
    assert_eq!(random.return_type(), ActionType::Int);
    assert_eq!(random.min_parameters(), 1);
    assert_eq!(random.max_parameters(), 1);
    assert_eq!(random.parameter_types(), &[ActionType::Int]);
    assert_eq!(random.parameter_cumulative_sizes(), &[4]);
    #[cfg(feature = "names")]
    assert_eq!(random.name(), "Random");
}

#[test]
fn test_nwn1_count_and_last_action() {
    let registry = Registry::nwn1();
    assert_eq!(registry.count(), 848);
    let last = registry.at(847u32).unwrap();
    assert_eq!(last.return_type(), ActionType::ItemProperty);
    #[cfg(feature = "names")]
    assert_eq!(last.name(), "ItemPropertyAdditional");
}

#[test]
fn test_vector_parameter_takes_twelve_bytes() {
    let magnitude = Registry::nwn2().at(104u32).unwrap();
    assert_eq!(magnitude.parameter_types(), &[ActionType::Vector]);
    assert_eq!(magnitude.parameter_cumulative_sizes(), &[12]);
    assert_eq!(magnitude.return_type(), ActionType::Float);
    #[cfg(feature = "names")]
    assert_eq!(magnitude.name(), "VectorMagnitude");
}

#[test]
fn test_vector_then_scalar() {
    let print = Registry::nwn2().at(141u32).unwrap();
    assert_eq!(print.parameter_types(), &[ActionType::Vector, ActionType::Int]);
    assert_eq!(print.parameter_cumulative_sizes(), &[12, 16]);
    #[cfg(feature = "names")]
    assert_eq!(print.name(), "PrintVector");
}

#[test]
fn test_optional_parameters() {
    let nearest = Registry::nwn2().at(38u32).unwrap();
    assert_eq!(nearest.min_parameters(), 2);
    assert_eq!(nearest.max_parameters(), 8);
    assert!(nearest.check_argument_count(2).is_ok());
    assert!(nearest.check_argument_count(1).is_err());
    assert!(nearest.check_argument_count(9).is_err());
    #[cfg(feature = "names")]
    assert_eq!(nearest.name(), "GetNearestCreature");
}

#[test]
fn test_zero_parameter_action() {
    let year = Registry::nwn2().at(13u32).unwrap();
    assert_eq!(year.max_parameters(), 0);
    assert_eq!(year.return_type(), ActionType::Int);
    assert!(year.parameter_types().is_empty());
    assert!(year.parameter_cumulative_sizes().is_empty());
    assert_eq!(year.arguments_size(0), Ok(0));
    #[cfg(feature = "names")]
    assert_eq!(year.name(), "GetCalendarYear");
}

#[test]
fn test_action_parameter_takes_no_stack() {
    let command = Registry::nwn2().at(294u32).unwrap();
    assert_eq!(command.parameter_types(), &[ActionType::Action]);
    assert_eq!(command.parameter_cumulative_sizes(), &[0]);
    assert_eq!(command.stack_delta(1), Ok(0));
    assert_eq!(command.parameter_cells().count(), 0);
    #[cfg(feature = "names")]
    assert_eq!(command.name(), "ActionDoCommand");
}

#[test]
fn test_effect_damage_diverges_between_revisions() {
    let nwn1 = Registry::nwn1().at(79u32).unwrap();
    let nwn2 = Registry::nwn2().at(79u32).unwrap();
    assert_eq!(nwn1.max_parameters(), 3);
    assert_eq!(nwn2.max_parameters(), 4);
    assert_eq!(nwn1.return_type(), ActionType::Effect);
    assert_eq!(nwn2.return_type(), ActionType::Effect);

    #[cfg(feature = "names")]
    {
        assert_eq!(nwn1.name(), "EffectDamage");
        assert_eq!(nwn2.name(), "EffectDamage");
        assert_eq!(Registry::nwn1().resolve_by_name("EffectDamage"), Some(79));
        assert_eq!(Registry::nwn2().resolve_by_name("EffectDamage"), Some(79));
    }
}

#[test]
fn test_out_of_range_ordinals() {
    for revision in Revision::ALL {
        let registry = revision.registry();
        let count = registry.count();
        assert!(matches!(
            registry.at(-1i32),
            Err(Error::OutOfRange { ordinal: -1, .. })
        ));
        let past_end = i64::try_from(count).unwrap();
        assert_eq!(
            registry.at(past_end),
            Err(Error::OutOfRange {
                revision,
                ordinal: past_end,
                count
            })
        );
    }
}

#[test]
fn test_wide_unsigned_ordinals() {
    let registry = Registry::nwn1();
    let index: usize = 847;
    assert_eq!(registry.at(index), registry.at(847u32));
    assert!(registry.at(51u64).is_ok());
    assert_eq!(
        registry.at(848usize),
        Err(Error::OutOfRange {
            revision: Revision::Nwn1,
            ordinal: 848,
            count: 848
        })
    );
    // Too wide for i64; reported at the clamp.
    assert_eq!(
        registry.at(u64::MAX),
        Err(Error::OutOfRange {
            revision: Revision::Nwn1,
            ordinal: i64::MAX,
            count: 848
        })
    );
}

#[test]
fn test_retired_ordinal_is_placeholder() {
    let retired = Registry::nwn2().at(578u32).unwrap();
    assert!(retired.is_placeholder());
    assert_eq!(retired.max_parameters(), 0);
    assert_eq!(retired.return_type(), ActionType::Void);
    #[cfg(feature = "names")]
    assert_eq!(retired.name(), nwscript_actions::PLACEHOLDER_NAME);
    #[cfg(not(feature = "names"))]
    assert_eq!(retired.name(), "");

    let placeholders: Vec<u32> = Revision::ALL
        .into_iter()
        .flat_map(|revision| revision.registry().iter())
        .filter(|action| action.is_placeholder())
        .map(|action| action.ordinal())
        .collect();
    assert_eq!(placeholders, vec![578]);
}

#[test]
fn test_unknown_names_resolve_to_nothing() {
    for revision in Revision::ALL {
        let registry = revision.registry();
        assert_eq!(registry.resolve_by_name(""), None);
        assert_eq!(registry.resolve_by_name("nonexistent"), None);
        assert!(matches!(
            registry.lookup("nonexistent"),
            Err(Error::NotFound { .. })
        ));
    }
}

#[cfg(feature = "names")]
#[test]
fn test_name_resolution_is_case_sensitive() {
    let registry = Registry::nwn1();
    assert_eq!(registry.resolve_by_name("GetLocalInt"), Some(51));
    assert_eq!(registry.resolve_by_name("getlocalint"), None);
}

#[cfg(feature = "names")]
#[test]
fn test_assign_command_action_after_object() {
    let assign = Registry::nwn1().lookup("AssignCommand").unwrap();
    assert_eq!(
        assign.parameter_types(),
        &[ActionType::Object, ActionType::Action]
    );
    assert_eq!(assign.parameter_cumulative_sizes(), &[4, 4]);
    assert_eq!(assign.argument_offset(0), Some(-4));
    assert_eq!(assign.arguments_size(2), Ok(4));
}

#[cfg(feature = "names")]
#[test]
fn test_widest_action() {
    let input = Registry::nwn2().lookup("DisplayInputBox").unwrap();
    assert_eq!(input.max_parameters(), nwscript_actions::MAX_PARAMETERS);
    assert_eq!(input.min_parameters(), 3);
    assert_eq!(Registry::nwn1().resolve_by_name("DisplayInputBox"), None);
}

#[cfg(feature = "names")]
#[test]
fn test_floating_text_vector_offset() {
    let text = Registry::nwn2()
        .lookup("FloatingTextStringOnCreature")
        .unwrap();
    assert_eq!(text.max_parameters(), 8);
    assert_eq!(text.parameter_type(7), Some(ActionType::Vector));
    assert_eq!(text.parameter_cumulative_size(7), Some(40));
    assert_eq!(text.arguments_size(8), Ok(40));
    assert_eq!(text.arguments_size(2), Ok(8));
}

#[cfg(feature = "prototypes")]
#[test]
fn test_prototypes_read_as_source() {
    let action = Registry::nwn1().at(51u32).unwrap();
    assert_eq!(
        action.prototype(),
        "int GetLocalInt(object oObject, string sVarName);"
    );
}
