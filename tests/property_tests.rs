//! Property-based tests for the sort string grammar and whitelist
//! behavior across generated inputs.

use proptest::prelude::*;
use sort_param::{Definition, Direction, FieldOptions, Fields, Mode, NullOrdering};

/// Column names that cannot collide with the sign/suffix grammar.
fn column_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.]{0,9}"
}

proptest! {
    // Parsing is deterministic for arbitrary input.
    #[test]
    fn prop_parse_is_deterministic(input in ".{0,80}") {
        prop_assert_eq!(Fields::parse(&input), Fields::parse(&input));
    }

    // No parse result ever contains a blank name or a duplicate name.
    #[test]
    fn prop_names_are_non_blank_and_unique(input in ".{0,80}") {
        let fields = Fields::parse(&input);

        let names: Vec<_> = fields.names().collect();
        for name in &names {
            prop_assert!(!name.trim().is_empty());
        }

        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(names.len(), deduped.len());
    }

    // Tokens that are a bare sign or blank parse to nothing.
    #[test]
    fn prop_signs_alone_parse_to_nothing(
        tokens in proptest::collection::vec(
            prop_oneof![Just("+"), Just("-"), Just(""), Just("   ")],
            0..10,
        ),
    ) {
        let input = tokens.join(",");
        prop_assert!(Fields::parse(&input).is_empty());
    }

    // A bare name and an explicit '+' sign are equivalent.
    #[test]
    fn prop_plus_sign_is_default(name in column_name()) {
        let bare = Fields::parse(&name);
        let signed = Fields::parse(&format!("+{name}"));

        prop_assert_eq!(&bare, &signed);

        let field = bare.get(&name).unwrap();
        prop_assert_eq!(field.direction(), Direction::Asc);
        prop_assert!(field.nulls().is_none());
    }

    // Sign and suffix round-trip for a full token.
    #[test]
    fn prop_token_roundtrip(
        name in column_name(),
        descending in any::<bool>(),
        nulls in proptest::option::of(any::<bool>()),
    ) {
        let sign = if descending { "-" } else { "+" };
        let suffix = match nulls {
            Some(true) => ":nulls_first",
            Some(false) => ":nulls_last",
            None => "",
        };

        let fields = Fields::parse(&format!("{sign}{name}{suffix}"));
        prop_assert_eq!(fields.len(), 1);

        let field = fields.get(&name).unwrap();
        prop_assert_eq!(field.name(), name.as_str());
        let expected_direction = if descending { Direction::Desc } else { Direction::Asc };
        prop_assert_eq!(field.direction(), expected_direction);

        let expected_nulls =
            nulls.map(|first| if first { NullOrdering::First } else { NullOrdering::Last });
        prop_assert_eq!(field.nulls(), expected_nulls);
    }

    // A definition declaring every parsed name accepts the input in both
    // loading modes, and they agree.
    #[test]
    fn prop_strict_equals_permissive_when_all_declared(
        names in proptest::collection::vec(column_name(), 1..6),
        descending in any::<bool>(),
    ) {
        let mut definition = Definition::new();
        for name in &names {
            definition = definition.field(name, FieldOptions::new());
        }

        let sign = if descending { "-" } else { "" };
        let input: Vec<String> = names.iter().map(|name| format!("{sign}{name}")).collect();
        let input = input.join(",");

        for mode in [Mode::Hash, Mode::Postgres, Mode::MySql] {
            let strict = definition.load_strict(&input, mode);
            prop_assert!(strict.is_ok());
            prop_assert_eq!(strict.unwrap(), definition.load(&input, mode));
        }
    }
}
