//! Property-based tests for the checkers.

use prop_types::checkers;
use prop_types::combinators::PropType;
use prop_types::foundation::{Category, Location, PropValue, Props, categorize};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = PropValue> {
    prop_oneof![
        Just(PropValue::Null),
        Just(PropValue::Undefined),
        any::<bool>().prop_map(PropValue::from),
        any::<f64>().prop_map(PropValue::from),
        ".{0,8}".prop_map(PropValue::from),
    ]
}

fn value() -> impl Strategy<Value = PropValue> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(PropValue::Array),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4)
                .prop_map(|entries| PropValue::Object(entries.into_iter().collect())),
        ]
    })
}

fn checker() -> impl Strategy<Value = PropType> {
    prop_oneof![
        Just(checkers::array()),
        Just(checkers::bool()),
        Just(checkers::number()),
        Just(checkers::object()),
        Just(checkers::string()),
        Just(checkers::any()),
        Just(checkers::array_of(checkers::number())),
        Just(checkers::object_of(checkers::string())),
        Just(checkers::one_of(["a", "b"])),
        Just(checkers::one_of_type([checkers::string(), checkers::number()])),
        Just(checkers::shape([("a", checkers::number().is_required())])),
    ]
}

fn bag(value: PropValue) -> Props {
    Props::from([("p".to_owned(), value)])
}

proptest! {
    #[test]
    fn optional_and_required_agree_on_present_values(checker in checker(), value in value()) {
        prop_assume!(!value.is_nullish());
        let props = bag(value);
        let optional = checker.check_optional(&props, "p", Some("C"), Location::Prop);
        let required = checker.check_required(&props, "p", Some("C"), Location::Prop);
        prop_assert_eq!(optional, required);
    }

    #[test]
    fn nullish_values_split_by_mode(checker in checker(), null in any::<bool>()) {
        let props = bag(if null { PropValue::Null } else { PropValue::Undefined });
        prop_assert!(checker.check_optional(&props, "p", None, Location::Prop).is_ok());
        prop_assert!(checker.check_required(&props, "p", None, Location::Prop).is_err());
    }

    #[test]
    fn any_accepts_every_present_value(value in value()) {
        prop_assume!(!value.is_nullish());
        prop_assert!(checkers::any().check(&bag(value), "p", None, Location::Prop).is_ok());
    }

    #[test]
    fn primitive_checks_match_categorization(value in value()) {
        prop_assume!(!value.is_nullish());
        let category = categorize(&value);
        let props = bag(value);
        for (expected, checker) in [
            (Category::Array, checkers::array()),
            (Category::Boolean, checkers::bool()),
            (Category::Number, checkers::number()),
            (Category::Object, checkers::object()),
            (Category::String, checkers::string()),
        ] {
            let accepted = checker.check(&props, "p", None, Location::Prop).is_ok();
            prop_assert_eq!(accepted, category == expected);
        }
    }

    #[test]
    fn checks_are_deterministic(checker in checker(), value in value()) {
        let props = bag(value);
        let first = checker.check(&props, "p", Some("C"), Location::Prop);
        let second = checker.check(&props, "p", Some("C"), Location::Prop);
        prop_assert_eq!(first, second);
    }
}
