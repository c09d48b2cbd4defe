//! SHAPE combinator - validates declared fields of an object
//!
//! Fields are checked in declaration order, not in the order the value
//! happens to list its keys, so the first required field missing is always
//! the one reported. Keys the shape does not declare are ignored.

use indexmap::IndexMap;

use crate::combinators::PropType;
use crate::foundation::{Category, PropValue, Scope, TypeCheck, ValidationError, categorize};

/// Validates an object against a set of named field checkers.
///
/// A field declared with `None` is skipped, which lets shapes be assembled
/// from optional pieces without filtering first.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    fields: IndexMap<String, Option<PropType>>,
}

impl Shape {
    pub fn new(fields: IndexMap<String, Option<PropType>>) -> Self {
        Self { fields }
    }

    /// Adds (or replaces) a field, keeping its original position on replace.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, checker: impl Into<Option<PropType>>) -> Self {
        self.fields.insert(name.into(), checker.into());
        self
    }

    /// Declared field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl TypeCheck for Shape {
    fn check(&self, value: &PropValue, scope: &Scope<'_>) -> Result<(), ValidationError> {
        let category = categorize(value);
        if category != Category::Object {
            return Err(ValidationError::expected_shape(
                scope.name,
                scope.component,
                scope.location_str(),
                category,
            ));
        }

        for (key, checker) in &self.fields {
            let Some(checker) = checker else {
                continue;
            };
            checker.check_value(value.get(key), &scope.at(key))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{number, string};
    use crate::foundation::{Location, Props};

    const SCOPE: Scope<'static> = Scope {
        name: "testProp",
        component: "testClass",
        location: Location::Prop,
    };

    #[test]
    fn first_declared_required_field_wins() {
        let checker = Shape::default()
            .field("key", number().is_required())
            .field("secondKey", number().is_required());
        let err = checker
            .check(&PropValue::Object(Props::new()), &SCOPE)
            .unwrap_err();
        assert_eq!(err.message, "Required prop `key` was not specified in `testClass`.");
    }

    #[test]
    fn declaration_order_beats_value_order() {
        let checker = Shape::default().field("a", string()).field("b", string());
        let value = Props::from([
            ("b".to_owned(), PropValue::from(2)),
            ("a".to_owned(), PropValue::from(1)),
        ]);
        let err = checker.check(&PropValue::Object(value), &SCOPE).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("a"));
    }

    #[test]
    fn missing_checkers_are_skipped() {
        let checker = Shape::default().field("key", None::<PropType>).field("other", number());
        let value = Props::from([("key".to_owned(), PropValue::from("anything"))]);
        assert!(checker.check(&PropValue::Object(value), &SCOPE).is_ok());
        assert_eq!(checker.field_names().collect::<Vec<_>>(), ["key", "other"]);
    }

    #[test]
    fn non_object_quotes_expected_kind() {
        let err = Shape::default()
            .check(&PropValue::from("some string"), &SCOPE)
            .unwrap_err();
        assert_eq!(
            err.message,
            "Invalid prop `testProp` of type `string` supplied to `testClass`, expected `object`."
        );
    }
}
