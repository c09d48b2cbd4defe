//! Primitive and permissive checkers

use crate::foundation::{
    Category, PropValue, Scope, TypeCheck, ValidationError, categorize, precise_type,
};

/// Accepts values whose [`categorize`] result equals `expected`.
///
/// Failure messages use [`precise_type`], so a date handed to a string
/// checker is reported as `date` rather than `object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    expected: Category,
}

impl Primitive {
    pub fn new(expected: Category) -> Self {
        Self { expected }
    }

    pub fn expected(&self) -> Category {
        self.expected
    }
}

impl TypeCheck for Primitive {
    fn check(&self, value: &PropValue, scope: &Scope<'_>) -> Result<(), ValidationError> {
        if categorize(value) == self.expected {
            return Ok(());
        }
        Err(ValidationError::type_mismatch(
            scope.name,
            scope.component,
            scope.location_str(),
            self.expected,
            precise_type(value),
        ))
    }
}

/// Accepts every present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Any;

impl TypeCheck for Any {
    fn check(&self, _value: &PropValue, _scope: &Scope<'_>) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Location, Props};

    const SCOPE: Scope<'static> = Scope {
        name: "testProp",
        component: "testClass",
        location: Location::Prop,
    };

    #[test]
    fn matching_category_passes() {
        let checker = Primitive::new(Category::Object);
        assert!(checker.check(&PropValue::Object(Props::new()), &SCOPE).is_ok());
        assert!(checker.check(&PropValue::Date(chrono::Utc::now()), &SCOPE).is_ok());
    }

    #[test]
    fn mismatch_reports_precise_type() {
        let err = Primitive::new(Category::String)
            .check(&PropValue::Date(chrono::Utc::now()), &SCOPE)
            .unwrap_err();
        assert_eq!(
            err.message,
            "Invalid prop `testProp` of type `date` supplied to `testClass`, expected `string`."
        );
    }

    #[test]
    fn any_accepts_everything() {
        assert!(Any.check(&PropValue::from(0), &SCOPE).is_ok());
        assert!(Any.check(&PropValue::Array(vec![]), &SCOPE).is_ok());
    }
}
