//! ONE OF TYPE combinator - union of checkers
//!
//! Tries each alternative in declared order and succeeds on the first one
//! that accepts the value. When every alternative fails the error is
//! deliberately generic: it does not say which variant came closest.

use crate::combinators::PropType;
use crate::foundation::{PropValue, Scope, TypeCheck, ValidationError};

/// Accepts a value if any of the alternatives accepts it.
///
/// # Examples
///
/// ```rust
/// use prop_types::combinators::OneOfType;
/// use prop_types::foundation::{Location, PropValue, Scope, TypeCheck};
/// use prop_types::checkers::{number, string};
///
/// let checker = OneOfType::new(vec![string(), number()]);
/// let scope = Scope::new("label", "Tab", Location::Prop);
///
/// assert!(checker.check(&PropValue::from("foo"), &scope).is_ok());
/// assert!(checker.check(&PropValue::from(123), &scope).is_ok());
/// assert_eq!(
///     checker.check(&PropValue::from(true), &scope).unwrap_err().message,
///     "Invalid prop `label` supplied to `Tab`."
/// );
/// ```
#[derive(Debug, Clone)]
pub struct OneOfType {
    alternatives: Vec<PropType>,
}

impl OneOfType {
    pub fn new(alternatives: Vec<PropType>) -> Self {
        Self { alternatives }
    }

    pub fn alternatives(&self) -> &[PropType] {
        &self.alternatives
    }
}

impl TypeCheck for OneOfType {
    fn check(&self, value: &PropValue, scope: &Scope<'_>) -> Result<(), ValidationError> {
        let matched = self
            .alternatives
            .iter()
            .any(|alternative| alternative.check_value(Some(value), scope).is_ok());

        if matched {
            Ok(())
        } else {
            Err(ValidationError::union_mismatch(
                scope.name,
                scope.component,
                scope.location_str(),
            ))
        }
    }
}
