//! EACH combinators - validate every element of a container
//!
//! [`ArrayOf`] walks array elements in ascending index order, [`ObjectOf`]
//! walks own keys in enumeration order. Both stop at the first failing
//! element and return its error unchanged; the element's index or key is
//! used as the attribute name in that error.

use crate::combinators::PropType;
use crate::foundation::{Category, PropValue, Scope, TypeCheck, ValidationError, categorize};

// ============================================================================
// ARRAY OF
// ============================================================================

/// Validates that a value is an array whose elements all pass `inner`.
///
/// # Examples
///
/// ```rust
/// use prop_types::combinators::ArrayOf;
/// use prop_types::foundation::{Location, PropValue, Scope, TypeCheck};
/// use prop_types::checkers::number;
///
/// let checker = ArrayOf::new(number());
/// let scope = Scope::new("sizes", "Grid", Location::Prop);
///
/// let value = PropValue::from(vec![PropValue::from(1), PropValue::from("b")]);
/// let err = checker.check(&value, &scope).unwrap_err();
/// assert_eq!(err.field.as_deref(), Some("1"));
/// ```
#[derive(Debug, Clone)]
pub struct ArrayOf {
    inner: PropType,
}

impl ArrayOf {
    pub fn new(inner: PropType) -> Self {
        Self { inner }
    }

    /// Returns a reference to the element checker.
    pub fn inner(&self) -> &PropType {
        &self.inner
    }
}

impl TypeCheck for ArrayOf {
    fn check(&self, value: &PropValue, scope: &Scope<'_>) -> Result<(), ValidationError> {
        let PropValue::Array(items) = value else {
            return Err(ValidationError::expected_array(
                scope.name,
                scope.component,
                scope.location_str(),
                categorize(value),
            ));
        };

        for (index, element) in items.iter().enumerate() {
            let index = index.to_string();
            self.inner.check_value(Some(element), &scope.at(&index))?;
        }
        Ok(())
    }
}

// ============================================================================
// OBJECT OF
// ============================================================================

/// Validates that a value is an object whose own values all pass `inner`.
///
/// Dates, regular expressions and class instances are objects too; the
/// first two have no own keys, instances contribute their fields.
#[derive(Debug, Clone)]
pub struct ObjectOf {
    inner: PropType,
}

impl ObjectOf {
    pub fn new(inner: PropType) -> Self {
        Self { inner }
    }

    /// Returns a reference to the value checker.
    pub fn inner(&self) -> &PropType {
        &self.inner
    }
}

impl TypeCheck for ObjectOf {
    fn check(&self, value: &PropValue, scope: &Scope<'_>) -> Result<(), ValidationError> {
        let category = categorize(value);
        if category != Category::Object {
            return Err(ValidationError::expected_object(
                scope.name,
                scope.component,
                scope.location_str(),
                category,
            ));
        }

        if let Some(props) = value.own_props() {
            for (key, element) in props {
                self.inner.check_value(Some(element), &scope.at(key))?;
            }
        }
        Ok(())
    }
}
