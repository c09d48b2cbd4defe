//! ONE OF combinator - enumerated values

use crate::foundation::{PropValue, Scope, TypeCheck, ValidationError};

/// Accepts values strictly equal to one of the allowed values.
///
/// The compact JSON rendering of the allowed list is computed once, at
/// construction.
#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Vec<PropValue>,
    rendered: String,
}

impl OneOf {
    pub fn new(allowed: Vec<PropValue>) -> Self {
        let rendered = PropValue::Array(allowed.clone()).to_json_string();
        Self { allowed, rendered }
    }

    pub fn allowed(&self) -> &[PropValue] {
        &self.allowed
    }
}

impl TypeCheck for OneOf {
    fn check(&self, value: &PropValue, scope: &Scope<'_>) -> Result<(), ValidationError> {
        if self.allowed.iter().any(|allowed| value.strict_eq(allowed)) {
            return Ok(());
        }
        Err(ValidationError::enum_mismatch(
            scope.name,
            scope.component,
            scope.location_str(),
            &value.to_string(),
            &self.rendered,
        ))
    }
}
