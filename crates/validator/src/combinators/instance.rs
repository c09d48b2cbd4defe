//! INSTANCE OF combinator

use crate::foundation::{PropValue, Scope, TypeCheck, TypeDescriptor, ValidationError};

/// Validates that a value is a runtime instance of a [`TypeDescriptor`].
#[derive(Debug, Clone)]
pub struct InstanceOf {
    expected: TypeDescriptor,
}

impl InstanceOf {
    pub fn new(expected: TypeDescriptor) -> Self {
        Self { expected }
    }

    pub fn expected(&self) -> &TypeDescriptor {
        &self.expected
    }
}

impl TypeCheck for InstanceOf {
    fn check(&self, value: &PropValue, scope: &Scope<'_>) -> Result<(), ValidationError> {
        if self.expected.matches(value) {
            return Ok(());
        }
        Err(ValidationError::instance_mismatch(
            scope.name,
            scope.component,
            scope.location_str(),
            self.expected.display_name(),
        ))
    }
}
