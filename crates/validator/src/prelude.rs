//! Prelude module for convenient imports.
//!
//! `use prop_types::prelude::*;` brings in the value model, every checker
//! factory, the driver and the warning channel.

// ============================================================================
// FOUNDATION: values, categories, errors
// ============================================================================

pub use crate::foundation::{
    Callable, Category, Class, Instance, Location, PropValue, Props, Scope, TypeCheck,
    TypeDescriptor, ValidationError, ValidationResult, categorize, precise_type,
};

// ============================================================================
// CHECKERS: factories and the chainable wrapper
// ============================================================================

pub use crate::checkers::{
    any, array, array_of, bool, func, instance_of, number, object, object_of, one_of,
    one_of_type, shape, string,
};
pub use crate::combinators::PropType;

// ============================================================================
// DRIVER AND DIAGNOSTICS
// ============================================================================

pub use crate::config::{SinkKind, ValidatorConfig};
pub use crate::driver::{
    Declaration, FailureCache, PropTypes, PropValidator, validate, validate_with_errors,
};
pub use crate::warning::{RecordingSink, WarningChannel, WarningError, WarningSink, warning};
pub use crate::prop_types;
