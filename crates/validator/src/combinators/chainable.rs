//! Required/optional wrapper shared by every checker
//!
//! A [`PropType`] owns a [`TypeCheck`] and decides what happens to null and
//! absent values before the checker runs: optional checkers accept them,
//! required ones fail with a "was not specified" error. For every other
//! value both modes delegate to the same checker, so they always agree.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{
    ANONYMOUS, Location, PropValue, Props, Scope, TypeCheck, ValidationError, ValidationResult,
};

/// A chainable checker.
///
/// # Examples
///
/// ```rust
/// use prop_types::checkers::{number, string};
/// use prop_types::foundation::{Location, Props};
///
/// let props = Props::new();
/// assert!(string().check(&props, "title", Some("Card"), Location::Prop).is_ok());
///
/// let err = number()
///     .is_required()
///     .check(&props, "count", Some("Card"), Location::Prop)
///     .unwrap_err();
/// assert_eq!(err.message, "Required prop `count` was not specified in `Card`.");
/// ```
#[derive(Clone)]
pub struct PropType {
    checker: Arc<dyn TypeCheck>,
    required: bool,
}

impl PropType {
    /// Wraps a checker in optional mode.
    pub fn new(checker: impl TypeCheck + 'static) -> Self {
        Self {
            checker: Arc::new(checker),
            required: false,
        }
    }

    /// Wraps a closure as a checker.
    ///
    /// The closure only sees present, non-null values. Panics are allowed;
    /// the validation driver turns them into errors.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&PropValue, &Scope<'_>) -> ValidationResult + Send + Sync + 'static,
    {
        Self::new(f)
    }

    /// The required variant of this checker.
    #[must_use]
    pub fn is_required(&self) -> Self {
        Self {
            checker: Arc::clone(&self.checker),
            required: true,
        }
    }

    /// Whether this variant rejects null and absent values.
    pub fn requires_value(&self) -> bool {
        self.required
    }

    /// Checks `props[name]` using this variant's mode.
    ///
    /// `component` falls back to `<<anonymous>>` when absent or empty.
    pub fn check(
        &self,
        props: &Props,
        name: &str,
        component: Option<&str>,
        location: Location,
    ) -> ValidationResult {
        let scope = Scope::new(name, component_name(component), location);
        self.check_value(props.get(name), &scope)
    }

    /// Checks `props[name]`, accepting null and absent values.
    pub fn check_optional(
        &self,
        props: &Props,
        name: &str,
        component: Option<&str>,
        location: Location,
    ) -> ValidationResult {
        let scope = Scope::new(name, component_name(component), location);
        self.run(props.get(name), &scope, false)
    }

    /// Checks `props[name]`, rejecting null and absent values.
    pub fn check_required(
        &self,
        props: &Props,
        name: &str,
        component: Option<&str>,
        location: Location,
    ) -> ValidationResult {
        let scope = Scope::new(name, component_name(component), location);
        self.run(props.get(name), &scope, true)
    }

    /// Checks a value that was already looked up. `None` means absent.
    pub fn check_value(&self, value: Option<&PropValue>, scope: &Scope<'_>) -> ValidationResult {
        self.run(value, scope, self.required)
    }

    fn run(&self, value: Option<&PropValue>, scope: &Scope<'_>, required: bool) -> ValidationResult {
        match value {
            Some(value) if !value.is_nullish() => self.checker.check(value, scope),
            _ if required => Err(ValidationError::required(
                scope.name,
                scope.component,
                scope.location_str(),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropType")
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

pub(crate) fn component_name(component: Option<&str>) -> &str {
    component.filter(|name| !name.is_empty()).unwrap_or(ANONYMOUS)
}
