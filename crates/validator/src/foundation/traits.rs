//! Core traits for the checker system
//!
//! Every checker implements [`TypeCheck`]. Checkers are stateless and shared
//! freely across threads; they only ever see values that are present and
//! non-null, because [`PropType`](crate::combinators::PropType) handles the
//! required/optional decision before delegating.

use std::fmt;

use crate::foundation::{PropValue, ValidationError};

/// Where the validated value came from. Rendered into every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Location {
    #[default]
    Prop,
    Context,
    ChildContext,
}

impl Location {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prop => "prop",
            Self::Context => "context",
            Self::ChildContext => "child context",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The naming context of a single check: which attribute, owned by which
/// component, at which location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope<'a> {
    pub name: &'a str,
    pub component: &'a str,
    pub location: Location,
}

impl<'a> Scope<'a> {
    /// Scope for the attribute `name` of `component`.
    pub fn new(name: &'a str, component: &'a str, location: Location) -> Self {
        Self {
            name,
            component,
            location,
        }
    }

    /// Same component and location, different attribute name. Used for
    /// array indices, object keys and shape fields.
    #[must_use]
    pub fn at<'b>(&'b self, name: &'b str) -> Scope<'b> {
        Scope {
            name,
            component: self.component,
            location: self.location,
        }
    }

    pub fn location_str(&self) -> &'static str {
        self.location.as_str()
    }
}

/// The trait every checker implements.
///
/// # Examples
///
/// ```rust
/// use prop_types::foundation::{PropValue, Scope, TypeCheck, ValidationError};
///
/// struct NonEmpty;
///
/// impl TypeCheck for NonEmpty {
///     fn check(&self, value: &PropValue, scope: &Scope<'_>) -> Result<(), ValidationError> {
///         match value {
///             PropValue::String(s) if s.is_empty() => Err(ValidationError::new(
///                 "empty",
///                 format!("Empty {} `{}` supplied to `{}`.", scope.location, scope.name, scope.component),
///             )),
///             _ => Ok(()),
///         }
///     }
/// }
/// ```
pub trait TypeCheck: Send + Sync {
    /// Checks a value that is known to be present and non-null.
    fn check(&self, value: &PropValue, scope: &Scope<'_>) -> Result<(), ValidationError>;
}

impl<F> TypeCheck for F
where
    F: Fn(&PropValue, &Scope<'_>) -> Result<(), ValidationError> + Send + Sync,
{
    fn check(&self, value: &PropValue, scope: &Scope<'_>) -> Result<(), ValidationError> {
        self(value, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_names() {
        assert_eq!(Location::Prop.to_string(), "prop");
        assert_eq!(Location::Context.to_string(), "context");
        assert_eq!(Location::ChildContext.to_string(), "child context");
    }

    #[test]
    fn scope_at_keeps_component() {
        let scope = Scope::new("items", "List", Location::Prop);
        let index = 2.to_string();
        let child = scope.at(&index);
        assert_eq!(child.name, "2");
        assert_eq!(child.component, "List");
        assert_eq!(child.location, Location::Prop);
    }

    #[test]
    fn closures_are_checkers() {
        let reject_all = |_: &PropValue, scope: &Scope<'_>| -> Result<(), ValidationError> {
            Err(ValidationError::new("nope", format!("`{}` rejected", scope.name)))
        };
        let scope = Scope::new("x", "C", Location::Prop);
        let err = reject_all.check(&PropValue::Null, &scope).unwrap_err();
        assert_eq!(err.message, "`x` rejected");
    }
}
