//! Error types for prop type failures
//!
//! A [`ValidationError`] is a value, not a control-flow mechanism: checkers
//! return it through `Result` and the driver decides whether it becomes a
//! warning or is handed back to the caller.
//!
//! Two errors are considered "the same failure" when their messages are
//! equal. The driver deduplicates on [`ValidationError::message`] alone, so
//! the code, field and params are free to carry extra context.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::Category;

/// Placeholder used when a component or type has no name.
pub const ANONYMOUS: &str = "<<anonymous>>";

/// Stable codes for each failure kind.
pub mod codes {
    /// Observed category differs from the expected primitive kind.
    pub const INVALID_TYPE: &str = "invalid_type";
    /// Value is null or absent on a required checker.
    pub const REQUIRED: &str = "required";
    /// `array_of` received something that is not an array.
    pub const EXPECTED_ARRAY: &str = "expected_array";
    /// `object_of` or `shape` received something that is not an object.
    pub const EXPECTED_OBJECT: &str = "expected_object";
    /// `instance_of` received a value of the wrong runtime type.
    pub const INVALID_INSTANCE: &str = "invalid_instance";
    /// `one_of` received a value outside the allowed set.
    pub const INVALID_ENUM: &str = "invalid_enum";
    /// No `one_of_type` variant accepted the value.
    pub const INVALID_UNION: &str = "invalid_union";
    /// A checker set entry is not an invocable checker.
    pub const INVALID_PROP_TYPE: &str = "invalid_prop_type";
    /// A checker panicked while running.
    pub const CHECKER_PANICKED: &str = "checker_panicked";
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured prop type failure.
///
/// # Examples
///
/// ```rust
/// use prop_types::foundation::ValidationError;
///
/// let error = ValidationError::new("custom", "Invalid prop `size` supplied to `Button`.")
///     .with_field("size")
///     .with_param("component", "Button");
///
/// assert_eq!(error.param("component"), Some("Button"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling, see [`codes`].
    pub code: Cow<'static, str>,

    /// Human-readable message. This is the deduplication key.
    pub message: Cow<'static, str>,

    /// Name of the prop (or array index / object key) that failed.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value pairs describing the failure.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if the error carries the given code.
    #[must_use]
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// `Invalid prop `x` of type `array` supplied to `C`, expected `string`.`
    pub fn type_mismatch(
        name: &str,
        component: &str,
        location: &str,
        expected: Category,
        precise: &str,
    ) -> Self {
        Self::new(
            codes::INVALID_TYPE,
            format!(
                "Invalid {location} `{name}` of type `{precise}` supplied to `{component}`, \
                 expected `{expected}`."
            ),
        )
        .with_field(name.to_owned())
        .with_param("expected", expected.as_str())
        .with_param("actual", precise.to_owned())
    }

    /// `Required prop `x` was not specified in `C`.`
    pub fn required(name: &str, component: &str, location: &str) -> Self {
        Self::new(
            codes::REQUIRED,
            format!("Required {location} `{name}` was not specified in `{component}`."),
        )
        .with_field(name.to_owned())
        .with_param("component", component.to_owned())
    }

    /// `Invalid prop `x` of type `number` supplied to `C`, expected an array.`
    pub fn expected_array(name: &str, component: &str, location: &str, actual: Category) -> Self {
        Self::new(
            codes::EXPECTED_ARRAY,
            format!(
                "Invalid {location} `{name}` of type `{actual}` supplied to `{component}`, \
                 expected an array."
            ),
        )
        .with_field(name.to_owned())
        .with_param("actual", actual.as_str())
    }

    /// `Invalid prop `x` of type `array` supplied to `C`, expected an object.`
    pub fn expected_object(name: &str, component: &str, location: &str, actual: Category) -> Self {
        Self::new(
            codes::EXPECTED_OBJECT,
            format!(
                "Invalid {location} `{name}` of type `{actual}` supplied to `{component}`, \
                 expected an object."
            ),
        )
        .with_field(name.to_owned())
        .with_param("actual", actual.as_str())
    }

    /// Shape variant of [`expected_object`](Self::expected_object), which
    /// quotes the expected kind instead of using an article.
    pub fn expected_shape(name: &str, component: &str, location: &str, actual: Category) -> Self {
        Self::new(
            codes::EXPECTED_OBJECT,
            format!(
                "Invalid {location} `{name}` of type `{actual}` supplied to `{component}`, \
                 expected `object`."
            ),
        )
        .with_field(name.to_owned())
        .with_param("actual", actual.as_str())
    }

    /// `Invalid prop `x` supplied to `C`, expected instance of `T`.`
    pub fn instance_mismatch(name: &str, component: &str, location: &str, type_name: &str) -> Self {
        Self::new(
            codes::INVALID_INSTANCE,
            format!(
                "Invalid {location} `{name}` supplied to `{component}`, \
                 expected instance of `{type_name}`."
            ),
        )
        .with_field(name.to_owned())
        .with_param("expected", type_name.to_owned())
    }

    /// `Invalid prop `x` of value `v` supplied to `C`, expected one of [..].`
    pub fn enum_mismatch(
        name: &str,
        component: &str,
        location: &str,
        value: &str,
        allowed: &str,
    ) -> Self {
        Self::new(
            codes::INVALID_ENUM,
            format!(
                "Invalid {location} `{name}` of value `{value}` supplied to `{component}`, \
                 expected one of {allowed}."
            ),
        )
        .with_field(name.to_owned())
        .with_param("expected", allowed.to_owned())
        .with_param("actual", value.to_owned())
    }

    /// `Invalid prop `x` supplied to `C`.`
    pub fn union_mismatch(name: &str, component: &str, location: &str) -> Self {
        Self::new(
            codes::INVALID_UNION,
            format!("Invalid {location} `{name}` supplied to `{component}`."),
        )
        .with_field(name.to_owned())
    }

    /// Usage error for a checker set entry that cannot be invoked.
    pub fn invalid_prop_type(name: &str, component: &str) -> Self {
        Self::new(
            codes::INVALID_PROP_TYPE,
            format!(
                "{component}: attributes type `{name}` is invalid; it must be a function, \
                 usually from PropTypes."
            ),
        )
        .with_field(name.to_owned())
    }

    /// A checker panicked; the panic text becomes the message.
    pub fn checker_panicked(name: &str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::CHECKER_PANICKED, message).with_field(name.to_owned())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message() {
        let error = ValidationError::union_mismatch("size", "Button", "prop");
        assert_eq!(error.to_string(), "Invalid prop `size` supplied to `Button`.");
    }

    #[test]
    fn type_mismatch_params() {
        let error =
            ValidationError::type_mismatch("testProp", "testClass", "prop", Category::String, "date");
        assert!(error.is(codes::INVALID_TYPE));
        assert_eq!(error.param("expected"), Some("string"));
        assert_eq!(error.param("actual"), Some("date"));
        assert_eq!(error.field.as_deref(), Some("testProp"));
    }

    #[test]
    fn required_message() {
        let error = ValidationError::required("testProp", "testClass", "prop");
        assert_eq!(
            error.message,
            "Required prop `testProp` was not specified in `testClass`."
        );
    }

    #[test]
    fn invalid_prop_type_message() {
        let error = ValidationError::invalid_prop_type("size", "Button");
        assert_eq!(
            error.message,
            "Button: attributes type `size` is invalid; it must be a function, usually from \
             PropTypes."
        );
    }

    #[test]
    fn static_message_stays_borrowed() {
        let error = ValidationError::new("custom", "Static message");
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
