//! Validation driver
//!
//! Runs every declaration of a [`PropTypes`] set against an attribute bag.
//!
//! - [`PropValidator::validate`] never fails: each distinct failure message
//!   is reported once per [`FailureCache`] through the warning channel.
//! - [`PropValidator::validate_with_errors`] returns the first failure and
//!   reports nothing.
//!
//! A checker that panics does not take the caller down; the panic is
//! converted into a `checker_panicked` error.

mod cache;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;

pub use cache::FailureCache;

use crate::combinators::{PropType, component_name};
use crate::config::ValidatorConfig;
use crate::foundation::{Location, PropValue, Props, ValidationError, ValidationResult};
use crate::warning::WarningChannel;

const FAILURE_FORMAT: &str = "Failed propType: %s";

/// One entry of a checker set.
#[derive(Debug, Clone)]
pub enum Declaration {
    Checker(PropType),
    /// Something that is not a checker. Validating it is a usage error.
    Invalid(PropValue),
}

impl From<PropType> for Declaration {
    fn from(checker: PropType) -> Self {
        Self::Checker(checker)
    }
}

impl From<PropValue> for Declaration {
    fn from(value: PropValue) -> Self {
        Self::Invalid(value)
    }
}

/// Ordered checker set, keyed by attribute name.
///
/// # Examples
///
/// ```rust
/// use prop_types::driver::PropTypes;
/// use prop_types::checkers::{number, string};
///
/// let declared = PropTypes::new()
///     .prop("title", string().is_required())
///     .prop("count", number());
/// assert_eq!(declared.names().collect::<Vec<_>>(), ["title", "count"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropTypes {
    declarations: IndexMap<String, Declaration>,
}

impl PropTypes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn prop(self, name: impl Into<String>, checker: PropType) -> Self {
        self.declare(name, checker)
    }

    /// Adds any declaration, including non-checkers.
    #[must_use = "builder methods must be chained or built"]
    pub fn declare(mut self, name: impl Into<String>, declaration: impl Into<Declaration>) -> Self {
        self.declarations.insert(name.into(), declaration.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, declaration: impl Into<Declaration>) {
        self.declarations.insert(name.into(), declaration.into());
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.declarations
            .iter()
            .map(|(name, declaration)| (name.as_str(), declaration))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<K, D> FromIterator<(K, D)> for PropTypes
where
    K: Into<String>,
    D: Into<Declaration>,
{
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        Self {
            declarations: iter
                .into_iter()
                .map(|(name, declaration)| (name.into(), declaration.into()))
                .collect(),
        }
    }
}

/// Validation driver with an injected failure cache and warning channel.
#[derive(Debug, Clone)]
pub struct PropValidator {
    cache: Arc<FailureCache>,
    channel: WarningChannel,
}

impl PropValidator {
    /// Shares the process-wide cache and reports through the legacy
    /// channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: FailureCache::global(),
            channel: WarningChannel::legacy(),
        }
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        let cache = if config.shared_cache {
            FailureCache::global()
        } else {
            Arc::new(FailureCache::new())
        };
        Self {
            cache,
            channel: config.channel(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_cache(mut self, cache: Arc<FailureCache>) -> Self {
        self.cache = cache;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_channel(mut self, channel: WarningChannel) -> Self {
        self.channel = channel;
        self
    }

    pub fn cache(&self) -> &FailureCache {
        &self.cache
    }

    pub fn channel(&self) -> &WarningChannel {
        &self.channel
    }

    /// Checks every declaration against `props` as attributes, reporting
    /// each new failure message once.
    pub fn validate(&self, prop_types: &PropTypes, props: &Props, component: Option<&str>) {
        self.validate_at(prop_types, props, component, Location::Prop);
    }

    /// [`validate`](Self::validate) for another kind of value bag.
    pub fn validate_at(
        &self,
        prop_types: &PropTypes,
        props: &Props,
        component: Option<&str>,
        location: Location,
    ) {
        let component = component_name(component);
        for (name, declaration) in prop_types.iter() {
            if let Err(error) = evaluate(name, declaration, props, component, location) {
                self.report(&error);
            }
        }
    }

    /// Checks declarations in order and returns the first failure.
    ///
    /// Nothing is reported and the cache is left untouched.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] produced, including usage errors for
    /// [`Declaration::Invalid`] entries and caught checker panics.
    pub fn validate_with_errors(
        &self,
        prop_types: &PropTypes,
        props: &Props,
        component: Option<&str>,
    ) -> ValidationResult {
        let component = component_name(component);
        prop_types.iter().try_for_each(|(name, declaration)| {
            evaluate(name, declaration, props, component, Location::Prop)
        })
    }

    fn report(&self, error: &ValidationError) {
        if !self.cache.mark_seen(&error.message) {
            tracing::debug!(
                target: "prop_types",
                code = %error.code,
                message = %error.message,
                "suppressed repeated failure"
            );
            return;
        }
        if let Err(misuse) = self.channel.warn(false, FAILURE_FORMAT, &[&error.message]) {
            tracing::error!(target: "prop_types", error = %misuse, "failure could not be reported");
        }
    }
}

impl Default for PropValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn evaluate(
    name: &str,
    declaration: &Declaration,
    props: &Props,
    component: &str,
    location: Location,
) -> ValidationResult {
    let checker = match declaration {
        Declaration::Checker(checker) => checker,
        Declaration::Invalid(_) => return Err(ValidationError::invalid_prop_type(name, component)),
    };

    panic::catch_unwind(AssertUnwindSafe(|| {
        checker.check(props, name, Some(component), location)
    }))
    .unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::debug!(target: "prop_types", prop = name, component, %message, "checker panicked");
        Err(ValidationError::checker_panicked(name, message))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "checker panicked".to_owned()
    }
}

static DEFAULT_VALIDATOR: LazyLock<PropValidator> = LazyLock::new(PropValidator::new);

/// [`PropValidator::validate`] on the default validator.
pub fn validate(prop_types: &PropTypes, props: &Props, component: Option<&str>) {
    DEFAULT_VALIDATOR.validate(prop_types, props, component);
}

/// [`PropValidator::validate_with_errors`] on the default validator.
///
/// # Errors
///
/// The first failing declaration's error.
pub fn validate_with_errors(
    prop_types: &PropTypes,
    props: &Props,
    component: Option<&str>,
) -> ValidationResult {
    DEFAULT_VALIDATOR.validate_with_errors(prop_types, props, component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{number, string};
    use crate::foundation::codes;
    use crate::warning::RecordingSink;
    use pretty_assertions::assert_eq;

    fn isolated() -> (PropValidator, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let validator = PropValidator::new()
            .with_cache(Arc::new(FailureCache::new()))
            .with_channel(WarningChannel::legacy().with_sink(sink.clone()));
        (validator, sink)
    }

    fn bag(entries: &[(&str, PropValue)]) -> Props {
        entries
            .iter()
            .map(|(name, value)| ((*name).to_owned(), value.clone()))
            .collect()
    }

    #[test]
    fn reports_failures_with_prefix() {
        let (validator, sink) = isolated();
        let declared = PropTypes::new().prop("count", number());
        validator.validate(&declared, &bag(&[("count", "x".into())]), Some("Counter"));
        assert_eq!(
            sink.messages(),
            ["Warning: Failed propType: Invalid prop `count` of type `string` supplied to \
              `Counter`, expected `number`."]
        );
    }

    #[test]
    fn invalid_declaration_is_a_usage_error() {
        let (validator, _) = isolated();
        let declared = PropTypes::new().declare("label", PropValue::from("not a checker"));
        let err = validator
            .validate_with_errors(&declared, &Props::new(), Some("Tab"))
            .unwrap_err();
        assert!(err.is(codes::INVALID_PROP_TYPE));
        assert_eq!(
            err.message,
            "Tab: attributes type `label` is invalid; it must be a function, usually from \
             PropTypes."
        );
    }

    #[test]
    fn panicking_checker_becomes_an_error() {
        let (validator, sink) = isolated();
        let declared = PropTypes::new()
            .prop("broken", PropType::custom(|_, _| panic!("checker exploded")))
            .prop("title", string());
        let props = bag(&[("broken", 1.into()), ("title", 2.into())]);

        let err = validator
            .validate_with_errors(&declared, &props, None)
            .unwrap_err();
        assert!(err.is(codes::CHECKER_PANICKED));
        assert_eq!(err.message, "checker exploded");

        validator.validate(&declared, &props, None);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn validate_at_uses_location_in_messages() {
        let (validator, sink) = isolated();
        let declared = PropTypes::new().prop("theme", string().is_required());
        validator.validate_at(&declared, &Props::new(), Some("Root"), Location::Context);
        assert_eq!(
            sink.messages(),
            ["Warning: Failed propType: Required context `theme` was not specified in `Root`."]
        );
    }

    #[test]
    fn panic_payloads_are_extracted() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42_u8), "checker panicked");
    }
}
