//! Runtime type descriptors for `instance_of`

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{ANONYMOUS, Class, PropValue};

type Matcher = dyn Fn(&PropValue) -> bool + Send + Sync;

/// Describes a runtime type: a display name plus a membership test.
///
/// # Examples
///
/// ```rust
/// use prop_types::foundation::{Class, PropValue, TypeDescriptor};
///
/// let person = Class::new("Person");
/// let descriptor = TypeDescriptor::class(&person);
///
/// assert_eq!(descriptor.display_name(), "Person");
/// assert!(descriptor.matches(&PropValue::from(person.instantiate())));
/// assert!(!descriptor.matches(&PropValue::from("Person")));
/// ```
#[derive(Clone)]
pub struct TypeDescriptor {
    name: Option<Cow<'static, str>>,
    matcher: Arc<Matcher>,
}

impl TypeDescriptor {
    /// A named type with a custom membership test.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, matcher: F) -> Self
    where
        F: Fn(&PropValue) -> bool + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            matcher: Arc::new(matcher),
        }
    }

    /// An unnamed type. Diagnostics show `<<anonymous>>`.
    pub fn anonymous<F>(matcher: F) -> Self
    where
        F: Fn(&PropValue) -> bool + Send + Sync + 'static,
    {
        Self {
            name: None,
            matcher: Arc::new(matcher),
        }
    }

    /// Instances of `class` or any of its subclasses.
    #[must_use]
    pub fn class(class: &Class) -> Self {
        let expected = class.clone();
        Self {
            name: class.name().map(|name| Cow::Owned(name.to_owned())),
            matcher: Arc::new(move |value| {
                matches!(value, PropValue::Instance(instance) if instance.is_instance_of(&expected))
            }),
        }
    }

    #[must_use]
    pub fn date() -> Self {
        Self::new("Date", |value| matches!(value, PropValue::Date(_)))
    }

    #[must_use]
    pub fn regexp() -> Self {
        Self::new("RegExp", |value| matches!(value, PropValue::RegExp(_)))
    }

    #[must_use]
    pub fn function() -> Self {
        Self::new("Function", |value| matches!(value, PropValue::Function(_)))
    }

    /// The type name, or `<<anonymous>>` when there is none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|name| !name.is_empty()).unwrap_or(ANONYMOUS)
    }

    pub fn matches(&self, value: &PropValue) -> bool {
        (self.matcher)(value)
    }
}

impl From<&Class> for TypeDescriptor {
    fn from(class: &Class) -> Self {
        Self::class(class)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.display_name())
            .finish_non_exhaustive()
    }
}
