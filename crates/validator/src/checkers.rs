//! Checker factories
//!
//! The public vocabulary for declaring attribute types. Every factory
//! returns an optional [`PropType`]; call
//! [`is_required`](PropType::is_required) for the required variant.
//!
//! ```rust
//! use prop_types::checkers::{array_of, number, one_of, shape, string};
//!
//! let point = shape([
//!     ("x", number().is_required()),
//!     ("y", number().is_required()),
//! ]);
//! let path = array_of(point).is_required();
//! let color = one_of(["red", "blue"]);
//! let label = string();
//! # let _ = (path, color, label);
//! ```

use indexmap::IndexMap;

use crate::combinators::{
    Any, ArrayOf, InstanceOf, ObjectOf, OneOf, OneOfType, PropType, Primitive, Shape,
};
use crate::foundation::{Category, PropValue, TypeDescriptor};

/// Arrays.
#[must_use]
pub fn array() -> PropType {
    PropType::new(Primitive::new(Category::Array))
}

/// Booleans.
#[must_use]
pub fn bool() -> PropType {
    PropType::new(Primitive::new(Category::Boolean))
}

/// Functions.
#[must_use]
pub fn func() -> PropType {
    PropType::new(Primitive::new(Category::Function))
}

/// Numbers.
#[must_use]
pub fn number() -> PropType {
    PropType::new(Primitive::new(Category::Number))
}

/// Objects, including dates, regular expressions and class instances.
#[must_use]
pub fn object() -> PropType {
    PropType::new(Primitive::new(Category::Object))
}

/// Strings.
#[must_use]
pub fn string() -> PropType {
    PropType::new(Primitive::new(Category::String))
}

/// Anything that is present.
#[must_use]
pub fn any() -> PropType {
    PropType::new(Any)
}

/// Arrays whose every element passes `inner`.
pub fn array_of(inner: PropType) -> PropType {
    PropType::new(ArrayOf::new(inner))
}

/// Objects whose every own value passes `inner`.
pub fn object_of(inner: PropType) -> PropType {
    PropType::new(ObjectOf::new(inner))
}

/// Runtime instances of `expected`. Accepts a [`TypeDescriptor`] or a
/// `&Class`.
pub fn instance_of(expected: impl Into<TypeDescriptor>) -> PropType {
    PropType::new(InstanceOf::new(expected.into()))
}

/// One of the listed values, compared with strict equality.
pub fn one_of<I>(values: I) -> PropType
where
    I: IntoIterator,
    I::Item: Into<PropValue>,
{
    PropType::new(OneOf::new(values.into_iter().map(Into::into).collect()))
}

/// A value accepted by at least one of `checkers`, tried in order.
pub fn one_of_type<I>(checkers: I) -> PropType
where
    I: IntoIterator<Item = PropType>,
{
    PropType::new(OneOfType::new(checkers.into_iter().collect()))
}

/// An object whose declared fields pass their checkers, in declaration
/// order. A field whose checker is `None` is skipped.
pub fn shape<I, K, C>(fields: I) -> PropType
where
    I: IntoIterator<Item = (K, C)>,
    K: Into<String>,
    C: Into<Option<PropType>>,
{
    let fields: IndexMap<String, Option<PropType>> = fields
        .into_iter()
        .map(|(name, checker)| (name.into(), checker.into()))
        .collect();
    PropType::new(Shape::new(fields))
}
