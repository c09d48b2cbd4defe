//! Dynamic values handed to checkers
//!
//! Attribute bags come from a dynamically typed host, so [`PropValue`] is a
//! closed enum over everything a host can pass: JSON-like data plus
//! functions, dates, regular expressions and class instances.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use regex::Regex;
use serde_json::{Map, Number, Value};

/// An ordered attribute bag. Insertion order is enumeration order.
pub type Props = IndexMap<String, PropValue>;

// ============================================================================
// PROP VALUE
// ============================================================================

/// A single attribute value.
#[derive(Clone, Default)]
pub enum PropValue {
    /// Explicitly undefined. Treated the same as an absent key.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<PropValue>),
    Object(Props),
    Function(Callable),
    Date(DateTime<Utc>),
    RegExp(Regex),
    Instance(Instance),
}

impl PropValue {
    /// Returns true for `Null` and `Undefined`, the values a checker treats
    /// as "not supplied".
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Own enumerable properties, for the variants that have any.
    #[must_use]
    pub fn own_props(&self) -> Option<&Props> {
        match self {
            Self::Object(props) => Some(props),
            Self::Instance(instance) => Some(instance.props()),
            _ => None,
        }
    }

    /// Looks up an own property by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.own_props().and_then(|props| props.get(key))
    }

    /// Strict equality: no coercion between kinds, `NaN` never equals
    /// itself, functions compare by identity and containers structurally.
    #[must_use]
    pub fn strict_eq(&self, other: &PropValue) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.strict_eq(y))
            }
            (Self::Object(a), Self::Object(b)) => props_eq(a, b),
            (Self::Function(a), Self::Function(b)) => a.same_as(b),
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::RegExp(a), Self::RegExp(b)) => a.as_str() == b.as_str(),
            (Self::Instance(a), Self::Instance(b)) => {
                a.class().same_as(b.class()) && props_eq(a.props(), b.props())
            }
            _ => false,
        }
    }

    /// Converts the value to JSON data with `JSON.stringify` semantics.
    ///
    /// Functions and `undefined` become `null`, dates become RFC 3339
    /// strings and regular expressions become empty objects. Integral
    /// numbers beyond the 64-bit range stay floats; use
    /// [`to_json_string`](Self::to_json_string) for exact text.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Undefined | Self::Null | Self::Function(_) => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => number_to_json(*n),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(items.iter().map(PropValue::to_json).collect()),
            Self::Object(props) => props_to_json(props),
            Self::Date(date) => Value::String(date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::RegExp(_) => Value::Object(Map::new()),
            Self::Instance(instance) => props_to_json(instance.props()),
        }
    }

    /// The text `JSON.stringify` produces for the value. Numbers are
    /// written the same way as in string coercion.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        JsonText(self).to_string()
    }
}

fn props_eq(a: &Props, b: &Props) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(key, value)| b.get(key).is_some_and(|other| value.strict_eq(other)))
}

fn number_to_json(n: f64) -> Value {
    if !n.is_finite() {
        return Value::Null;
    }
    if n.fract() == 0.0 && n.abs() < 9_223_372_036_854_775_808.0 {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}

fn props_to_json(props: &Props) -> Value {
    Value::Object(
        props
            .iter()
            .filter(|(_, value)| !matches!(value, PropValue::Undefined | PropValue::Function(_)))
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect(),
    )
}

/// Number-to-string conversion of a JS host: integers without a fraction,
/// exponent form from `1e+21` up and below `1e-6`.
fn write_number(out: &mut impl fmt::Write, n: f64) -> fmt::Result {
    if n.is_nan() {
        return out.write_str("NaN");
    }
    if n.is_infinite() {
        return out.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return out.write_char('0');
    }
    if n < 0.0 {
        out.write_char('-')?;
    }

    // shortest round-trip digits, then the position of the decimal point
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;
    let len = i32::try_from(digits.len()).unwrap_or(i32::MAX);

    if len <= point && point <= 21 {
        out.write_str(&digits)?;
        (len..point).try_for_each(|_| out.write_char('0'))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point.unsigned_abs() as usize);
        write!(out, "{whole}.{fraction}")
    } else if -6 < point && point <= 0 {
        out.write_str("0.")?;
        (point..0).try_for_each(|_| out.write_char('0'))?;
        out.write_str(&digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        out.write_str(lead)?;
        if !rest.is_empty() {
            write!(out, ".{rest}")?;
        }
        let power = point - 1;
        write!(out, "e{}{}", if power < 0 { '-' } else { '+' }, power.abs())
    }
}

struct JsonText<'a>(&'a PropValue);

impl fmt::Display for JsonText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            PropValue::Undefined | PropValue::Null | PropValue::Function(_) => f.write_str("null"),
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Number(n) if n.is_finite() => write_number(f, *n),
            PropValue::Number(_) => f.write_str("null"),
            PropValue::String(s) => write!(f, "{}", Value::from(s.as_str())),
            PropValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", JsonText(item))?;
                }
                f.write_str("]")
            }
            PropValue::Object(props) => write_json_object(f, props),
            PropValue::Instance(instance) => write_json_object(f, instance.props()),
            PropValue::Date(date) => write!(
                f,
                "{}",
                Value::from(date.to_rfc3339_opts(SecondsFormat::Millis, true))
            ),
            PropValue::RegExp(_) => f.write_str("{}"),
        }
    }
}

fn write_json_object(f: &mut fmt::Formatter<'_>, props: &Props) -> fmt::Result {
    f.write_str("{")?;
    let visible = props
        .iter()
        .filter(|(_, value)| !matches!(value, PropValue::Undefined | PropValue::Function(_)));
    for (i, (key, value)) in visible.enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}:{}", Value::from(key.as_str()), JsonText(value))?;
    }
    f.write_str("}")
}

/// String coercion, used for the `of value` part of enum diagnostics.
impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write_number(f, *n),
            Self::String(s) => f.write_str(s),
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) | Self::Instance(_) => f.write_str("[object Object]"),
            Self::Function(callable) => {
                write!(f, "function {}() {{ [native code] }}", callable.name().unwrap_or(""))
            }
            Self::Date(date) => f.write_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::RegExp(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("Undefined"),
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Self::Object(props) => f.debug_tuple("Object").field(props).finish(),
            Self::Function(callable) => f.debug_tuple("Function").field(callable).finish(),
            Self::Date(date) => f.debug_tuple("Date").field(date).finish(),
            Self::RegExp(re) => f.debug_tuple("RegExp").field(&re.as_str()).finish(),
            Self::Instance(instance) => f.debug_tuple("Instance").field(instance).finish(),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropValue {
                fn from(n: $ty) -> Self {
                    Self::Number(f64::from(n))
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, u8, u16, u32, f32, f64);

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u64> for PropValue {
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<usize> for PropValue {
    fn from(n: usize) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Props> for PropValue {
    fn from(props: Props) -> Self {
        Self::Object(props)
    }
}

impl From<Callable> for PropValue {
    fn from(callable: Callable) -> Self {
        Self::Function(callable)
    }
}

impl From<Instance> for PropValue {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

impl From<DateTime<Utc>> for PropValue {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

impl From<Regex> for PropValue {
    fn from(re: Regex) -> Self {
        Self::RegExp(re)
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

/// Builds a [`Props`] bag from a JSON object.
///
/// Returns `None` when `value` is not an object.
#[must_use]
pub fn props_from_json(value: Value) -> Option<Props> {
    match PropValue::from(value) {
        PropValue::Object(props) => Some(props),
        _ => None,
    }
}

// ============================================================================
// FUNCTIONS
// ============================================================================

type NativeFn = dyn Fn(&[PropValue]) -> PropValue + Send + Sync;

/// An opaque function value with an optional name.
#[derive(Clone)]
pub struct Callable {
    name: Option<Arc<str>>,
    f: Arc<NativeFn>,
}

impl Callable {
    /// Wraps a named function.
    pub fn new<F>(name: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(&[PropValue]) -> PropValue + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            f: Arc::new(f),
        }
    }

    /// Wraps an anonymous function.
    pub fn anonymous<F>(f: F) -> Self
    where
        F: Fn(&[PropValue]) -> PropValue + Send + Sync + 'static,
    {
        Self {
            name: None,
            f: Arc::new(f),
        }
    }

    /// A function that ignores its arguments and returns `undefined`.
    #[must_use]
    pub fn noop() -> Self {
        Self::anonymous(|_| PropValue::Undefined)
    }

    /// The function name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invokes the function.
    pub fn call(&self, args: &[PropValue]) -> PropValue {
        (self.f)(args)
    }

    /// Identity comparison.
    #[must_use]
    pub fn same_as(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("f", &"<function>")
            .finish()
    }
}

// ============================================================================
// CLASSES AND INSTANCES
// ============================================================================

#[derive(Debug)]
struct ClassInner {
    name: Option<String>,
    parent: Option<Class>,
}

/// A nominal runtime type. Classes compare by identity, not by name: two
/// classes both called `Thing` are unrelated.
#[derive(Debug, Clone)]
pub struct Class(Arc<ClassInner>);

impl Class {
    /// A named root class.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(ClassInner {
            name: Some(name.into()),
            parent: None,
        }))
    }

    /// A root class without a name.
    #[must_use]
    pub fn anonymous() -> Self {
        Self(Arc::new(ClassInner {
            name: None,
            parent: None,
        }))
    }

    /// Declares a subclass of `parent`.
    pub fn extends(name: impl Into<String>, parent: &Class) -> Self {
        Self(Arc::new(ClassInner {
            name: Some(name.into()),
            parent: Some(parent.clone()),
        }))
    }

    /// Class name, `None` for anonymous classes.
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// The direct superclass.
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    #[must_use]
    pub fn same_as(&self, other: &Class) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// True if `self` is `ancestor` or inherits from it.
    #[must_use]
    pub fn is_subclass_of(&self, ancestor: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class.same_as(ancestor) {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// Creates an instance with no own properties.
    #[must_use]
    pub fn instantiate(&self) -> Instance {
        self.instantiate_with(Props::new())
    }

    /// Creates an instance owning `props`.
    pub fn instantiate_with(&self, props: Props) -> Instance {
        Instance {
            class: self.clone(),
            props,
        }
    }
}

/// An object created from a [`Class`].
#[derive(Debug, Clone)]
pub struct Instance {
    class: Class,
    props: Props,
}

impl Instance {
    /// The class this instance was created from.
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Own enumerable properties.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// True if this instance's class is `class` or one of its subclasses.
    #[must_use]
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.class.is_subclass_of(class)
    }
}

// ============================================================================
// TESTS
// ============================================================================
