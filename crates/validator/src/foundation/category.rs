//! Value categorization
//!
//! [`categorize`] is the single source of truth for "what kind of value is
//! this" across every checker. [`precise_type`] refines it for diagnostics
//! only and never affects whether a check passes.

use std::fmt;

use crate::foundation::PropValue;

/// The closed set of value categories a primitive checker can expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Array,
    Object,
    Boolean,
    Number,
    String,
    Function,
    /// Anything else; in practice only `undefined`.
    Other,
}

impl Category {
    /// The name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Object => "object",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Function => "function",
            Self::Other => "undefined",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorizes a value.
///
/// Arrays are always `array`, never `object`. Regular expressions, dates and
/// class instances are all `object`. `null` is `object` as well, although
/// checkers never see it: the chainable wrapper handles it first.
#[must_use]
pub fn categorize(value: &PropValue) -> Category {
    match value {
        PropValue::Array(_) => Category::Array,
        PropValue::Object(_)
        | PropValue::Null
        | PropValue::Date(_)
        | PropValue::RegExp(_)
        | PropValue::Instance(_) => Category::Object,
        PropValue::Bool(_) => Category::Boolean,
        PropValue::Number(_) => Category::Number,
        PropValue::String(_) => Category::String,
        PropValue::Function(_) => Category::Function,
        PropValue::Undefined => Category::Other,
    }
}

/// Like [`categorize`], but names dates and regular expressions precisely.
#[must_use]
pub fn precise_type(value: &PropValue) -> &'static str {
    match value {
        PropValue::Date(_) => "date",
        PropValue::RegExp(_) => "regexp",
        other => categorize(other).as_str(),
    }
}
