//! Declaration and diagnostic macros.
//!
//! - [`prop_types!`] builds a [`PropTypes`](crate::driver::PropTypes) set
//! - [`warning!`] forwards variadic arguments to
//!   [`warning`](crate::warning::warning)

/// Builds a [`PropTypes`](crate::driver::PropTypes) set in declaration order.
///
/// Each value may be a [`PropType`](crate::combinators::PropType) or a
/// [`PropValue`](crate::foundation::PropValue); the latter is recorded as an
/// invalid declaration.
///
/// ```rust
/// use prop_types::prop_types;
/// use prop_types::checkers::{func, string};
///
/// let declared = prop_types! {
///     title: string().is_required(),
///     on_close: func(),
/// };
/// assert_eq!(declared.names().collect::<Vec<_>>(), ["title", "on_close"]);
/// ```
#[macro_export]
macro_rules! prop_types {
    () => {
        $crate::driver::PropTypes::new()
    };
    ($($name:ident : $declaration:expr),+ $(,)?) => {
        $crate::driver::PropTypes::new()
            $(.declare(stringify!($name), $declaration))+
    };
}

/// Emits a development warning through the default strict channel.
///
/// Evaluates to `Result<(), WarningError>`.
///
/// ```rust
/// use prop_types::warning;
///
/// warning!(1 + 1 == 2, "Arithmetic is broken for %s", "addition").unwrap();
/// assert!(warning!(false, "short").is_err());
/// ```
#[macro_export]
macro_rules! warning {
    ($condition:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::warning::warning(
            $condition,
            $format,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::checkers::{number, string};
    use crate::driver::Declaration;
    use crate::foundation::PropValue;

    #[test]
    fn prop_types_keeps_order_and_kinds() {
        let declared = prop_types! {
            count: number(),
            label: string().is_required(),
            broken: PropValue::from(7),
        };
        assert_eq!(declared.names().collect::<Vec<_>>(), ["count", "label", "broken"]);
        assert!(matches!(declared.get("label"), Some(Declaration::Checker(c)) if c.requires_value()));
        assert!(matches!(declared.get("broken"), Some(Declaration::Invalid(_))));
    }

    #[test]
    fn empty_prop_types() {
        assert!(prop_types!().is_empty());
    }

    #[test]
    fn warning_macro_validates_format() {
        assert!(warning!(true, "A descriptive message with %s", 1).is_ok());
        assert!(warning!(true, None::<&str>).is_err());
    }
}
