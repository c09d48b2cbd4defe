//! Core types and traits
//!
//! - **Values**: [`PropValue`], [`Props`], [`Class`], [`Instance`], [`Callable`]
//! - **Categorization**: [`Category`], [`categorize`], [`precise_type`]
//! - **Traits**: [`TypeCheck`], with [`Scope`] and [`Location`]
//! - **Errors**: [`ValidationError`]
//! - **Runtime types**: [`TypeDescriptor`]

pub mod category;
pub mod descriptor;
pub mod error;
pub mod traits;
pub mod value;

pub use category::{Category, categorize, precise_type};
pub use descriptor::TypeDescriptor;
pub use error::{ANONYMOUS, ValidationError, codes};
pub use traits::{Location, Scope, TypeCheck};
pub use value::{Callable, Class, Instance, PropValue, Props, props_from_json};

/// A validation result using [`ValidationError`].
pub type ValidationResult<T = ()> = Result<T, ValidationError>;
