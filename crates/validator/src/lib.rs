//! # prop-types
//!
//! Runtime type checking for dynamically typed attribute bags.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use prop_types::prelude::*;
//!
//! let declared = prop_types! {
//!     title: string().is_required(),
//!     tags: array_of(string()),
//! };
//!
//! let props = Props::from([("tags".to_owned(), PropValue::from(vec![1, 2]))]);
//! let err = validate_with_errors(&declared, &props, Some("Card")).unwrap_err();
//! assert_eq!(err.message, "Required prop `title` was not specified in `Card`.");
//!
//! // Soft mode: each distinct failure is reported once, as a warning.
//! let sink = Arc::new(RecordingSink::new());
//! let validator = PropValidator::new()
//!     .with_cache(Arc::new(FailureCache::new()))
//!     .with_channel(WarningChannel::legacy().with_sink(sink.clone()));
//! validator.validate(&declared, &props, Some("Card"));
//! validator.validate(&declared, &props, Some("Card"));
//! assert_eq!(sink.len(), 2);
//! ```
//!
//! ## Checkers
//!
//! - **Primitive**: [`array`](checkers::array), [`bool`](checkers::bool),
//!   [`func`](checkers::func), [`number`](checkers::number),
//!   [`object`](checkers::object), [`string`](checkers::string),
//!   [`any`](checkers::any)
//! - **Composite**: [`array_of`](checkers::array_of),
//!   [`object_of`](checkers::object_of), [`instance_of`](checkers::instance_of),
//!   [`one_of`](checkers::one_of), [`one_of_type`](checkers::one_of_type),
//!   [`shape`](checkers::shape)
//!
//! Every checker has a required variant via
//! [`PropType::is_required`](combinators::PropType::is_required).

// ValidationError is returned by value from every checker.
#![allow(clippy::result_large_err)]

mod macros;

pub mod checkers;
pub mod combinators;
pub mod config;
pub mod driver;
pub mod foundation;
pub mod prelude;
pub mod warning;
