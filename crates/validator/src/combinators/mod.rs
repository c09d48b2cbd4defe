//! Checker combinators
//!
//! Each combinator is a plain struct implementing
//! [`TypeCheck`](crate::foundation::TypeCheck); composites own their child
//! checkers as [`PropType`] values so that children keep their own
//! required/optional mode.
//!
//! | Combinator    | Accepts                                        |
//! |---------------|------------------------------------------------|
//! | [`Primitive`] | values of one [`Category`](crate::foundation::Category) |
//! | [`Any`]       | every present value                            |
//! | [`ArrayOf`]   | arrays whose elements all pass a checker       |
//! | [`ObjectOf`]  | objects whose own values all pass a checker    |
//! | [`InstanceOf`]| instances of a runtime type                    |
//! | [`OneOf`]     | one of an enumerated list of values            |
//! | [`OneOfType`] | values accepted by any of several checkers     |
//! | [`Shape`]     | objects whose declared fields pass their checkers |

mod chainable;
mod each;
mod instance;
mod one_of;
mod or;
mod primitive;
mod shape;

pub use chainable::PropType;
pub(crate) use chainable::component_name;
pub use each::{ArrayOf, ObjectOf};
pub use instance::InstanceOf;
pub use one_of::OneOf;
pub use or::OneOfType;
pub use primitive::{Any, Primitive};
pub use shape::Shape;
