//! Flyte literal model
//!
//! The generic, dynamically-typed value representation used on the wire by the
//! Flyte orchestration protocol. Records are marshalled into maps of these
//! literals by `flytekit-record`.
//!
//! # Example
//!
//! ```ignore
//! use flytekit_literal::{Literal, Primitive, SimpleType};
//!
//! let literal = Literal::of(Primitive::Integer(42));
//! assert_eq!(literal.primitive().map(Primitive::simple_type), Some(SimpleType::Integer));
//! ```

#![warn(missing_docs)]

pub mod literal;
pub mod time;
pub mod types;

pub use literal::{Literal, Primitive, Scalar};
pub use time::{Duration, Timestamp};
pub use types::{LiteralType, SimpleType, Variable};
