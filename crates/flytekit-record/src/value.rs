//! Field value translation table
//!
//! Maps Rust field types onto literal scalar kinds. This is the closed table
//! consulted when deriving an interface and when wrapping or unwrapping field
//! values:
//!
//! | Rust type   | SimpleType |
//! |-------------|------------|
//! | `i64`       | Integer    |
//! | `f64`       | Float      |
//! | `String`    | String     |
//! | `bool`      | Boolean    |
//! | `Timestamp` | Datetime   |
//! | `Duration`  | Duration   |
//!
//! `Option<T>` of any of these is a nullable field of the same kind.

use flytekit_literal::{Duration, Primitive, SimpleType, Timestamp};

/// A Rust type that can be stored in a record field.
///
/// Implement this to extend the table with a new scalar kind.
pub trait LiteralValue: Sized {
    /// Scalar kind this type is marshalled as
    const SIMPLE_TYPE: SimpleType;

    /// Wrap into a primitive
    fn to_primitive(&self) -> Primitive;

    /// Unwrap from a primitive, handing it back if it holds another kind
    fn from_primitive(primitive: Primitive) -> Result<Self, Primitive>;
}

impl LiteralValue for i64 {
    const SIMPLE_TYPE: SimpleType = SimpleType::Integer;

    fn to_primitive(&self) -> Primitive {
        Primitive::Integer(*self)
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Primitive> {
        primitive.as_integer().ok_or(primitive)
    }
}

impl LiteralValue for f64 {
    const SIMPLE_TYPE: SimpleType = SimpleType::Float;

    fn to_primitive(&self) -> Primitive {
        Primitive::Float(*self)
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Primitive> {
        primitive.as_float().ok_or(primitive)
    }
}

impl LiteralValue for String {
    const SIMPLE_TYPE: SimpleType = SimpleType::String;

    fn to_primitive(&self) -> Primitive {
        Primitive::String(self.clone())
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Primitive> {
        match primitive {
            Primitive::String(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl LiteralValue for bool {
    const SIMPLE_TYPE: SimpleType = SimpleType::Boolean;

    fn to_primitive(&self) -> Primitive {
        Primitive::Boolean(*self)
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Primitive> {
        primitive.as_boolean().ok_or(primitive)
    }
}

impl LiteralValue for Timestamp {
    const SIMPLE_TYPE: SimpleType = SimpleType::Datetime;

    fn to_primitive(&self) -> Primitive {
        Primitive::Datetime(*self)
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Primitive> {
        primitive.as_datetime().ok_or(primitive)
    }
}

impl LiteralValue for Duration {
    const SIMPLE_TYPE: SimpleType = SimpleType::Duration;

    fn to_primitive(&self) -> Primitive {
        Primitive::Duration(*self)
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Primitive> {
        primitive.as_duration().ok_or(primitive)
    }
}
