//! Literal values
//!
//! ```text
//! Literal
//!   ├── Scalar
//!   │     └── Primitive  integer | float | string | boolean | datetime | duration
//!   ├── Collection       [Literal]
//!   └── Map              {string: Literal}
//! ```
//!
//! Only scalars carry a [`SimpleType`]; collections and maps are containers
//! whose element types are described by [`crate::LiteralType`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::time::{Duration, Timestamp};
use crate::types::SimpleType;

/// A single primitive value tagged with its scalar kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Primitive {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Boolean
    Boolean(bool),
    /// Point in time
    Datetime(Timestamp),
    /// Span of time
    Duration(Duration),
}

impl Primitive {
    /// Scalar kind carried by this value
    pub const fn simple_type(&self) -> SimpleType {
        match self {
            Primitive::Integer(_) => SimpleType::Integer,
            Primitive::Float(_) => SimpleType::Float,
            Primitive::String(_) => SimpleType::String,
            Primitive::Boolean(_) => SimpleType::Boolean,
            Primitive::Datetime(_) => SimpleType::Datetime,
            Primitive::Duration(_) => SimpleType::Duration,
        }
    }

    /// Get type name for diagnostics
    pub const fn type_name(&self) -> &'static str {
        self.simple_type().type_name()
    }

    /// Extract integer value
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Primitive::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract float value
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Primitive::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract boolean value
    #[inline]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Primitive::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract timestamp value
    #[inline]
    pub fn as_datetime(&self) -> Option<Timestamp> {
        match self {
            Primitive::Datetime(t) => Some(*t),
            _ => None,
        }
    }

    /// Extract duration value
    #[inline]
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Primitive::Duration(d) => Some(*d),
            _ => None,
        }
    }
}

/// A scalar literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Scalar {
    /// A primitive value
    Primitive(Primitive),
}

impl Scalar {
    /// Wrap a primitive
    pub fn create(primitive: Primitive) -> Self {
        Scalar::Primitive(primitive)
    }

    /// The primitive, if this scalar holds one
    pub fn primitive(&self) -> Option<&Primitive> {
        match self {
            Scalar::Primitive(p) => Some(p),
        }
    }
}

/// A value exchanged with the orchestration engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// A scalar value
    Scalar(Scalar),
    /// A list of literals
    Collection(Vec<Literal>),
    /// A string-keyed map of literals
    Map(BTreeMap<String, Literal>),
}

impl Literal {
    /// Wrap a primitive as a scalar literal
    pub fn of(primitive: Primitive) -> Self {
        Literal::Scalar(Scalar::create(primitive))
    }

    /// The scalar, if this literal is one
    pub fn scalar(&self) -> Option<&Scalar> {
        match self {
            Literal::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The primitive, if this literal is a primitive scalar
    pub fn primitive(&self) -> Option<&Primitive> {
        self.scalar().and_then(Scalar::primitive)
    }

    /// Get a short description of the literal's shape for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Scalar(Scalar::Primitive(p)) => p.type_name(),
            Literal::Collection(_) => "collection",
            Literal::Map(_) => "map",
        }
    }
}

impl From<Primitive> for Literal {
    fn from(primitive: Primitive) -> Self {
        Literal::of(primitive)
    }
}
