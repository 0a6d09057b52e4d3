//! Literal types and interface variables

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar kinds a primitive literal can carry.
///
/// New kinds are added here together with a matching [`crate::Primitive`]
/// variant; consumers must not assume the set is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum SimpleType {
    /// 64-bit signed integer
    Integer,
    /// 64-bit IEEE 754 float
    Float,
    /// UTF-8 string
    String,
    /// Boolean
    Boolean,
    /// Point in time (seconds + nanos since the Unix epoch)
    Datetime,
    /// Signed span of time (seconds + nanos)
    Duration,
}

impl SimpleType {
    /// Get type name for diagnostics
    pub const fn type_name(&self) -> &'static str {
        match self {
            SimpleType::Integer => "integer",
            SimpleType::Float => "float",
            SimpleType::String => "string",
            SimpleType::Boolean => "boolean",
            SimpleType::Datetime => "datetime",
            SimpleType::Duration => "duration",
        }
    }
}

impl fmt::Display for SimpleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Type of a literal, as advertised in a task or workflow interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralType {
    /// A single scalar of the given kind
    Simple(SimpleType),
    /// Homogeneous list
    CollectionType(Box<LiteralType>),
    /// String-keyed map with homogeneous values
    MapValueType(Box<LiteralType>),
}

impl LiteralType {
    /// Shorthand for `LiteralType::Simple`
    pub fn simple(simple_type: SimpleType) -> Self {
        LiteralType::Simple(simple_type)
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralType::Simple(t) => write!(f, "{}", t),
            LiteralType::CollectionType(t) => write!(f, "[{}]", t),
            LiteralType::MapValueType(t) => write!(f, "{{string: {}}}", t),
        }
    }
}

/// A named input or output of an interface: its type and a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    literal_type: LiteralType,
    #[serde(default)]
    description: String,
}

impl Variable {
    /// Create a variable
    pub fn create(literal_type: LiteralType, description: impl Into<String>) -> Self {
        Variable {
            literal_type,
            description: description.into(),
        }
    }

    /// Declared type
    pub fn literal_type(&self) -> &LiteralType {
        &self.literal_type
    }

    /// Human-readable description, empty when none was supplied
    pub fn description(&self) -> &str {
        &self.description
    }
}
