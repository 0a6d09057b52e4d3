//! flytekit-record - typed records for Flyte interfaces
//!
//! Derives the Flyte interface of a plain Rust struct and marshals instances
//! to and from literal maps, without hand-written mapping code.
//!
//! # Example
//!
//! ```ignore
//! use flytekit_record::{interface_of, read_value, to_literal_map, Duration, Record, Timestamp};
//!
//! #[derive(Debug, PartialEq, Record)]
//! struct Input {
//!     i: i64,
//!     s: String,
//!     t: Option<Timestamp>,
//!     d: Duration,
//! }
//!
//! let interface = interface_of::<Input>()?;
//! let literals = to_literal_map(&input);
//! let back: Input = read_value(&literals)?;
//! ```
//!
//! # Modules
//!
//! - [`record`]: the `RecordType` / `Generated` traits the derive implements
//! - [`generated`]: realization descriptors and the naming convention
//! - [`registry`]: lookup of realizations by name
//! - [`codec`]: interface derivation, decoding and encoding
//! - [`value`]: the Rust type -> scalar kind table

#![warn(missing_docs)]

extern crate self as flytekit_record;

pub mod codec;
pub mod error;
pub mod generated;
pub mod options;
pub mod record;
pub mod registry;
pub mod schema;
pub mod value;

mod resolve;

pub use codec::{interface_of, read_value, to_literal_map, LiteralMap, RecordCodec};
pub use error::{ArgumentError, ConfigError, ConstructError, ConstructorFault, DecodeError, SchemaError};
pub use generated::{
    generated_name, Arguments, Constructor, GeneratedType, GeneratedTypeBuilder, Parameter,
    GENERATED_PREFIX,
};
pub use options::{CodecOptions, Correlation};
pub use record::{is_empty_marker, Accessor, Generated, RecordType};
pub use registry::{GeneratedEntry, TypeRegistry};
pub use schema::{FieldDescriptor, InterfaceMap};
pub use value::LiteralValue;

pub use flytekit_literal::{
    Duration, Literal, LiteralType, Primitive, Scalar, SimpleType, Timestamp, Variable,
};
pub use flytekit_record_derive::Record;

#[doc(hidden)]
pub mod __private {
    pub use inventory;
}
