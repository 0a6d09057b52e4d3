//! Traits describing a record type and its generated realization.
//!
//! A record type is described in two halves, mirroring an abstract value
//! class and the implementation a code generator emits for it:
//!
//! - [`RecordType`] is the abstract half: a stable name plus the ordered
//!   accessors, each knowing its field's name, kind and nullability.
//! - [`Generated`] is the concrete half: a [`GeneratedType`] with the
//!   constructor that builds new instances.
//!
//! Both are normally produced by `#[derive(Record)]`:
//!
//! ```ignore
//! use flytekit_record::{Record, Timestamp};
//!
//! #[derive(Record)]
//! struct Input {
//!     i: i64,
//!     #[record(description = "when the run started")]
//!     t: Option<Timestamp>,
//! }
//! ```

use std::any::{Any, TypeId};
use std::fmt;

use flytekit_literal::{Primitive, SimpleType};

use crate::generated::{generated_name, Constructor, GeneratedType};

/// Reads one field from a record instance.
///
/// Returns `None` only for a nullable field holding no value.
pub type ReadFn<T> = fn(&T) -> Option<Primitive>;

/// One accessor of a record type.
pub struct Accessor<T> {
    name: &'static str,
    simple_type: SimpleType,
    nullable: bool,
    description: &'static str,
    read: ReadFn<T>,
}

impl<T> Accessor<T> {
    /// Create an accessor with an empty description
    pub fn new(name: &'static str, simple_type: SimpleType, nullable: bool, read: ReadFn<T>) -> Self {
        Accessor {
            name,
            simple_type,
            nullable,
            description: "",
            read,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared scalar kind
    pub fn simple_type(&self) -> SimpleType {
        self.simple_type
    }

    /// Whether the field may hold no value
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Description, empty when none was supplied
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Read the field's current value from `record`
    pub fn read(&self, record: &T) -> Option<Primitive> {
        (self.read)(record)
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Accessor { ..*self }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name)
            .field("simple_type", &self.simple_type)
            .field("nullable", &self.nullable)
            .field("description", &self.description)
            .finish()
    }
}

/// Abstract description of a record type.
pub trait RecordType: Sized + 'static {
    /// Stable, fully qualified name of the type.
    ///
    /// The generated realization is looked up under a name derived from this
    /// one, see [`generated_name`].
    fn type_name() -> &'static str;

    /// Accessors in declaration order
    fn accessors() -> Vec<Accessor<Self>>;
}

/// Record type that has a generated realization.
pub trait Generated: RecordType {
    /// Build the realization's descriptor
    fn generated() -> GeneratedType;
}

/// Whether `T` is the marker type for "no fields".
pub fn is_empty_marker<T: 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<()>()
}

impl RecordType for () {
    fn type_name() -> &'static str {
        "()"
    }

    fn accessors() -> Vec<Accessor<Self>> {
        Vec::new()
    }
}

impl Generated for () {
    fn generated() -> GeneratedType {
        GeneratedType::builder::<()>(generated_name(<() as RecordType>::type_name()))
            .constructor(Constructor::new(Vec::new(), |_| {
                Ok(Box::new(()) as Box<dyn Any>)
            }))
            .build()
    }
}
