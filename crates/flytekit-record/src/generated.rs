//! Generated realizations of record types
//!
//! A [`GeneratedType`] is the concrete counterpart of a [`crate::RecordType`]:
//! it names the type it constructs and exposes the constructor(s) that build
//! new instances from positional [`Arguments`]. The codec finds it by name
//! through the [`crate::TypeRegistry`], never through the record type itself.

use std::any::{Any, TypeId};
use std::fmt;

use flytekit_literal::{Primitive, SimpleType};

use crate::error::{ArgumentError, ConstructError};
use crate::value::LiteralValue;

/// Prefix the code generator puts in front of a record's own name.
pub const GENERATED_PREFIX: &str = "Generated_";

/// Name under which the realization of `type_name` is registered.
///
/// The last path segment gets [`GENERATED_PREFIX`]:
/// `app::io::Point` becomes `app::io::Generated_Point` and `com.acme.Point`
/// becomes `com.acme.Generated_Point`.
pub fn generated_name(type_name: &str) -> String {
    let split = type_name
        .rfind("::")
        .map(|i| i + 2)
        .into_iter()
        .chain(type_name.rfind('.').map(|i| i + 1))
        .max();

    match split {
        Some(at) => format!("{}{}{}", &type_name[..at], GENERATED_PREFIX, &type_name[at..]),
        None => format!("{}{}", GENERATED_PREFIX, type_name),
    }
}

/// Builds an instance from arguments ordered like the constructor's parameters.
pub type InvokeFn = fn(Arguments) -> Result<Box<dyn Any>, ConstructError>;

/// One constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    name: &'static str,
    simple_type: SimpleType,
}

impl Parameter {
    /// Create a parameter
    pub const fn new(name: &'static str, simple_type: SimpleType) -> Self {
        Parameter { name, simple_type }
    }

    /// Parameter name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Scalar kind the parameter takes
    pub fn simple_type(&self) -> SimpleType {
        self.simple_type
    }
}

/// Positional constructor arguments; `None` marks an absent nullable value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: Vec<Option<Primitive>>,
}

impl Arguments {
    /// Wrap an argument list
    pub fn new(values: Vec<Option<Primitive>>) -> Self {
        Arguments { values }
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Take a required argument
    pub fn required<V: LiteralValue>(&mut self, index: usize) -> Result<V, ArgumentError> {
        self.optional(index)?
            .ok_or(ArgumentError::Missing { index })
    }

    /// Take a nullable argument
    pub fn optional<V: LiteralValue>(&mut self, index: usize) -> Result<Option<V>, ArgumentError> {
        let slot = self
            .values
            .get_mut(index)
            .ok_or(ArgumentError::OutOfRange { index })?;

        match slot.take() {
            None => Ok(None),
            Some(primitive) => V::from_primitive(primitive)
                .map(Some)
                .map_err(|other| ArgumentError::Mismatch {
                    index,
                    expected: V::SIMPLE_TYPE,
                    actual: other.simple_type(),
                }),
        }
    }
}

/// A constructor of a generated realization.
#[derive(Clone)]
pub struct Constructor {
    parameters: Vec<Parameter>,
    invoke: InvokeFn,
}

impl Constructor {
    /// Create a constructor
    pub fn new(parameters: Vec<Parameter>, invoke: InvokeFn) -> Self {
        Constructor { parameters, invoke }
    }

    /// Parameters in declaration order
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Call the constructor after checking the argument count
    pub fn invoke(&self, args: Arguments) -> Result<Box<dyn Any>, ConstructError> {
        if args.len() != self.parameters.len() {
            return Err(ArgumentError::Count {
                expected: self.parameters.len(),
                actual: args.len(),
            }
            .into());
        }
        (self.invoke)(args)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// Builder for constructing GeneratedType instances manually.
pub struct GeneratedTypeBuilder {
    name: String,
    constructs: TypeId,
    constructs_name: &'static str,
    constructors: Vec<Constructor>,
}

impl GeneratedTypeBuilder {
    /// Add a constructor
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Build the GeneratedType
    pub fn build(self) -> GeneratedType {
        GeneratedType {
            name: self.name,
            constructs: self.constructs,
            constructs_name: self.constructs_name,
            constructors: self.constructors,
        }
    }
}

/// Descriptor of a generated realization.
#[derive(Debug, Clone)]
pub struct GeneratedType {
    name: String,
    constructs: TypeId,
    constructs_name: &'static str,
    constructors: Vec<Constructor>,
}

impl GeneratedType {
    /// Create a builder for a realization named `name` that constructs `T`
    pub fn builder<T: 'static>(name: impl Into<String>) -> GeneratedTypeBuilder {
        GeneratedTypeBuilder {
            name: name.into(),
            constructs: TypeId::of::<T>(),
            constructs_name: std::any::type_name::<T>(),
            constructors: Vec::new(),
        }
    }

    /// Registered name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rust name of the type the constructors build, for diagnostics
    pub fn constructs_name(&self) -> &'static str {
        self.constructs_name
    }

    /// All constructors
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// Whether instances built by this realization are `T`s
    pub fn is_assignable_to<T: 'static>(&self) -> bool {
        self.constructs == TypeId::of::<T>()
    }
}
