//! Error types for interface derivation and literal marshalling

use flytekit_literal::SimpleType;
use thiserror::Error;

/// Boxed failure raised from inside a generated constructor.
pub type ConstructError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The generated realization of a record type does not conform.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// No realization is registered under the conventional name
    #[error("Generated class not found for {type_name}: expected {generated_name}")]
    NotGenerated {
        /// Record type name
        type_name: String,
        /// Name the realization was looked up under
        generated_name: String,
    },

    /// Zero or several constructors on the realization
    #[error("Can't find constructor on {generated_name}: expected exactly one, found {found}")]
    NoConstructor {
        /// Realization name
        generated_name: String,
        /// Number of constructors present
        found: usize,
    },

    /// Realization constructs some other type
    #[error("{generated_name} (constructs {constructs}) is not assignable to {type_name}")]
    NotAssignable {
        /// Realization name
        generated_name: String,
        /// Type the realization actually constructs
        constructs: String,
        /// Record type name
        type_name: String,
    },

    /// A constructor parameter has no matching accessor
    #[error("Parameter '{parameter}' of {generated_name} has no matching accessor on {type_name}")]
    MissingAccessor {
        /// Realization name
        generated_name: String,
        /// Parameter name
        parameter: String,
        /// Record type name
        type_name: String,
    },

    /// An accessor is not taken by any constructor parameter
    #[error("Accessor '{accessor}' of {type_name} has no matching parameter on {generated_name}")]
    MissingParameter {
        /// Realization name
        generated_name: String,
        /// Accessor name
        accessor: String,
        /// Record type name
        type_name: String,
    },

    /// A constructor parameter and its accessor disagree on the scalar kind
    #[error("Parameter '{parameter}' of {generated_name} takes {parameter_type} but accessor returns {accessor_type}")]
    IncompatibleParameter {
        /// Realization name
        generated_name: String,
        /// Parameter name
        parameter: String,
        /// Kind the constructor takes
        parameter_type: SimpleType,
        /// Kind the accessor returns
        accessor_type: SimpleType,
    },
}

/// A literal map could not be turned into a record instance.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The record type itself does not conform
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A non-nullable field has no entry
    #[error("Field '{field}' of {type_name} is not in inputs")]
    MissingRequiredField {
        /// Field name
        field: String,
        /// Record type name
        type_name: String,
    },

    /// An entry's kind differs from the field's declared kind
    #[error("Field '{field}' of type {expected} is not assignable from {actual}")]
    TypeMismatch {
        /// Field name
        field: String,
        /// Declared kind
        expected: SimpleType,
        /// Shape of the supplied literal
        actual: String,
    },

    /// An entry names no field of the record
    #[error("Input '{field}' is not a field of {type_name}")]
    UnknownField {
        /// Offending key
        field: String,
        /// Record type name
        type_name: String,
    },

    /// The constructor itself failed
    #[error("Couldn't instantiate class {generated_name}: {source}")]
    ConstructionFailed {
        /// Realization name
        generated_name: String,
        /// Original failure
        #[source]
        source: ConstructError,
    },
}

/// Generated constructor code received arguments it cannot use.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ArgumentError {
    /// Wrong number of arguments
    #[error("Constructor expects {expected} arguments, got {actual}")]
    Count {
        /// Parameter count
        expected: usize,
        /// Supplied count
        actual: usize,
    },

    /// No argument at this position
    #[error("Argument {index} is out of range")]
    OutOfRange {
        /// Position
        index: usize,
    },

    /// Required argument is absent
    #[error("Argument {index} is required")]
    Missing {
        /// Position
        index: usize,
    },

    /// Argument holds the wrong kind
    #[error("Argument {index}: expected {expected}, got {actual}")]
    Mismatch {
        /// Position
        index: usize,
        /// Kind the parameter takes
        expected: SimpleType,
        /// Kind supplied
        actual: SimpleType,
    },
}

/// Failure of the constructor call itself rather than of its arguments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstructorFault {
    /// Constructor panicked
    #[error("Constructor panicked: {0}")]
    Panicked(String),

    /// Constructor returned an instance of a different type
    #[error("Constructor returned an instance that is not a {expected}")]
    WrongInstance {
        /// Type that was expected
        expected: String,
    },
}

/// Codec options could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read options file
    #[error("Failed to read codec options: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse codec options: {0}")]
    ParseError(#[from] toml::de::Error),
}
