//! Interface derivation

use std::collections::HashMap;

use flytekit_literal::{LiteralType, SimpleType, Variable};

use crate::error::SchemaError;
use crate::options::CodecOptions;
use crate::record::{is_empty_marker, Accessor, RecordType};
use crate::registry::TypeRegistry;
use crate::resolve::resolve;

/// Field name -> declared variable.
pub type InterfaceMap = HashMap<String, Variable>;

/// One field of a record type as seen by the orchestration engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, unique within the record
    pub name: String,
    /// Scalar kind
    pub simple_type: SimpleType,
    /// Whether the field may hold no value
    pub nullable: bool,
    /// Description, empty unless supplied
    pub description: String,
}

impl FieldDescriptor {
    /// Interface variable for this field
    pub fn to_variable(&self) -> Variable {
        Variable::create(LiteralType::simple(self.simple_type), self.description.clone())
    }
}

impl<T> From<&Accessor<T>> for FieldDescriptor {
    fn from(accessor: &Accessor<T>) -> Self {
        FieldDescriptor {
            name: accessor.name().to_string(),
            simple_type: accessor.simple_type(),
            nullable: accessor.is_nullable(),
            description: accessor.description().to_string(),
        }
    }
}

/// Describe the fields of `T` in constructor order.
pub(crate) fn describe<T: RecordType>(
    registry: &TypeRegistry,
    options: &CodecOptions,
) -> Result<Vec<FieldDescriptor>, SchemaError> {
    if is_empty_marker::<T>() {
        return Ok(Vec::new());
    }

    let resolved = resolve::<T>(registry, options.correlation)?;
    Ok(resolved.fields.iter().map(FieldDescriptor::from).collect())
}

/// Derive the interface of `T`.
pub(crate) fn interface_of<T: RecordType>(
    registry: &TypeRegistry,
    options: &CodecOptions,
) -> Result<InterfaceMap, SchemaError> {
    Ok(describe::<T>(registry, options)?
        .into_iter()
        .map(|field| {
            let variable = field.to_variable();
            (field.name, variable)
        })
        .collect())
}
