//! Marshalling between record instances and literal maps
//!
//! Decoding resolves the realization on every call, checks each input
//! against the field it feeds, and only then calls the constructor: a record
//! is either fully built or not built at all. Encoding needs no realization;
//! it reads the accessors of the record type directly.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use flytekit_literal::{Literal, Primitive};
use tracing::debug;

use crate::error::{ConstructorFault, DecodeError, SchemaError};
use crate::generated::Arguments;
use crate::options::CodecOptions;
use crate::record::{Accessor, RecordType};
use crate::registry::TypeRegistry;
use crate::resolve::resolve;
use crate::schema::{self, FieldDescriptor, InterfaceMap};

/// Field name -> literal value.
pub type LiteralMap = HashMap<String, Literal>;

/// Interface derivation and marshalling against a given registry.
#[derive(Debug, Clone)]
pub struct RecordCodec<'r> {
    registry: &'r TypeRegistry,
    options: CodecOptions,
}

impl<'r> RecordCodec<'r> {
    /// Codec over `registry` with default options
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::with_options(registry, CodecOptions::default())
    }

    /// Codec over `registry` with explicit options
    pub fn with_options(registry: &'r TypeRegistry, options: CodecOptions) -> Self {
        RecordCodec { registry, options }
    }

    /// Registry realizations are looked up in
    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Active options
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Fields of `T` in constructor order, with nullability
    pub fn describe<T: RecordType>(&self) -> Result<Vec<FieldDescriptor>, SchemaError> {
        schema::describe::<T>(self.registry, &self.options)
    }

    /// Interface of `T`. The `()` marker yields an empty interface.
    pub fn interface_of<T: RecordType>(&self) -> Result<InterfaceMap, SchemaError> {
        schema::interface_of::<T>(self.registry, &self.options)
    }

    /// Build a `T` from `inputs`.
    pub fn read_value<T: RecordType>(&self, inputs: &LiteralMap) -> Result<T, DecodeError> {
        let type_name = T::type_name();
        let resolved = resolve::<T>(self.registry, self.options.correlation)?;

        let mut values = Vec::with_capacity(resolved.fields.len());
        for field in &resolved.fields {
            let value = match inputs.get(field.name()) {
                Some(literal) => Some(unwrap_field(field, literal)?),
                None if field.is_nullable() => None,
                None => {
                    return Err(DecodeError::MissingRequiredField {
                        field: field.name().to_string(),
                        type_name: type_name.to_string(),
                    })
                }
            };
            values.push(value);
        }

        if self.options.reject_unknown_fields {
            let unknown = inputs
                .keys()
                .filter(|key| !resolved.fields.iter().any(|f| f.name() == key.as_str()))
                .min();
            if let Some(key) = unknown {
                return Err(DecodeError::UnknownField {
                    field: key.clone(),
                    type_name: type_name.to_string(),
                });
            }
        }

        let generated_name = resolved.generated.name();
        let args = Arguments::new(values);
        let instance = match panic::catch_unwind(AssertUnwindSafe(|| resolved.constructor.invoke(args))) {
            Ok(Ok(instance)) => instance,
            Ok(Err(source)) => {
                return Err(DecodeError::ConstructionFailed {
                    generated_name: generated_name.to_string(),
                    source,
                })
            }
            Err(panic) => {
                return Err(DecodeError::ConstructionFailed {
                    generated_name: generated_name.to_string(),
                    source: Box::new(ConstructorFault::Panicked(panic_message(panic))),
                })
            }
        };

        let record = instance
            .downcast::<T>()
            .map_err(|_| DecodeError::ConstructionFailed {
                generated_name: generated_name.to_string(),
                source: Box::new(ConstructorFault::WrongInstance {
                    expected: type_name.to_string(),
                }),
            })?;

        debug!(type_name, inputs = inputs.len(), "decoded record");
        Ok(*record)
    }

    /// Literal map of the present fields of `value`; absent nullable fields are omitted.
    pub fn to_literal_map<T: RecordType>(&self, value: &T) -> LiteralMap {
        let map: LiteralMap = T::accessors()
            .iter()
            .filter_map(|accessor| {
                accessor
                    .read(value)
                    .map(|primitive| (accessor.name().to_string(), Literal::of(primitive)))
            })
            .collect();

        debug!(type_name = T::type_name(), present = map.len(), "encoded record");
        map
    }
}

impl Default for RecordCodec<'static> {
    fn default() -> Self {
        RecordCodec::new(TypeRegistry::global())
    }
}

fn unwrap_field<T>(field: &Accessor<T>, literal: &Literal) -> Result<Primitive, DecodeError> {
    match literal.primitive() {
        Some(primitive) if primitive.simple_type() == field.simple_type() => Ok(primitive.clone()),
        _ => Err(DecodeError::TypeMismatch {
            field: field.name().to_string(),
            expected: field.simple_type(),
            actual: literal.type_name().to_string(),
        }),
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Interface of `T`, resolved through the global registry.
pub fn interface_of<T: RecordType>() -> Result<InterfaceMap, SchemaError> {
    RecordCodec::default().interface_of::<T>()
}

/// Build a `T` from `inputs`, resolved through the global registry.
pub fn read_value<T: RecordType>(inputs: &LiteralMap) -> Result<T, DecodeError> {
    RecordCodec::default().read_value::<T>(inputs)
}

/// Literal map of the present fields of `value`.
pub fn to_literal_map<T: RecordType>(value: &T) -> LiteralMap {
    RecordCodec::default().to_literal_map(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use flytekit_literal::SimpleType;

    #[derive(Debug, PartialEq, Record)]
    struct Flag {
        on: bool,
        note: Option<String>,
    }

    #[test]
    fn test_panic_message() {
        assert_eq!(panic_message(Box::new("static")), "static");
        assert_eq!(panic_message(Box::new("owned".to_string())), "owned");
        assert_eq!(panic_message(Box::new(7u8)), "Unknown panic");
    }

    #[test]
    fn test_unwrap_field() {
        let accessors = Flag::accessors();
        let accessor = &accessors[0];

        let ok = unwrap_field(accessor, &Literal::of(Primitive::Boolean(true))).unwrap();
        assert_eq!(ok, Primitive::Boolean(true));

        let err = unwrap_field(accessor, &Literal::of(Primitive::Integer(1))).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch { expected: SimpleType::Boolean, ref actual, .. } if actual == "integer"
        ));
    }

    #[test]
    fn test_private_registry_needs_registration() {
        let mut registry = TypeRegistry::new();
        let codec = RecordCodec::new(&registry);
        assert!(matches!(
            codec.interface_of::<Flag>(),
            Err(SchemaError::NotGenerated { .. })
        ));

        registry.register_type::<Flag>();
        let codec = RecordCodec::new(&registry);
        let flag = Flag {
            on: true,
            note: Some("set by test".to_string()),
        };
        let back: Flag = codec.read_value(&codec.to_literal_map(&flag)).unwrap();
        assert_eq!(back, flag);
    }
}
