//! Resolution of a record type to its generated constructor.
//!
//! Shared by interface derivation and decoding: find the realization by
//! name, check it has a single constructor and builds the right type, then
//! pair every constructor parameter with the accessor describing it. Every
//! accessor must be taken by a parameter.

use tracing::{debug, trace};

use crate::error::SchemaError;
use crate::generated::{generated_name, Constructor, GeneratedType};
use crate::options::Correlation;
use crate::record::{Accessor, RecordType};
use crate::registry::TypeRegistry;

/// A record type paired with its realization's constructor.
pub(crate) struct Resolved<'r, T> {
    pub generated: &'r GeneratedType,
    pub constructor: &'r Constructor,
    /// One accessor per constructor parameter, in parameter order
    pub fields: Vec<Accessor<T>>,
}

pub(crate) fn resolve<T: RecordType>(
    registry: &TypeRegistry,
    correlation: Correlation,
) -> Result<Resolved<'_, T>, SchemaError> {
    let type_name = T::type_name();
    let name = generated_name(type_name);

    let generated = registry.get(&name).ok_or_else(|| SchemaError::NotGenerated {
        type_name: type_name.to_string(),
        generated_name: name.clone(),
    })?;

    let constructor = match generated.constructors() {
        [only] => only,
        others => {
            return Err(SchemaError::NoConstructor {
                generated_name: name,
                found: others.len(),
            })
        }
    };

    if !generated.is_assignable_to::<T>() {
        return Err(SchemaError::NotAssignable {
            generated_name: name,
            constructs: generated.constructs_name().to_string(),
            type_name: type_name.to_string(),
        });
    }

    let accessors = T::accessors();
    let mut fields = Vec::with_capacity(constructor.parameters().len());

    for (index, parameter) in constructor.parameters().iter().enumerate() {
        let accessor = match correlation {
            Correlation::ByName => accessors.iter().find(|a| a.name() == parameter.name()),
            Correlation::Positional => accessors
                .get(index)
                .filter(|a| a.name() == parameter.name()),
        }
        .ok_or_else(|| SchemaError::MissingAccessor {
            generated_name: name.clone(),
            parameter: parameter.name().to_string(),
            type_name: type_name.to_string(),
        })?;

        if accessor.simple_type() != parameter.simple_type() {
            return Err(SchemaError::IncompatibleParameter {
                generated_name: name,
                parameter: parameter.name().to_string(),
                parameter_type: parameter.simple_type(),
                accessor_type: accessor.simple_type(),
            });
        }

        trace!(
            field = accessor.name(),
            index,
            simple_type = %accessor.simple_type(),
            nullable = accessor.is_nullable(),
            "correlated parameter"
        );
        fields.push(accessor.clone());
    }

    if let Some(unbound) = accessors
        .iter()
        .find(|a| !fields.iter().any(|f| f.name() == a.name()))
    {
        return Err(SchemaError::MissingParameter {
            generated_name: name,
            accessor: unbound.name().to_string(),
            type_name: type_name.to_string(),
        });
    }

    debug!(
        type_name,
        generated = %name,
        fields = fields.len(),
        "resolved generated record"
    );

    Ok(Resolved {
        generated,
        constructor,
        fields,
    })
}
