//! Non-conforming realizations, built by hand against private registries.

use std::any::Any;

use flytekit_record::{
    generated_name, Accessor, ArgumentError, CodecOptions, Constructor, ConstructorFault,
    Correlation, DecodeError, GeneratedType, LiteralMap, Parameter, Primitive, RecordCodec,
    RecordType, SchemaError, SimpleType, TypeRegistry,
};

#[derive(Debug, PartialEq)]
struct Point {
    x: i64,
    label: Option<String>,
}

impl RecordType for Point {
    fn type_name() -> &'static str {
        "tests::Point"
    }

    fn accessors() -> Vec<Accessor<Self>> {
        vec![
            Accessor::new("x", SimpleType::Integer, false, |p: &Point| {
                Some(Primitive::Integer(p.x))
            }),
            Accessor::new("label", SimpleType::String, true, |p: &Point| {
                p.label.clone().map(Primitive::String)
            }),
        ]
    }
}

fn point_parameters() -> Vec<Parameter> {
    vec![
        Parameter::new("x", SimpleType::Integer),
        Parameter::new("label", SimpleType::String),
    ]
}

fn point_constructor() -> Constructor {
    Constructor::new(point_parameters(), |mut args| {
        let point = Point {
            x: args.required(0)?,
            label: args.optional(1)?,
        };
        Ok(Box::new(point) as Box<dyn Any>)
    })
}

fn point_name() -> String {
    generated_name(Point::type_name())
}

fn registry_with(generated: GeneratedType) -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register(generated);
    registry
}

fn x_only() -> LiteralMap {
    let mut inputs = LiteralMap::new();
    inputs.insert("x".to_string(), Primitive::Integer(3).into());
    inputs
}

#[test]
fn test_well_formed_realization() {
    let registry = registry_with(
        GeneratedType::builder::<Point>(point_name())
            .constructor(point_constructor())
            .build(),
    );
    let codec = RecordCodec::new(&registry);

    let point: Point = codec.read_value(&x_only()).unwrap();
    assert_eq!(point, Point { x: 3, label: None });
    assert_eq!(codec.interface_of::<Point>().unwrap().len(), 2);
}

#[test]
fn test_not_generated() {
    let registry = TypeRegistry::new();
    let err = RecordCodec::new(&registry).interface_of::<Point>().unwrap_err();

    assert!(matches!(err, SchemaError::NotGenerated { ref generated_name, .. }
        if generated_name == "tests::Generated_Point"));
}

#[test]
fn test_no_constructor() {
    let registry = registry_with(GeneratedType::builder::<Point>(point_name()).build());
    let err = RecordCodec::new(&registry).interface_of::<Point>().unwrap_err();

    assert!(matches!(err, SchemaError::NoConstructor { found: 0, .. }));
    assert!(err.to_string().contains("Can't find constructor"));
}

#[test]
fn test_ambiguous_constructors() {
    let registry = registry_with(
        GeneratedType::builder::<Point>(point_name())
            .constructor(point_constructor())
            .constructor(point_constructor())
            .build(),
    );
    let err = RecordCodec::new(&registry)
        .read_value::<Point>(&x_only())
        .unwrap_err();

    assert!(matches!(err, DecodeError::Schema(SchemaError::NoConstructor { found: 2, .. })));
}

#[test]
fn test_not_assignable() {
    struct Stale;

    let registry = registry_with(
        GeneratedType::builder::<Stale>(point_name())
            .constructor(point_constructor())
            .build(),
    );
    let err = RecordCodec::new(&registry).interface_of::<Point>().unwrap_err();

    assert!(matches!(err, SchemaError::NotAssignable { .. }));
    assert!(err.to_string().contains("is not assignable to tests::Point"));
}

#[test]
fn test_parameter_without_accessor() {
    let registry = registry_with(
        GeneratedType::builder::<Point>(point_name())
            .constructor(Constructor::new(
                vec![Parameter::new("z", SimpleType::Integer)],
                |_| Err("unreachable".into()),
            ))
            .build(),
    );
    let err = RecordCodec::new(&registry).interface_of::<Point>().unwrap_err();

    assert_eq!(
        err,
        SchemaError::MissingAccessor {
            generated_name: point_name(),
            parameter: "z".to_string(),
            type_name: "tests::Point".to_string(),
        }
    );
}

#[test]
fn test_accessor_without_parameter() {
    // Stale realization that predates the `label` field
    let registry = registry_with(
        GeneratedType::builder::<Point>(point_name())
            .constructor(Constructor::new(
                vec![Parameter::new("x", SimpleType::Integer)],
                |mut args| {
                    let x = args.required(0)?;
                    Ok(Box::new(Point { x, label: None }) as Box<dyn Any>)
                },
            ))
            .build(),
    );
    let codec = RecordCodec::new(&registry);

    let expected = SchemaError::MissingParameter {
        generated_name: point_name(),
        accessor: "label".to_string(),
        type_name: "tests::Point".to_string(),
    };
    assert_eq!(codec.interface_of::<Point>().unwrap_err(), expected);

    let err = codec.read_value::<Point>(&x_only()).unwrap_err();
    assert!(matches!(err, DecodeError::Schema(ref schema) if *schema == expected));
    assert!(err.to_string().contains("has no matching parameter"));
}

#[test]
fn test_parameter_kind_disagrees_with_accessor() {
    let registry = registry_with(
        GeneratedType::builder::<Point>(point_name())
            .constructor(Constructor::new(
                vec![
                    Parameter::new("x", SimpleType::Float),
                    Parameter::new("label", SimpleType::String),
                ],
                |_| Err("unreachable".into()),
            ))
            .build(),
    );
    let err = RecordCodec::new(&registry).interface_of::<Point>().unwrap_err();

    assert!(matches!(
        err,
        SchemaError::IncompatibleParameter {
            parameter_type: SimpleType::Float,
            accessor_type: SimpleType::Integer,
            ..
        }
    ));
}

#[test]
fn test_correlation_strategies() {
    // Constructor declares its parameters in the reverse order of the accessors
    let swapped = Constructor::new(
        vec![
            Parameter::new("label", SimpleType::String),
            Parameter::new("x", SimpleType::Integer),
        ],
        |mut args| {
            let label = args.optional(0)?;
            let x = args.required(1)?;
            Ok(Box::new(Point { x, label }) as Box<dyn Any>)
        },
    );
    let registry = registry_with(
        GeneratedType::builder::<Point>(point_name())
            .constructor(swapped)
            .build(),
    );

    let by_name = RecordCodec::new(&registry);
    let fields = by_name.describe::<Point>().unwrap();
    assert_eq!(fields[0].name, "label");
    assert!(fields[0].nullable);
    assert_eq!(by_name.read_value::<Point>(&x_only()).unwrap().x, 3);

    let positional = RecordCodec::with_options(
        &registry,
        CodecOptions {
            correlation: Correlation::Positional,
            ..Default::default()
        },
    );
    let err = positional.describe::<Point>().unwrap_err();
    assert!(matches!(err, SchemaError::MissingAccessor { ref parameter, .. } if parameter == "label"));
}

#[test]
fn test_positional_correlation_in_accessor_order() {
    let registry = registry_with(
        GeneratedType::builder::<Point>(point_name())
            .constructor(point_constructor())
            .build(),
    );
    let positional = RecordCodec::with_options(
        &registry,
        CodecOptions {
            correlation: Correlation::Positional,
            ..Default::default()
        },
    );

    let names: Vec<String> = positional
        .describe::<Point>()
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["x", "label"]);

    let original = Point {
        x: 9,
        label: Some("nine".to_string()),
    };
    let back: Point = positional
        .read_value(&positional.to_literal_map(&original))
        .unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_constructor_panic_is_wrapped() {
    let registry = registry_with(
        GeneratedType::builder::<Point>(point_name())
            .constructor(Constructor::new(point_parameters(), |_| panic!("boom")))
            .build(),
    );
    let err = RecordCodec::new(&registry)
        .read_value::<Point>(&x_only())
        .unwrap_err();

    let DecodeError::ConstructionFailed { source, .. } = err else {
        panic!("expected ConstructionFailed");
    };
    assert_eq!(
        source.downcast_ref::<ConstructorFault>(),
        Some(&ConstructorFault::Panicked("boom".to_string()))
    );
}

#[test]
fn test_wrong_instance_is_wrapped() {
    let registry = registry_with(
        GeneratedType::builder::<Point>(point_name())
            .constructor(Constructor::new(point_parameters(), |_| {
                Ok(Box::new(42i64) as Box<dyn Any>)
            }))
            .build(),
    );
    let err = RecordCodec::new(&registry)
        .read_value::<Point>(&x_only())
        .unwrap_err();

    let DecodeError::ConstructionFailed { source, .. } = err else {
        panic!("expected ConstructionFailed");
    };
    assert!(matches!(
        source.downcast_ref::<ConstructorFault>(),
        Some(ConstructorFault::WrongInstance { .. })
    ));
}

#[test]
fn test_argument_error_is_preserved() {
    // Reads `label` as an integer although both sides declare a string
    let registry = registry_with(
        GeneratedType::builder::<Point>(point_name())
            .constructor(Constructor::new(point_parameters(), |mut args| {
                let x: i64 = args.required(0)?;
                let bogus: Option<i64> = args.optional(1)?;
                Ok(Box::new(Point {
                    x: x + bogus.unwrap_or_default(),
                    label: None,
                }) as Box<dyn Any>)
            }))
            .build(),
    );

    let mut inputs = x_only();
    inputs.insert("label".to_string(), Primitive::String("hi".to_string()).into());

    let err = RecordCodec::new(&registry)
        .read_value::<Point>(&inputs)
        .unwrap_err();

    let DecodeError::ConstructionFailed { source, .. } = err else {
        panic!("expected ConstructionFailed");
    };
    assert_eq!(
        source.downcast_ref::<ArgumentError>(),
        Some(&ArgumentError::Mismatch {
            index: 1,
            expected: SimpleType::Integer,
            actual: SimpleType::String,
        })
    );
}
