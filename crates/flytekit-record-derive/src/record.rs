// #[derive(Record)] implementation
//
// Generates the abstract description and the concrete realization of a
// record struct.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Path, Result};

use crate::fields::RecordField;
use crate::registration::expand_registration;

/// Struct-level `#[record(..)]` options.
#[derive(Default)]
struct ContainerAttrs {
    name: Option<LitStr>,
    validate: Option<Path>,
}

impl ContainerAttrs {
    fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut parsed = ContainerAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("record")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new_spanned(name, "record name must not be empty"));
                    }
                    parsed.name = Some(name);
                    Ok(())
                } else if meta.path.is_ident("validate") {
                    let path: LitStr = meta.value()?.parse()?;
                    parsed.validate = Some(path.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported record attribute, expected `name` or `validate`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

/// Expands #[derive(Record)].
///
/// Example expansion:
/// ```ignore
/// // Input:
/// #[derive(Record)]
/// struct Input {
///     i: i64,
///     t: Option<Timestamp>,
/// }
///
/// // Output:
/// impl ::flytekit_record::RecordType for Input {
///     fn type_name() -> &'static str { std::any::type_name::<Self>() }
///     fn accessors() -> Vec<Accessor<Self>> { vec![/* i, t */] }
/// }
///
/// impl ::flytekit_record::Generated for Input {
///     fn generated() -> GeneratedType {
///         GeneratedType::builder::<Self>(generated_name(Self::type_name()))
///             .constructor(Constructor::new(vec![/* i, t */], |mut args| {
///                 let value = Input {
///                     i: args.required::<i64>(0)?,
///                     t: args.optional::<Timestamp>(1)?,
///                 };
///                 Ok(Box::new(value) as Box<dyn Any>)
///             }))
///             .build()
///     }
/// }
///
/// inventory::submit! { GeneratedEntry::new(<Input as Generated>::generated) }
/// ```
pub fn expand_record(input: DeriveInput) -> Result<TokenStream> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Record)] does not support generic records",
        ));
    }

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "#[derive(Record)] requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "#[derive(Record)] can only be applied to structs",
            ))
        }
    };

    let container = ContainerAttrs::parse(&input.attrs)?;
    let fields = named
        .iter()
        .map(RecordField::parse)
        .collect::<Result<Vec<_>>>()?;

    let type_name = match &container.name {
        Some(name) => quote! { #name },
        // Includes enclosing fn names, so fn-local records never collide
        None => quote! { ::std::any::type_name::<Self>() },
    };

    let args = format_ident!("args");
    let accessors = fields.iter().map(|f| f.accessor(ident));
    let parameters = fields.iter().map(RecordField::parameter);
    let extractions = fields
        .iter()
        .enumerate()
        .map(|(index, f)| f.extraction(&args, index));

    // `mut args` would be an unused `mut` for a record with no fields
    let args_pattern = if fields.is_empty() {
        quote! { _ }
    } else {
        quote! { mut #args }
    };

    let validate = container.validate.as_ref().map(|path| {
        quote! { #path(&value)?; }
    });

    let registration = expand_registration(ident);

    let expanded = quote! {
        impl ::flytekit_record::RecordType for #ident {
            fn type_name() -> &'static str {
                #type_name
            }

            fn accessors() -> ::std::vec::Vec<::flytekit_record::Accessor<Self>> {
                ::std::vec![#(#accessors),*]
            }
        }

        impl ::flytekit_record::Generated for #ident {
            fn generated() -> ::flytekit_record::GeneratedType {
                ::flytekit_record::GeneratedType::builder::<Self>(
                    ::flytekit_record::generated_name(
                        <Self as ::flytekit_record::RecordType>::type_name(),
                    ),
                )
                .constructor(::flytekit_record::Constructor::new(
                    ::std::vec![#(#parameters),*],
                    |#args_pattern: ::flytekit_record::Arguments| -> ::std::result::Result<
                        ::std::boxed::Box<dyn ::std::any::Any>,
                        ::flytekit_record::ConstructError,
                    > {
                        let value = #ident {
                            #(#extractions),*
                        };
                        #validate
                        ::std::result::Result::Ok(
                            ::std::boxed::Box::new(value) as ::std::boxed::Box<dyn ::std::any::Any>
                        )
                    },
                ))
                .build()
            }
        }

        #registration
    };

    Ok(expanded)
}
