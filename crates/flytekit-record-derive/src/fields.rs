// Field analysis for #[derive(Record)]
//
// Classifies each struct field as required or nullable and generates the
// per-field pieces of the expansion: the accessor, the constructor parameter
// and the argument extraction inside the constructor.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Field, GenericArgument, Ident, LitStr, PathArguments, Result, Type};

/// One struct field of a record.
pub struct RecordField {
    /// Field identifier as written (may be a raw identifier)
    pub ident: Ident,
    /// Field name as published
    pub name: LitStr,
    /// Type carried by the literal (`T` for both `T` and `Option<T>`)
    pub value_type: Type,
    pub nullable: bool,
    pub description: Option<LitStr>,
}

impl RecordField {
    pub fn parse(field: &Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "Record fields must be named"))?;
        let name = LitStr::new(&ident.unraw().to_string(), ident.span());

        let (value_type, nullable) = match option_inner(&field.ty) {
            Some(inner) => (inner.clone(), true),
            None => (field.ty.clone(), false),
        };

        Ok(RecordField {
            ident,
            name,
            value_type,
            nullable,
            description: parse_description(&field.attrs)?,
        })
    }

    /// `Accessor::new(..)` reading this field from `&#record`.
    pub fn accessor(&self, record: &Ident) -> TokenStream {
        let ident = &self.ident;
        let name = &self.name;
        let ty = &self.value_type;
        let nullable = self.nullable;

        let read = if self.nullable {
            quote! {
                |record: &#record| record.#ident.as_ref().map(|value| {
                    <#ty as ::flytekit_record::LiteralValue>::to_primitive(value)
                })
            }
        } else {
            quote! {
                |record: &#record| ::std::option::Option::Some(
                    <#ty as ::flytekit_record::LiteralValue>::to_primitive(&record.#ident)
                )
            }
        };

        let description = self
            .description
            .as_ref()
            .map(|d| quote! { .with_description(#d) });

        quote! {
            ::flytekit_record::Accessor::new(
                #name,
                <#ty as ::flytekit_record::LiteralValue>::SIMPLE_TYPE,
                #nullable,
                #read,
            )
            #description
        }
    }

    /// `Parameter::new(..)` for the generated constructor.
    pub fn parameter(&self) -> TokenStream {
        let name = &self.name;
        let ty = &self.value_type;
        quote! {
            ::flytekit_record::Parameter::new(
                #name,
                <#ty as ::flytekit_record::LiteralValue>::SIMPLE_TYPE,
            )
        }
    }

    /// `field: args.required(i)?` / `field: args.optional(i)?`
    pub fn extraction(&self, args: &Ident, index: usize) -> TokenStream {
        let ident = &self.ident;
        let ty = &self.value_type;
        if self.nullable {
            quote! { #ident: #args.optional::<#ty>(#index)? }
        } else {
            quote! { #ident: #args.required::<#ty>(#index)? }
        }
    }
}

/// `T` if `ty` is `Option<T>` (also `std::option::Option<T>`).
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }

    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    match &segment.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
            Some(GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

fn parse_description(attrs: &[Attribute]) -> Result<Option<LitStr>> {
    let mut description = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("record")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("description") {
                description = Some(meta.value()?.parse::<LitStr>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported field attribute, expected `description`"))
            }
        })?;
    }
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn field(tokens: syn::FieldsNamed) -> RecordField {
        RecordField::parse(tokens.named.first().unwrap()).unwrap()
    }

    #[test]
    fn test_required_field() {
        let f = field(parse_quote!({ i: i64 }));
        assert_eq!(f.name.value(), "i");
        assert!(!f.nullable);
        assert!(f.description.is_none());
    }

    #[test]
    fn test_option_is_nullable() {
        let f = field(parse_quote!({ t: Option<Timestamp> }));
        assert!(f.nullable);
        let expected: Type = parse_quote!(Timestamp);
        assert_eq!(f.value_type, expected);

        let f = field(parse_quote!({ t: ::std::option::Option<String> }));
        assert!(f.nullable);
    }

    #[test]
    fn test_raw_identifier_name() {
        let f = field(parse_quote!({ r#type: String }));
        assert_eq!(f.name.value(), "type");
    }

    #[test]
    fn test_description_attribute() {
        let f = field(parse_quote!({
            #[record(description = "start time")]
            t: Option<Timestamp>
        }));
        assert_eq!(f.description.unwrap().value(), "start time");
    }

    #[test]
    fn test_unknown_field_attribute() {
        let fields: syn::FieldsNamed = parse_quote!({
            #[record(rename = "x")]
            t: i64
        });
        let err = RecordField::parse(fields.named.first().unwrap()).err().unwrap();
        assert!(err.to_string().contains("unsupported field attribute"));
    }
}
