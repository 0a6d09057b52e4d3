// Link-time registration of generated realizations
//
// The realization is found at runtime by name through TypeRegistry::global(),
// which collects these entries on first use.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

/// Expands to an `inventory::submit!` of the record's `GeneratedEntry`.
///
/// Example expansion:
/// ```ignore
/// ::flytekit_record::__private::inventory::submit! {
///     ::flytekit_record::GeneratedEntry::new(
///         <Input as ::flytekit_record::Generated>::generated
///     )
/// }
/// ```
pub fn expand_registration(record: &Ident) -> TokenStream {
    quote! {
        ::flytekit_record::__private::inventory::submit! {
            ::flytekit_record::GeneratedEntry::new(
                <#record as ::flytekit_record::Generated>::generated
            )
        }
    }
}
