// flytekit-record-derive: code generation for flytekit-record
//
// Provides #[derive(Record)], which emits for a struct with named fields:
// - the RecordType impl (type name + accessors in declaration order)
// - the Generated impl (realization with a single positional constructor)
// - a link-time registration so TypeRegistry::global() can find it
//
// Example:
// ```
// #[derive(Record)]
// #[record(name = "app.Input")]
// struct Input {
//     i: i64,
//     #[record(description = "optional start time")]
//     t: Option<Timestamp>,
// }
// ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod fields;
mod record;
mod registration;

/// Derives `RecordType` and `Generated` for a struct with named fields.
///
/// Field types must implement `LiteralValue`; `Option<T>` makes a field
/// nullable.
///
/// # Attributes
///
/// - `#[record(name = "...")]` on the struct: stable type name, defaults to
///   the full path of the struct (`std::any::type_name`)
/// - `#[record(validate = "path::to::check")]` on the struct: called as
///   `check(&value)` after construction; an `Err` rejects the instance
/// - `#[record(description = "...")]` on a field: description published in
///   the interface
///
/// # Example
///
/// ```ignore
/// #[derive(Record)]
/// #[record(validate = "Range::check")]
/// struct Range {
///     lo: i64,
///     hi: i64,
/// }
///
/// impl Range {
///     fn check(&self) -> Result<(), String> {
///         if self.lo <= self.hi { Ok(()) } else { Err("lo > hi".into()) }
///     }
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand_record(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
