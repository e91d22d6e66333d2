use proc_macro::TokenStream;

mod filter_fields;

/// Derive the static field table behind `fieldfilter::FilterFields`.
///
/// Field attributes:
/// - `#[filter(rename = "...")]` — name to use in output instead of the
///   declared one; an empty string is legal and is kept distinct from
///   omission.
/// - `#[filter(omit)]` — exclude the field, overriding any rename.
/// - `#[filter(nested)]` — the field's type (or the element type of a
///   `Vec`) is itself a record; one level of its field names is reported.
///
/// Only `pub` fields take part in output; everything else is carried as
/// unexported and skipped at resolution time.
#[proc_macro_derive(FilterFields, attributes(filter))]
pub fn derive_filter_fields(input: TokenStream) -> TokenStream {
    filter_fields::derive_filter_fields(input.into()).into()
}
