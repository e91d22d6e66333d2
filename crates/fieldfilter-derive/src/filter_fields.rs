use darling::{FromDeriveInput, FromField, ast::Data, util::Flag};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, GenericArgument, Ident, PathArguments, Type, Visibility};

///
/// RecordInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(filter), supports(struct_named))]
struct RecordInput {
    ident: Ident,
    generics: syn::Generics,
    data: Data<darling::util::Ignored, RecordField>,
}

///
/// RecordField
///

#[derive(FromField)]
#[darling(attributes(filter))]
struct RecordField {
    ident: Option<Ident>,
    ty: Type,
    vis: Visibility,

    #[darling(default)]
    rename: Option<String>,

    #[darling(default)]
    omit: Flag,

    #[darling(default)]
    nested: Flag,
}

// derive_filter_fields
pub fn derive_filter_fields(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let record = match RecordInput::from_derive_input(&input) {
        Ok(record) => record,
        Err(err) => return err.write_errors(),
    };

    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    let fields = record
        .data
        .as_ref()
        .take_struct()
        .expect("struct_named is enforced by darling")
        .fields;

    let entries = fields.into_iter().map(field_entry);

    quote! {
        impl #impl_generics ::fieldfilter::traits::FilterFields for #ident #ty_generics #where_clause {
            const FIELDS: &'static [::fieldfilter::node::Field] = &[
                #(#entries),*
            ];
        }
    }
}

fn field_entry(field: &RecordField) -> TokenStream {
    let ident = field.ident.as_ref().expect("named field").to_string();
    let exported = matches!(field.vis, Visibility::Public(_));
    let omit = field.omit.is_present();

    let rename = match &field.rename {
        Some(name) => quote!(Some(#name)),
        None => quote!(None),
    };

    let kind = field_kind(field);

    quote! {
        ::fieldfilter::node::Field {
            ident: #ident,
            rename: #rename,
            omit: #omit,
            exported: #exported,
            kind: #kind,
        }
    }
}

fn field_kind(field: &RecordField) -> TokenStream {
    if !field.nested.is_present() {
        return quote!(::fieldfilter::node::FieldKind::Scalar);
    }

    // A nested Vec reports its element record's names; anything else is
    // taken to be a record itself. A non-record type here fails to
    // type-check, which is the intended rejection point for mismatches.
    match vec_elem(&field.ty) {
        Some(elem) => quote! {
            ::fieldfilter::node::FieldKind::RecordList(
                <#elem as ::fieldfilter::traits::FilterFields>::FIELDS,
            )
        },
        None => {
            let ty = &field.ty;
            quote! {
                ::fieldfilter::node::FieldKind::Record(
                    <#ty as ::fieldfilter::traits::FilterFields>::FIELDS,
                )
            }
        }
    }
}

fn vec_elem(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if segment.ident != "Vec" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(elem) => Some(elem),
        _ => None,
    })
}

///
/// TESTS
///
