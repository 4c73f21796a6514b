//! `#[derive(Annotated)]`: type markers and marked fields.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{ext::IdentExt, Data, DeriveInput, Error, Index, Member};

use crate::common::{collect_markers, visibility_tokens, Target};

/// Expand `#[derive(Annotated)]` on a struct.
///
/// Each marked field gets an accessor fn, local to the generated `const`:
///
/// ```ignore
/// const FIELDS: &'static [FieldEntry<Self>] = {
///     fn __annotated_read_foo(subject: &Subject) -> &(dyn FieldValue + 'static) {
///         &subject.foo
///     }
///     &[FieldEntry::new("foo", Visibility::Restricted, &[Marker::Field], __annotated_read_foo)]
/// };
/// ```
pub fn expand_derive_annotated(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let type_name = ident.unraw().to_string();

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "annotated subjects cannot be generic",
        ));
    }

    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            ident,
            "`Annotated` can only be derived for structs",
        ));
    };

    let type_markers = collect_markers(&input.attrs, Target::Type)?;

    let mut readers = Vec::new();
    let mut entries = Vec::new();
    for (index, field) in data.fields.iter().enumerate() {
        let markers = collect_markers(&field.attrs, Target::Field)?;
        if markers.is_empty() {
            continue;
        }

        let (member, name) = match &field.ident {
            Some(field_ident) => (Member::Named(field_ident.clone()), field_ident.unraw().to_string()),
            None => (Member::Unnamed(Index::from(index)), index.to_string()),
        };
        let reader = format_ident!("__annotated_read_{}", name);
        let visibility = visibility_tokens(&field.vis);

        readers.push(quote! {
            fn #reader(subject: &#ident) -> &(dyn ::annotated::FieldValue + 'static) {
                &subject.#member
            }
        });
        entries.push(quote! {
            ::annotated::FieldEntry::new(#name, #visibility, &[#(#markers),*], #reader)
        });
    }

    Ok(quote! {
        impl ::annotated::Annotated for #ident {
            const TYPE_NAME: &'static str = #type_name;
            const TYPE_MARKERS: &'static [::annotated::Marker] = &[#(#type_markers),*];
            const FIELDS: &'static [::annotated::FieldEntry<Self>] = {
                #(#readers)*
                &[#(#entries),*]
            };
        }
    })
}
