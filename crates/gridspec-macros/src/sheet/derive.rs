//! Implementation of the `#[derive(Sheet)]` macro.
//!
//! This macro generates an implementation of the `Sheet` trait whose
//! `sheet_metadata()` returns the struct's `TypeMetadata`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{
    generate_annotation_tokens, generate_sheet_tokens, parse_column_attrs, parse_sheet_attrs,
};
use super::kind::infer_data_kind;

/// Main implementation of the Sheet derive macro.
pub fn sheet_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    // Parse container attributes
    let sheet_attrs = parse_sheet_attrs(&input.attrs)?;

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(Error::new(
                    input.span(),
                    "Sheet can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Sheet can only be derived for structs",
            ))
        }
    };

    // Generate field metadata in declaration order
    let mut field_tokens: Vec<TokenStream> = Vec::new();

    for field in fields {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;
        // r#type and friends are exposed without the raw prefix
        let field_name_str = field_name.to_string().trim_start_matches("r#").to_string();

        let column_attrs = parse_column_attrs(&field.attrs)?;

        let kind = column_attrs
            .as_ref()
            .and_then(|attrs| attrs.kind)
            .unwrap_or_else(|| infer_data_kind(&field.ty));
        let kind = format_ident!("{}", kind);

        let annotation_tokens = generate_annotation_tokens(column_attrs.as_ref());

        field_tokens.push(quote! {
            ::gridspec::FieldMetadata {
                descriptor: ::gridspec::FieldDescriptor {
                    name: #field_name_str.to_string(),
                    kind: ::gridspec::DataKind::#kind,
                },
                annotation: #annotation_tokens,
            }
        });
    }

    let type_name = sheet_attrs
        .as_ref()
        .and_then(|attrs| attrs.name.clone())
        .unwrap_or_else(|| struct_name.to_string());
    let sheet_tokens = generate_sheet_tokens(sheet_attrs.as_ref());

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Generate the impl block
    let expanded = quote! {
        impl #impl_generics ::gridspec::Sheet for #struct_name #ty_generics #where_clause {
            fn sheet_metadata() -> ::gridspec::TypeMetadata {
                ::gridspec::TypeMetadata {
                    name: #type_name.to_string(),
                    sheet: #sheet_tokens,
                    fields: vec![
                        #(#field_tokens),*
                    ],
                }
            }
        }
    };

    Ok(expanded)
}
