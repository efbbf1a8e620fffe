//! Attribute parsing for the Sheet derive macro.
//!
//! This module provides parsers for the `#[sheet(...)]` container attribute
//! and the `#[column(...)]` field attribute.

use std::collections::BTreeMap;

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, Ident, Lit, Meta, Result, Token,
};

/// Boolean settings accepted by `#[sheet(...)]`, as flags or `name = bool`.
pub const BOOL_SETTINGS: [&str; 15] = [
    "allow_empty",
    "allow_html",
    "allow_insert_column",
    "allow_insert_row",
    "allow_invalid",
    "allow_remove_column",
    "allow_remove_row",
    "auto_column_size",
    "auto_row_size",
    "auto_wrap_col",
    "auto_wrap_row",
    "column_sorting",
    "context_menu",
    "read_only",
    "row_headers",
];

/// Column type variants accepted as identifiers in `#[column(...)]`.
const COLUMN_TYPES: [&str; 10] = [
    "Text",
    "Numeric",
    "Date",
    "Time",
    "Checkbox",
    "Select",
    "Dropdown",
    "Autocomplete",
    "Password",
    "Handsontable",
];

/// Data kind names accepted by `kind = "..."`.
const DATA_KINDS: [(&str, &str); 9] = [
    ("text", "Text"),
    ("integer", "Integer"),
    ("long", "Long"),
    ("decimal", "Decimal"),
    ("boolean", "Boolean"),
    ("date", "Date"),
    ("date_time", "DateTime"),
    ("instant", "Instant"),
    ("other", "Other"),
];

/// Container-level attributes from `#[sheet(...)]`.
#[derive(Debug, Default, Clone)]
pub struct SheetAttr {
    /// Type name override: `name = "Person"`
    pub name: Option<String>,
    /// Boolean settings, keyed by setting name.
    pub flags: BTreeMap<String, bool>,
    /// `checked_template = "yes"`
    pub checked_template: Option<String>,
    /// `class_name = "htCenter"`
    pub class_name: Option<String>,
    /// `column_header_height = 40`
    pub column_header_height: Option<u32>,
    /// `min_rows = 5`
    pub min_rows: Option<u32>,
}

/// How the column type was given in `#[column(...)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnTypeAttr {
    /// A variant identifier, checked at compile time: `#[column(Numeric)]`
    Variant(&'static str),
    /// A name resolved at runtime, unknown names become text: `ty = "numeric"`
    Named(String),
}

/// Field-level attributes from `#[column(...)]`.
#[derive(Debug, Default, Clone)]
pub struct ColumnAttr {
    pub column_type: Option<ColumnTypeAttr>,
    /// Header title: `title = "Due Date"`
    pub title: Option<String>,
    /// Data kind override, as a `DataKind` variant name: `kind = "decimal"`
    pub kind: Option<&'static str>,
    /// Row key override: `data = "firstName"`
    pub data: Option<String>,
}

impl Parse for SheetAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SheetAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // read_only (flag)
                Meta::Path(p) => {
                    let setting = bool_setting(p.get_ident(), p.span())?;
                    attr.flags.insert(setting, true);
                }

                Meta::NameValue(nv) if nv.path.is_ident("name") => {
                    attr.name = Some(parse_string_expr(&nv.value)?);
                }

                Meta::NameValue(nv) if nv.path.is_ident("checked_template") => {
                    attr.checked_template = Some(parse_string_expr(&nv.value)?);
                }

                Meta::NameValue(nv) if nv.path.is_ident("class_name") => {
                    attr.class_name = Some(parse_string_expr(&nv.value)?);
                }

                Meta::NameValue(nv) if nv.path.is_ident("column_header_height") => {
                    attr.column_header_height = Some(parse_u32_expr(&nv.value)?);
                }

                Meta::NameValue(nv) if nv.path.is_ident("min_rows") => {
                    attr.min_rows = Some(parse_u32_expr(&nv.value)?);
                }

                // read_only = false
                Meta::NameValue(nv) => {
                    let setting = bool_setting(nv.path.get_ident(), nv.path.span())?;
                    attr.flags.insert(setting, parse_bool_expr(&nv.value)?);
                }

                Meta::List(list) => {
                    return Err(Error::new(
                        list.span(),
                        "unexpected list in sheet attribute",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

impl Parse for ColumnAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ColumnAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // Numeric, Date, ...
                Meta::Path(p) => {
                    let ident = p.get_ident().ok_or_else(|| {
                        Error::new(p.span(), "expected a column type identifier")
                    })?;
                    let variant = column_type_from_ident(ident)?;
                    attr.column_type = Some(ColumnTypeAttr::Variant(variant));
                }

                // ty = "numeric"
                Meta::NameValue(nv) if nv.path.is_ident("ty") => {
                    let name = parse_string_expr(&nv.value)?;
                    attr.column_type = Some(ColumnTypeAttr::Named(name));
                }

                // title = "Due Date"
                Meta::NameValue(nv) if nv.path.is_ident("title") => {
                    attr.title = Some(parse_string_expr(&nv.value)?);
                }

                // kind = "decimal"
                Meta::NameValue(nv) if nv.path.is_ident("kind") => {
                    let name = parse_string_expr(&nv.value)?;
                    attr.kind = Some(data_kind_from_str(&name, nv.value.span())?);
                }

                // data = "firstName"
                Meta::NameValue(nv) if nv.path.is_ident("data") => {
                    attr.data = Some(parse_string_expr(&nv.value)?);
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown column attribute: expected a column type (Text, Numeric, Date, \
                         Time, Checkbox, Select, Dropdown, Autocomplete, Password, Handsontable), \
                         ty = \"...\", title = \"...\", kind = \"...\" or data = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Resolve a column type identifier, case-insensitively.
fn column_type_from_ident(ident: &Ident) -> Result<&'static str> {
    let name = ident.to_string();
    if name.eq_ignore_ascii_case("nested") {
        return Ok("Handsontable");
    }
    COLUMN_TYPES
        .iter()
        .copied()
        .find(|variant| variant.eq_ignore_ascii_case(&name))
        .ok_or_else(|| {
            Error::new(
                ident.span(),
                format!(
                    "unknown column type: '{}'. Expected one of: {}",
                    name,
                    COLUMN_TYPES.join(", ")
                ),
            )
        })
}

fn data_kind_from_str(name: &str, span: Span) -> Result<&'static str> {
    DATA_KINDS
        .iter()
        .find(|(schema_name, _)| *schema_name == name)
        .map(|(_, variant)| *variant)
        .ok_or_else(|| {
            Error::new(
                span,
                format!(
                    "unknown data kind: '{}'. Expected one of: text, integer, long, decimal, \
                     boolean, date, date_time, instant, other",
                    name
                ),
            )
        })
}

fn bool_setting(ident: Option<&Ident>, span: Span) -> Result<String> {
    match ident.map(Ident::to_string) {
        Some(name) if BOOL_SETTINGS.contains(&name.as_str()) => Ok(name),
        _ => Err(Error::new(
            span,
            "unknown sheet attribute: expected name, checked_template, class_name, \
             column_header_height, min_rows or one of the boolean settings",
        )),
    }
}

fn parse_bool_expr(expr: &Expr) -> Result<bool> {
    if let Expr::Lit(expr_lit) = expr {
        if let Lit::Bool(lit_bool) = &expr_lit.lit {
            return Ok(lit_bool.value);
        }
    }
    Err(Error::new(expr.span(), "expected boolean literal"))
}

fn parse_u32_expr(expr: &Expr) -> Result<u32> {
    if let Expr::Lit(expr_lit) = expr {
        if let Lit::Int(lit_int) = &expr_lit.lit {
            return lit_int.base10_parse();
        }
    }
    Err(Error::new(expr.span(), "expected integer literal"))
}

fn parse_string_expr(expr: &Expr) -> Result<String> {
    if let Expr::Lit(expr_lit) = expr {
        if let Lit::Str(lit_str) = &expr_lit.lit {
            return Ok(lit_str.value());
        }
    }
    Err(Error::new(expr.span(), "expected string literal"))
}

/// Extract `#[sheet(...)]` from a struct's attributes. A bare `#[sheet]`
/// counts as an annotation with every setting left at its default.
pub fn parse_sheet_attrs(attrs: &[Attribute]) -> Result<Option<SheetAttr>> {
    let mut result = None;
    for attr in attrs {
        if attr.path().is_ident("sheet") {
            if result.is_some() {
                return Err(Error::new(attr.span(), "duplicate sheet attribute"));
            }
            result = Some(match &attr.meta {
                Meta::Path(_) => SheetAttr::default(),
                _ => attr.parse_args::<SheetAttr>()?,
            });
        }
    }
    Ok(result)
}

/// Extract `#[column(...)]` from a field's attributes. `None` means the
/// field does not take part in the table.
pub fn parse_column_attrs(attrs: &[Attribute]) -> Result<Option<ColumnAttr>> {
    let mut result = None;
    for attr in attrs {
        if attr.path().is_ident("column") {
            if result.is_some() {
                return Err(Error::new(attr.span(), "duplicate column attribute"));
            }
            result = Some(match &attr.meta {
                Meta::Path(_) => ColumnAttr::default(),
                _ => attr.parse_args::<ColumnAttr>()?,
            });
        }
    }
    Ok(result)
}

/// Generate the `Option<SheetAnnotation>` expression.
pub fn generate_sheet_tokens(attr: Option<&SheetAttr>) -> TokenStream {
    let Some(attr) = attr else {
        return quote! { None };
    };

    let flags = attr.flags.iter().map(|(name, value)| {
        let field = format_ident!("{}", name);
        quote! { #field: Some(#value), }
    });
    let checked_template = optional_string(&attr.checked_template);
    let class_name = optional_string(&attr.class_name);
    let column_header_height = optional_u32(attr.column_header_height);
    let min_rows = optional_u32(attr.min_rows);

    quote! {
        Some(::gridspec::SheetAnnotation {
            #(#flags)*
            checked_template: #checked_template,
            class_name: #class_name,
            column_header_height: #column_header_height,
            min_rows: #min_rows,
            ..::core::default::Default::default()
        })
    }
}

/// Generate the `Option<FieldAnnotation>` expression.
pub fn generate_annotation_tokens(attr: Option<&ColumnAttr>) -> TokenStream {
    let Some(attr) = attr else {
        return quote! { None };
    };

    let column_type = match &attr.column_type {
        Some(ColumnTypeAttr::Variant(variant)) => {
            let variant = format_ident!("{}", variant);
            quote! { Some(::gridspec::ColumnType::#variant) }
        }
        Some(ColumnTypeAttr::Named(name)) => {
            quote! { Some(::gridspec::ColumnType::from_name(#name)) }
        }
        None => quote! { None },
    };
    let title = optional_string(&attr.title);
    let data = optional_string(&attr.data);

    quote! {
        Some(::gridspec::FieldAnnotation {
            column_type: #column_type,
            title: #title,
            data: #data,
        })
    }
}

fn optional_string(value: &Option<String>) -> TokenStream {
    match value {
        Some(s) => quote! { Some(#s.to_string()) },
        None => quote! { None },
    }
}

fn optional_u32(value: Option<u32>) -> TokenStream {
    match value {
        Some(n) => quote! { Some(#n) },
        None => quote! { None },
    }
}
