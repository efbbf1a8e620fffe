//! Data kind inference from a field's Rust type.
//!
//! Only the last path segment is inspected, so `chrono::NaiveDate` and a
//! plain imported `NaiveDate` are treated alike. `Option`, `Box`, `Rc`,
//! `Arc`, `Cow` and references are unwrapped first.

use syn::{GenericArgument, PathArguments, Type};

/// Returns the `DataKind` variant name for `ty`.
pub fn infer_data_kind(ty: &Type) -> &'static str {
    match ty {
        Type::Reference(r) => infer_data_kind(&r.elem),
        Type::Paren(p) => infer_data_kind(&p.elem),
        Type::Group(g) => infer_data_kind(&g.elem),
        Type::Path(type_path) => {
            let Some(segment) = type_path.path.segments.last() else {
                return "Other";
            };
            let name = segment.ident.to_string();

            if matches!(name.as_str(), "Option" | "Box" | "Rc" | "Arc" | "Cow") {
                return match first_type_argument(&segment.arguments) {
                    Some(inner) => infer_data_kind(inner),
                    None => "Other",
                };
            }

            kind_for_name(&name)
        }
        _ => "Other",
    }
}

fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

fn kind_for_name(name: &str) -> &'static str {
    match name {
        "String" | "str" | "char" => "Text",
        "i8" | "i16" | "i32" | "u8" | "u16" | "u32" => "Integer",
        "i64" | "u64" | "i128" | "u128" | "isize" | "usize" => "Long",
        "f32" | "f64" | "Decimal" | "BigDecimal" => "Decimal",
        "bool" => "Boolean",
        "NaiveDate" | "Date" => "Date",
        "DateTime" | "NaiveDateTime" | "OffsetDateTime" | "Zoned" => "DateTime",
        "SystemTime" | "Instant" | "Timestamp" => "Instant",
        _ => "Other",
    }
}
