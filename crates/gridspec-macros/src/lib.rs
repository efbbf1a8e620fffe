//! Proc macros for gridspec.
//!
//! This crate provides [`Sheet`], a derive macro that generates grid sheet
//! metadata from struct annotations. It is re-exported by `gridspec` (with
//! the default `macros` feature), which is where the generated code points.

mod sheet;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `gridspec::Sheet` from struct annotations.
///
/// The generated `sheet_metadata()` lists every named field in declaration
/// order. Only fields marked with `#[column]` take part in the table.
///
/// For working examples, see `gridspec/tests/sheet_derive.rs`.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[column]` | Include the field; column type inferred from the Rust type |
/// | `Numeric`, `Date`, ... | Explicit column type (checked at compile time) |
/// | `ty = "numeric"` | Explicit column type by name; unknown names become text |
/// | `title = "..."` | Header label (default: humanized field name) |
/// | `kind = "decimal"` | Override the data kind inferred from the Rust type |
/// | `data = "firstName"` | Row key the column reads from (default: field name) |
///
/// Column types: `Text`, `Numeric`, `Date`, `Time`, `Checkbox`, `Select`,
/// `Dropdown`, `Autocomplete`, `Password`, `Handsontable` (alias `Nested`).
///
/// # Container Attributes
///
/// | Attribute | Type | Description |
/// |-----------|------|-------------|
/// | `name` | string | Type name in the metadata (default: struct name) |
/// | `allow_empty`, `allow_html`, `allow_insert_column`, `allow_insert_row`, `allow_invalid`, `allow_remove_column`, `allow_remove_row`, `auto_column_size`, `auto_row_size`, `auto_wrap_col`, `auto_wrap_row`, `column_sorting`, `context_menu`, `read_only`, `row_headers` | flag or bool | Boolean settings |
/// | `checked_template` | string | Checkbox checked value |
/// | `class_name` | string | CSS class of the grid |
/// | `column_header_height` | integer | Header row height |
/// | `min_rows` | integer | Minimum number of rows |
///
/// Without `#[sheet]` the type has no annotation and every option keeps its
/// default.
///
/// # Data Kind Inference
///
/// | Rust type | Kind |
/// |-----------|------|
/// | `String`, `&str`, `char` | text |
/// | `i8`..`i32`, `u8`..`u32` | integer |
/// | `i64`, `u64`, `i128`, `u128`, `isize`, `usize` | long |
/// | `f32`, `f64`, `Decimal`, `BigDecimal` | decimal |
/// | `bool` | boolean |
/// | `NaiveDate`, `Date` | date |
/// | `DateTime`, `NaiveDateTime`, `OffsetDateTime`, `Zoned` | date_time |
/// | `SystemTime`, `Instant`, `Timestamp` | instant |
///
/// `Option`, `Box`, `Rc`, `Arc`, `Cow` and references are looked through.
/// Anything else is `other` and gets a text column.
///
/// # Example
///
/// ```ignore
/// use gridspec::Sheet;
///
/// #[derive(Sheet)]
/// #[sheet(read_only, min_rows = 5, class_name = "people")]
/// struct Person {
///     #[column]
///     first_name: String,
///
///     #[column(Dropdown, title = "Role")]
///     role: String,
///
///     #[column]
///     born: chrono::NaiveDate,
///
///     password_hash: String,
/// }
///
/// let table = gridspec::build::<Person>();
/// ```
#[proc_macro_derive(Sheet, attributes(sheet, column))]
pub fn sheet_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    sheet::sheet_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
