//! gridspec - Grid widget specifications from annotated record types.
//!
//! gridspec turns the structure of a record type into the declarative
//! settings a spreadsheet-style grid widget needs: one column definition and
//! one header label per annotated field, plus a table-wide options block.
//!
//! - Fields opt in with `#[column]`; unannotated fields are left out
//! - Column types are explicit (`#[column(Numeric)]`) or inferred from the
//!   field's type
//! - Headers are explicit (`#[column(title = "...")]`) or derived from the
//!   field name (`firstName` → `First name`)
//! - `#[sheet(...)]` sets table-wide options; anything left out keeps its
//!   default
//!
//! # Quick Start
//!
//! ```rust
//! use gridspec::{ColumnType, Sheet};
//!
//! #[derive(Sheet)]
//! #[sheet(read_only, min_rows = 5)]
//! struct Person {
//!     #[column]
//!     first_name: String,
//!
//!     #[column(title = "Age (years)")]
//!     age: u32,
//!
//!     #[column]
//!     active: bool,
//!
//!     internal_id: u64,
//! }
//!
//! let table = gridspec::build::<Person>();
//!
//! assert_eq!(table.col_headers, vec!["First name", "Age (years)", "Active"]);
//! assert_eq!(table.columns[1].column_type(), ColumnType::Numeric);
//! assert_eq!(table.columns[2].column_type(), ColumnType::Checkbox);
//! assert!(table.options.read_only);
//! assert_eq!(table.options.min_rows, 5);
//! ```
//!
//! # Type Inference
//!
//! | Data kind | Column type |
//! |-----------|-------------|
//! | text | `Text` |
//! | integer, long, decimal | `Numeric` |
//! | boolean | `Checkbox` |
//! | date, date-time, instant | `Date` |
//! | anything else | `Text` |
//!
//! # Runtime Metadata
//!
//! Types that are not Rust structs can be described in YAML or JSON and
//! loaded into a [`MetadataRegistry`]; see the [`registry`] module.
//!
//! # Errors
//!
//! Building from resolved metadata cannot fail. Looking up a type name the
//! registry does not know returns [`GridSpecError::UnknownType`].

mod builder;
mod column;
mod error;
mod humanize;
mod kind;
mod metadata;
mod options;
pub mod registry;
mod table;

// Re-export public API
pub use builder::{
    build, build_column, build_columns, build_headers, build_named, build_table,
    build_with_data, header_for,
};
pub use column::{
    AutocompleteColumn, CheckboxColumn, Column, ColumnType, DateColumn, DropdownColumn,
    HandsontableColumn, NumericColumn, NumericFormat, PasswordColumn, SelectColumn, TextColumn,
    TimeColumn,
};
pub use error::{GridSpecError, Result};
pub use humanize::{humanize, split_words};
pub use kind::{infer_column_type, DataKind};
pub use metadata::{
    FieldAnnotation, FieldDescriptor, FieldMetadata, Introspector, Sheet, TypeMetadata,
};
pub use options::{map_options, SheetAnnotation, TableOptions};
pub use registry::MetadataRegistry;
pub use table::TableSpec;

// Sheet derive macro (requires `features = ["macros"]`, on by default)
#[cfg(feature = "macros")]
pub use gridspec_macros::Sheet;
