//! Structural metadata describing a record type.
//!
//! [`TypeMetadata`] is what the table builder consumes: the type's name, its
//! optional [`SheetAnnotation`] and its fields in declaration order. Only
//! fields with a [`FieldAnnotation`] take part in the table.
//!
//! Metadata comes from one of two introspectors:
//!
//! - the [`Sheet`] trait, implemented by `#[derive(Sheet)]` at compile time
//! - a [`MetadataRegistry`](crate::MetadataRegistry), populated by explicit
//!   registration or from schema files, queried by name through
//!   [`Introspector`]

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::column::ColumnType;
use crate::error::{GridSpecError, Result};
use crate::kind::DataKind;
use crate::options::SheetAnnotation;

/// A field's identifier and declared data kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub kind: DataKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: DataKind) -> Self {
        FieldDescriptor {
            name: name.into(),
            kind,
        }
    }
}

/// Field-level presentation settings.
///
/// An empty title is treated the same as no title.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldAnnotation {
    /// Explicit column type; inferred from the data kind when `None`.
    #[serde(rename = "type")]
    pub column_type: Option<ColumnType>,
    /// Explicit header label.
    pub title: Option<String>,
    /// Key the column reads from in each row, when it differs from the
    /// field identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl FieldAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// The title, if one was given and is not empty.
    pub fn explicit_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// The data-binding override, if one was given and is not empty.
    pub fn explicit_data(&self) -> Option<&str> {
        self.data.as_deref().filter(|d| !d.is_empty())
    }
}

/// A field together with its annotation, if it has one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FieldEntry")]
pub struct FieldMetadata {
    #[serde(flatten)]
    pub descriptor: FieldDescriptor,
    #[serde(rename = "column", default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<FieldAnnotation>,
}

// Schema form of a field entry. `flatten` cannot be combined with
// `deny_unknown_fields`, so entries are read flat and converted.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    name: String,
    #[serde(default)]
    kind: DataKind,
    #[serde(default)]
    column: Option<FieldAnnotation>,
}

impl From<FieldEntry> for FieldMetadata {
    fn from(entry: FieldEntry) -> Self {
        FieldMetadata {
            descriptor: FieldDescriptor::new(entry.name, entry.kind),
            annotation: entry.column,
        }
    }
}

/// Everything the table builder needs to know about one type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<SheetAnnotation>,
    #[serde(default)]
    pub fields: Vec<FieldMetadata>,
}

impl TypeMetadata {
    /// Creates metadata for a type with no annotation and no fields.
    pub fn new(name: impl Into<String>) -> Self {
        TypeMetadata {
            name: name.into(),
            sheet: None,
            fields: Vec::new(),
        }
    }

    /// Sets the type-level annotation.
    pub fn sheet(mut self, sheet: SheetAnnotation) -> Self {
        self.sheet = Some(sheet);
        self
    }

    /// Adds a field without annotation. It will not appear in the table.
    pub fn field(mut self, name: impl Into<String>, kind: DataKind) -> Self {
        self.fields.push(FieldMetadata {
            descriptor: FieldDescriptor::new(name, kind),
            annotation: None,
        });
        self
    }

    /// Adds an annotated field.
    pub fn column(
        mut self,
        name: impl Into<String>,
        kind: DataKind,
        annotation: FieldAnnotation,
    ) -> Self {
        self.fields.push(FieldMetadata {
            descriptor: FieldDescriptor::new(name, kind),
            annotation: Some(annotation),
        });
        self
    }

    /// Annotated fields in declaration order.
    pub fn participating_fields(
        &self,
    ) -> impl Iterator<Item = (&FieldDescriptor, &FieldAnnotation)> + '_ {
        self.fields
            .iter()
            .filter_map(|f| f.annotation.as_ref().map(|a| (&f.descriptor, a)))
    }

    /// Checks that the type has a name and that field identifiers are
    /// non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GridSpecError::invalid(&self.name, "type name is empty"));
        }

        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            let name = field.descriptor.name.as_str();
            if name.is_empty() {
                return Err(GridSpecError::invalid(&self.name, "field name is empty"));
            }
            if !seen.insert(name) {
                return Err(GridSpecError::invalid(
                    &self.name,
                    format!("duplicate field '{}'", name),
                ));
            }
        }

        Ok(())
    }
}

/// Types that describe their own sheet metadata.
///
/// Usually derived:
///
/// ```ignore
/// use gridspec::Sheet;
///
/// #[derive(Sheet)]
/// #[sheet(read_only, min_rows = 5)]
/// struct Person {
///     #[column]
///     first_name: String,
///
///     #[column(Numeric, title = "Age (years)")]
///     age: String,
///
///     // not annotated: not part of the table
///     internal_id: u64,
/// }
///
/// let table = gridspec::build::<Person>();
/// ```
///
/// It can also be implemented by hand:
///
/// ```
/// use gridspec::{DataKind, FieldAnnotation, Sheet, TypeMetadata};
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl Sheet for Point {
///     fn sheet_metadata() -> TypeMetadata {
///         TypeMetadata::new("Point")
///             .column("x", DataKind::Decimal, FieldAnnotation::new())
///             .column("y", DataKind::Decimal, FieldAnnotation::new())
///     }
/// }
///
/// let table = gridspec::build::<Point>();
/// assert_eq!(table.col_headers, vec!["X", "Y"]);
/// ```
pub trait Sheet {
    /// Returns the metadata for this type.
    fn sheet_metadata() -> TypeMetadata;
}

/// Looks up type metadata by name.
pub trait Introspector {
    /// Returns the metadata for `type_name`, or
    /// [`GridSpecError::UnknownType`] when the type cannot be resolved.
    fn introspect(&self, type_name: &str) -> Result<&TypeMetadata>;
}
