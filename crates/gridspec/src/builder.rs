//! Table construction from type metadata.
//!
//! [`build_table`] is the core: it maps the type annotation to options and
//! walks the participating fields once, producing a header and a column per
//! field. The other entry points resolve metadata first:
//!
//! - [`build`] / [`build_with_data`] for types implementing [`Sheet`]
//! - [`build_named`] for types known to an [`Introspector`]

use crate::column::Column;
use crate::error::Result;
use crate::humanize::humanize;
use crate::kind::infer_column_type;
use crate::metadata::{FieldAnnotation, FieldDescriptor, Introspector, Sheet, TypeMetadata};
use crate::options::map_options;
use crate::table::TableSpec;

/// Creates the column for a field.
///
/// An explicit column type in the annotation wins; otherwise the type is
/// inferred from the field's data kind. The column reads from the
/// annotation's data key if set, else from the field's identifier.
pub fn build_column(field: &FieldDescriptor, annotation: &FieldAnnotation) -> Column {
    let column_type = annotation
        .column_type
        .unwrap_or_else(|| infer_column_type(field.kind));
    let data = annotation.explicit_data().unwrap_or(field.name.as_str());
    Column::new(column_type, data)
}

/// The header label for a field: its explicit title if non-empty, else the
/// humanized identifier.
pub fn header_for(field: &FieldDescriptor, annotation: &FieldAnnotation) -> String {
    match annotation.explicit_title() {
        Some(title) => title.to_string(),
        None => humanize(&field.name),
    }
}

/// Header labels for the participating fields of `meta`, in order.
pub fn build_headers(meta: &TypeMetadata) -> Vec<String> {
    meta.participating_fields()
        .map(|(field, annotation)| header_for(field, annotation))
        .collect()
}

/// Columns for the participating fields of `meta`, in order.
pub fn build_columns(meta: &TypeMetadata) -> Vec<Column> {
    meta.participating_fields()
        .map(|(field, annotation)| build_column(field, annotation))
        .collect()
}

/// Builds the table specification for `meta`, attaching `data` if given.
pub fn build_table<D>(meta: &TypeMetadata, data: Option<Vec<D>>) -> TableSpec<D> {
    let options = map_options(meta.sheet.as_ref());

    let (col_headers, columns): (Vec<String>, Vec<Column>) = meta
        .participating_fields()
        .map(|(field, annotation)| {
            (
                header_for(field, annotation),
                build_column(field, annotation),
            )
        })
        .unzip();

    log::debug!(
        "built table for '{}' with {} column(s)",
        meta.name,
        columns.len()
    );

    TableSpec {
        col_headers,
        columns,
        options,
        data,
    }
}

/// Builds the table specification for `T` without data.
pub fn build<T: Sheet>() -> TableSpec<T> {
    build_table(&T::sheet_metadata(), None)
}

/// Builds the table specification for `T` with `data` attached.
pub fn build_with_data<T: Sheet>(data: Vec<T>) -> TableSpec<T> {
    build_table(&T::sheet_metadata(), Some(data))
}

/// Resolves `type_name` through `introspector` and builds its table.
///
/// Fails with [`GridSpecError::UnknownType`](crate::GridSpecError::UnknownType)
/// if the type cannot be resolved.
pub fn build_named<I, D>(
    introspector: &I,
    type_name: &str,
    data: Option<Vec<D>>,
) -> Result<TableSpec<D>>
where
    I: Introspector + ?Sized,
{
    let meta = introspector.introspect(type_name)?;
    Ok(build_table(meta, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnType;
    use crate::kind::DataKind;
    use crate::options::{SheetAnnotation, TableOptions};

    fn field(name: &str, kind: DataKind) -> FieldDescriptor {
        FieldDescriptor::new(name, kind)
    }

    #[test]
    fn explicit_type_wins_over_inference() {
        let column = build_column(
            &field("active", DataKind::Boolean),
            &FieldAnnotation::new().column_type(ColumnType::Dropdown),
        );
        assert_eq!(column.column_type(), ColumnType::Dropdown);
        assert_eq!(column.data(), "active");
    }

    #[test]
    fn data_override_changes_binding_not_header() {
        let annotation = FieldAnnotation::new().data("firstName");
        let field = field("first_name", DataKind::Text);
        assert_eq!(build_column(&field, &annotation).data(), "firstName");
        assert_eq!(header_for(&field, &annotation), "First name");

        let empty = FieldAnnotation::new().data("");
        assert_eq!(build_column(&field, &empty).data(), "first_name");
    }

    #[test]
    fn missing_type_is_inferred() {
        let column = build_column(&field("active", DataKind::Boolean), &FieldAnnotation::new());
        assert_eq!(column.column_type(), ColumnType::Checkbox);

        let column = build_column(&field("price", DataKind::Decimal), &FieldAnnotation::new());
        assert_eq!(column.column_type(), ColumnType::Numeric);

        let column = build_column(&field("tags", DataKind::Other), &FieldAnnotation::new());
        assert_eq!(column.column_type(), ColumnType::Text);
    }

    #[test]
    fn header_uses_title_or_humanized_name() {
        let f = field("firstName", DataKind::Text);
        assert_eq!(header_for(&f, &FieldAnnotation::new()), "First name");
        assert_eq!(header_for(&f, &FieldAnnotation::new().title("")), "First name");
        assert_eq!(
            header_for(&f, &FieldAnnotation::new().title("Given name")),
            "Given name"
        );
    }

    #[test]
    fn headers_and_columns_line_up() {
        let meta = TypeMetadata::new("Order")
            .column("orderId", DataKind::Long, FieldAnnotation::new())
            .field("internalNote", DataKind::Text)
            .column(
                "placedAt",
                DataKind::Instant,
                FieldAnnotation::new().title("Placed"),
            )
            .column(
                "shipped",
                DataKind::Boolean,
                FieldAnnotation::new().column_type(ColumnType::Select),
            );

        let table: TableSpec<()> = build_table(&meta, None);

        assert_eq!(table.col_headers, vec!["Order id", "Placed", "Shipped"]);
        let bound: Vec<&str> = table.columns.iter().map(Column::data).collect();
        assert_eq!(bound, vec!["orderId", "placedAt", "shipped"]);
        let types: Vec<ColumnType> = table.columns.iter().map(Column::column_type).collect();
        assert_eq!(
            types,
            vec![ColumnType::Numeric, ColumnType::Date, ColumnType::Select]
        );
        assert_eq!(build_headers(&meta), table.col_headers);
        assert_eq!(build_columns(&meta), table.columns);
    }

    #[test]
    fn no_participating_fields_gives_empty_table() {
        let meta = TypeMetadata::new("Opaque").field("secret", DataKind::Text);
        let table: TableSpec<()> = build_table(&meta, None);
        assert!(table.col_headers.is_empty());
        assert!(table.columns.is_empty());
        assert_eq!(table.options, TableOptions::default());
        assert!(table.data.is_none());
    }

    #[test]
    fn empty_table_still_maps_options() {
        let meta = TypeMetadata::new("Locked").sheet(SheetAnnotation {
            read_only: Some(true),
            ..Default::default()
        });
        let table: TableSpec<()> = build_table(&meta, None);
        assert!(table.is_empty());
        assert!(table.options.read_only);
    }

    #[test]
    fn data_is_attached_unchanged() {
        let meta = TypeMetadata::new("Row").column("n", DataKind::Integer, FieldAnnotation::new());
        let table = build_table(&meta, Some(vec![3, 1, 2]));
        assert_eq!(table.data, Some(vec![3, 1, 2]));
    }
}
