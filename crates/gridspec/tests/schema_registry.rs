//! Integration tests for schema loading and name-based table building.

use std::fs;

use gridspec::{
    build_named, ColumnType, DataKind, FieldAnnotation, GridSpecError, Introspector,
    MetadataRegistry, TableOptions, TableSpec, TypeMetadata,
};
use serde_json::{json, Value};
use tempfile::TempDir;

const PEOPLE_YAML: &str = r#"
types:
  - name: Person
    sheet:
      read_only: true
      min_rows: 5
      class_name: people
    fields:
      - name: firstName
        kind: text
        column: {}
      - name: HTMLProfile
        kind: text
        column:
          type: autocomplete
      - name: salary
        kind: decimal
        column:
          title: ""
      - name: born
        kind: date
        column:
          title: Date of birth
      - name: passwordHash
        kind: text
"#;

#[test]
fn test_build_from_yaml_schema() {
    let registry = MetadataRegistry::from_yaml_str(PEOPLE_YAML).unwrap();
    let table: TableSpec<Value> = build_named(&registry, "Person", None).unwrap();

    assert_eq!(
        table.col_headers,
        vec!["First name", "HTML profile", "Salary", "Date of birth"]
    );
    let columns: Vec<(ColumnType, &str)> = table
        .columns
        .iter()
        .map(|c| (c.column_type(), c.data()))
        .collect();
    assert_eq!(
        columns,
        vec![
            (ColumnType::Text, "firstName"),
            (ColumnType::Autocomplete, "HTMLProfile"),
            (ColumnType::Numeric, "salary"),
            (ColumnType::Date, "born"),
        ]
    );
    assert_eq!(
        table.options,
        TableOptions {
            read_only: true,
            min_rows: 5,
            class_name: Some("people".into()),
            ..TableOptions::default()
        }
    );
}

#[test]
fn test_build_named_attaches_data() {
    let registry = MetadataRegistry::from_yaml_str(PEOPLE_YAML).unwrap();
    let rows = vec![json!({"firstName": "Ada", "salary": 10})];
    let table = build_named(&registry, "Person", Some(rows.clone())).unwrap();
    assert_eq!(table.data, Some(rows));
}

#[test]
fn test_unknown_type_is_not_an_empty_table() {
    let registry = MetadataRegistry::from_yaml_str(PEOPLE_YAML).unwrap();
    let result = build_named::<_, Value>(&registry, "Pet", None);
    match result {
        Err(GridSpecError::UnknownType(name)) => assert_eq!(name, "Pet"),
        other => panic!("expected UnknownType, got {:?}", other),
    }
}

#[test]
fn test_registry_as_dyn_introspector() {
    let registry = MetadataRegistry::from_yaml_str(PEOPLE_YAML).unwrap();
    let introspector: &dyn Introspector = &registry;
    let table: TableSpec<()> = build_named(introspector, "Person", None).unwrap();
    assert_eq!(table.len(), 4);
}

#[test]
fn test_load_yaml_and_json_files() {
    let dir = TempDir::new().unwrap();

    let yaml_path = dir.path().join("people.yaml");
    fs::write(&yaml_path, PEOPLE_YAML).unwrap();

    let json_path = dir.path().join("flags.json");
    fs::write(
        &json_path,
        r#"{"types": [{"name": "Flags", "fields": [{"name": "enabled", "kind": "boolean", "column": {}}]}]}"#,
    )
    .unwrap();

    let mut registry = MetadataRegistry::from_path(&yaml_path).unwrap();
    registry
        .merge(MetadataRegistry::from_path(&json_path).unwrap())
        .unwrap();

    assert_eq!(
        registry.type_names().collect::<Vec<_>>(),
        vec!["Flags", "Person"]
    );

    let flags: TableSpec<()> = build_named(&registry, "Flags", None).unwrap();
    assert_eq!(flags.col_headers, vec!["Enabled"]);
    assert_eq!(flags.columns[0].column_type(), ColumnType::Checkbox);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = MetadataRegistry::from_path(dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(GridSpecError::Io(_))));
}

#[test]
fn test_invalid_json_file_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        MetadataRegistry::from_path(&path),
        Err(GridSpecError::Json(_))
    ));
}

#[test]
fn test_merge_rejects_duplicates() {
    let mut registry = MetadataRegistry::from_yaml_str(PEOPLE_YAML).unwrap();
    let other = MetadataRegistry::from_yaml_str(PEOPLE_YAML).unwrap();
    assert!(matches!(
        registry.merge(other),
        Err(GridSpecError::DuplicateType(name)) if name == "Person"
    ));
}

#[test]
fn test_misspelled_fields_key_is_yaml_error() {
    let yaml = r#"
types:
  - name: Person
    feilds:
      - name: firstName
        kind: text
        column: {}
"#;
    match MetadataRegistry::from_yaml_str(yaml) {
        Err(GridSpecError::Yaml(err)) => assert!(err.to_string().contains("feilds")),
        other => panic!("expected Yaml error, got {:?}", other),
    }
}

#[test]
fn test_misspelled_column_key_is_yaml_error() {
    let yaml = r#"
types:
  - name: Person
    fields:
      - name: firstName
        kind: text
        colum: {}
"#;
    match MetadataRegistry::from_yaml_str(yaml) {
        Err(GridSpecError::Yaml(err)) => assert!(err.to_string().contains("colum")),
        other => panic!("expected Yaml error, got {:?}", other),
    }
}

#[test]
fn test_misspelled_key_in_json_file_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typo.json");
    fs::write(
        &path,
        r#"{"types": [{"name": "Flags", "fields": [{"name": "on", "knd": "boolean"}]}]}"#,
    )
    .unwrap();
    assert!(matches!(
        MetadataRegistry::from_path(&path),
        Err(GridSpecError::Json(_))
    ));
}

#[test]
fn test_schema_data_key_rebinds_column() {
    let yaml = r#"
types:
  - name: Person
    fields:
      - name: first_name
        kind: text
        column:
          data: firstName
"#;
    let registry = MetadataRegistry::from_yaml_str(yaml).unwrap();
    let table: TableSpec<Value> = build_named(&registry, "Person", None).unwrap();
    assert_eq!(table.col_headers, vec!["First name"]);
    assert_eq!(table.columns[0].data(), "firstName");
}

#[test]
fn test_explicit_registration() {
    let mut registry = MetadataRegistry::new();
    registry
        .register(
            TypeMetadata::new("Invoice")
                .column("number", DataKind::Long, FieldAnnotation::new())
                .column(
                    "paid",
                    DataKind::Boolean,
                    FieldAnnotation::new().column_type(ColumnType::Select),
                )
                .field("notes", DataKind::Text),
        )
        .unwrap();

    let table: TableSpec<()> = build_named(&registry, "Invoice", None).unwrap();
    assert_eq!(table.col_headers, vec!["Number", "Paid"]);
    assert_eq!(table.columns[1].column_type(), ColumnType::Select);
}

#[cfg(feature = "macros")]
mod derived {
    use super::*;
    use gridspec::Sheet;

    #[derive(Sheet)]
    #[sheet(context_menu)]
    #[allow(dead_code)]
    struct Ticket {
        #[column]
        opened_at: std::time::SystemTime,
        #[column(title = "Summary")]
        subject: String,
    }

    #[test]
    fn test_register_derived_sheet() {
        let mut registry = MetadataRegistry::new();
        registry.register_sheet::<Ticket>().unwrap();

        let table: TableSpec<()> = build_named(&registry, "Ticket", None).unwrap();
        assert_eq!(table.col_headers, vec!["Opened at", "Summary"]);
        assert_eq!(table.columns[0].column_type(), ColumnType::Date);
        assert!(table.options.context_menu);
    }
}
