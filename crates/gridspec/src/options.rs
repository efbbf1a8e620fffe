//! Table-wide settings.
//!
//! A type may carry a [`SheetAnnotation`] (from `#[sheet(...)]` or the
//! `sheet:` block of a schema file). Every setting in it is optional.
//! [`map_options`] turns it into a fully populated [`TableOptions`], copying
//! each specified setting as is and using the default for the rest.
//!
//! | Setting | Default |
//! |---------|---------|
//! | `allow_empty` | `true` |
//! | `allow_html` | `false` |
//! | `allow_insert_column` | `true` |
//! | `allow_insert_row` | `true` |
//! | `allow_invalid` | `true` |
//! | `allow_remove_column` | `true` |
//! | `allow_remove_row` | `true` |
//! | `auto_column_size` | `true` |
//! | `auto_row_size` | `false` |
//! | `auto_wrap_col` | `false` |
//! | `auto_wrap_row` | `false` |
//! | `checked_template` | unset |
//! | `class_name` | unset |
//! | `column_header_height` | unset |
//! | `column_sorting` | `false` |
//! | `context_menu` | `false` |
//! | `min_rows` | `0` |
//! | `read_only` | `false` |
//! | `row_headers` | `false` |
//!
//! Settings are independent. Combinations such as `read_only` together with
//! `allow_insert_row` are passed through unchanged.

use serde::{Deserialize, Serialize};

/// Type-level sheet settings as declared. `None` means "not specified".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetAnnotation {
    pub allow_empty: Option<bool>,
    pub allow_html: Option<bool>,
    pub allow_insert_column: Option<bool>,
    pub allow_insert_row: Option<bool>,
    pub allow_invalid: Option<bool>,
    pub allow_remove_column: Option<bool>,
    pub allow_remove_row: Option<bool>,
    pub auto_column_size: Option<bool>,
    pub auto_row_size: Option<bool>,
    pub auto_wrap_col: Option<bool>,
    pub auto_wrap_row: Option<bool>,
    pub checked_template: Option<String>,
    pub class_name: Option<String>,
    pub column_header_height: Option<u32>,
    pub column_sorting: Option<bool>,
    pub context_menu: Option<bool>,
    pub min_rows: Option<u32>,
    pub read_only: Option<bool>,
    pub row_headers: Option<bool>,
}

/// The options block of a table specification.
///
/// Serializes with the grid's camelCase setting names; unset optional
/// values are omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    pub allow_empty: bool,
    pub allow_html: bool,
    pub allow_insert_column: bool,
    pub allow_insert_row: bool,
    pub allow_invalid: bool,
    pub allow_remove_column: bool,
    pub allow_remove_row: bool,
    pub auto_column_size: bool,
    pub auto_row_size: bool,
    pub auto_wrap_col: bool,
    pub auto_wrap_row: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_header_height: Option<u32>,
    pub column_sorting: bool,
    pub context_menu: bool,
    pub min_rows: u32,
    pub read_only: bool,
    pub row_headers: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            allow_empty: true,
            allow_html: false,
            allow_insert_column: true,
            allow_insert_row: true,
            allow_invalid: true,
            allow_remove_column: true,
            allow_remove_row: true,
            auto_column_size: true,
            auto_row_size: false,
            auto_wrap_col: false,
            auto_wrap_row: false,
            checked_template: None,
            class_name: None,
            column_header_height: None,
            column_sorting: false,
            context_menu: false,
            min_rows: 0,
            read_only: false,
            row_headers: false,
        }
    }
}

/// Maps a type annotation, if any, to the table's options block.
pub fn map_options(annotation: Option<&SheetAnnotation>) -> TableOptions {
    let defaults = TableOptions::default();
    let Some(sheet) = annotation else {
        return defaults;
    };

    TableOptions {
        allow_empty: sheet.allow_empty.unwrap_or(defaults.allow_empty),
        allow_html: sheet.allow_html.unwrap_or(defaults.allow_html),
        allow_insert_column: sheet
            .allow_insert_column
            .unwrap_or(defaults.allow_insert_column),
        allow_insert_row: sheet.allow_insert_row.unwrap_or(defaults.allow_insert_row),
        allow_invalid: sheet.allow_invalid.unwrap_or(defaults.allow_invalid),
        allow_remove_column: sheet
            .allow_remove_column
            .unwrap_or(defaults.allow_remove_column),
        allow_remove_row: sheet.allow_remove_row.unwrap_or(defaults.allow_remove_row),
        auto_column_size: sheet.auto_column_size.unwrap_or(defaults.auto_column_size),
        auto_row_size: sheet.auto_row_size.unwrap_or(defaults.auto_row_size),
        auto_wrap_col: sheet.auto_wrap_col.unwrap_or(defaults.auto_wrap_col),
        auto_wrap_row: sheet.auto_wrap_row.unwrap_or(defaults.auto_wrap_row),
        checked_template: sheet
            .checked_template
            .clone()
            .or(defaults.checked_template),
        class_name: sheet.class_name.clone().or(defaults.class_name),
        column_header_height: sheet
            .column_header_height
            .or(defaults.column_header_height),
        column_sorting: sheet.column_sorting.unwrap_or(defaults.column_sorting),
        context_menu: sheet.context_menu.unwrap_or(defaults.context_menu),
        min_rows: sheet.min_rows.unwrap_or(defaults.min_rows),
        read_only: sheet.read_only.unwrap_or(defaults.read_only),
        row_headers: sheet.row_headers.unwrap_or(defaults.row_headers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_annotation_yields_defaults() {
        assert_eq!(map_options(None), TableOptions::default());
    }

    #[test]
    fn empty_annotation_yields_defaults() {
        assert_eq!(
            map_options(Some(&SheetAnnotation::default())),
            TableOptions::default()
        );
    }

    #[test]
    fn read_only_alone_leaves_everything_else_at_default() {
        let sheet = SheetAnnotation {
            read_only: Some(true),
            ..Default::default()
        };
        let expected = TableOptions {
            read_only: true,
            ..TableOptions::default()
        };
        assert_eq!(map_options(Some(&sheet)), expected);
    }

    #[test]
    fn conflicting_settings_are_kept() {
        let sheet = SheetAnnotation {
            read_only: Some(true),
            allow_insert_row: Some(true),
            allow_remove_row: Some(true),
            ..Default::default()
        };
        let options = map_options(Some(&sheet));
        assert!(options.read_only);
        assert!(options.allow_insert_row);
        assert!(options.allow_remove_row);
    }

    #[test]
    fn every_setting_is_copied() {
        let sheet = SheetAnnotation {
            allow_empty: Some(false),
            allow_html: Some(true),
            allow_insert_column: Some(false),
            allow_insert_row: Some(false),
            allow_invalid: Some(false),
            allow_remove_column: Some(false),
            allow_remove_row: Some(false),
            auto_column_size: Some(false),
            auto_row_size: Some(true),
            auto_wrap_col: Some(true),
            auto_wrap_row: Some(true),
            checked_template: Some("yes".into()),
            class_name: Some("htCenter".into()),
            column_header_height: Some(40),
            column_sorting: Some(true),
            context_menu: Some(true),
            min_rows: Some(10),
            read_only: Some(true),
            row_headers: Some(true),
        };
        let options = map_options(Some(&sheet));
        assert_eq!(
            options,
            TableOptions {
                allow_empty: false,
                allow_html: true,
                allow_insert_column: false,
                allow_insert_row: false,
                allow_invalid: false,
                allow_remove_column: false,
                allow_remove_row: false,
                auto_column_size: false,
                auto_row_size: true,
                auto_wrap_col: true,
                auto_wrap_row: true,
                checked_template: Some("yes".into()),
                class_name: Some("htCenter".into()),
                column_header_height: Some(40),
                column_sorting: true,
                context_menu: true,
                min_rows: 10,
                read_only: true,
                row_headers: true,
            }
        );
    }

    #[test]
    fn options_serialize_in_camel_case() {
        let value = serde_json::to_value(TableOptions::default()).unwrap();
        assert_eq!(value["allowInsertRow"], json!(true));
        assert_eq!(value["minRows"], json!(0));
        assert_eq!(value["readOnly"], json!(false));
        assert!(value.get("className").is_none());
        assert!(value.get("columnHeaderHeight").is_none());
    }

    #[test]
    fn annotation_rejects_unknown_settings() {
        let result: std::result::Result<SheetAnnotation, _> =
            serde_yaml::from_str("read_only: true\ncol_headers: true");
        assert!(result.is_err());
    }
}
