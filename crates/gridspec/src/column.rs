//! Column variants for the grid specification.
//!
//! [`ColumnType`] is the closed set of editors a grid column can use.
//! [`Column`] holds one record per variant; each record binds the column to
//! a field through `data` and carries the variant's own settings. This crate
//! only ever populates `data`. The remaining settings are left for callers
//! that want to refine a generated column.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The editor/renderer kind of a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ColumnType {
    /// Plain text (the fallback for anything unrecognized).
    #[default]
    Text,
    Numeric,
    Date,
    Time,
    Checkbox,
    Select,
    Dropdown,
    Autocomplete,
    Password,
    /// A nested grid rendered inside the cell editor.
    Handsontable,
}

impl ColumnType {
    /// All variants, in declaration order.
    pub const ALL: [ColumnType; 10] = [
        ColumnType::Text,
        ColumnType::Numeric,
        ColumnType::Date,
        ColumnType::Time,
        ColumnType::Checkbox,
        ColumnType::Select,
        ColumnType::Dropdown,
        ColumnType::Autocomplete,
        ColumnType::Password,
        ColumnType::Handsontable,
    ];

    /// Parses a variant name, case-insensitively.
    ///
    /// Unknown names fall back to [`ColumnType::Text`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => ColumnType::Text,
            "numeric" => ColumnType::Numeric,
            "date" => ColumnType::Date,
            "time" => ColumnType::Time,
            "checkbox" => ColumnType::Checkbox,
            "select" => ColumnType::Select,
            "dropdown" => ColumnType::Dropdown,
            "autocomplete" => ColumnType::Autocomplete,
            "password" => ColumnType::Password,
            "handsontable" | "nested" | "nested_table" => ColumnType::Handsontable,
            other => {
                log::warn!("unknown column type '{}', using text", other);
                ColumnType::Text
            }
        }
    }

    /// The wire name of this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Numeric => "numeric",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::Checkbox => "checkbox",
            ColumnType::Select => "select",
            ColumnType::Dropdown => "dropdown",
            ColumnType::Autocomplete => "autocomplete",
            ColumnType::Password => "password",
            ColumnType::Handsontable => "handsontable",
        }
    }
}

impl From<String> for ColumnType {
    fn from(name: String) -> Self {
        ColumnType::from_name(&name)
    }
}

impl From<&str> for ColumnType {
    fn from(name: &str) -> Self {
        ColumnType::from_name(name)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain text column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColumn {
    pub data: String,
}

/// Number display pattern for numeric columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericFormat {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
}

/// Numeric column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericColumn {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_format: Option<NumericFormat>,
}

/// Date picker column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateColumn {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_format: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_date: Option<String>,
}

/// Time column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeColumn {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_format: Option<bool>,
}

/// Checkbox column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxColumn {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_template: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unchecked_template: Option<Value>,
}

/// Native select column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectColumn {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_options: Option<Vec<String>>,
}

/// Dropdown column: autocomplete restricted to its source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownColumn {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// Autocomplete column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteColumn {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<bool>,
}

/// Masked password column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordColumn {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_length: Option<usize>,
}

/// Column whose editor is a nested grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandsontableColumn {
    pub data: String,
    /// Settings object of the nested grid, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handsontable: Option<Value>,
}

/// A column definition, one record per [`ColumnType`].
///
/// Serializes as the grid's column object, e.g.
/// `{"type": "numeric", "data": "age"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Column {
    Text(TextColumn),
    Numeric(NumericColumn),
    Date(DateColumn),
    Time(TimeColumn),
    Checkbox(CheckboxColumn),
    Select(SelectColumn),
    Dropdown(DropdownColumn),
    Autocomplete(AutocompleteColumn),
    Password(PasswordColumn),
    Handsontable(HandsontableColumn),
}

impl Column {
    /// Creates a column of the given type bound to `data`.
    pub fn new(column_type: ColumnType, data: impl Into<String>) -> Self {
        let data = data.into();
        match column_type {
            ColumnType::Text => Column::Text(TextColumn { data }),
            ColumnType::Numeric => Column::Numeric(NumericColumn {
                data,
                ..Default::default()
            }),
            ColumnType::Date => Column::Date(DateColumn {
                data,
                ..Default::default()
            }),
            ColumnType::Time => Column::Time(TimeColumn {
                data,
                ..Default::default()
            }),
            ColumnType::Checkbox => Column::Checkbox(CheckboxColumn {
                data,
                ..Default::default()
            }),
            ColumnType::Select => Column::Select(SelectColumn {
                data,
                ..Default::default()
            }),
            ColumnType::Dropdown => Column::Dropdown(DropdownColumn {
                data,
                ..Default::default()
            }),
            ColumnType::Autocomplete => Column::Autocomplete(AutocompleteColumn {
                data,
                ..Default::default()
            }),
            ColumnType::Password => Column::Password(PasswordColumn {
                data,
                ..Default::default()
            }),
            ColumnType::Handsontable => Column::Handsontable(HandsontableColumn {
                data,
                ..Default::default()
            }),
        }
    }

    /// The variant tag of this column.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Text(_) => ColumnType::Text,
            Column::Numeric(_) => ColumnType::Numeric,
            Column::Date(_) => ColumnType::Date,
            Column::Time(_) => ColumnType::Time,
            Column::Checkbox(_) => ColumnType::Checkbox,
            Column::Select(_) => ColumnType::Select,
            Column::Dropdown(_) => ColumnType::Dropdown,
            Column::Autocomplete(_) => ColumnType::Autocomplete,
            Column::Password(_) => ColumnType::Password,
            Column::Handsontable(_) => ColumnType::Handsontable,
        }
    }

    /// The field this column reads from.
    pub fn data(&self) -> &str {
        match self {
            Column::Text(c) => &c.data,
            Column::Numeric(c) => &c.data,
            Column::Date(c) => &c.data,
            Column::Time(c) => &c.data,
            Column::Checkbox(c) => &c.data,
            Column::Select(c) => &c.data,
            Column::Dropdown(c) => &c.data,
            Column::Autocomplete(c) => &c.data,
            Column::Password(c) => &c.data,
            Column::Handsontable(c) => &c.data,
        }
    }
}
