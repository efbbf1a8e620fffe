//! The table specification handed to a grid renderer.

use serde::Serialize;
use serde_json::Value;

use crate::column::Column;
use crate::options::TableOptions;

/// A complete grid specification.
///
/// `col_headers[i]` is the label of `columns[i]`; both always have the same
/// length. Serializes as a flat settings object:
///
/// ```json
/// {
///   "colHeaders": ["First name", "Age"],
///   "columns": [{"type": "text", "data": "firstName"}, {"type": "numeric", "data": "age"}],
///   "allowEmpty": true,
///   "readOnly": false,
///   "data": [...]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSpec<D> {
    pub col_headers: Vec<String>,
    pub columns: Vec<Column>,
    #[serde(flatten)]
    pub options: TableOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<D>>,
}

impl<D> TableSpec<D> {
    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Replaces the attached data, which may be of a different record type.
    pub fn with_data<E>(self, data: Vec<E>) -> TableSpec<E> {
        TableSpec {
            col_headers: self.col_headers,
            columns: self.columns,
            options: self.options,
            data: Some(data),
        }
    }

    /// Headers paired with their columns.
    pub fn headed_columns(&self) -> impl Iterator<Item = (&str, &Column)> + '_ {
        self.col_headers
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }
}

impl<D: Serialize> TableSpec<D> {
    /// Serializes the table into a JSON settings object.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
