//! Declared data kinds and the column type inferred from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::ColumnType;

/// The declared data kind of a field.
///
/// `#[derive(Sheet)]` infers this from the field's Rust type; schema files
/// name it explicitly. Names that are not recognized deserialize to
/// [`DataKind::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    /// Strings and characters.
    Text,
    /// Integers up to 32 bits.
    Integer,
    /// 64-bit and wider integers.
    Long,
    /// Arbitrary-precision and floating point decimals.
    Decimal,
    Boolean,
    /// A calendar date without time.
    Date,
    /// A date-time with a zone or offset.
    DateTime,
    /// A point on the timeline.
    Instant,
    /// Anything else.
    #[default]
    #[serde(other)]
    Other,
}

impl DataKind {
    /// The schema name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::Text => "text",
            DataKind::Integer => "integer",
            DataKind::Long => "long",
            DataKind::Decimal => "decimal",
            DataKind::Boolean => "boolean",
            DataKind::Date => "date",
            DataKind::DateTime => "date_time",
            DataKind::Instant => "instant",
            DataKind::Other => "other",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the column type for a field that has no explicit one.
///
/// | Kind | Column |
/// |------|--------|
/// | `Text` | `Text` |
/// | `Integer`, `Long`, `Decimal` | `Numeric` |
/// | `Boolean` | `Checkbox` |
/// | `Date`, `DateTime`, `Instant` | `Date` |
/// | `Other` | `Text` |
pub fn infer_column_type(kind: DataKind) -> ColumnType {
    match kind {
        DataKind::Text => ColumnType::Text,
        DataKind::Integer | DataKind::Long | DataKind::Decimal => ColumnType::Numeric,
        DataKind::Boolean => ColumnType::Checkbox,
        DataKind::Date | DataKind::DateTime | DataKind::Instant => ColumnType::Date,
        DataKind::Other => ColumnType::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_kinds_infer_numeric() {
        assert_eq!(infer_column_type(DataKind::Integer), ColumnType::Numeric);
        assert_eq!(infer_column_type(DataKind::Long), ColumnType::Numeric);
        assert_eq!(infer_column_type(DataKind::Decimal), ColumnType::Numeric);
    }

    #[test]
    fn temporal_kinds_infer_date() {
        assert_eq!(infer_column_type(DataKind::Date), ColumnType::Date);
        assert_eq!(infer_column_type(DataKind::DateTime), ColumnType::Date);
        assert_eq!(infer_column_type(DataKind::Instant), ColumnType::Date);
    }

    #[test]
    fn boolean_infers_checkbox() {
        assert_eq!(infer_column_type(DataKind::Boolean), ColumnType::Checkbox);
    }

    #[test]
    fn text_and_other_infer_text() {
        assert_eq!(infer_column_type(DataKind::Text), ColumnType::Text);
        assert_eq!(infer_column_type(DataKind::Other), ColumnType::Text);
    }

    #[test]
    fn unknown_kind_name_deserializes_to_other() {
        let kind: DataKind = serde_yaml::from_str("uuid").unwrap();
        assert_eq!(kind, DataKind::Other);
        let kind: DataKind = serde_yaml::from_str("date_time").unwrap();
        assert_eq!(kind, DataKind::DateTime);
    }
}
