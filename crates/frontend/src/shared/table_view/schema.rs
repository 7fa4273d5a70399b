//! Typed cell values and the row contract of the table view.

use crate::shared::components::table::number_format::format_decimal;
use crate::shared::date_utils::format_date;
use chrono::NaiveDateTime;
use contracts::shared::table_schema::{ColumnDef, FieldKind};
use std::borrow::Cow;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Value of one column of one row
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
    Date(NaiveDateTime),
    Bool(bool),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Semantic kind of the value; `None` for nulls
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Self::Null => None,
            Self::Number(_) => Some(FieldKind::Number),
            Self::Text(_) => Some(FieldKind::Text),
            Self::Date(_) => Some(FieldKind::Date),
            Self::Bool(_) => Some(FieldKind::Boolean),
        }
    }

    /// String representation used for lexicographic comparison
    pub fn sort_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Date(d) => Cow::Owned(d.format("%Y-%m-%d %H:%M:%S").to_string()),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }

    /// Text shown in a table cell. Nulls render as `-`.
    pub fn display(&self) -> String {
        match self {
            Self::Null => "-".to_string(),
            Self::Number(n) => format_decimal(*n),
            Self::Text(s) => s.clone(),
            Self::Date(d) => format_date(d),
            Self::Bool(b) => (if *b { "Yes" } else { "No" }).to_string(),
        }
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Null, Self::Number)
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Null, |s| Self::Text(s.to_string()))
    }
}

impl From<Option<NaiveDateTime>> for CellValue {
    fn from(value: Option<NaiveDateTime>) -> Self {
        value.map_or(Self::Null, Self::Date)
    }
}

impl From<Option<bool>> for CellValue {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Null, Self::Bool)
    }
}

/// A record shown in a table view.
///
/// `columns` declares the schema; `cell` must return a value of the declared
/// kind (or `Null`) for every column key.
pub trait ViewRow: Clone + Debug + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Display + Debug + Send + Sync + 'static;

    fn columns() -> &'static [ColumnDef];

    fn row_id(&self) -> Self::Id;

    /// Designated text field matched by the search box
    fn search_text(&self) -> Option<&str>;

    fn cell(&self, key: &str) -> CellValue;

    /// Name used when reporting errors about this row
    fn label(&self) -> String {
        match self.search_text() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => format!("#{}", self.row_id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::test_support::{fruit, Fruit};
    use chrono::NaiveDate;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.display(), "-");
        assert_eq!(CellValue::Number(52.0).display(), "52");
        assert_eq!(CellValue::Number(1.456).display(), "1.46");
        assert_eq!(CellValue::Bool(true).display(), "Yes");
        let d = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(CellValue::Date(d).display(), "15/03/2024");
        assert_eq!(CellValue::Date(d).sort_text(), "2024-03-15 14:02:26");
    }

    #[test]
    fn test_label_falls_back_to_id() {
        assert_eq!(fruit(4, Some("Kiwi"), None).label(), "Kiwi");
        assert_eq!(fruit(4, None, None).label(), "#4");
    }

    #[test]
    fn test_cells_match_declared_kinds() {
        let row = fruit(1, Some("Apple"), Some(52.0));
        for column in Fruit::columns() {
            let value = row.cell(column.key);
            assert_eq!(value.kind(), Some(column.kind), "column {}", column.key);
        }
    }
}
