//! Column schema for list views.
//!
//! Every list DTO declares its sortable columns as `'static` constants, so the
//! frontend can check the value each row produces against the declared kind.

/// Semantic type of a column value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
        }
    }
}

/// One column of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Field name as it appears on the wire (camelCase)
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl ColumnDef {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    /// Numeric columns are right-aligned in tables
    pub fn is_numeric(&self) -> bool {
        self.kind == FieldKind::Number
    }
}

/// Look up a column by its key
pub fn find_column(columns: &'static [ColumnDef], key: &str) -> Option<&'static ColumnDef> {
    columns.iter().find(|c| c.key == key)
}
