// src/model/table.rs
use serde::Serialize;
use serde_json::Value;

/// One derived column of the output table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub label: String,
    /// The key this column reads from each row record. For link columns this
    /// is the link key (`<displayField>Link`), not the display key.
    pub field_name: String,
    #[serde(flatten)]
    pub kind: ColumnKind,
}

impl Column {
    /// Plain text column reading `field_name` verbatim.
    pub fn text(label: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field_name: field_name.into(),
            kind: ColumnKind::Text,
        }
    }

    /// Lookup column: displays `display_field`, links through
    /// `<display_field>Link`.
    pub fn link(label: impl Into<String>, display_field: impl Into<String>) -> Self {
        let display_field = display_field.into();
        Self {
            label: label.into(),
            field_name: format!("{display_field}Link"),
            kind: ColumnKind::Link { display_field },
        }
    }

    /// The record key holding this column's display value.
    pub fn display_field(&self) -> &str {
        match &self.kind {
            ColumnKind::Text => &self.field_name,
            ColumnKind::Link { display_field } => display_field,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self.kind, ColumnKind::Link { .. })
    }
}

/// Column rendering kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ColumnKind {
    Text,
    Link {
        #[serde(rename = "linkDisplayField")]
        display_field: String,
    },
}

/// One extracted aggregate value for a requested field name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateEntry {
    pub field_name: String,
    /// JSON null when the position resolved but carried no value.
    pub value: Value,
}

/// One mapped output row: a unique id within its scope plus a field-keyed
/// record of display values (and `…Link` targets for lookup columns).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RowRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

impl RowRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: serde_json::Map::new(),
        }
    }

    /// Value recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// One group of the two-level tree.
///
/// `groupLabel` matches the synthetic grouping column's field name, so tree
/// renderers pick the group's label up through the same column as its
/// children's cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    pub id: String,
    pub group_label: String,
    pub children: Vec<RowRecord>,
}

/// Row data of the output table, flat or grouped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RowData {
    Flat(Vec<RowRecord>),
    Grouped(Vec<GroupNode>),
}

impl RowData {
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }

    pub fn as_flat(&self) -> Option<&[RowRecord]> {
        match self {
            Self::Flat(rows) => Some(rows),
            Self::Grouped(_) => None,
        }
    }

    pub fn as_grouped(&self) -> Option<&[GroupNode]> {
        match self {
            Self::Grouped(nodes) => Some(nodes),
            Self::Flat(_) => None,
        }
    }
}

/// The complete UI-ready table for one report execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTable {
    pub columns: Vec<Column>,
    pub aggregates: Vec<AggregateEntry>,
    pub rows: RowData,
    /// Canonical link to the report itself (`"/" + report id`).
    pub report_link: String,
}
