//! Input types for the raw report execution result.
//!
//! These types mirror the reporting engine's response shape field for field
//! (`reportMetadata`, `reportExtendedMetadata`, `groupingsDown`, `factMap`).
//! The metadata maps are deserialized into ordered entry vectors rather than
//! hash maps: their document order is declaration order, which drives both
//! the column fallback order and aggregate positions.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Scope key of the root (ungrouped) fact table.
pub const ROOT_SCOPE: &str = "T!T";

/// One report execution result, as returned by the reporting engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExecution {
    pub report_metadata: ReportMetadata,
    pub report_extended_metadata: ReportExtendedMetadata,
    #[serde(default)]
    pub groupings_down: GroupingsDown,
    #[serde(default)]
    pub fact_map: HashMap<String, FactTable>,
}

impl ReportExecution {
    /// Fact table for the root scope, holding the ungrouped rows and the
    /// report-level aggregate values.
    pub fn root_table(&self) -> Option<&FactTable> {
        self.fact_map.get(ROOT_SCOPE)
    }

    /// Fact table for one grouping's scope (`"<groupKey>!T"`).
    pub fn group_table(&self, group_key: &str) -> Option<&FactTable> {
        self.fact_map.get(&format!("{group_key}!T"))
    }
}

/// Report identity and the declared column display order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub id: String,
    /// Ordered detail column keys. Absent means metadata key order applies.
    #[serde(default)]
    pub detail_columns: Option<Vec<String>>,
}

/// Column-level metadata, keyed by column key, in declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExtendedMetadata {
    #[serde(default, deserialize_with = "ordered_map")]
    pub detail_column_info: Vec<(String, DetailColumnInfo)>,
    #[serde(default, deserialize_with = "ordered_map")]
    pub grouping_column_info: Vec<(String, GroupingColumnInfo)>,
    /// Declaration order here defines the positions of the per-scope
    /// aggregate values.
    #[serde(default, deserialize_with = "ordered_map")]
    pub aggregate_column_info: Vec<(String, AggregateColumnInfo)>,
}

impl ReportExtendedMetadata {
    /// Metadata entry for one detail column key, if declared.
    pub fn detail_column(&self, key: &str) -> Option<&DetailColumnInfo> {
        self.detail_column_info
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, info)| info)
    }
}

/// Declared detail column: display label plus the stable field name used for
/// lookup columns.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailColumnInfo {
    pub label: String,
    pub name: String,
}

/// Declared grouping column; only the label is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupingColumnInfo {
    pub label: String,
}

/// Declared aggregate column; resolution is by label (see
/// `transform::extract_aggregates`).
#[derive(Debug, Clone, Deserialize)]
pub struct AggregateColumnInfo {
    pub label: String,
}

/// Active row groupings, in declared order. Empty means flat mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupingsDown {
    #[serde(default)]
    pub groupings: Vec<Grouping>,
}

/// One active grouping: the key selects its fact table, the label is shown
/// on its group node.
#[derive(Debug, Clone, Deserialize)]
pub struct Grouping {
    pub key: String,
    pub label: String,
}

/// Per-scope container of aggregate values and rows.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactTable {
    /// Ordered, positionally aligned with `aggregateColumnInfo`.
    #[serde(default)]
    pub aggregates: Vec<Cell>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// One row of positional data cells, aligned with the declared detail column
/// order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    #[serde(default)]
    pub data_cells: Vec<Cell>,
}

/// One data or aggregate cell: a display label plus an optional raw value.
///
/// The raw value is only consumed for lookup columns (as a link identifier)
/// and for aggregate cells; elsewhere it is carried but ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

/// Deserializes a JSON object into an entry vector, preserving document
/// order. `HashMap` would destroy the declaration order the engine depends
/// on.
fn ordered_map<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedMapVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
}
