//! Aggregate value extraction.

use std::collections::HashMap;

use serde_json::Value;

use crate::model::{AggregateColumnInfo, AggregateEntry, FactTable};

/// Resolves requested aggregate field names against the declared aggregate
/// columns and reads their root-scope values.
///
/// Resolution is by label equality, not column key. If two declared columns
/// share a label, the later declaration wins; this mirrors the reporting
/// engine's historical behavior and is kept as-is. A requested name with no
/// matching label yields no entry at all, while a resolved position whose
/// cell is missing or unpopulated yields an entry with a null value.
pub fn extract_aggregates(
    requested: &[String],
    declared: &[(String, AggregateColumnInfo)],
    root: Option<&FactTable>,
) -> Vec<AggregateEntry> {
    let positions: HashMap<&str, usize> = declared
        .iter()
        .enumerate()
        .map(|(position, (_, info))| (info.label.as_str(), position))
        .collect();

    requested
        .iter()
        .filter_map(|name| {
            let position = *positions.get(name.as_str())?;
            let value = root
                .and_then(|table| table.aggregates.get(position))
                .and_then(|cell| cell.value.clone())
                .unwrap_or(Value::Null);
            Some(AggregateEntry {
                field_name: name.clone(),
                value,
            })
        })
        .collect()
}
