//! Row mapping: positional data cells onto the column specification.

use serde_json::Value;

use crate::model::{Cell, Column, RowRecord};

/// Precomputed alignment between the column specification and a row's
/// positional data cells.
///
/// The synthetic grouping column occupies index 0 of the column list but
/// consumes no data cell, so column index and cell index differ by one in
/// grouped mode. Computing the pairing once per column list keeps the
/// per-row mapping free of cursor arithmetic.
#[derive(Debug, Clone)]
pub struct CellLayout {
    /// (column index, data cell index), in column order.
    slots: Vec<(usize, usize)>,
}

impl CellLayout {
    pub fn new(columns: &[Column], has_group_column: bool) -> Self {
        let skip = usize::from(has_group_column);
        let slots = columns
            .iter()
            .enumerate()
            .skip(skip)
            .enumerate()
            .map(|(cell_index, (column_index, _))| (column_index, cell_index))
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[(usize, usize)] {
        &self.slots
    }
}

/// Maps one row's data cells onto the column specification.
///
/// Every non-synthetic column contributes its display field, with JSON null
/// standing in for a null or missing cell; rows shorter than the column list
/// simply leave their trailing fields null. Link columns additionally
/// contribute `<displayField>Link` = `"/" + value` when the cell carries a
/// string raw value.
pub fn map_row(
    columns: &[Column],
    layout: &CellLayout,
    cells: &[Cell],
    id: impl Into<String>,
) -> RowRecord {
    let mut record = RowRecord::new(id);

    for &(column_index, cell_index) in layout.slots() {
        let column = &columns[column_index];
        let cell = cells.get(cell_index);

        let label = cell
            .and_then(|cell| cell.label.clone())
            .map(Value::String)
            .unwrap_or(Value::Null);
        record
            .fields
            .insert(column.display_field().to_owned(), label);

        if column.is_link() {
            let target = cell
                .and_then(|cell| cell.value.as_ref())
                .and_then(|value| value.as_str());
            if let Some(target) = target {
                record
                    .fields
                    .insert(column.field_name.clone(), Value::String(format!("/{target}")));
            }
        }
    }

    record
}
