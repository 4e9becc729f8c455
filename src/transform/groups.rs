//! Group tree assembly.

use crate::model::{Column, GroupNode, Grouping, ReportExecution};

use super::rows::{map_row, CellLayout};

/// Builds one [`GroupNode`] per declared grouping, in declared order.
///
/// Each grouping's rows come from the fact table at `"<groupKey>!T"`; an
/// absent fact table still produces a node, with an empty child list. Child
/// ids are scope-qualified (`"<groupKey>-<rowIndex>"`) so they stay unique
/// across the whole tree. No sorting or filtering is applied.
pub fn build_group_tree(
    result: &ReportExecution,
    groupings: &[Grouping],
    columns: &[Column],
    layout: &CellLayout,
) -> Vec<GroupNode> {
    groupings
        .iter()
        .map(|grouping| {
            let rows = result
                .group_table(&grouping.key)
                .map(|table| table.rows.as_slice())
                .unwrap_or_default();

            let children = rows
                .iter()
                .enumerate()
                .map(|(index, row)| {
                    let id = format!("{}-{}", grouping.key, index);
                    map_row(columns, layout, &row.data_cells, id)
                })
                .collect();

            GroupNode {
                id: grouping.key.clone(),
                group_label: grouping.label.clone(),
                children,
            }
        })
        .collect()
}
