//! The report result transformation engine.
//!
//! Pure, synchronous transformation of one
//! [`ReportExecution`](crate::model::ReportExecution) into a
//! [`ReportTable`](crate::model::ReportTable):
//!
//! ```text
//! ReportExecution ─▶ build_columns ─▶ extract_aggregates ─▶ map rows
//!                                                            │
//!                             flat: root scope rows ◀────────┤
//!                          grouped: one node per grouping ◀──┘
//! ```
//!
//! Every invocation derives its own column list and cell layout from the
//! input; nothing is shared or cached across invocations, so concurrent
//! transformations are safe by construction.
//!
//! Metadata gaps never fail a transformation. A declared column key without
//! metadata is skipped, an unresolved aggregate name produces no entry, and a
//! grouping without a fact table produces an empty group.

mod aggregates;
mod columns;
mod engine;
mod groups;
mod rows;

pub use aggregates::extract_aggregates;
pub use columns::{build_columns, GROUP_LABEL_FIELD};
pub use engine::{run, transform};
pub use groups::build_group_tree;
pub use rows::{map_row, CellLayout};

use std::collections::HashSet;

/// Caller-side parameters for one transformation.
///
/// Both lists arrive from callers as comma-separated strings; parsing them
/// once here means lookup membership is a plain set check at column-building
/// time instead of a repeated substring scan of the raw list.
#[derive(Debug, Clone, Default)]
pub struct TransformRequest {
    /// Aggregate field names to extract, in the caller's order.
    pub aggregates: Vec<String>,
    /// Detail column keys to materialize as lookup (link) columns.
    pub lookups: HashSet<String>,
}

impl TransformRequest {
    /// Parses comma-separated aggregate and lookup lists. Entries are
    /// trimmed; empty entries are dropped.
    pub fn from_lists(aggregates: &str, lookups: &str) -> Self {
        Self {
            aggregates: split_list(aggregates).map(str::to_owned).collect(),
            lookups: split_list(lookups).map(str::to_owned).collect(),
        }
    }
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}
