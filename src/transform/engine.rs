//! Transformation orchestration.

use crate::error::{ReportError, Result};
use crate::model::{ReportExecution, ReportTable, RowData};
use crate::source::{FetchOutcome, ReportSource};

use super::rows::CellLayout;
use super::{aggregates, columns, groups, rows, TransformRequest};

/// Transforms one report execution result into a UI-ready table.
///
/// Grouped mode is entered if and only if the result declares at least one
/// active grouping; flat mode maps the root scope's rows directly. Pure and
/// infallible: metadata gaps degrade the output shape rather than failing.
pub fn transform(result: &ReportExecution, request: &TransformRequest) -> ReportTable {
    let groupings = &result.groupings_down.groupings;
    let grouped = !groupings.is_empty();

    let columns = columns::build_columns(
        &result.report_extended_metadata,
        result.report_metadata.detail_columns.as_deref(),
        &request.lookups,
        grouped,
    );
    let layout = CellLayout::new(&columns, grouped);

    let aggregates = aggregates::extract_aggregates(
        &request.aggregates,
        &result.report_extended_metadata.aggregate_column_info,
        result.root_table(),
    );

    let row_data = if grouped {
        RowData::Grouped(groups::build_group_tree(result, groupings, &columns, &layout))
    } else {
        let root_rows = result
            .root_table()
            .map(|table| table.rows.as_slice())
            .unwrap_or_default();
        RowData::Flat(
            root_rows
                .iter()
                .enumerate()
                .map(|(index, row)| {
                    rows::map_row(&columns, &layout, &row.data_cells, index.to_string())
                })
                .collect(),
        )
    };

    ReportTable {
        columns,
        aggregates,
        rows: row_data,
        report_link: format!("/{}", result.report_metadata.id),
    }
}

/// Fetches a report by name and transforms it.
///
/// The not-found outcome short-circuits to [`ReportError::NotFound`] before
/// any transformation work runs, keeping it observably distinct from a
/// malformed payload.
pub async fn run(
    source: &dyn ReportSource,
    report_name: &str,
    request: &TransformRequest,
) -> Result<ReportTable> {
    match source.fetch_report(report_name).await? {
        FetchOutcome::NotFound => Err(ReportError::NotFound),
        FetchOutcome::Found(result) => Ok(transform(&result, request)),
    }
}
