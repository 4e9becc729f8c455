//! Column specification derivation.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::model::{Column, ReportExtendedMetadata};

/// Field name of the synthetic grouping column. It occupies index 0 of the
/// column list in grouped mode and consumes no positional data cell.
pub const GROUP_LABEL_FIELD: &str = "groupLabel";

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w\S*").expect("valid word pattern"));

/// Derives the ordered column specification from report metadata.
///
/// The effective order is `detail_order` when the report declares one, else
/// the metadata's own key order. Keys without a metadata entry are skipped
/// silently. Keys in `lookups` become link columns reading the metadata's
/// stable field name; every other key becomes a text column whose field name
/// is the column key verbatim (dotted compound keys included, since row
/// mapping keys records by it).
///
/// In grouped mode a synthetic text column is prepended, labeled with the
/// title-cased label of the first declared grouping column.
pub fn build_columns(
    metadata: &ReportExtendedMetadata,
    detail_order: Option<&[String]>,
    lookups: &HashSet<String>,
    grouped: bool,
) -> Vec<Column> {
    let declared: Vec<&str> = match detail_order {
        Some(keys) => keys.iter().map(String::as_str).collect(),
        None => metadata
            .detail_column_info
            .iter()
            .map(|(key, _)| key.as_str())
            .collect(),
    };

    let mut columns = Vec::with_capacity(declared.len() + usize::from(grouped));

    if grouped {
        let label = metadata
            .grouping_column_info
            .first()
            .map(|(_, info)| title_case(&info.label))
            .unwrap_or_default();
        columns.push(Column::text(label, GROUP_LABEL_FIELD));
    }

    for key in declared {
        let Some(info) = metadata.detail_column(key) else {
            continue;
        };
        if lookups.contains(key) {
            columns.push(Column::link(info.label.clone(), info.name.clone()));
        } else {
            columns.push(Column::text(info.label.clone(), key));
        }
    }

    columns
}

/// Display casing for the synthetic group column label: first letter of each
/// word uppercased, remainder lowercased. Word boundaries are whitespace
/// only; locale-naive, adequate for ASCII labels.
pub(crate) fn title_case(label: &str) -> String {
    WORD.replace_all(label, |caps: &Captures<'_>| {
        let mut chars = caps[0].chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    })
    .into_owned()
}
