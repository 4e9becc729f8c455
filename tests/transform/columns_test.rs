#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use factgrid::model::{ColumnKind, ReportExtendedMetadata};
    use factgrid::transform::{build_columns, GROUP_LABEL_FIELD};
    use serde_json::json;

    fn metadata() -> ReportExtendedMetadata {
        serde_json::from_value(json!({
            "detailColumnInfo": {
                "OPPORTUNITY_NAME": { "label": "Opportunity Name", "name": "Name" },
                "AMOUNT": { "label": "Amount", "name": "Amount" },
                "Opportunity.Owner": { "label": "Opportunity Owner", "name": "Owner" }
            },
            "groupingColumnInfo": {
                "STAGE_NAME": { "label": "stage NAME" }
            }
        }))
        .expect("valid metadata")
    }

    fn keys(order: &[&str]) -> Vec<String> {
        order.iter().map(|key| (*key).to_string()).collect()
    }

    #[test]
    fn test_order_follows_declared_detail_columns() {
        let order = keys(&["AMOUNT", "OPPORTUNITY_NAME"]);
        let columns = build_columns(&metadata(), Some(order.as_slice()), &HashSet::new(), false);

        let fields: Vec<&str> = columns.iter().map(|c| c.field_name.as_str()).collect();
        assert_eq!(fields, vec!["AMOUNT", "OPPORTUNITY_NAME"]);
        assert_eq!(columns[0].label, "Amount");
        assert_eq!(columns[1].label, "Opportunity Name");
    }

    #[test]
    fn test_order_falls_back_to_metadata_key_order() {
        let columns = build_columns(&metadata(), None, &HashSet::new(), false);

        let fields: Vec<&str> = columns.iter().map(|c| c.field_name.as_str()).collect();
        assert_eq!(
            fields,
            vec!["OPPORTUNITY_NAME", "AMOUNT", "Opportunity.Owner"]
        );
    }

    #[test]
    fn test_missing_metadata_key_is_skipped() {
        let order = keys(&["OPPORTUNITY_NAME", "UNKNOWN_COLUMN", "AMOUNT"]);
        let columns = build_columns(&metadata(), Some(order.as_slice()), &HashSet::new(), false);

        let fields: Vec<&str> = columns.iter().map(|c| c.field_name.as_str()).collect();
        assert_eq!(fields, vec!["OPPORTUNITY_NAME", "AMOUNT"]);
    }

    #[test]
    fn test_lookup_key_emits_link_column() {
        let order = keys(&["Opportunity.Owner"]);
        let lookups: HashSet<String> = ["Opportunity.Owner".to_string()].into();
        let columns = build_columns(&metadata(), Some(order.as_slice()), &lookups, false);

        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].field_name, "OwnerLink");
        assert_eq!(columns[0].display_field(), "Owner");
        assert_eq!(
            columns[0].kind,
            ColumnKind::Link {
                display_field: "Owner".to_string()
            }
        );
    }

    #[test]
    fn test_dotted_key_preserved_verbatim_when_not_a_lookup() {
        let order = keys(&["Opportunity.Owner"]);
        let columns = build_columns(&metadata(), Some(order.as_slice()), &HashSet::new(), false);

        assert_eq!(columns[0].field_name, "Opportunity.Owner");
        assert_eq!(columns[0].kind, ColumnKind::Text);
    }

    #[test]
    fn test_grouped_mode_prepends_group_label_column() {
        let columns = build_columns(&metadata(), None, &HashSet::new(), true);

        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0].field_name, GROUP_LABEL_FIELD);
        assert_eq!(columns[0].label, "Stage Name");
        assert_eq!(columns[0].kind, ColumnKind::Text);
    }

    #[test]
    fn test_grouped_mode_without_grouping_metadata_degrades_to_empty_label() {
        let metadata: ReportExtendedMetadata = serde_json::from_value(json!({
            "detailColumnInfo": {
                "AMOUNT": { "label": "Amount", "name": "Amount" }
            }
        }))
        .expect("valid metadata");

        let columns = build_columns(&metadata, None, &HashSet::new(), true);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].field_name, GROUP_LABEL_FIELD);
        assert_eq!(columns[0].label, "");
    }
}
