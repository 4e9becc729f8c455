#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use factgrid::model::ReportExecution;
    use factgrid::transform::{build_columns, build_group_tree, CellLayout};
    use serde_json::{json, Value};

    fn row(name: &str, amount: &str) -> Value {
        json!({ "dataCells": [ { "label": name }, { "label": amount } ] })
    }

    fn grouped_result() -> ReportExecution {
        serde_json::from_value(json!({
            "reportMetadata": { "id": "00O000000000001" },
            "reportExtendedMetadata": {
                "detailColumnInfo": {
                    "NAME": { "label": "Name", "name": "Name" },
                    "AMOUNT": { "label": "Amount", "name": "Amount" }
                },
                "groupingColumnInfo": {
                    "STAGE_NAME": { "label": "stage name" }
                }
            },
            "groupingsDown": {
                "groupings": [
                    { "key": "0", "label": "Prospecting" },
                    { "key": "1", "label": "Closed Won" },
                    { "key": "2", "label": "Closed Lost" }
                ]
            },
            "factMap": {
                "0!T": { "rows": [ row("Acme", "$100"), row("Globex", "$50") ] },
                "1!T": { "rows": [ row("Initech", "$75") ] }
            }
        }))
        .expect("valid payload")
    }

    fn tree(result: &ReportExecution) -> Vec<factgrid::model::GroupNode> {
        let columns = build_columns(
            &result.report_extended_metadata,
            None,
            &HashSet::new(),
            true,
        );
        let layout = CellLayout::new(&columns, true);
        build_group_tree(result, &result.groupings_down.groupings, &columns, &layout)
    }

    #[test]
    fn test_one_node_per_grouping_in_declared_order() {
        let result = grouped_result();
        let nodes = tree(&result);

        let labels: Vec<&str> = nodes.iter().map(|node| node.group_label.as_str()).collect();
        assert_eq!(labels, vec!["Prospecting", "Closed Won", "Closed Lost"]);
        assert_eq!(nodes[0].id, "0");
        assert_eq!(nodes[1].id, "1");
    }

    #[test]
    fn test_children_come_from_the_grouping_fact_table() {
        let result = grouped_result();
        let nodes = tree(&result);

        assert_eq!(nodes[0].children.len(), 2);
        assert_eq!(nodes[1].children.len(), 1);
        assert_eq!(nodes[0].children[0].get("NAME"), Some(&json!("Acme")));
        assert_eq!(nodes[1].children[0].get("AMOUNT"), Some(&json!("$75")));
    }

    #[test]
    fn test_absent_fact_table_yields_empty_children() {
        let result = grouped_result();
        let nodes = tree(&result);

        assert_eq!(nodes[2].group_label, "Closed Lost");
        assert!(nodes[2].children.is_empty());
    }

    #[test]
    fn test_child_ids_are_scope_qualified() {
        let result = grouped_result();
        let nodes = tree(&result);

        assert_eq!(nodes[0].children[0].id, "0-0");
        assert_eq!(nodes[0].children[1].id, "0-1");
        assert_eq!(nodes[1].children[0].id, "1-0");
    }
}
