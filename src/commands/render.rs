//! Human-readable rendering of filter documents

use hiersel_core::filter::FilterPayload;
use hiersel_core::tree::{node_count, FilterNode};
use serde_json::Value;

/// One-line summary of a payload
pub fn summary(payload: &FilterPayload<Value>) -> String {
    match payload {
        FilterPayload::Basic(basic) => format!(
            "Basic filter: {}.{} {} {:?}",
            basic.target.table, basic.target.column, basic.operator, basic.values
        ),
        FilterPayload::HierarchyIdentity(filter) => format!(
            "HierarchyIdentity filter: {} root(s), {} node(s)",
            filter.hierarchy_data.len(),
            node_count(&filter.hierarchy_data)
        ),
    }
}

/// Indented tree, one node per line: `identity  Operator`
pub fn tree_lines(forest: &[FilterNode<Value>]) -> Vec<String> {
    let mut lines = Vec::new();
    push_lines(forest, 0, &mut lines);
    lines
}

fn push_lines(forest: &[FilterNode<Value>], depth: usize, lines: &mut Vec<String>) {
    for node in forest {
        lines.push(format!(
            "{}{}  {:?}",
            "  ".repeat(depth),
            identity_label(&node.identity),
            node.operator
        ));
        push_lines(&node.children, depth + 1, lines);
    }
}

/// Strings print bare; any other identity prints as compact JSON.
pub fn identity_label(identity: &Value) -> String {
    match identity {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
