//! Effective selection state of a hierarchy path

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::IdentityComparator;
use crate::tree::{find_node, FilterNode};

/// Display state of one hierarchy row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionState {
    /// The nearest explicit ancestor-or-self is `Selected`
    Selected,
    /// The nearest explicit ancestor-or-self is `NotSelected`
    Unselected,
    /// Finer explicit choices exist below this node
    Partial,
    /// No explicit choice anywhere on the path
    #[default]
    Default,
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionState::Selected => write!(f, "Selected"),
            SelectionState::Unselected => write!(f, "Unselected"),
            SelectionState::Partial => write!(f, "Partial"),
            SelectionState::Default => write!(f, "Default"),
        }
    }
}

/// Resolve the effective state of `path` against `forest`.
///
/// Read-only and O(depth). The walk stops at the first identity with no
/// matching node; only explicit operators met on the matched prefix count.
pub fn resolve_selection_state<I, C>(path: &[I], forest: &[FilterNode<I>], cmp: &C) -> SelectionState
where
    C: IdentityComparator<I> + ?Sized,
{
    let mut level = forest;
    let mut last_explicit = None;
    let mut full_match_is_partial = false;

    for (depth, identity) in path.iter().enumerate() {
        let Some(node) = find_node(level, identity, cmp) else {
            break;
        };
        if let Some(selected) = node.operator.explicit() {
            last_explicit = Some(selected);
        }
        if depth + 1 == path.len() {
            full_match_is_partial = node.has_children();
        }
        level = &node.children;
    }

    if full_match_is_partial {
        return SelectionState::Partial;
    }

    match last_explicit {
        Some(true) => SelectionState::Selected,
        Some(false) => SelectionState::Unselected,
        None => SelectionState::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::EqComparator;
    use crate::tree::Operator;

    fn sample() -> Vec<FilterNode<&'static str>> {
        // A (Selected) -> B (NotSelected) -> C (Selected)
        //              -> D (Inherited)   -> E (NotSelected)
        vec![FilterNode::with_children(
            "A",
            Operator::Selected,
            vec![
                FilterNode::with_children(
                    "B",
                    Operator::NotSelected,
                    vec![FilterNode::new("C", Operator::Selected)],
                ),
                FilterNode::with_children(
                    "D",
                    Operator::Inherited,
                    vec![FilterNode::new("E", Operator::NotSelected)],
                ),
            ],
        )]
    }

    #[test]
    fn test_empty_forest_is_default() {
        assert_eq!(
            resolve_selection_state(&["A", "B"], &[], &EqComparator),
            SelectionState::Default
        );
    }

    #[test]
    fn test_empty_path_is_default() {
        let forest = sample();
        assert_eq!(
            resolve_selection_state::<&str, _>(&[], &forest, &EqComparator),
            SelectionState::Default
        );
    }

    #[test]
    fn test_node_with_children_is_partial() {
        let forest = sample();
        assert_eq!(
            resolve_selection_state(&["A"], &forest, &EqComparator),
            SelectionState::Partial
        );
        assert_eq!(
            resolve_selection_state(&["A", "B"], &forest, &EqComparator),
            SelectionState::Partial
        );
        assert_eq!(
            resolve_selection_state(&["A", "D"], &forest, &EqComparator),
            SelectionState::Partial
        );
    }

    #[test]
    fn test_explicit_leaf_states() {
        let forest = sample();
        assert_eq!(
            resolve_selection_state(&["A", "B", "C"], &forest, &EqComparator),
            SelectionState::Selected
        );
        assert_eq!(
            resolve_selection_state(&["A", "D", "E"], &forest, &EqComparator),
            SelectionState::Unselected
        );
    }

    #[test]
    fn test_unlisted_nodes_inherit_nearest_explicit_ancestor() {
        let forest = sample();
        assert_eq!(
            resolve_selection_state(&["A", "X"], &forest, &EqComparator),
            SelectionState::Selected
        );
        assert_eq!(
            resolve_selection_state(&["A", "B", "Y"], &forest, &EqComparator),
            SelectionState::Unselected
        );
        assert_eq!(
            resolve_selection_state(&["A", "D", "Z"], &forest, &EqComparator),
            SelectionState::Selected
        );
        assert_eq!(
            resolve_selection_state(&["Q", "R"], &forest, &EqComparator),
            SelectionState::Default
        );
    }

    #[test]
    fn test_walk_stops_at_first_missing_level() {
        let forest = sample();
        // "C" exists under B, but B is not on this path.
        assert_eq!(
            resolve_selection_state(&["A", "X", "C"], &forest, &EqComparator),
            SelectionState::Selected
        );
    }
}
