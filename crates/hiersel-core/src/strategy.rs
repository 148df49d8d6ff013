//! Single-select and multi-select interaction strategies
//!
//! Multi-select accumulates: it toggles the clicked path inside the existing
//! forest. Single-select replaces: it either clears everything (when the click
//! lands on the one thing currently selected) or rebuilds the forest around
//! the clicked path alone.

use crate::identity::IdentityComparator;
use crate::tree::{find_node, update_on_node_selection, FilterNode, Forest, Operator};

/// Toggle `path` inside the existing forest, leaving other branches untouched.
pub fn multi_select_toggle<I, C>(path: &[I], forest: Forest<I>, cmp: &C) -> Forest<I>
where
    I: Clone,
    C: IdentityComparator<I> + ?Sized,
{
    update_on_node_selection(path, forest, cmp)
}

/// Replace the selection with `path`, or clear it if `path` is the whole selection.
pub fn single_select_toggle<I, C>(path: &[I], forest: Forest<I>, cmp: &C) -> Forest<I>
where
    I: Clone,
    C: IdentityComparator<I> + ?Sized,
{
    if path.is_empty() {
        return forest;
    }

    if should_clear_tree(path, &forest, cmp) {
        tracing::debug!(depth = path.len(), "single select clears the selection");
        return Vec::new();
    }

    update_on_node_selection(path, Vec::new(), cmp)
}

/// True exactly when `path` denotes the entire explicit selection of `forest`.
///
/// The walk stops at the first level whose identity is missing, so the
/// accumulated flags describe only the matched prefix.
pub fn should_clear_tree<I, C>(path: &[I], forest: &[FilterNode<I>], cmp: &C) -> bool
where
    C: IdentityComparator<I> + ?Sized,
{
    if path.is_empty() || forest.is_empty() {
        return false;
    }

    let mut matched_levels = 0;
    let mut explicit_count = 0;
    let mut more_than_one_node = false;
    let mut last_operator = Operator::Inherited;
    let mut level = forest;

    for identity in path {
        more_than_one_node |= level.len() > 1;
        let Some(node) = find_node(level, identity, cmp) else {
            break;
        };
        if node.operator.is_explicit() {
            explicit_count += 1;
        }
        matched_levels += 1;
        last_operator = node.operator;
        level = &node.children;
    }

    // Anything left below the last matched node is another selection.
    more_than_one_node |= !level.is_empty();

    matched_levels == path.len()
        && !more_than_one_node
        && explicit_count <= 1
        && last_operator != Operator::Inherited
}
