//! Path-update engine: toggles the deepest node of a hierarchy path
//!
//! The forest is treated as the children of a virtual `Inherited` root. The
//! path is walked level by level, recording the sibling index taken at each
//! level (the trail). Only nodes below the nearest explicit ancestor can ever
//! become redundant, so the trail also remembers that level as the pruning
//! floor. When the toggle leaves a childless `Inherited` node behind, one
//! pruning pass removes the whole redundant chain ending at the target.
//!
//! Complexity: time O(depth * siblings), memory O(depth).

use super::{position_of, remove_unordered, FilterNode, Forest, Operator};
use crate::identity::IdentityComparator;

/// Sibling indexes along the walked path, plus the first level eligible for pruning.
#[derive(Debug, Default)]
struct Trail {
    indices: Vec<usize>,
    floor: usize,
}

/// Updates the filter tree following a click on the last node of `path`.
///
/// Returns a valid, minimal tree. An empty path leaves the forest untouched.
#[tracing::instrument(level = "trace", skip_all, fields(depth = path.len(), roots = forest.len()))]
pub fn update_on_node_selection<I, C>(path: &[I], mut forest: Forest<I>, cmp: &C) -> Forest<I>
where
    I: Clone,
    C: IdentityComparator<I> + ?Sized,
{
    if path.is_empty() {
        return forest;
    }

    if let Some(trail) = toggle_target(path, &mut forest, cmp) {
        prune_trail(&mut forest, &trail);
    }

    forest
}

/// Walks and mutates the forest along `path`.
///
/// Returns the trail when the toggle left a node that may need pruning.
fn toggle_target<I, C>(path: &[I], forest: &mut Forest<I>, cmp: &C) -> Option<Trail>
where
    I: Clone,
    C: IdentityComparator<I> + ?Sized,
{
    let mut trail = Trail::default();
    let mut nearest_selected = false;
    let mut level = forest;

    for (depth, identity) in path.iter().enumerate() {
        let is_target = depth + 1 == path.len();

        let Some(index) = position_of(level, identity, cmp) else {
            // Everything from here down is new: one Inherited chain ending in
            // the explicit toggle. Nothing can become redundant.
            level.extend(graft(&path[depth..], nearest_selected));
            return None;
        };
        trail.indices.push(index);
        let node = &mut level[index];

        if is_target {
            return toggle_existing(node, nearest_selected).then_some(trail);
        }

        if let Some(selected) = node.operator.explicit() {
            nearest_selected = selected;
            trail.floor = depth + 1;
        }
        level = &mut node.children;
    }

    None
}

/// Toggles a node that already exists at the end of the path.
///
/// Returns true when the node was reverted to `Inherited` and needs pruning.
fn toggle_existing<I>(node: &mut FilterNode<I>, nearest_selected: bool) -> bool {
    if !node.has_children() {
        // A leaf reverts to whatever its ancestors imply.
        node.operator = Operator::Inherited;
        return true;
    }

    // Finer selections below a clicked node are always discarded.
    node.children.clear();
    let implied_by_ancestor = node.operator == Operator::NotSelected
        || (node.operator == Operator::Inherited && nearest_selected);

    if implied_by_ancestor {
        node.operator = Operator::Inherited;
        true
    } else {
        node.operator = Operator::Selected;
        false
    }
}

/// Builds the chain for a path suffix that does not exist yet.
fn graft<I: Clone>(suffix: &[I], nearest_selected: bool) -> Option<FilterNode<I>> {
    let (target, ancestors) = suffix.split_last()?;
    let leaf = FilterNode::new(target.clone(), Operator::toggled_from(nearest_selected));

    Some(ancestors.iter().rev().fold(leaf, |child, identity| {
        FilterNode::with_children(identity.clone(), Operator::Inherited, vec![child])
    }))
}

/// Removes the redundant chain ending at the last node of the trail.
///
/// Walking up from the target, a node goes away when it is `Inherited` and,
/// once its redundant child is gone, childless. The walk never passes the
/// floor, so the nearest explicit ancestor and everything above it stay.
fn prune_trail<I>(forest: &mut Forest<I>, trail: &Trail) {
    let Some(shallowest) = shallowest_redundant_level(forest, trail) else {
        return;
    };

    if let Some(parent) = children_at_mut(forest, &trail.indices[..shallowest]) {
        remove_unordered(parent, trail.indices[shallowest]);
    }
}

fn shallowest_redundant_level<I>(forest: &[FilterNode<I>], trail: &Trail) -> Option<usize> {
    let chain = nodes_along(forest, &trail.indices);
    if chain.len() != trail.indices.len() {
        return None;
    }

    let mut shallowest = None;
    for (depth, node) in chain.iter().enumerate().rev() {
        if depth < trail.floor {
            break;
        }
        let is_target = depth + 1 == chain.len();
        let children_left = if is_target {
            node.children.len()
        } else {
            // The child on the trail is about to be removed.
            node.children.len().saturating_sub(1)
        };
        if node.operator != Operator::Inherited || children_left > 0 {
            break;
        }
        shallowest = Some(depth);
    }

    shallowest
}

fn nodes_along<'a, I>(forest: &'a [FilterNode<I>], indices: &[usize]) -> Vec<&'a FilterNode<I>> {
    let mut chain = Vec::with_capacity(indices.len());
    let mut level = forest;
    for &index in indices {
        let Some(node) = level.get(index) else {
            break;
        };
        chain.push(node);
        level = &node.children;
    }
    chain
}

/// Child list reached by following `indices` from the root.
fn children_at_mut<'a, I>(
    forest: &'a mut Forest<I>,
    indices: &[usize],
) -> Option<&'a mut Vec<FilterNode<I>>> {
    let mut level = forest;
    for &index in indices {
        level = &mut level.get_mut(index)?.children;
    }
    Some(level)
}
