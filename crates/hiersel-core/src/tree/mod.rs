//! Sparse filter tree over a hierarchy
//!
//! A [`Forest`] holds only the nodes that carry an explicit choice, plus the
//! `Inherited` ancestors needed to reach them. Every node not present resolves
//! through its nearest explicit ancestor, or to the default state if none.

pub mod update;
pub mod validate;

use serde::{Deserialize, Serialize};

use crate::identity::IdentityComparator;

pub use update::update_on_node_selection;
pub use validate::validate_forest;

/// Tri-state flag carried by every filter node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Operator {
    /// Value is explicitly selected
    Selected,
    /// Value is explicitly not selected
    NotSelected,
    /// No explicit choice; follows the nearest explicit ancestor
    #[default]
    Inherited,
}

impl Operator {
    pub fn is_explicit(self) -> bool {
        self != Operator::Inherited
    }

    /// `Some(true)` for `Selected`, `Some(false)` for `NotSelected`, `None` for `Inherited`.
    pub fn explicit(self) -> Option<bool> {
        match self {
            Operator::Selected => Some(true),
            Operator::NotSelected => Some(false),
            Operator::Inherited => None,
        }
    }

    /// The explicit operator that flips the state implied by the nearest explicit ancestor.
    pub fn toggled_from(nearest_selected: bool) -> Self {
        if nearest_selected {
            Operator::NotSelected
        } else {
            Operator::Selected
        }
    }
}

/// One node of the filter tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterNode<I> {
    pub identity: I,
    pub operator: Operator,
    #[serde(default = "Vec::new")]
    pub children: Vec<FilterNode<I>>,
}

impl<I> FilterNode<I> {
    pub fn new(identity: I, operator: Operator) -> Self {
        Self {
            identity,
            operator,
            children: Vec::new(),
        }
    }

    pub fn with_children(identity: I, operator: Operator, children: Vec<FilterNode<I>>) -> Self {
        Self {
            identity,
            operator,
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// A childless `Inherited` node implies nothing and must not stay in the tree.
    pub fn is_redundant(&self) -> bool {
        self.operator == Operator::Inherited && self.children.is_empty()
    }
}

/// Root-level nodes of the filter tree; the whole persisted selection state.
pub type Forest<I> = Vec<FilterNode<I>>;

/// Index of the sibling whose identity equals `identity` under `cmp`.
pub fn position_of<I, C>(siblings: &[FilterNode<I>], identity: &I, cmp: &C) -> Option<usize>
where
    C: IdentityComparator<I> + ?Sized,
{
    siblings
        .iter()
        .position(|node| cmp.equals(&node.identity, identity))
}

/// Sibling whose identity equals `identity` under `cmp`.
pub fn find_node<'a, I, C>(
    siblings: &'a [FilterNode<I>],
    identity: &I,
    cmp: &C,
) -> Option<&'a FilterNode<I>>
where
    C: IdentityComparator<I> + ?Sized,
{
    siblings
        .iter()
        .find(|node| cmp.equals(&node.identity, identity))
}

/// Remove `index` by moving the last element into its slot.
///
/// Sibling order carries no meaning, so the O(1) swap is fine.
/// Out-of-range indexes and empty lists are a no-op.
pub fn remove_unordered<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    if index >= items.len() {
        return None;
    }
    Some(items.swap_remove(index))
}

/// Total number of nodes in the forest.
pub fn node_count<I>(forest: &[FilterNode<I>]) -> usize {
    forest
        .iter()
        .map(|node| 1 + node_count(&node.children))
        .sum()
}
