//! Filter tree invariant validation

use super::FilterNode;
use crate::identity::IdentityComparator;

/// Validate the minimality and uniqueness invariants of a forest.
///
/// Nodes are reported by their index path from the root, e.g. `[0, 2]`.
/// Returns a list of error messages (empty if valid).
pub fn validate_forest<I, C>(forest: &[FilterNode<I>], cmp: &C) -> Vec<String>
where
    C: IdentityComparator<I> + ?Sized,
{
    let mut errors = Vec::new();
    let mut location = Vec::new();
    validate_level(forest, false, cmp, &mut location, &mut errors);
    errors
}

fn validate_level<I, C>(
    siblings: &[FilterNode<I>],
    nearest_selected: bool,
    cmp: &C,
    location: &mut Vec<usize>,
    errors: &mut Vec<String>,
) where
    C: IdentityComparator<I> + ?Sized,
{
    for (index, node) in siblings.iter().enumerate() {
        location.push(index);

        if let Some(dup) = siblings[..index]
            .iter()
            .position(|earlier| cmp.equals(&earlier.identity, &node.identity))
        {
            errors.push(format!(
                "node {:?} duplicates sibling at index {}",
                location, dup
            ));
        }

        if node.is_redundant() {
            errors.push(format!("node {:?} is Inherited with no children", location));
        } else if node.operator.explicit() == Some(nearest_selected) && !node.has_children() {
            errors.push(format!(
                "node {:?} is {:?} but its ancestors already imply it",
                location, node.operator
            ));
        }

        let inherited = node.operator.explicit().unwrap_or(nearest_selected);
        validate_level(&node.children, inherited, cmp, location, errors);

        location.pop();
    }
}
