//! Opaque hierarchy identities and the injected equality capability
//!
//! Identities are owned by the host. The core only ever asks whether two of
//! them denote the same hierarchy node; it never orders or hashes them.

/// Equality predicate over opaque identities, supplied by the host.
pub trait IdentityComparator<I: ?Sized> {
    /// Returns true when `a` and `b` denote the same hierarchy node.
    fn equals(&self, a: &I, b: &I) -> bool;
}

impl<I: ?Sized, F> IdentityComparator<I> for F
where
    F: Fn(&I, &I) -> bool,
{
    fn equals(&self, a: &I, b: &I) -> bool {
        self(a, b)
    }
}

/// Comparator for identity types that already implement `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqComparator;

impl<I: PartialEq + ?Sized> IdentityComparator<I> for EqComparator {
    fn equals(&self, a: &I, b: &I) -> bool {
        a == b
    }
}
