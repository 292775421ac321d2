//! Ancestors traversal.

use core::iter;

use crate::Node;

/// Iterator over a node and the nodes above it, nearest first.
///
/// The parent is resolved lazily on each step, so the walk observes edits
/// made between two calls of `next()`.
///
/// # Examples
///
/// ```
/// use sprig::tree_node;
///
/// let root = tree_node! { "root", [/("0", ["0-0"])] };
/// let leaf = root.child_at(0).unwrap().child_at(0).unwrap();
///
/// let mut ancestors = leaf.ancestors();
/// assert_eq!(ancestors.peek().map(|node| *node.borrow_data()), Some("0"));
///
/// // A clone walks independently of the original.
/// let rest = ancestors.clone();
/// assert_eq!(ancestors.next().map(|node| *node.borrow_data()), Some("0"));
/// assert_eq!(rest.count(), 2);
///
/// // The remaining walk is known to end at the root.
/// assert_eq!(ancestors.size_hint(), (1, Some(1)));
/// assert_eq!(ancestors.next(), Some(root));
/// assert_eq!(ancestors.peek(), None);
/// ```
#[derive(Debug)]
pub struct AncestorsTraverser<T> {
    /// Node to yield on the next step.
    pending: Option<Node<T>>,
}

impl<T> Clone for AncestorsTraverser<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
        }
    }
}

impl<T> AncestorsTraverser<T> {
    /// Creates a traverser whose first item is `first`.
    #[inline]
    #[must_use]
    pub(crate) fn starting_at(first: Option<Node<T>>) -> Self {
        Self { pending: first }
    }

    /// Returns the node the next call of `next()` yields, if any.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&Node<T>> {
        self.pending.as_ref()
    }
}

impl<T> Iterator for AncestorsTraverser<T> {
    type Item = Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        self.pending = current.parent();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.pending {
            None => (0, Some(0)),
            Some(node) if node.is_root() => (1, Some(1)),
            Some(_) => (2, None),
        }
    }
}

impl<T> iter::FusedIterator for AncestorsTraverser<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_ancestors() {
        let root = Node::new("root");
        let mut ancestors = root.ancestors();
        assert_eq!(ancestors.size_hint(), (0, Some(0)));
        assert_eq!(ancestors.next(), None);

        let mut or_self = root.ancestors_or_self();
        assert_eq!(or_self.size_hint(), (1, Some(1)));
        assert_eq!(or_self.next(), Some(root));
        assert_eq!(or_self.next(), None);
    }

    #[test]
    fn walk_follows_edits() {
        let root = crate::tree_node! { "root", [/("0", ["0-0"])] };
        let node0 = root.child_at(0).expect("should have a child");
        let leaf = node0.child_at(0).expect("should have a child");

        let mut ancestors = leaf.ancestors_or_self();
        assert_eq!(ancestors.next(), Some(leaf));
        node0.detach().expect("should success");
        // `node0` is a root now, so `root` is not reached.
        assert_eq!(ancestors.next(), Some(node0));
        assert_eq!(ancestors.next(), None);
    }
}
