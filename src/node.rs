//! Node.

mod debug_print;
mod edit;
mod internal;

use core::cell::{BorrowError, BorrowMutError, Ref, RefMut};
use core::fmt;

use crate::traverse;

pub use self::debug_print::{DebugPrintNodeLocal, DebugPrintSubtree};
use self::internal::{NodeCoreLink, NodeCoreLinkWeak};

/// Node hierarchy edit error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum NodeError {
    /// The given node is not a child of the node.
    #[error("child not found")]
    NotFound,
    /// A required argument is missing or empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The index is out of the valid range for the operation.
    #[error("index {index} is out of bounds (length {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of children at the time of the request.
        len: usize,
    },
    /// The node is already destroyed.
    #[error("the node is already destroyed")]
    InvalidState,
    /// Attempt to make a node its own descendant or ancestor.
    #[error("attempt to make a node its own descendant or ancestor")]
    AncestorDescendantLoop,
}

/// A shared owning reference to a node.
///
/// A node owns its children. The parent is referred weakly, so a node does
/// not keep its parent alive.
///
/// Comparison by `==` is an identity check: two handles are equal if and only
/// if they refer to the same node.
pub struct Node<T> {
    /// Target node core.
    link: NodeCoreLink<T>,
}

impl<T> Clone for Node<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            link: self.link.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.debug_print_local(), f)
    }
}

impl<T> PartialEq for Node<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Node<T> {}

/// Node object creation.
impl<T> Node<T> {
    /// Creates a new standalone node, without a parent and children.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::Node;
    ///
    /// let node = Node::new("root");
    ///
    /// assert!(node.is_root());
    /// assert!(!node.has_children());
    /// assert!(!node.is_destroyed());
    /// ```
    #[inline]
    #[must_use]
    pub fn new(data: T) -> Self {
        Self {
            link: NodeCoreLink::new(data),
        }
    }

    /// Creates a new standalone node with the data returned by the given
    /// fallible constructor.
    ///
    /// # Failures
    ///
    /// Returns the error of the constructor as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::{Node, NodeError};
    ///
    /// let node = Node::try_new_with(|| Ok::<_, NodeError>(42)).unwrap();
    /// assert_eq!(*node.borrow_data(), 42);
    ///
    /// let res = Node::<i32>::try_new_with(|| Err(NodeError::InvalidArgument("missing")));
    /// assert_eq!(res, Err(NodeError::InvalidArgument("missing")));
    /// ```
    pub fn try_new_with<F, E>(f: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        f().map(Self::new)
    }

    /// Creates a new weak node reference.
    #[inline]
    #[must_use]
    pub fn downgrade(&self) -> NodeWeak<T> {
        NodeWeak {
            link: self.link.downgrade(),
        }
    }

    /// Creates a node from the internal link.
    #[inline]
    #[must_use]
    fn with_link(link: NodeCoreLink<T>) -> Self {
        Self { link }
    }
}

/// Data access.
impl<T> Node<T> {
    /// Returns a reference to the data associated to the node.
    ///
    /// # Failures
    ///
    /// Fails if the data is currently mutably (i.e. exclusively) borrowed.
    #[inline]
    pub fn try_borrow_data(&self) -> Result<Ref<'_, T>, BorrowError> {
        self.link.try_borrow_data()
    }

    /// Returns a reference to the data associated to the node.
    ///
    /// # Panics
    ///
    /// Panics if the data is already mutably borrowed.
    #[inline]
    #[must_use]
    pub fn borrow_data(&self) -> Ref<'_, T> {
        self.link.borrow_data()
    }

    /// Returns a mutable reference to the data associated to the node.
    ///
    /// # Failures
    ///
    /// Fails if the data is currently borrowed.
    #[inline]
    pub fn try_borrow_data_mut(&self) -> Result<RefMut<'_, T>, BorrowMutError> {
        self.link.try_borrow_data_mut()
    }

    /// Returns a mutable reference to the data associated to the node.
    ///
    /// # Panics
    ///
    /// Panics if the data is already borrowed.
    #[inline]
    #[must_use]
    pub fn borrow_data_mut(&self) -> RefMut<'_, T> {
        self.link.borrow_data_mut()
    }

    /// Returns `true` if the two `Node`s point to the same allocation.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.link.ptr_eq(&other.link)
    }
}

/// Neighbor nodes accessor.
impl<T> Node<T> {
    /// Returns the parent node.
    ///
    /// Returns `None` if the node is a root, is detached, is destroyed, or if
    /// the parent is already released.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::Node;
    ///
    /// let root = Node::new("root");
    /// let child = Node::new("child");
    /// root.add_child(&child)?;
    ///
    /// assert_eq!(child.parent(), Some(root.clone()));
    /// assert_eq!(root.parent(), None);
    /// # Ok::<_, sprig::NodeError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.link.parent_link().map(Self::with_link)
    }

    /// Returns true if the node has no parent.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.link.is_root()
    }

    /// Returns the root of the tree the node belongs to.
    ///
    /// Note that this is O(depth) operation.
    #[must_use]
    pub fn root(&self) -> Self {
        self.ancestors_or_self()
            .last()
            .unwrap_or_else(|| self.clone())
    }

    /// Returns the children.
    ///
    /// This is a live view of the child list, not a copy.
    ///
    /// # Panics
    ///
    /// Editing the children of this node (for example by [`add_child`]) while
    /// the returned reference is alive panics.
    ///
    /// [`add_child`]: `Self::add_child`
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::Node;
    ///
    /// let root = Node::new("root");
    /// let a = Node::new("a");
    /// let b = Node::new("b");
    /// root.add_child(&a)?;
    /// root.add_child(&b)?;
    ///
    /// assert_eq!(&*root.children(), &[a, b]);
    /// # Ok::<_, sprig::NodeError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn children(&self) -> Ref<'_, [Self]> {
        self.link.children()
    }

    /// Returns the child at the given index, or `None` if the index is out
    /// of range.
    ///
    /// Use [`try_child_at`][`Self::try_child_at`] to distinguish the
    /// failure reasons.
    #[inline]
    #[must_use]
    pub fn child_at(&self, index: usize) -> Option<Self> {
        self.link.child_at(index)
    }

    /// Returns the child at the given index.
    ///
    /// # Failures
    ///
    /// Fails with [`NodeError::InvalidState`] if the node is destroyed, and
    /// with [`NodeError::IndexOutOfRange`] if there is no child at the index.
    pub fn try_child_at(&self, index: usize) -> Result<Self, NodeError> {
        edit::ensure_live(self)?;
        self.link.child_at(index).ok_or(NodeError::IndexOutOfRange {
            index,
            len: self.link.num_children(),
        })
    }

    /// Returns the position of the given node among the children.
    ///
    /// Nodes are compared by identity.
    ///
    /// # Failures
    ///
    /// Fails with [`NodeError::NotFound`] if `child` is not a child of the
    /// node, and with [`NodeError::InvalidState`] if the node is destroyed.
    pub fn child_index(&self, child: &Self) -> Result<usize, NodeError> {
        edit::ensure_live(self)?;
        self.link.position_of(&child.link).ok_or(NodeError::NotFound)
    }

    /// Returns the first child node.
    #[inline]
    #[must_use]
    pub fn first_child(&self) -> Option<Self> {
        self.children().first().cloned()
    }

    /// Returns the last child node.
    #[inline]
    #[must_use]
    pub fn last_child(&self) -> Option<Self> {
        self.children().last().cloned()
    }

    /// Returns the number of children.
    #[inline]
    #[must_use]
    pub fn num_children(&self) -> usize {
        self.link.num_children()
    }

    /// Returns true if the node has any children.
    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.link.has_children()
    }

    /// Returns true if the node is already destroyed.
    #[inline]
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.link.is_destroyed()
    }
}

/// Tree traverser.
impl<T> Node<T> {
    /// Returns the ancestors traverser, excluding the node itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::tree_node;
    ///
    /// let root = tree_node! {
    ///     "root", [
    ///         /("0", [
    ///             "0-0",
    ///         ]),
    ///     ]
    /// };
    /// let leaf = root.child_at(0).unwrap().child_at(0).unwrap();
    ///
    /// assert_eq!(
    ///     leaf.ancestors()
    ///         .map(|node| *node.borrow_data())
    ///         .collect::<Vec<_>>(),
    ///     &["0", "root"]
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn ancestors(&self) -> traverse::AncestorsTraverser<T> {
        traverse::AncestorsTraverser::starting_at(self.parent())
    }

    /// Returns the ancestors traverser, starting from the node itself.
    #[inline]
    #[must_use]
    pub fn ancestors_or_self(&self) -> traverse::AncestorsTraverser<T> {
        traverse::AncestorsTraverser::starting_at(Some(self.clone()))
    }

    /// Returns the depth-first traverser of the subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::tree_node;
    /// use sprig::traverse::DftEvent::{Close, Open};
    ///
    /// let root = tree_node! {
    ///     "root", [
    ///         /("0", [
    ///             "0-0",
    ///         ]),
    ///         "1",
    ///     ]
    /// };
    ///
    /// assert_eq!(
    ///     root.depth_first_traverse()
    ///         .map(|ev| ev.map(|node| *node.borrow_data()))
    ///         .collect::<Vec<_>>(),
    ///     &[
    ///         Open("root"),
    ///             Open("0"),
    ///                 Open("0-0"),
    ///                 Close("0-0"),
    ///             Close("0"),
    ///             Open("1"),
    ///             Close("1"),
    ///         Close("root"),
    ///     ]
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn depth_first_traverse(&self) -> traverse::DepthFirstTraverser<T> {
        traverse::DepthFirstTraverser::with_start(self.clone())
    }
}

/// Hierarchy modification.
impl<T> Node<T> {
    /// Appends the given node as the last child.
    ///
    /// If `child` already has a parent, it is detached from that parent
    /// first. Appending a child of `self` moves it to the end.
    ///
    /// # Failures
    ///
    /// * [`NodeError::InvalidState`] if `self` or `child` is destroyed.
    /// * [`NodeError::AncestorDescendantLoop`] if `child` is `self` or an
    ///   ancestor of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::Node;
    ///
    /// let old_parent = Node::new("old");
    /// let new_parent = Node::new("new");
    /// let child = Node::new("child");
    /// old_parent.add_child(&child)?;
    ///
    /// new_parent.add_child(&child)?;
    /// assert!(!old_parent.has_children());
    /// assert_eq!(child.parent(), Some(new_parent));
    /// # Ok::<_, sprig::NodeError>(())
    /// ```
    #[inline]
    pub fn add_child(&self, child: &Self) -> Result<(), NodeError> {
        edit::append_child(self, child)
    }

    /// Removes the given child.
    ///
    /// # Failures
    ///
    /// Fails with [`NodeError::NotFound`] if `child` is not a child of the
    /// node, and with [`NodeError::InvalidState`] if the node is destroyed.
    pub fn remove_child(&self, child: &Self) -> Result<(), NodeError> {
        let index = self.child_index(child)?;
        self.remove_child_at(index).map(drop)
    }

    /// Removes the child at the given index and returns it.
    ///
    /// Following children are shifted to the left.
    ///
    /// # Failures
    ///
    /// Fails with [`NodeError::IndexOutOfRange`] if `index` is not less than
    /// the number of children, and with [`NodeError::InvalidState`] if the
    /// node is destroyed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::{Node, NodeError};
    ///
    /// let root = Node::new("root");
    /// let a = Node::new("a");
    /// let b = Node::new("b");
    /// root.add_child(&a)?;
    /// root.add_child(&b)?;
    ///
    /// assert_eq!(root.remove_child_at(0)?, a);
    /// assert_eq!(&*root.children(), &[b]);
    /// assert_eq!(a.parent(), None);
    ///
    /// assert_eq!(
    ///     root.remove_child_at(1),
    ///     Err(NodeError::IndexOutOfRange { index: 1, len: 1 })
    /// );
    /// # Ok::<_, sprig::NodeError>(())
    /// ```
    pub fn remove_child_at(&self, index: usize) -> Result<Self, NodeError> {
        edit::ensure_live(self)?;
        edit::unlink_at(self, index)
    }

    /// Replaces the child at the given index with `new_child`, and returns
    /// the node that was at the index.
    ///
    /// The number of children does not change, and `new_child` is at `index`
    /// afterwards.
    ///
    /// * If `new_child` is already a child of `self`, the two children swap
    ///   their positions. The returned node stays a child of `self`.
    /// * Otherwise `new_child` is detached from its previous parent (if any)
    ///   and becomes a child of `self`, and the returned node is detached.
    ///
    /// # Failures
    ///
    /// * [`NodeError::IndexOutOfRange`] if `index` is not less than the
    ///   number of children.
    /// * [`NodeError::InvalidState`] if `self` or `new_child` is destroyed.
    /// * [`NodeError::AncestorDescendantLoop`] if `new_child` is `self` or an
    ///   ancestor of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::{tree_node, Node};
    ///
    /// let root = tree_node! { "root", ["a", "b", "c"] };
    /// let a = root.child_at(0).unwrap();
    /// let c = root.child_at(2).unwrap();
    ///
    /// // Siblings swap.
    /// assert_eq!(root.replace_child_at(&a, 2)?, c);
    /// assert_eq!(&*root.children(), &[c.clone(), root.child_at(1).unwrap(), a.clone()]);
    /// assert_eq!(c.parent(), Some(root.clone()));
    ///
    /// // Other nodes take the slot, and the old child is detached.
    /// let d = Node::new("d");
    /// assert_eq!(root.replace_child_at(&d, 0)?, c);
    /// assert!(c.is_root());
    /// assert_eq!(root.num_children(), 3);
    /// # Ok::<_, sprig::NodeError>(())
    /// ```
    pub fn replace_child_at(&self, new_child: &Self, index: usize) -> Result<Self, NodeError> {
        edit::replace_child_at(self, new_child, index)
    }

    /// Detaches the node from its parent.
    ///
    /// Does nothing if the node has no parent.
    ///
    /// # Failures
    ///
    /// Fails with [`NodeError::InvalidState`] if the node is destroyed.
    pub fn detach(&self) -> Result<(), NodeError> {
        edit::ensure_live(self)?;
        edit::detach(self).map(drop)
    }
}

/// Destruction.
impl<T> Node<T> {
    /// Destroys the node.
    ///
    /// The node is removed from its parent, and its children are orphaned
    /// (detached but not destroyed). A destroyed node cannot be edited
    /// anymore.
    ///
    /// # Failures
    ///
    /// Fails with [`NodeError::InvalidState`] if the node is already
    /// destroyed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::{Node, NodeError};
    ///
    /// let root = Node::new("root");
    /// let child = Node::new("child");
    /// let grandchild = Node::new("grandchild");
    /// root.add_child(&child)?;
    /// child.add_child(&grandchild)?;
    ///
    /// child.destroy()?;
    /// assert!(child.is_destroyed());
    /// assert!(!root.has_children());
    /// // Orphaned, not destroyed.
    /// assert!(grandchild.is_root());
    /// assert!(!grandchild.is_destroyed());
    ///
    /// assert_eq!(child.destroy(), Err(NodeError::InvalidState));
    /// # Ok::<_, sprig::NodeError>(())
    /// ```
    #[inline]
    pub fn destroy(&self) -> Result<(), NodeError> {
        edit::destroy(self)
    }

    /// Destroys the node and all of its descendants.
    ///
    /// # Failures
    ///
    /// Fails with [`NodeError::InvalidState`] if the node is already
    /// destroyed.
    #[inline]
    pub fn destroy_subtree(&self) -> Result<(), NodeError> {
        edit::destroy_subtree(self)
    }
}

/// Debug printing.
impl<T> Node<T> {
    /// Returns a debug-printable proxy that does not dump neighbor nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::Node;
    ///
    /// let root = Node::new("root");
    /// root.add_child(&Node::new("child"))?;
    ///
    /// assert_eq!(
    ///     format!("{:?}", root.debug_print_local()),
    ///     r#"Node { data: "root", parent: None, num_children: 1, destroyed: false }"#
    /// );
    /// # Ok::<_, sprig::NodeError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn debug_print_local(&self) -> DebugPrintNodeLocal<'_, T> {
        DebugPrintNodeLocal::new(&self.link)
    }

    /// Returns a debug-printable proxy that also dumps descendants.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::tree_node;
    ///
    /// let root = tree_node! {
    ///     "root", [
    ///         "child",
    ///     ]
    /// };
    ///
    /// assert_eq!(
    ///     format!("{:?}", root.debug_print_subtree()),
    ///     r#"Node { data: "root", children: [Node { data: "child", children: [] }] }"#
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn debug_print_subtree(&self) -> DebugPrintSubtree<'_, T> {
        DebugPrintSubtree::new(&self.link)
    }
}

/// A shared weak reference to a node.
pub struct NodeWeak<T> {
    /// Target node core.
    link: NodeCoreLinkWeak<T>,
}

impl<T> Clone for NodeWeak<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            link: self.link.clone(),
        }
    }
}

impl<T> fmt::Debug for NodeWeak<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(NodeWeak)")
    }
}

impl<T> NodeWeak<T> {
    /// Creates a new strong reference to the node, if the node is still alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::Node;
    ///
    /// let node = Node::new("node");
    /// let weak = node.downgrade();
    /// assert_eq!(weak.upgrade(), Some(node.clone()));
    ///
    /// drop(node);
    /// assert_eq!(weak.upgrade(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn upgrade(&self) -> Option<Node<T>> {
        self.link.upgrade().map(Node::with_link)
    }
}
