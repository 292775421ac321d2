//! Internals of a node.

use core::cell::{BorrowError, BorrowMutError, Cell, Ref, RefCell, RefMut};
use core::mem;

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;

use crate::node::Node;

/// Internal node data.
pub(crate) struct NodeCore<T> {
    /// Data associated to the node.
    data: RefCell<T>,
    /// Neighbors.
    neighbors: RefCell<Neighbors<T>>,
    /// Whether the node is already destroyed.
    destroyed: Cell<bool>,
}

impl<T> Drop for NodeCore<T> {
    fn drop(&mut self) {
        // Release descendants iteratively. Naive recursive drop overflows the
        // stack for very deep trees.
        let mut pending = mem::take(&mut self.neighbors.get_mut().children);
        while let Some(child) = pending.pop() {
            // Other handles may still refer the child. Then the subtree stays.
            if let Ok(mut core) = Rc::try_unwrap(child.link.core) {
                pending.append(&mut core.neighbors.get_mut().children);
                // `core` is dropped here without children.
            }
        }
    }
}

/// A collection of links to neighbor nodes.
struct Neighbors<T> {
    /// Parent.
    // Not using `Option<NodeCoreLinkWeak<T>>` here because
    // `NodeCoreLinkWeak<T>` itself acts as a weak and optional reference.
    parent: NodeCoreLinkWeak<T>,
    /// Children, in order.
    children: Vec<Node<T>>,
}

/// An owning reference to the node core.
pub(crate) struct NodeCoreLink<T> {
    /// Target node core.
    core: Rc<NodeCore<T>>,
}

impl<T> Clone for NodeCoreLink<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<T> NodeCoreLink<T> {
    /// Creates a live node without parent and children.
    #[must_use]
    pub(super) fn new(data: T) -> Self {
        Self {
            core: Rc::new(NodeCore {
                data: RefCell::new(data),
                neighbors: RefCell::new(Neighbors {
                    parent: Default::default(),
                    children: Vec::new(),
                }),
                destroyed: Cell::new(false),
            }),
        }
    }

    /// Returns `true` if the two links point to the same allocation.
    #[inline]
    #[must_use]
    pub(super) fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }

    /// Creates a weakened link.
    #[inline]
    #[must_use]
    pub(super) fn downgrade(&self) -> NodeCoreLinkWeak<T> {
        NodeCoreLinkWeak {
            core: Rc::downgrade(&self.core),
        }
    }
}

/// Getters.
impl<T> NodeCoreLink<T> {
    /// Returns the neighbors.
    #[must_use]
    fn neighbors(&self) -> Ref<'_, Neighbors<T>> {
        self.core
            .neighbors
            .try_borrow()
            .expect("[consistency] `NodeCore::neighbors` should not be borrowed nestedly")
    }

    /// Returns the mutable neighbors.
    ///
    /// # Panics
    ///
    /// Panics if the children are borrowed by a caller, for example as a
    /// result of [`Node::children`].
    #[must_use]
    fn neighbors_mut(&self) -> RefMut<'_, Neighbors<T>> {
        self.core
            .neighbors
            .try_borrow_mut()
            .expect("[precondition] children of the node should not be borrowed during edit")
    }

    /// Panics unless the neighbors can be edited right now.
    ///
    /// Call this for every node an edit touches before changing any of them,
    /// so that a rejected edit leaves the links untouched.
    ///
    /// # Panics
    ///
    /// Panics if the children are borrowed by a caller.
    #[inline]
    pub(super) fn ensure_editable(&self) {
        drop(self.neighbors_mut());
    }

    /// Returns a link to the parent node.
    #[inline]
    #[must_use]
    pub(super) fn parent_link(&self) -> Option<Self> {
        self.neighbors().parent.upgrade()
    }

    /// Returns true if the node has no parent.
    #[inline]
    #[must_use]
    pub(super) fn is_root(&self) -> bool {
        self.neighbors().parent.is_unavailable()
    }

    /// Returns the children.
    #[inline]
    #[must_use]
    pub(super) fn children(&self) -> Ref<'_, [Node<T>]> {
        Ref::map(self.neighbors(), |neighbors| neighbors.children.as_slice())
    }

    /// Returns the mutable children.
    ///
    /// Note that this does not take care of parent links of the children.
    #[inline]
    #[must_use]
    pub(super) fn children_mut(&self) -> RefMut<'_, Vec<Node<T>>> {
        RefMut::map(self.neighbors_mut(), |neighbors| &mut neighbors.children)
    }

    /// Returns the child at the given index.
    #[inline]
    #[must_use]
    pub(super) fn child_at(&self, index: usize) -> Option<Node<T>> {
        self.neighbors().children.get(index).cloned()
    }

    /// Returns the position of the given node among the children.
    #[must_use]
    pub(super) fn position_of(&self, child: &Self) -> Option<usize> {
        self.neighbors()
            .children
            .iter()
            .position(|node| node.link.ptr_eq(child))
    }

    /// Returns the number of children.
    #[inline]
    #[must_use]
    pub(super) fn num_children(&self) -> usize {
        self.neighbors().children.len()
    }

    /// Returns true if the node has any children.
    #[inline]
    #[must_use]
    pub(super) fn has_children(&self) -> bool {
        !self.neighbors().children.is_empty()
    }

    /// Returns true if the node is already destroyed.
    #[inline]
    #[must_use]
    pub(super) fn is_destroyed(&self) -> bool {
        self.core.destroyed.get()
    }
}

/// Setters.
impl<T> NodeCoreLink<T> {
    /// Sets the `parent` field and returns the old value.
    ///
    /// Note that this does not take care of consistency.
    pub(super) fn replace_parent(&self, link: NodeCoreLinkWeak<T>) -> NodeCoreLinkWeak<T> {
        let mut parent = RefMut::map(self.neighbors_mut(), |neighbors| &mut neighbors.parent);
        mem::replace(&mut *parent, link)
    }

    /// Marks the node as destroyed.
    #[inline]
    pub(super) fn mark_destroyed(&self) {
        self.core.destroyed.set(true);
    }
}

/// Data accessors.
impl<T> NodeCoreLink<T> {
    /// Returns a reference to the data associated to the node.
    #[inline]
    pub(super) fn try_borrow_data(&self) -> Result<Ref<'_, T>, BorrowError> {
        self.core.data.try_borrow()
    }

    /// Returns a reference to the data associated to the node.
    ///
    /// # Panics
    ///
    /// Panics if the data is already mutably borrowed.
    #[inline]
    #[must_use]
    pub(super) fn borrow_data(&self) -> Ref<'_, T> {
        self.core.data.borrow()
    }

    /// Returns a mutable reference to the data associated to the node.
    #[inline]
    pub(super) fn try_borrow_data_mut(&self) -> Result<RefMut<'_, T>, BorrowMutError> {
        self.core.data.try_borrow_mut()
    }

    /// Returns a mutable reference to the data associated to the node.
    ///
    /// # Panics
    ///
    /// Panics if the data is already borrowed.
    #[inline]
    #[must_use]
    pub(super) fn borrow_data_mut(&self) -> RefMut<'_, T> {
        self.core.data.borrow_mut()
    }
}

/// An non-owning reference to a node.
///
/// This link type does not guarantee that the target node is still alive.
// Note that this value itself acts as optional reference since it has
// `alloc::rc::Weak` value.
pub(crate) struct NodeCoreLinkWeak<T> {
    /// Target node core.
    core: Weak<NodeCore<T>>,
}

impl<T> Clone for NodeCoreLinkWeak<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<T> Default for NodeCoreLinkWeak<T> {
    #[inline]
    fn default() -> Self {
        Self {
            core: Weak::new(),
        }
    }
}

impl<T> NodeCoreLinkWeak<T> {
    /// Creates a strong link from the weak one.
    #[inline]
    #[must_use]
    pub(super) fn upgrade(&self) -> Option<NodeCoreLink<T>> {
        Weak::upgrade(&self.core).map(|core| NodeCoreLink { core })
    }

    /// Returns true if the link target is unavailable anymore (i.e. the link refers no live node).
    #[inline]
    #[must_use]
    fn is_unavailable(&self) -> bool {
        self.core.strong_count() == 0
    }
}
