//! Node edit algorithms.
//!
//! Functions in this module keep the parent links and the child lists
//! consistent: a node is in the child list of a node if and only if its
//! parent link refers that node.

use core::mem;

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::node::internal::NodeCoreLinkWeak;
use crate::node::{Node, NodeError};
use crate::traverse::DftEvent;

/// Returns an error if the node is already destroyed.
#[inline]
pub(super) fn ensure_live<T>(node: &Node<T>) -> Result<(), NodeError> {
    if node.link.is_destroyed() {
        return Err(NodeError::InvalidState);
    }
    Ok(())
}

/// Returns an error if making `child` a child of `parent` creates a loop.
fn ensure_no_loop<T>(parent: &Node<T>, child: &Node<T>) -> Result<(), NodeError> {
    if parent.ptr_eq(child) {
        return Err(NodeError::AncestorDescendantLoop);
    }
    // A leaf cannot be an ancestor of other nodes.
    if !child.link.has_children() {
        return Ok(());
    }
    if parent.ancestors().any(|ancestor| ancestor.ptr_eq(child)) {
        return Err(NodeError::AncestorDescendantLoop);
    }
    Ok(())
}

/// Removes the child at the given index from the child list, and returns it.
///
/// The removed child will have no parent.
pub(super) fn unlink_at<T>(parent: &Node<T>, index: usize) -> Result<Node<T>, NodeError> {
    let len = parent.link.num_children();
    let child = parent
        .link
        .child_at(index)
        .ok_or(NodeError::IndexOutOfRange { index, len })?;
    parent.link.ensure_editable();
    child.link.ensure_editable();

    let removed = parent.link.children_mut().remove(index);
    debug_assert!(
        removed.ptr_eq(&child),
        "[consistency] the slot should hold the child being removed"
    );
    child.link.replace_parent(NodeCoreLinkWeak::default());
    trace!(index, num_children = len - 1, "removed child");

    Ok(child)
}

/// Checks that `parent`, `child`, and the current parent of `child` can be
/// edited.
///
/// # Panics
///
/// Panics if the children of any of them are borrowed by a caller.
fn ensure_insertable<T>(parent: &Node<T>, child: &Node<T>) {
    parent.link.ensure_editable();
    child.link.ensure_editable();
    if let Some(old_parent) = child.link.parent_link() {
        old_parent.ensure_editable();
    }
}

/// Detaches the node from its parent.
///
/// Returns the old parent and the old index of the node if the node had a
/// parent.
///
/// # Failures
///
/// Fails with [`NodeError::NotFound`] if the parent link of the node is set
/// but the parent does not have the node as its child.
pub(super) fn detach<T>(node: &Node<T>) -> Result<Option<(Node<T>, usize)>, NodeError> {
    let parent = match node.parent() {
        Some(v) => v,
        None => return Ok(None),
    };
    let index = parent
        .link
        .position_of(&node.link)
        .ok_or(NodeError::NotFound)?;
    unlink_at(&parent, index)?;

    Ok(Some((parent, index)))
}

/// Appends the node as the last child of `parent`.
pub(super) fn append_child<T>(parent: &Node<T>, child: &Node<T>) -> Result<(), NodeError> {
    ensure_live(parent)?;
    ensure_live(child)?;
    ensure_no_loop(parent, child)?;
    ensure_insertable(parent, child);

    detach(child)?;
    child.link.replace_parent(parent.link.downgrade());
    parent.link.children_mut().push(child.clone());
    trace!(index = parent.link.num_children() - 1, "appended child");

    Ok(())
}

/// Replaces the child at the given index with `new_child`, and returns the
/// node that was at the index.
///
/// If `new_child` is already a child of `parent`, the two children swap
/// their positions and the returned node stays a child of `parent`.
/// Otherwise the returned node is detached.
pub(super) fn replace_child_at<T>(
    parent: &Node<T>,
    new_child: &Node<T>,
    index: usize,
) -> Result<Node<T>, NodeError> {
    ensure_live(parent)?;
    ensure_live(new_child)?;

    let old_child = parent.link.child_at(index).ok_or(NodeError::IndexOutOfRange {
        index,
        len: parent.link.num_children(),
    })?;
    if old_child.ptr_eq(new_child) {
        return Ok(old_child);
    }
    ensure_no_loop(parent, new_child)?;
    ensure_insertable(parent, new_child);
    old_child.link.ensure_editable();

    if let Some(sibling_index) = parent.link.position_of(&new_child.link) {
        // Both are children of `parent` already: they trade places.
        parent.link.children_mut().swap(sibling_index, index);
        trace!(index, sibling_index, "swapped children");
        return Ok(old_child);
    }

    detach(new_child)?;
    new_child.link.replace_parent(parent.link.downgrade());
    let replaced = mem::replace(&mut parent.link.children_mut()[index], new_child.clone());
    debug_assert!(
        replaced.ptr_eq(&old_child),
        "[consistency] the slot should still hold the old child"
    );
    replaced.link.replace_parent(NodeCoreLinkWeak::default());
    trace!(index, "replaced child");

    Ok(replaced)
}

/// Destroys the node, orphaning its children.
pub(super) fn destroy<T>(node: &Node<T>) -> Result<(), NodeError> {
    ensure_live(node)?;
    node.link.ensure_editable();
    if let Some(parent) = node.link.parent_link() {
        parent.ensure_editable();
    }
    for child in node.children().iter() {
        child.link.ensure_editable();
    }

    if let Some(parent) = node.parent() {
        parent.remove_child(node)?;
    }

    let children = mem::take(&mut *node.link.children_mut());
    for child in &children {
        child.link.replace_parent(NodeCoreLinkWeak::default());
    }
    node.link.replace_parent(NodeCoreLinkWeak::default());
    node.link.mark_destroyed();
    debug!(orphaned = children.len(), "destroyed node");

    Ok(())
}

/// Destroys the node and all of its descendants.
pub(super) fn destroy_subtree<T>(node: &Node<T>) -> Result<(), NodeError> {
    ensure_live(node)?;

    // Post-order, so that every node is destroyed after its descendants.
    let descendants: Vec<Node<T>> = node
        .depth_first_traverse()
        .filter_map(DftEvent::into_close)
        .filter(|descendant| !descendant.ptr_eq(node))
        .collect();
    for descendant in &descendants {
        descendant.link.ensure_editable();
    }
    trace!(
        num_descendants = descendants.len(),
        "destroying descendants"
    );
    for descendant in &descendants {
        destroy(descendant)?;
    }

    destroy(node)
}
