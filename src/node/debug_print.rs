//! Debug printing of a single node and of a subtree.

use core::fmt;

use crate::node::internal::NodeCoreLink;

/// Text written as is, without quotes.
#[derive(Clone, Copy)]
struct Verbatim(&'static str);

impl fmt::Debug for Verbatim {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The `data` field of a node, or a marker if the data is mutably borrowed.
struct DataField<'a, T>(&'a NodeCoreLink<T>);

impl<T: fmt::Debug> fmt::Debug for DataField<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow_data() {
            Ok(data) => fmt::Debug::fmt(&*data, f),
            Err(_) => fmt::Debug::fmt(&Verbatim("<borrowed>"), f),
        }
    }
}

/// The `parent` field of a node. The parent itself is not dumped.
#[inline]
#[must_use]
fn parent_field<T>(link: &NodeCoreLink<T>) -> Verbatim {
    if link.is_root() {
        Verbatim("None")
    } else {
        Verbatim("Some(_)")
    }
}

/// A wrapper to make a node debug-printable without neighbors.
pub struct DebugPrintNodeLocal<'a, T> {
    /// Link to the node.
    link: &'a NodeCoreLink<T>,
}

impl<T> Clone for DebugPrintNodeLocal<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DebugPrintNodeLocal<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for DebugPrintNodeLocal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &DataField(self.link))
            .field("parent", &parent_field(self.link))
            .field("num_children", &self.link.num_children())
            .field("destroyed", &self.link.is_destroyed())
            .finish()
    }
}

impl<'a, T> DebugPrintNodeLocal<'a, T> {
    /// Creates a new `DebugPrintNodeLocal`.
    #[inline]
    #[must_use]
    pub(super) fn new(link: &'a NodeCoreLink<T>) -> Self {
        Self { link }
    }
}

/// A wrapper to make a node debug-printable with its descendants.
///
/// Each node is printed with its data and children only.
pub struct DebugPrintSubtree<'a, T> {
    /// Link to the subtree root.
    link: &'a NodeCoreLink<T>,
}

impl<T> Clone for DebugPrintSubtree<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DebugPrintSubtree<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for DebugPrintSubtree<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children = self.link.children();
        f.debug_struct("Node")
            .field("data", &DataField(self.link))
            .field(
                "children",
                &ChildList(children.iter().map(|child| DebugPrintSubtree::new(&child.link))),
            )
            .finish()
    }
}

impl<'a, T> DebugPrintSubtree<'a, T> {
    /// Creates a new `DebugPrintSubtree`.
    #[inline]
    #[must_use]
    pub(super) fn new(link: &'a NodeCoreLink<T>) -> Self {
        Self { link }
    }
}

/// Printer of child entries.
///
/// The iterator is cloned on each print, so the value can be printed twice.
struct ChildList<I>(I);

impl<I> fmt::Debug for ChildList<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
