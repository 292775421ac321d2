//! Depth-first traversal.

use core::iter;

use alloc::vec::Vec;

use crate::Node;

/// Event for depth first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DftEvent<T> {
    /// Opening of a range.
    ///
    /// This event will be emitted when entering a node.
    Open(T),
    /// Closing of a range.
    ///
    /// This event will be emitted when leaving a node.
    Close(T),
}

impl<T> DftEvent<T> {
    /// Returns the value with ownership.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Open(v) | Self::Close(v) => v,
        }
    }

    /// Returns a reference to the value.
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> &T {
        match self {
            Self::Open(v) | Self::Close(v) => v,
        }
    }

    /// Converts the internal value.
    #[must_use]
    pub fn map<F, U>(self, f: F) -> DftEvent<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Open(v) => DftEvent::Open(f(v)),
            Self::Close(v) => DftEvent::Close(f(v)),
        }
    }

    /// Extracts the value for `Open` event if possible.
    #[inline]
    #[must_use]
    pub fn into_open(self) -> Option<T> {
        match self {
            Self::Open(v) => Some(v),
            Self::Close(_) => None,
        }
    }

    /// Extracts the value for `Close` event if possible.
    #[inline]
    #[must_use]
    pub fn into_close(self) -> Option<T> {
        match self {
            Self::Open(_) => None,
            Self::Close(v) => Some(v),
        }
    }
}

/// Depth first traversal iterator.
///
/// The traverser remembers the position among the siblings by index, so
/// editing the tree during the traversal does not invalidate the iterator,
/// though nodes may be skipped or visited twice.
#[derive(Debug)]
pub struct DepthFirstTraverser<T> {
    /// Start node, until it is opened.
    start: Option<Node<T>>,
    /// Opened nodes, with the index of the child to visit next.
    stack: Vec<(Node<T>, usize)>,
}

impl<T> Clone for DepthFirstTraverser<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            stack: self.stack.clone(),
        }
    }
}

impl<T> DepthFirstTraverser<T> {
    /// Creates a traverser from the opening of the given node.
    #[inline]
    #[must_use]
    pub fn with_start(start: Node<T>) -> Self {
        Self {
            start: Some(start),
            stack: Vec::new(),
        }
    }
}

impl<T> Iterator for DepthFirstTraverser<T> {
    type Item = DftEvent<Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.stack.push((start.clone(), 0));
            return Some(DftEvent::Open(start));
        }

        let (current, next_child_index) = self.stack.last_mut()?;
        let child = current.child_at(*next_child_index);
        match child {
            Some(child) => {
                *next_child_index += 1;
                self.stack.push((child.clone(), 0));
                Some(DftEvent::Open(child))
            }
            None => {
                let (current, _) = self.stack.pop()?;
                Some(DftEvent::Close(current))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.start.is_some() {
            // `Open` and `Close` of the start node at least.
            (2, None)
        } else {
            (self.stack.len(), None)
        }
    }
}

impl<T> iter::FusedIterator for DepthFirstTraverser<T> {}
