//! Ordered tree node with parent back references.
//!
//! # Concepts
//!
//! ## Node
//!
//! A [`Node`] owns an ordered list of children, and refers its parent
//! weakly. Each node has at most one parent, and a node is in the child list
//! of a node if and only if its parent is that node.
//!
//! ```
//! use sprig::Node;
//!
//! let root = Node::new("root");
//! let a = Node::new("a");
//! let b = Node::new("b");
//! root.add_child(&a)?;
//! root.add_child(&b)?;
//! //  root
//! //  |-- a
//! //  `-- b
//!
//! assert_eq!(&*root.children(), &[a.clone(), b.clone()]);
//! assert_eq!(a.parent(), Some(root.clone()));
//!
//! // Adding a child to another node moves it.
//! b.add_child(&a)?;
//! //  root
//! //  `-- b
//! //      `-- a
//! assert_eq!(&*root.children(), &[b.clone()]);
//! assert_eq!(a.parent(), Some(b));
//! # Ok::<_, sprig::NodeError>(())
//! ```
//!
//! ## Reference counting
//!
//! A node keeps its descendants alive, but not its ancestors. Once the last
//! reference to a parent is dropped, the children become roots.
//!
//! ```
//! use sprig::Node;
//!
//! let root = Node::new("root");
//! let child = Node::new("child");
//! root.add_child(&child)?;
//!
//! drop(root);
//! assert!(child.is_root());
//! # Ok::<_, sprig::NodeError>(())
//! ```
//!
//! ## Destruction
//!
//! [`Node::destroy`] detaches the node from its parent, orphans the children,
//! and makes the node unusable. Editing a destroyed node fails with
//! [`NodeError::InvalidState`].
//!
//! ```
//! use sprig::{Node, NodeError};
//!
//! let root = Node::new("root");
//! let child = Node::new("child");
//! root.add_child(&child)?;
//!
//! child.destroy()?;
//! assert!(child.is_destroyed());
//! assert!(!root.has_children());
//! assert_eq!(child.add_child(&Node::new("new")), Err(NodeError::InvalidState));
//! # Ok::<_, sprig::NodeError>(())
//! ```
//!
//! Descendants are destroyed only by the explicit [`Node::destroy_subtree`].
//!
//! # Usage
//!
//! To create a tree directly, use [`tree_node!`].
//!
//! ```
//! use sprig::tree_node;
//!
//! let root = tree_node! {
//!     "root", [
//!         "0",
//!         /("1", [
//!             "1-0",
//!         ]),
//!     ]
//! };
//! assert_eq!(root.num_children(), 2);
//! ```
#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
// `clippy::missing_docs_in_private_items` implies `missing_docs`.
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod fixture;
pub mod node;
pub mod traverse;

pub use self::node::{Node, NodeError, NodeWeak};
