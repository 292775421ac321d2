//! Macros.

/// A macro that evaluates to the root node of a new tree.
///
/// A leaf is written as an expression, and a node with children is written
/// as `/(data, [children...])`.
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
///             "0-1",
///         ]),
///         "1",
///         /("2", [
///             /("2-0", [
///                 "2-0-0",
///             ]),
///         ]),
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
///                 Open("0-1"),
///                 Close("0-1"),
///             Close("0"),
///             Open("1"),
///             Close("1"),
///             Open("2"),
///                 Open("2-0"),
///                     Open("2-0-0"),
///                     Close("2-0-0"),
///                 Close("2-0"),
///             Close("2"),
///         Close("root"),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! tree_node {
    (@@append_child, $parent:ident, []) => {};
    (@@append_child, $parent:ident, [/($data:expr, [$($descendants:tt)*]) $(, $($rest:tt)*)?]) => {{
        let node = $crate::tree_node!($data, [$($descendants)*]);
        $parent
            .add_child(&node)
            .expect("[consistency] a new node can always be appended");
        $crate::tree_node!(@@append_child, $parent, [$($($rest)*)?]);
    }};
    (@@append_child, $parent:ident, [$data:expr $(, $($rest:tt)*)?]) => {{
        let node = $crate::Node::new($data);
        $parent
            .add_child(&node)
            .expect("[consistency] a new node can always be appended");
        $crate::tree_node!(@@append_child, $parent, [$($($rest)*)?]);
    }};
    () => {
        compile_error!("tree should have a root node")
    };
    ($data:expr) => {
        $crate::Node::new($data)
    };
    ($data:expr, [$($children:tt)*]) => {{
        let root = $crate::Node::new($data);
        $crate::tree_node!(@@append_child, root, [$($children)*]);
        root
    }};
}
