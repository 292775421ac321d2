//! Tests for adding, looking up, replacing, and removing children.

use std::panic::{self, AssertUnwindSafe};

use rstest::{fixture, rstest};
use sprig::{Node, NodeError};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Another test may have installed the subscriber already.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Root with children `a` and `b`.
struct Family {
    root: Node<&'static str>,
    a: Node<&'static str>,
    b: Node<&'static str>,
}

#[fixture]
fn family() -> Family {
    init_tracing();
    let root = Node::new("root");
    let a = Node::new("a");
    let b = Node::new("b");
    root.add_child(&a).expect("should success");
    root.add_child(&b).expect("should success");
    //  root
    //  |-- a
    //  `-- b
    Family { root, a, b }
}

fn names(node: &Node<&'static str>) -> Vec<&'static str> {
    node.children()
        .iter()
        .map(|child| *child.borrow_data())
        .collect()
}

#[rstest]
fn add_children_in_order(family: Family) {
    let Family { root, a, b } = family;

    assert_eq!(&*root.children(), &[a.clone(), b.clone()]);
    assert_eq!(a.parent(), Some(root.clone()));
    assert_eq!(b.parent(), Some(root.clone()));
    assert_eq!(root.child_index(&a), Ok(0));
    assert_eq!(root.child_index(&b), Ok(1));
    assert_eq!(root.first_child(), Some(a));
    assert_eq!(root.last_child(), Some(b));
}

#[rstest]
fn child_index_of_stranger(family: Family) {
    let stranger = Node::new("stranger");
    assert_eq!(family.root.child_index(&stranger), Err(NodeError::NotFound));
    // Grandchildren are not children.
    let grandchild = Node::new("grandchild");
    family.a.add_child(&grandchild).expect("should success");
    assert_eq!(family.root.child_index(&grandchild), Err(NodeError::NotFound));
}

#[rstest]
fn child_index_uses_identity() {
    let root = Node::new("same");
    let child = Node::new("same");
    let twin = Node::new("same");
    root.add_child(&child).expect("should success");

    assert_eq!(root.child_index(&child), Ok(0));
    assert_eq!(root.child_index(&twin), Err(NodeError::NotFound));
}

#[rstest]
fn remove_child_at_returns_removed(family: Family) {
    let Family { root, a, b } = family;

    let removed = root.remove_child_at(0).expect("index 0 is valid");
    assert_eq!(removed, a);
    assert_eq!(&*root.children(), &[b]);
    assert_eq!(a.parent(), None);
    assert!(a.is_root());
}

#[rstest]
#[case(2, 2)]
#[case(5, 2)]
#[case(usize::MAX, 2)]
fn remove_child_at_out_of_range(family: Family, #[case] index: usize, #[case] len: usize) {
    let err = family
        .root
        .remove_child_at(index)
        .expect_err("index should be out of range");
    assert_eq!(err, NodeError::IndexOutOfRange { index, len });
    assert!(err.to_string().contains(&index.to_string()));
    assert_eq!(family.root.num_children(), 2);
}

#[rstest]
fn remove_child_twice(family: Family) {
    let Family { root, a, b } = family;

    assert_eq!(root.remove_child(&a), Ok(()));
    assert_eq!(root.remove_child(&a), Err(NodeError::NotFound));
    assert_eq!(&*root.children(), &[b]);
}

#[rstest]
fn child_at_is_permissive(family: Family) {
    assert_eq!(family.root.child_at(1), Some(family.b.clone()));
    assert_eq!(family.root.child_at(2), None);
    assert_eq!(
        family.root.try_child_at(2),
        Err(NodeError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(family.root.try_child_at(0), Ok(family.a));
}

#[rstest]
fn replace_child_keeps_length(family: Family) {
    let Family { root, a, b } = family;
    let c = Node::new("c");

    let replaced = root.replace_child_at(&c, 0).expect("index 0 is valid");
    assert_eq!(replaced, a);
    assert_eq!(&*root.children(), &[c.clone(), b]);
    assert_eq!(root.child_at(0), Some(c.clone()));
    assert_eq!(c.parent(), Some(root));
    assert_eq!(a.parent(), None);
}

#[rstest]
#[case(2)]
#[case(5)]
fn replace_child_out_of_range(family: Family, #[case] index: usize) {
    let c = Node::new("c");
    assert_eq!(
        family.root.replace_child_at(&c, index),
        Err(NodeError::IndexOutOfRange { index, len: 2 })
    );
    assert!(c.is_root());
    assert_eq!(names(&family.root), ["a", "b"]);
}

#[rstest]
fn replace_child_with_itself(family: Family) {
    let Family { root, a, b } = family;

    assert_eq!(root.replace_child_at(&b, 1), Ok(b.clone()));
    assert_eq!(&*root.children(), &[a, b.clone()]);
    assert_eq!(b.parent(), Some(root));
}

#[rstest]
#[case::preceding(0, 2, ["c", "b", "a"])]
#[case::following(2, 0, ["c", "b", "a"])]
#[case::adjacent(1, 2, ["a", "c", "b"])]
fn replace_child_with_sibling_swaps(
    #[case] sibling_index: usize,
    #[case] index: usize,
    #[case] expected: [&'static str; 3],
) {
    let root = sprig::tree_node! { "root", ["a", "b", "c"] };
    let sibling = root.child_at(sibling_index).expect("should have a child");
    let old_child = root.child_at(index).expect("should have a child");

    let replaced = root
        .replace_child_at(&sibling, index)
        .expect("index is valid");
    assert_eq!(replaced, old_child);
    assert_eq!(root.num_children(), 3);
    assert_eq!(root.child_at(index), Some(sibling.clone()));
    assert_eq!(root.child_at(sibling_index), Some(old_child.clone()));
    assert_eq!(names(&root), expected);
    // Both stay children of `root`.
    assert_eq!(sibling.parent(), Some(root.clone()));
    assert_eq!(old_child.parent(), Some(root));
}

#[rstest]
fn replace_child_moves_from_other_parent(family: Family) {
    let other = Node::new("other");
    let c = Node::new("c");
    other.add_child(&c).expect("should success");

    family
        .root
        .replace_child_at(&c, 1)
        .expect("index 1 is valid");
    assert!(!other.has_children());
    assert_eq!(c.parent(), Some(family.root.clone()));
    assert_eq!(names(&family.root), ["a", "c"]);
}

#[rstest]
fn add_child_moves_between_parents(family: Family) {
    let Family { root, a, b } = family;

    b.add_child(&a).expect("should success");
    //  root
    //  `-- b
    //      `-- a
    assert_eq!(&*root.children(), &[b.clone()]);
    assert_eq!(&*b.children(), &[a.clone()]);
    assert_eq!(a.parent(), Some(b));
    assert_eq!(a.root(), root);
}

#[rstest]
fn add_existing_child_moves_it_to_end(family: Family) {
    let Family { root, a, b } = family;

    root.add_child(&a).expect("should success");
    assert_eq!(&*root.children(), &[b, a]);
}

#[rstest]
fn add_child_rejects_loops(family: Family) {
    let Family { root, a, .. } = family;
    let grandchild = Node::new("grandchild");
    a.add_child(&grandchild).expect("should success");

    assert_eq!(root.add_child(&root), Err(NodeError::AncestorDescendantLoop));
    assert_eq!(a.add_child(&root), Err(NodeError::AncestorDescendantLoop));
    assert_eq!(
        grandchild.add_child(&root),
        Err(NodeError::AncestorDescendantLoop)
    );
    assert_eq!(
        grandchild.replace_child_at(&root, 0),
        Err(NodeError::IndexOutOfRange { index: 0, len: 0 })
    );
    // Nothing changed.
    assert!(root.is_root());
    assert_eq!(names(&root), ["a", "b"]);
    assert_eq!(grandchild.parent(), Some(a));
}

#[rstest]
fn replace_child_rejects_loops() {
    let root = sprig::tree_node! { "root", [/("a", ["a-0"])] };
    let a = root.child_at(0).expect("should have a child");

    assert_eq!(
        a.replace_child_at(&root, 0),
        Err(NodeError::AncestorDescendantLoop)
    );
    assert_eq!(a.replace_child_at(&a, 0), Err(NodeError::AncestorDescendantLoop));
}

#[rstest]
fn detach_makes_root(family: Family) {
    let Family { root, a, b } = family;

    a.detach().expect("should success");
    assert!(a.is_root());
    assert_eq!(&*root.children(), &[b]);
    // Detaching a root does nothing.
    assert_eq!(a.detach(), Ok(()));
}

#[rstest]
fn ancestors_up_to_root() {
    let root = sprig::tree_node! { "root", [/("0", [/("0-0", ["0-0-0"])])] };
    let leaf = root
        .depth_first_traverse()
        .filter_map(|ev| ev.into_open())
        .last()
        .expect("should have nodes");

    let names: Vec<_> = leaf
        .ancestors_or_self()
        .map(|node| *node.borrow_data())
        .collect();
    assert_eq!(names, ["0-0-0", "0-0", "0", "root"]);
    assert_eq!(leaf.root(), root);
    assert_eq!(root.root(), root);
}

#[rstest]
fn weak_reference_does_not_keep_node() {
    let root = Node::new("root");
    let child = Node::new("child");
    root.add_child(&child).expect("should success");
    let weak = child.downgrade();
    drop(child);

    // The parent owns the child.
    let upgraded = weak.upgrade().expect("the child is owned by `root`");
    assert_eq!(upgraded.parent(), Some(root.clone()));
    drop(upgraded);

    root.remove_child_at(0).expect("should success");
    assert!(weak.upgrade().is_none());
}

#[rstest]
#[should_panic]
fn edit_during_children_borrow_panics(family: Family) {
    let children = family.root.children();
    let _ = family.root.add_child(&Node::new("c"));
    drop(children);
}

#[rstest]
fn add_child_under_borrowed_parent_changes_nothing(family: Family) {
    let Family { root, a, b } = family;
    let other = Node::new("other");

    let view = other.children();
    let res = panic::catch_unwind(AssertUnwindSafe(|| other.add_child(&a)));
    drop(view);

    assert!(res.is_err(), "editing borrowed children should panic");
    assert_eq!(a.parent(), Some(root.clone()));
    assert_eq!(&*root.children(), &[a, b]);
    assert!(!other.has_children());
}

#[rstest]
fn replace_with_borrowed_new_child_changes_nothing(family: Family) {
    let Family { root, a, b } = family;
    let other = Node::new("other");
    let c = Node::new("c");
    other.add_child(&c).expect("should success");

    let view = c.children();
    let res = panic::catch_unwind(AssertUnwindSafe(|| root.replace_child_at(&c, 0)));
    drop(view);

    assert!(res.is_err(), "editing borrowed children should panic");
    assert_eq!(c.parent(), Some(other.clone()));
    assert_eq!(&*other.children(), &[c]);
    assert_eq!(&*root.children(), &[a.clone(), b]);
    assert_eq!(a.parent(), Some(root));
}
