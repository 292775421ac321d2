//! Tree traversals.

mod ancestors;
mod depth_first;

pub use self::ancestors::AncestorsTraverser;
pub use self::depth_first::{DepthFirstTraverser, DftEvent};
