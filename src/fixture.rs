//! Sample node payloads.
//!
//! These are small payload types used to build heterogeneous trees, mainly
//! for exercising the node API. The fields carry no behavior.
//!
//! ```
//! use sprig::fixture::{BlueFish, Fish, RedFish, TwoFish};
//! use sprig::Node;
//!
//! let root = Node::new(Fish::from(BlueFish));
//! let red = Node::new(Fish::from(RedFish::default()));
//! let two = Node::try_new_with(|| TwoFish::from_args(["one", "two"]).map(Fish::from))?;
//! root.add_child(&red)?;
//! root.add_child(&two)?;
//!
//! let kinds: Vec<_> = root.children().iter().map(|node| node.borrow_data().kind()).collect();
//! assert_eq!(kinds, ["RedFish", "TwoFish"]);
//! # Ok::<_, sprig::NodeError>(())
//! ```

use alloc::string::String;

use crate::node::{Node, NodeError};

/// A payload with a flag, and a marker set on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OneFish {
    /// Arbitrary flag, `false` initially.
    pub some_prop: bool,
    /// Always `true` for values created by [`OneFish::new`].
    pub was_constructor_called: bool,
}

impl OneFish {
    /// Creates a new `OneFish`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            some_prop: false,
            was_constructor_called: true,
        }
    }
}

impl Default for OneFish {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A payload that requires two arguments on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TwoFish {
    /// The first argument.
    pub first: String,
    /// The second argument.
    pub second: String,
    /// `false` initially.
    pub post_constructor_called: bool,
}

impl TwoFish {
    /// Creates a new `TwoFish`.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            post_constructor_called: false,
        }
    }

    /// Creates a new `TwoFish` from possibly missing arguments.
    ///
    /// # Failures
    ///
    /// Fails with [`NodeError::InvalidArgument`] if either argument is
    /// `None` or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::fixture::TwoFish;
    /// use sprig::NodeError;
    ///
    /// assert_eq!(TwoFish::try_new(Some("a"), Some("b")), Ok(TwoFish::new("a", "b")));
    /// assert_eq!(
    ///     TwoFish::try_new(Some("a"), None),
    ///     Err(NodeError::InvalidArgument("TwoFish constructor needs two args"))
    /// );
    /// ```
    pub fn try_new<S: Into<String>>(
        first: Option<S>,
        second: Option<S>,
    ) -> Result<Self, NodeError> {
        const MISSING: NodeError =
            NodeError::InvalidArgument("TwoFish constructor needs two args");

        let present = |arg: Option<S>| arg.map(Into::<String>::into).filter(|s| !s.is_empty());
        match (present(first), present(second)) {
            (Some(first), Some(second)) => Ok(Self::new(first, second)),
            _ => Err(MISSING),
        }
    }

    /// Creates a new `TwoFish` from the first two of the given arguments.
    ///
    /// Arguments after the second are ignored.
    ///
    /// # Failures
    ///
    /// Fails with [`NodeError::InvalidArgument`] if fewer than two arguments
    /// are given, or if any of the first two is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::fixture::TwoFish;
    /// use sprig::NodeError;
    ///
    /// assert!(TwoFish::from_args(["a", "b"]).is_ok());
    /// assert_eq!(
    ///     TwoFish::from_args(["a"]),
    ///     Err(NodeError::InvalidArgument("TwoFish constructor needs two args"))
    /// );
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Self, NodeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter();
        let first = args.next();
        Self::try_new(first, args.next())
    }
}

/// A payload with a numeric triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RedFish {
    /// `0` initially.
    pub x: i32,
    /// `1` initially.
    pub y: i32,
    /// `-1` initially.
    pub z: i32,
}

impl RedFish {
    /// Creates a new `RedFish` with the initial triple `(0, 1, -1)`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { x: 0, y: 1, z: -1 }
    }

    /// Sets the triple.
    #[inline]
    pub fn set_something(&mut self, x: i32, y: i32, z: i32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }
}

impl Default for RedFish {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A payload without fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlueFish;

/// Any of the sample payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fish {
    /// [`OneFish`].
    One(OneFish),
    /// [`TwoFish`].
    Two(TwoFish),
    /// [`RedFish`].
    Red(RedFish),
    /// [`BlueFish`].
    Blue(BlueFish),
}

impl Fish {
    /// Returns the name of the payload kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::One(_) => "OneFish",
            Self::Two(_) => "TwoFish",
            Self::Red(_) => "RedFish",
            Self::Blue(_) => "BlueFish",
        }
    }
}

/// Node constructors.
///
/// ```
/// use sprig::fixture::Fish;
///
/// let root = Fish::one_node();
/// root.add_child(&Fish::red_node())?;
/// root.add_child(&Fish::two_node(Some("a"), Some("b"))?)?;
/// root.add_child(&Fish::blue_node())?;
/// assert_eq!(root.num_children(), 3);
///
/// assert!(Fish::two_node(Some("a"), None).is_err());
/// # Ok::<_, sprig::NodeError>(())
/// ```
impl Fish {
    /// Creates a standalone node of a new [`OneFish`].
    #[inline]
    #[must_use]
    pub fn one_node() -> Node<Self> {
        Node::new(OneFish::new().into())
    }

    /// Creates a standalone node of a new [`TwoFish`].
    ///
    /// # Failures
    ///
    /// Fails with [`NodeError::InvalidArgument`] as [`TwoFish::try_new`]
    /// does. No node is created then.
    pub fn two_node<S: Into<String>>(
        first: Option<S>,
        second: Option<S>,
    ) -> Result<Node<Self>, NodeError> {
        Node::try_new_with(|| TwoFish::try_new(first, second).map(Self::from))
    }

    /// Creates a standalone node of a new [`RedFish`].
    #[inline]
    #[must_use]
    pub fn red_node() -> Node<Self> {
        Node::new(RedFish::new().into())
    }

    /// Creates a standalone node of [`BlueFish`].
    #[inline]
    #[must_use]
    pub fn blue_node() -> Node<Self> {
        Node::new(BlueFish.into())
    }
}

impl From<OneFish> for Fish {
    #[inline]
    fn from(v: OneFish) -> Self {
        Self::One(v)
    }
}

impl From<TwoFish> for Fish {
    #[inline]
    fn from(v: TwoFish) -> Self {
        Self::Two(v)
    }
}

impl From<RedFish> for Fish {
    #[inline]
    fn from(v: RedFish) -> Self {
        Self::Red(v)
    }
}

impl From<BlueFish> for Fish {
    #[inline]
    fn from(v: BlueFish) -> Self {
        Self::Blue(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec::Vec;

    #[test]
    fn initial_values() {
        let one = OneFish::new();
        assert!(!one.some_prop);
        assert!(one.was_constructor_called);

        let red = RedFish::default();
        assert_eq!((red.x, red.y, red.z), (0, 1, -1));
    }

    #[test]
    fn red_fish_set_something() {
        let mut red = RedFish::new();
        red.set_something(3, 4, 5);
        assert_eq!(red, RedFish { x: 3, y: 4, z: 5 });
    }

    #[test]
    fn two_fish_rejects_empty_argument() {
        assert!(matches!(
            TwoFish::from_args(["", "b"]),
            Err(NodeError::InvalidArgument(_))
        ));
        assert!(matches!(
            TwoFish::from_args(Vec::<String>::new()),
            Err(NodeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn two_fish_rejects_missing_argument() {
        for (first, second) in [(None, Some("b")), (Some("a"), None), (None, None)] {
            assert_eq!(
                TwoFish::try_new(first, second),
                Err(NodeError::InvalidArgument("TwoFish constructor needs two args"))
            );
            assert!(Fish::two_node(first, second).is_err());
        }
    }

    #[test]
    fn node_constructors_wrap_fresh_payloads() {
        let nodes = [
            Fish::one_node(),
            Fish::two_node(Some("a"), Some("b")).expect("two args are given"),
            Fish::red_node(),
            Fish::blue_node(),
        ];
        let kinds: Vec<_> = nodes.iter().map(|node| node.borrow_data().kind()).collect();
        assert_eq!(kinds, ["OneFish", "TwoFish", "RedFish", "BlueFish"]);
        assert!(nodes.iter().all(|node| node.is_root() && !node.has_children()));
    }

    #[test]
    fn two_fish_ignores_extra_arguments() {
        let two = TwoFish::from_args(["a", "b", "c"]).expect("two args are given");
        assert_eq!(two, TwoFish::new("a", "b"));
        assert!(!two.post_constructor_called);
    }
}
