use std::fmt::{self, Display};

use crate::{
    error::{InternalError, SassResult},
    selector::{Combinator, CompoundSelector, SelectorChain},
    Context,
};

/// The working representation of a selector while it is being extended.
///
/// Weaving freely mixes bare compound selectors and combinators with nested
/// sequences of them, like `[.a, [">", .b]]`, and distinguishes a missing
/// sequence from an empty one. A `Node` can hold any of these shapes, nested
/// to any depth.
///
/// Unlike [`SelectorChain`], a combinator is its own node rather than being
/// attached to the compound selector before it.
#[derive(Clone, Debug)]
pub enum Node {
    /// A single compound selector, owned by this node
    Selector(CompoundSelector),

    Combinator(Combinator),

    /// An ordered sequence of nodes. Never flattened.
    Collection(Vec<Node>),

    /// The absence of a value. Distinct from an empty collection.
    Nil,
}

/// The variant of a [`Node`], without its payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Selector,
    Combinator,
    Collection,
    Nil,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Selector => "selector",
            Self::Combinator => "combinator",
            Self::Collection => "collection",
            Self::Nil => "nil",
        })
    }
}

impl Node {
    pub fn new_combinator(combinator: Combinator) -> Self {
        Self::Combinator(combinator)
    }

    /// Copies the first compound selector of `selector` into a new node.
    ///
    /// The rest of the chain, and the combinator joining it to the first link,
    /// are left behind.
    pub fn new_selector(selector: Option<&SelectorChain>, ctx: &Context) -> SassResult<Self> {
        match selector.and_then(|chain| chain.head.as_ref()) {
            Some(head) => Ok(Self::Selector(ctx.allocate(head))),
            None => Err(ctx.report(
                selector.and_then(SelectorChain::span),
                InternalError::NullInput.into(),
            )),
        }
    }

    pub fn new_collection() -> Self {
        Self::Collection(Vec::new())
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self::Collection(nodes)
    }

    pub fn nil() -> Self {
        Self::Nil
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Selector(..) => NodeKind::Selector,
            Self::Combinator(..) => NodeKind::Combinator,
            Self::Collection(..) => NodeKind::Collection,
            Self::Nil => NodeKind::Nil,
        }
    }

    pub fn is_selector(&self) -> bool {
        matches!(self, Self::Selector(..))
    }

    pub fn is_combinator(&self) -> bool {
        matches!(self, Self::Combinator(..))
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(..))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    pub fn as_selector(&self) -> Option<&CompoundSelector> {
        match self {
            Self::Selector(compound) => Some(compound),
            _ => None,
        }
    }

    pub fn as_selector_mut(&mut self) -> Option<&mut CompoundSelector> {
        match self {
            Self::Selector(compound) => Some(compound),
            _ => None,
        }
    }

    pub fn as_combinator(&self) -> Option<Combinator> {
        match self {
            Self::Combinator(combinator) => Some(*combinator),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[Node]> {
        match self {
            Self::Collection(nodes) => Some(nodes),
            _ => None,
        }
    }

    pub fn as_collection_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Collection(nodes) => Some(nodes),
            _ => None,
        }
    }

    /// Deep copies this node, allocating fresh compound selectors through
    /// `ctx`
    pub fn clone_in(&self, ctx: &Context) -> Self {
        match self {
            Self::Selector(compound) => Self::Selector(ctx.allocate(compound)),
            Self::Combinator(combinator) => Self::Combinator(*combinator),
            Self::Collection(nodes) => {
                Self::Collection(nodes.iter().map(|node| node.clone_in(ctx)).collect())
            }
            Self::Nil => Self::Nil,
        }
    }
}

/// Structural equality of `one` and `two`.
///
/// If `simple_selector_order_dependent` is `false`, compound selectors are
/// compared as sets of simple selectors, so `.a.b` equals `.b.a`. The order of
/// nodes within a collection always matters.
pub fn nodes_equal(one: &Node, two: &Node, simple_selector_order_dependent: bool) -> bool {
    match (one, two) {
        (Node::Selector(a), Node::Selector(b)) => {
            if simple_selector_order_dependent {
                a == b
            } else {
                a.is_equivalent(b)
            }
        }
        (Node::Combinator(a), Node::Combinator(b)) => a == b,
        (Node::Collection(a), Node::Collection(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .zip(b)
                    .all(|(a, b)| nodes_equal(a, b, simple_selector_order_dependent))
        }
        (Node::Nil, Node::Nil) => true,
        _ => false,
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        nodes_equal(self, other, true)
    }
}

impl Eq for Node {}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(compound) => write!(f, "{}", compound),
            Self::Combinator(combinator) => write!(f, "\"{}\"", combinator),
            Self::Collection(nodes) => {
                f.write_str("[")?;
                for (idx, node) in nodes.iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", node)?;
                }
                f.write_str("]")
            }
            Self::Nil => f.write_str("nil"),
        }
    }
}
