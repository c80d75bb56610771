//! Operations on collection nodes

use crate::error::{InternalError, SassResult};

use super::{nodes_equal, Node};

fn expect_collection<'a>(operation: &'static str, node: &'a Node) -> SassResult<&'a [Node]> {
    node.as_collection().ok_or_else(|| {
        InternalError::PreconditionViolation {
            operation,
            found: node.kind(),
        }
        .into()
    })
}

impl Node {
    /// Appends a copy of every node in `rhs` to the end of `self`.
    ///
    /// Both `self` and `rhs` must be collections. `rhs` is left untouched, and
    /// nested collections in it are appended as-is rather than flattened.
    pub fn plus(&mut self, rhs: &Node) -> SassResult<()> {
        let rhs = expect_collection("plus", rhs)?;
        let found = self.kind();

        match self.as_collection_mut() {
            Some(nodes) => {
                nodes.extend(rhs.iter().cloned());
                Ok(())
            }
            None => Err(InternalError::PreconditionViolation {
                operation: "plus",
                found,
            }
            .into()),
        }
    }

    /// Whether any element of `self` is equal to `potential_child`.
    ///
    /// `self` is expected to be a collection of candidate sequences, and
    /// `potential_child` a single sequence. If `simple_selector_order_dependent`
    /// is `false`, `.a.b` and `.b.a` are considered the same compound selector.
    ///
    /// An empty `potential_child` is never contained.
    pub fn contains(
        &self,
        potential_child: &Node,
        simple_selector_order_dependent: bool,
    ) -> SassResult<bool> {
        let candidates = expect_collection("contains", self)?;
        let sought = expect_collection("contains", potential_child)?;

        if sought.is_empty() {
            return Ok(false);
        }

        Ok(candidates.iter().any(|candidate| {
            nodes_equal(candidate, potential_child, simple_selector_order_dependent)
        }))
    }

    /// The number of nodes in this collection
    ///
    /// Returns `None` if this is not a collection.
    pub fn len(&self) -> Option<usize> {
        self.as_collection().map(<[Node]>::len)
    }

    /// Whether this collection has no nodes
    ///
    /// Returns `None` if this is not a collection.
    pub fn is_empty(&self) -> Option<bool> {
        self.as_collection().map(<[Node]>::is_empty)
    }
}
