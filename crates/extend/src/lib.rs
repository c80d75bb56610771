/*!
The selector data model used by grass to implement `@extend`.

Extending a selector means weaving together the selectors it appears in with
the selectors that extend it. The weaving algorithm builds intermediate
results that are shaped very differently from a selector: nested sequences of
sequences, bare combinators, and explicit "nothing" values. This crate provides
[`Node`], a tree that can represent all of those shapes, along with its
operations and the conversion to and from [`SelectorChain`].

```
# use grass_extend as extend;
fn main() -> Result<(), Box<extend::Error>> {
    let options = extend::Options::default();
    let mut ctx = extend::Context::new(&options);

    let chain = ctx.parse_chain(".a > .b")?;
    let node = extend::chain_to_node(&chain, &ctx)?;
    assert_eq!(node.to_string(), "[.a, \">\", .b]");

    let mut candidates = extend::Node::new_collection();
    candidates.plus(&extend::Node::from_nodes(vec![node.clone()]))?;
    assert!(candidates.contains(&node, true)?);

    assert_eq!(extend::node_to_chain(&node, &ctx)?, chain);
    Ok(())
}
```
*/

#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    clippy::new_without_default,
    clippy::single_match_else,
    clippy::multiple_crate_versions,
    unknown_lints,
)]

pub use crate::context::Context;
pub use crate::error::{
    InternalError, PublicSassErrorKind as ErrorKind, SassError as Error, SassResult as Result,
};
pub use crate::extend::{
    chain_to_node, node_to_chain, nodes_equal, optional_chain_to_node, Node, NodeKind,
};
pub use crate::interner::Identifier;
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::Options;
pub use crate::selector::{
    Attribute, AttributeOp, Combinator, CompoundSelector, Links, Namespace, Pseudo,
    QualifiedName, SelectorChain, SimpleSelector,
};

pub use codemap;

mod context;
mod error;
mod extend;
mod interner;
mod lexer;
mod logger;
mod options;
mod parse;
mod selector;
mod utils;
