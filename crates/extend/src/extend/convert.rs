//! Conversion between [`SelectorChain`]s and [`Node`]s.
//!
//! A chain becomes a flat collection in which selectors and combinators
//! alternate: `.a > .b .c` is `[.a, ">", .b, " ", .c]`. Descendant combinators
//! between two selectors are explicit.
//!
//! A chain that starts with a combinator, like `> .a`, starts its collection
//! with that combinator, even if it is a descendant combinator. A trailing
//! combinator, like the one in `.a >`, ends the collection. A descendant
//! combinator is never the last node of a collection, since it could not be
//! told apart from the end of the chain.

use crate::{
    error::{InternalError, SassResult},
    selector::{Combinator, CompoundSelector, SelectorChain},
    Context,
};

use super::Node;

/// Converts `chain` into a flat collection of alternating selectors and
/// combinators.
///
/// Fails if a link other than the first has no compound selector, which would
/// put two combinators next to one another.
pub fn chain_to_node(chain: &SelectorChain, ctx: &Context) -> SassResult<Node> {
    let mut nodes = Vec::new();

    for (idx, link) in chain.links().enumerate() {
        match &link.head {
            Some(head) => nodes.push(Node::Selector(ctx.allocate(head))),
            None if idx == 0 => {}
            None => {
                return Err(ctx.report(
                    chain.span(),
                    InternalError::MalformedChain(format!(
                        "link {} of `{}` has no compound selector",
                        idx + 1,
                        chain
                    ))
                    .into(),
                ))
            }
        }

        if link.tail.is_some() || link.combinator != Combinator::Descendant {
            nodes.push(Node::Combinator(link.combinator));
        }
    }

    let node = Node::Collection(nodes);

    ctx.trace(chain.span(), || format!("`{}` => {}", chain, node));

    Ok(node)
}

/// Like [`chain_to_node`], but an absent chain becomes [`Node::Nil`]
pub fn optional_chain_to_node(chain: Option<&SelectorChain>, ctx: &Context) -> SassResult<Node> {
    match chain {
        Some(chain) => chain_to_node(chain, ctx),
        None => Ok(Node::Nil),
    }
}

/// Rebuilds a selector chain from a collection produced by [`chain_to_node`],
/// or one of the same shape.
///
/// Fails unless `node` is a flat collection of strictly alternating selectors
/// and combinators that does not end in a descendant combinator.
pub fn node_to_chain(node: &Node, ctx: &Context) -> SassResult<SelectorChain> {
    let chain = build_chain(node, ctx)
        .map_err(|reason| ctx.report(None, InternalError::MalformedChain(reason).into()))?;

    ctx.trace(None, || format!("{} => `{}`", node, chain));

    Ok(chain)
}

fn build_chain(node: &Node, ctx: &Context) -> Result<SelectorChain, String> {
    let nodes = match node {
        Node::Collection(nodes) => nodes,
        other => return Err(format!("expected a collection, found {}", other.kind())),
    };

    let mut links: Vec<(Option<CompoundSelector>, Combinator)> = Vec::new();
    let mut iter = nodes.iter().peekable();

    // whether the last node consumed was a combinator
    let mut ends_in_combinator = false;

    if let Some(Node::Combinator(combinator)) = iter.peek() {
        links.push((None, *combinator));
        ends_in_combinator = true;
        iter.next();
    }

    while let Some(next) = iter.next() {
        let compound = match next {
            Node::Selector(compound) => ctx.allocate(compound),
            other => {
                return Err(format!(
                    "expected a selector at position {}, found {}",
                    nodes.len() - iter.len(),
                    other.kind()
                ))
            }
        };

        match iter.next() {
            Some(Node::Combinator(combinator)) => {
                links.push((Some(compound), *combinator));
                ends_in_combinator = true;
            }
            Some(other) => {
                return Err(format!(
                    "expected a combinator at position {}, found {}",
                    nodes.len() - iter.len(),
                    other.kind()
                ))
            }
            None => {
                links.push((Some(compound), Combinator::Descendant));
                ends_in_combinator = false;
            }
        }
    }

    if ends_in_combinator && matches!(links.last(), Some((_, Combinator::Descendant))) {
        return Err("a descendant combinator must be followed by a selector".to_owned());
    }

    Ok(SelectorChain::from_links(links))
}
