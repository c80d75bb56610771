
use grass_extend::{
    nodes_equal, Combinator, CompoundSelector, Context, InternalError, Node, NodeKind,
    SelectorChain, SimpleSelector,
};
use macros::{compound, quiet_options, sequence};

#[test]
fn nil_equals_nil() {
    assert_eq!(Node::nil(), Node::nil());
}

#[test]
fn empty_collection_is_not_collection_of_nil() {
    assert_ne!(
        Node::from_nodes(Vec::new()),
        Node::from_nodes(vec![Node::nil()])
    );
}

#[test]
fn nil_is_not_empty_collection() {
    assert_ne!(Node::nil(), Node::new_collection());
    assert_eq!(Node::new_collection().is_empty(), Some(true));
    assert_eq!(Node::nil().is_empty(), None);
}

#[test]
fn new_collection_is_empty() {
    assert_eq!(Node::new_collection(), Node::from_nodes(Vec::new()));
    assert_eq!(Node::new_collection().len(), Some(0));
}

#[test]
fn len_and_is_empty_only_apply_to_collections() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let node = sequence(&mut ctx, ".a > .b");
    assert_eq!(node.len(), Some(3));
    assert_eq!(node.is_empty(), Some(false));

    for node in [
        compound(&mut ctx, ".a"),
        Node::new_combinator(Combinator::Child),
        Node::nil(),
    ] {
        assert_eq!(node.len(), None, "{}", node);
        assert_eq!(node.is_empty(), None, "{}", node);
    }
}

#[test]
fn from_nodes_keeps_order_and_duplicates() {
    let node = Node::from_nodes(vec![
        Node::new_combinator(Combinator::Child),
        Node::nil(),
        Node::new_combinator(Combinator::Child),
    ]);

    let nodes = node.as_collection().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0].as_combinator(), Some(Combinator::Child));
    assert!(nodes[1].is_nil());
    assert_eq!(nodes[2].as_combinator(), Some(Combinator::Child));
}

#[test]
fn different_kinds_are_never_equal() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let nodes = vec![
        compound(&mut ctx, ".a"),
        Node::new_combinator(Combinator::Descendant),
        Node::new_collection(),
        Node::nil(),
    ];

    for (i, a) in nodes.iter().enumerate() {
        for (j, b) in nodes.iter().enumerate() {
            assert_eq!(i == j, a == b, "{} == {}", a, b);
            assert_eq!(i == j, nodes_equal(a, b, false), "{} == {}", a, b);
        }
    }
}

#[test]
fn combinators_compare_by_kind() {
    assert_eq!(
        Node::new_combinator(Combinator::NextSibling),
        Node::new_combinator(Combinator::NextSibling)
    );
    assert_ne!(
        Node::new_combinator(Combinator::NextSibling),
        Node::new_combinator(Combinator::FollowingSibling)
    );
    assert_ne!(
        Node::new_combinator(Combinator::Descendant),
        Node::new_combinator(Combinator::Child)
    );
}

#[test]
fn selectors_compare_by_value() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let a = compound(&mut ctx, "a.b[c=d]:hover");
    let b = compound(&mut ctx, "a.b[c=\"d\"]:hover");
    let c = compound(&mut ctx, "a.b[c=e]:hover");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn selector_order_is_significant_by_default() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let ab = compound(&mut ctx, ".a.b");
    let ba = compound(&mut ctx, ".b.a");

    assert_ne!(ab, ba);
    assert!(!nodes_equal(&ab, &ba, true));
    assert!(nodes_equal(&ab, &ba, false));
}

#[test]
fn collection_order_is_significant() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let a = compound(&mut ctx, ".a");
    let b = compound(&mut ctx, ".b");

    let ab = Node::from_nodes(vec![a.clone(), b.clone()]);
    let ba = Node::from_nodes(vec![b, a]);

    assert_ne!(ab, ba);
    assert!(!nodes_equal(&ab, &ba, false));
}

#[test]
fn collection_length_is_significant() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let a = compound(&mut ctx, ".a");

    assert_ne!(
        Node::from_nodes(vec![a.clone()]),
        Node::from_nodes(vec![a.clone(), a])
    );
}

#[test]
fn nested_collections_are_not_flattened() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let a = compound(&mut ctx, ".a");

    let flat = Node::from_nodes(vec![a.clone()]);
    let nested = Node::from_nodes(vec![Node::from_nodes(vec![a])]);

    assert_ne!(flat, nested);
    assert_eq!(nested.to_string(), "[[.a]]");
}

#[test]
fn equality_is_symmetric_and_transitive() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let a = sequence(&mut ctx, ".a.b > .c");
    let b = sequence(&mut ctx, ".b.a > .c");
    let c = sequence(&mut ctx, ".a.b > .c");

    assert_eq!(a, a);
    assert_eq!(a, c);
    assert_eq!(c, a);

    for order_dependent in [true, false] {
        let ab = nodes_equal(&a, &b, order_dependent);
        let bc = nodes_equal(&b, &c, order_dependent);
        assert_eq!(ab, nodes_equal(&b, &a, order_dependent));
        if ab && bc {
            assert!(nodes_equal(&a, &c, order_dependent));
        }
    }
}

#[test]
fn new_selector_drops_tail_and_combinator() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let chain = ctx.parse_chain(".a.b > .c ~ .d").unwrap();
    let node = Node::new_selector(Some(&chain), &ctx).unwrap();

    assert_eq!(node.kind(), NodeKind::Selector);
    assert_eq!(node.to_string(), ".a.b");
}

#[test]
fn new_selector_requires_a_selector() {
    let options = quiet_options();
    let ctx = Context::new(&options);

    let err = Node::new_selector(None, &ctx).unwrap_err();
    assert!(err.is_internal());
    assert_eq!(err.as_internal(), Some(&InternalError::NullInput));
}

#[test]
fn new_selector_requires_a_head() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let chain = ctx.parse_chain("> .a").unwrap();
    let err = Node::new_selector(Some(&chain), &ctx).unwrap_err();
    assert_eq!(err.as_internal(), Some(&InternalError::NullInput));
}

#[test]
fn new_selector_is_independent_of_chain() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let mut chain = ctx.parse_chain(".a").unwrap();
    let node = Node::new_selector(Some(&chain), &ctx).unwrap();

    chain
        .head
        .as_mut()
        .unwrap()
        .components
        .push(SimpleSelector::class("b"));

    assert_eq!(chain.to_string(), ".a.b");
    assert_eq!(node.to_string(), ".a");
}

#[test]
fn clone_is_independent_of_source() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let source = Node::from_nodes(vec![
        compound(&mut ctx, ".a"),
        Node::from_nodes(vec![compound(&mut ctx, ".b"), Node::nil()]),
    ]);
    let mut clone = source.clone_in(&ctx);
    assert_eq!(source, clone);

    let inner = &mut clone.as_collection_mut().unwrap()[1];
    inner.as_collection_mut().unwrap()[0]
        .as_selector_mut()
        .unwrap()
        .components
        .push(SimpleSelector::id("c"));
    clone
        .as_collection_mut()
        .unwrap()
        .push(Node::new_combinator(Combinator::Child));

    assert_eq!(source.to_string(), "[.a, [.b, nil]]");
    assert_eq!(clone.to_string(), "[.a, [.b#c, nil], \">\"]");
}

#[test]
fn clone_allocates_through_context() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let node = Node::from_nodes(vec![
        compound(&mut ctx, ".a"),
        Node::new_combinator(Combinator::Child),
        Node::from_nodes(vec![compound(&mut ctx, ".b"), Node::nil()]),
    ]);

    let before = ctx.allocations();
    let _ = node.clone_in(&ctx);
    assert_eq!(ctx.allocations(), before + 2);
}

#[test]
fn display() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let node = Node::from_nodes(vec![
        Node::nil(),
        sequence(&mut ctx, "a.b > c"),
        Node::new_combinator(Combinator::Descendant),
        Node::new_collection(),
    ]);

    assert_eq!(node.to_string(), "[nil, [a.b, \">\", c], \" \", []]");
}

#[test]
fn selector_nodes_hold_compound_selectors() {
    let node = Node::Selector(CompoundSelector::new(vec![
        SimpleSelector::type_selector("a"),
        SimpleSelector::placeholder("b"),
    ]));

    assert_eq!(node.as_selector().unwrap().components.len(), 2);
    assert_eq!(node.to_string(), "a%b");
    assert!(SelectorChain::empty().is_empty());
}
