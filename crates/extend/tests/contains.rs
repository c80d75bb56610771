
use grass_extend::{Combinator, Context, InternalError, Node, NodeKind};
use macros::{compound, quiet_options, sequence};

#[test]
fn simple_selector_order_dependent() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let candidates = Node::from_nodes(vec![Node::from_nodes(vec![compound(&mut ctx, ".a.b")])]);
    let sought = Node::from_nodes(vec![compound(&mut ctx, ".b.a")]);

    assert!(!candidates.contains(&sought, true).unwrap());
}

#[test]
fn simple_selector_order_independent() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let candidates = Node::from_nodes(vec![Node::from_nodes(vec![compound(&mut ctx, ".a.b")])]);
    let sought = Node::from_nodes(vec![compound(&mut ctx, ".b.a")]);

    assert!(candidates.contains(&sought, false).unwrap());
}

#[test]
fn exact_match() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let sought = Node::from_nodes(vec![
        compound(&mut ctx, ".a"),
        Node::new_combinator(Combinator::Descendant),
        compound(&mut ctx, ".b"),
    ]);
    let candidates = Node::from_nodes(vec![sequence(&mut ctx, ".a .b")]);

    assert!(candidates.contains(&sought, true).unwrap());
    assert!(candidates.contains(&sought, false).unwrap());
}

#[test]
fn finds_match_among_many_candidates() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let candidates = Node::from_nodes(vec![
        sequence(&mut ctx, ".a > .b"),
        sequence(&mut ctx, ".c"),
        sequence(&mut ctx, ".d ~ .e.f"),
    ]);

    assert!(candidates
        .contains(&sequence(&mut ctx, ".d ~ .e.f"), true)
        .unwrap());
    assert!(candidates
        .contains(&sequence(&mut ctx, ".d ~ .f.e"), false)
        .unwrap());
    assert!(!candidates
        .contains(&sequence(&mut ctx, ".d ~ .f.e"), true)
        .unwrap());
    assert!(!candidates
        .contains(&sequence(&mut ctx, ".e"), false)
        .unwrap());
}

#[test]
fn combinators_remain_significant() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let candidates = Node::from_nodes(vec![sequence(&mut ctx, ".a > .b")]);

    assert!(!candidates
        .contains(&sequence(&mut ctx, ".a + .b"), false)
        .unwrap());
    assert!(!candidates
        .contains(&sequence(&mut ctx, ".a .b"), false)
        .unwrap());
}

#[test]
fn sequence_order_remains_significant() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let candidates = Node::from_nodes(vec![sequence(&mut ctx, ".a .b")]);

    assert!(!candidates
        .contains(&sequence(&mut ctx, ".b .a"), false)
        .unwrap());
}

#[test]
fn empty_sought_sequence_never_matches() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let candidates = Node::from_nodes(vec![Node::new_collection(), sequence(&mut ctx, ".a")]);

    assert!(!candidates.contains(&Node::new_collection(), false).unwrap());
    assert!(!candidates.contains(&Node::new_collection(), true).unwrap());
}

#[test]
fn empty_candidates_contain_nothing() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    assert!(!Node::new_collection()
        .contains(&sequence(&mut ctx, ".a"), true)
        .unwrap());
}

#[test]
fn lengths_must_match() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let candidates = Node::from_nodes(vec![sequence(&mut ctx, ".a > .b")]);

    assert!(!candidates.contains(&sequence(&mut ctx, ".a"), false).unwrap());
    assert!(!candidates
        .contains(&sequence(&mut ctx, ".a > .b > .c"), false)
        .unwrap());
}

#[test]
fn nil_matches_only_nil() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let candidates = Node::from_nodes(vec![
        Node::from_nodes(vec![Node::nil(), compound(&mut ctx, ".a")]),
        Node::from_nodes(vec![Node::new_collection(), compound(&mut ctx, ".b")]),
    ]);

    assert!(candidates
        .contains(
            &Node::from_nodes(vec![Node::nil(), compound(&mut ctx, ".a")]),
            true
        )
        .unwrap());
    assert!(!candidates
        .contains(
            &Node::from_nodes(vec![Node::new_collection(), compound(&mut ctx, ".a")]),
            false
        )
        .unwrap());
    assert!(!candidates
        .contains(
            &Node::from_nodes(vec![Node::nil(), compound(&mut ctx, ".b")]),
            false
        )
        .unwrap());
}

#[test]
fn nested_collections_relax_order_too() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let candidates = Node::from_nodes(vec![Node::from_nodes(vec![
        Node::from_nodes(vec![compound(&mut ctx, ".a.b")]),
        Node::new_combinator(Combinator::Child),
    ])]);
    let sought = Node::from_nodes(vec![
        Node::from_nodes(vec![compound(&mut ctx, ".b.a")]),
        Node::new_combinator(Combinator::Child),
    ]);

    assert!(candidates.contains(&sought, false).unwrap());
    assert!(!candidates.contains(&sought, true).unwrap());
}

#[test]
fn self_must_be_collection() {
    let options = quiet_options();
    let mut ctx = Context::new(&options);

    let err = compound(&mut ctx, ".a")
        .contains(&sequence(&mut ctx, ".a"), true)
        .unwrap_err();

    assert_eq!(
        err.as_internal(),
        Some(&InternalError::PreconditionViolation {
            operation: "contains",
            found: NodeKind::Selector,
        })
    );
}

#[test]
fn sought_must_be_collection() {
    let err = Node::from_nodes(vec![Node::nil()])
        .contains(&Node::nil(), true)
        .unwrap_err();

    assert_eq!(
        err.as_internal(),
        Some(&InternalError::PreconditionViolation {
            operation: "contains",
            found: NodeKind::Nil,
        })
    );
}
