#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let options = grass_extend::Options::default().quiet(true);
        let mut ctx = grass_extend::Context::new(&options);

        let chain = match ctx.parse_chain(s) {
            Ok(chain) => chain,
            Err(..) => return,
        };

        let node = grass_extend::chain_to_node(&chain, &ctx)
            .expect("parsed chains always convert to nodes");
        let rebuilt = grass_extend::node_to_chain(&node, &ctx)
            .expect("converted nodes always convert back to chains");

        if chain != rebuilt {
            panic!("`{}` came back as `{}`", chain, rebuilt);
        }

        let found = grass_extend::Node::from_nodes(vec![node.clone()])
            .contains(&node, true)
            .expect("both operands are collections");

        if Some(found) == node.is_empty() {
            panic!("`{}` was not found among its own node", chain);
        }
    }
});
