//! Parsing re-serialized specs gives back the same model

use proptest::prelude::*;
use vaultlint_spec::{DirNode, FileNode, GlobalSettings, Node, parse_spec, to_value, to_yaml_string};

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}_[a-z0-9.-]{0,6}"
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = (arb_name(), any::<bool>()).prop_map(|(name, optional)| {
        Node::File(FileNode { name, optional })
    });

    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            arb_name(),
            any::<bool>(),
            proptest::option::of(any::<bool>()),
            proptest::option::of(any::<bool>()),
            proptest::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, optional, dirs, files, children)| {
                Node::Dir(DirNode {
                    name,
                    optional,
                    allow_extra_dirs: dirs,
                    allow_extra_files: files,
                    children: dedup(children),
                })
            })
    })
}

/// Sibling names must be unique for the spec to parse.
fn dedup(nodes: Vec<Node>) -> Vec<Node> {
    let mut seen = std::collections::HashSet::new();
    nodes
        .into_iter()
        .filter(|node| seen.insert(node.name().to_string()))
        .collect()
}

proptest! {
    #[test]
    fn test_value_roundtrip(
        dirs in any::<bool>(),
        files in any::<bool>(),
        children in proptest::collection::vec(arb_node(), 0..5),
    ) {
        let globals = GlobalSettings::new(dirs, files);
        let root = DirNode::root(globals, dedup(children));

        let reparsed = parse_spec(&to_value(&globals, &root)).unwrap();
        prop_assert_eq!(reparsed, (globals, root));
    }

    #[test]
    fn test_yaml_text_roundtrip(children in proptest::collection::vec(arb_node(), 0..5)) {
        let globals = GlobalSettings::default();
        let root = DirNode::root(globals, dedup(children));

        let text = to_yaml_string(&globals, &root).unwrap();
        let raw: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        prop_assert_eq!(parse_spec(&raw).unwrap(), (globals, root));
    }
}
