//! Tests for rejecting malformed specifications

use rstest::rstest;
use serde_yaml::Value;
use vaultlint_spec::{SpecError, SpecErrorKind, parse_spec};

fn parse_err(text: &str) -> SpecError {
    let raw: Value = serde_yaml::from_str(text).unwrap();
    parse_spec(&raw).expect_err("spec should be rejected")
}

#[rstest]
#[case::top_level_list("- a\n- b\n", "Top-level spec must be a mapping")]
#[case::top_level_scalar("hello", "Top-level spec must be a mapping")]
#[case::missing_structure("allow_extra_dirs: true\n", "'structure' must be a list")]
#[case::structure_not_list("structure: {}\n", "'structure' must be a list")]
#[case::node_not_mapping("structure: [notes]\n", "Each node must be a mapping")]
#[case::missing_type("structure: [{name: x}]\n", "Missing required field 'type'")]
#[case::missing_name("structure: [{type: dir}]\n", "Missing required field 'name'")]
#[case::empty_name("structure: [{type: dir, name: ''}]\n", "'name' must be a non-empty string")]
#[case::numeric_name("structure: [{type: dir, name: 42}]\n", "'name' must be a non-empty string")]
#[case::nested_name(
    "structure: [{type: dir, name: a/b}]\n",
    "must be a single path component"
)]
#[case::backslash_name(
    "structure: [{type: file, name: 'a\\b.md'}]\n",
    "must be a single path component"
)]
#[case::absolute_name(
    "structure: [{type: dir, name: /etc}]\n",
    "Name '/etc' must be a single path component"
)]
#[case::current_dir_name(
    "structure: [{type: dir, name: '.'}]\n",
    "must be a single path component"
)]
#[case::parent_dir_name(
    "structure: [{type: dir, name: '..'}]\n",
    "must be a single path component"
)]
#[case::nested_child_name(
    "structure: [{type: dir, name: notes, children: [{type: file, name: ../escape.md}]}]\n",
    "notes/children[0]"
)]
#[case::unknown_type("structure: [{type: folder, name: x}]\n", "Unsupported node type 'folder'")]
#[case::file_children(
    "structure: [{type: file, name: x, children: []}]\n",
    "File 'x' cannot have 'children'"
)]
#[case::file_allow_dirs(
    "structure: [{type: file, name: x, allow_extra_dirs: true}]\n",
    "cannot set 'allow_extra_dirs' or 'allow_extra_files'"
)]
#[case::file_allow_files(
    "structure: [{type: file, name: x, allow_extra_files: false}]\n",
    "cannot set 'allow_extra_dirs' or 'allow_extra_files'"
)]
#[case::children_not_list(
    "structure: [{type: dir, name: x, children: nope}]\n",
    "'children' must be a list"
)]
#[case::optional_string(
    "structure: [{type: dir, name: x, optional: 'yes'}]\n",
    "Field 'optional' must be a boolean"
)]
#[case::dir_policy_null(
    "structure: [{type: dir, name: x, allow_extra_dirs: ~}]\n",
    "Field 'allow_extra_dirs' must be a boolean"
)]
#[case::global_policy_string(
    "allow_extra_files: 'true'\nstructure: []\n",
    "Field 'allow_extra_files' must be a boolean"
)]
fn test_malformed_specs_rejected(#[case] text: &str, #[case] expected: &str) {
    let err = parse_err(text);
    assert_eq!(err.kind(), SpecErrorKind::Malformed);
    assert!(
        err.to_string().contains(expected),
        "expected message containing {:?}, got: {}",
        expected,
        err
    );
}

#[test]
fn test_duplicate_in_nested_directory_names_parent() {
    let err = parse_err(
        r#"
structure:
  - type: dir
    name: notes
    children:
      - {type: file, name: index.md}
      - {type: file, name: index.md, optional: true}
"#,
    );
    assert!(err.is_malformed());
    assert_eq!(err.to_string(), "Duplicate entry 'index.md' under notes");
}

#[test]
fn test_deep_nesting_is_supported() {
    let mut text = String::from("structure:\n");
    let mut indent = String::from("  ");
    for level in 0..20 {
        text.push_str(&format!(
            "{indent}- type: dir\n{indent}  name: d{level}\n{indent}  children:\n"
        ));
        indent.push_str("    ");
    }
    text.push_str(&format!("{indent}- type: file\n{indent}  name: leaf.md\n"));

    let raw: Value = serde_yaml::from_str(&text).unwrap();
    let (_, root) = parse_spec(&raw).unwrap();
    assert_eq!(root.children.len(), 1);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let raw: Value = serde_yaml::from_str(
        "version: 3\nstructure: [{type: file, name: a.md, comment: hi}]\n",
    )
    .unwrap();
    assert!(parse_spec(&raw).is_ok());
}

#[test]
fn test_json_document_parses_like_yaml() {
    let raw: Value = serde_json::from_str(
        r#"{"allow_extra_dirs": true, "structure": [{"type": "dir", "name": ".obsidian"}]}"#,
    )
    .unwrap();
    let (globals, root) = parse_spec(&raw).unwrap();
    assert!(globals.allow_extra_dirs);
    assert_eq!(root.children[0].name(), ".obsidian");
}
