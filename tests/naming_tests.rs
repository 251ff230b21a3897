//! Integration tests for component naming and lookup.

use keycapgen::naming::{find_name, resolve, SizeName};
use keycapgen::parser::parse_layout;
use keycapgen::{canonical_name, resolve_name};

#[test]
fn test_canonical_names() {
    assert_eq!(canonical_name(100, None, None, None), "1_00U");
    assert_eq!(canonical_name(225, Some("2"), None, None), "R2-2_25U");
    assert_eq!(canonical_name(225, None, Some("A"), None), "2_25U+A");
    assert_eq!(canonical_name(625, Some("4"), Some("Space"), None), "R4-6_25U+Space");
    assert_eq!(canonical_name(150, Some("1"), None, Some("dsa")), "dsa_R1-1_50U");
    assert_eq!(canonical_name(150, Some(""), Some(""), Some("")), "1_50U");
}

#[test]
fn test_generated_names_resolve_to_themselves() {
    let prefixes = [None, Some("sa")];
    let rows = [None, Some("0"), Some("3")];
    let labels = [None, Some("Q"), Some("Enter")];

    for prefix in prefixes {
        for row in rows {
            for label in labels {
                let name = canonical_name(275, row, label, prefix);
                let candidates = [name.clone()];
                assert_eq!(
                    resolve_name(275, row, label, &candidates),
                    Some(name.as_str())
                );
            }
        }
    }
}

#[test]
fn test_precedence_order() {
    let candidates = ["1_00U", "R2-1_00U", "1_00U+A", "R2-1_00U+A"];
    let key = SizeName::from_parts(100, Some("2"), Some("A"));
    let resolution = resolve(&key, &candidates).unwrap();
    assert_eq!(resolution.candidate, "R2-1_00U+A");
    assert_eq!(resolution.matched, key);

    assert_eq!(resolve_name(100, Some("2"), Some("B"), &candidates), Some("R2-1_00U"));
    assert_eq!(resolve_name(100, Some("5"), Some("A"), &candidates), Some("1_00U+A"));
    assert_eq!(resolve_name(100, Some("5"), Some("B"), &candidates), Some("1_00U"));
}

#[test]
fn test_no_match_is_none() {
    let candidates = ["1_25U", "R1-1_50U"];
    assert_eq!(resolve_name(200, Some("1"), Some("A"), &candidates), None);
    assert_eq!(resolve_name(100, None, None, &[] as &[&str]), None);
}

#[test]
fn test_decorated_candidates_match() {
    let candidates = ["KCG_dsa_R1-2_25U:1"];
    assert_eq!(
        find_name(&SizeName::from_parts(225, Some("1"), None), &candidates),
        Some("KCG_dsa_R1-2_25U:1")
    );
    assert_eq!(
        find_name(&SizeName::new(225), &["12_25U", "x2_25U:2"]),
        Some("x2_25U:2")
    );
}

#[test]
fn test_labels_with_metacharacters() {
    let candidates = ["1_00U+.", "1_00U+(", "1_00U+*"];
    assert_eq!(resolve_name(100, None, Some("("), &candidates), Some("1_00U+("));
    assert_eq!(resolve_name(100, None, Some("*"), &candidates), Some("1_00U+*"));
}

#[test]
fn test_parsed_layout_resolves_against_generated_sizes() {
    let positions = parse_layout(r#"["Q"],[{w:2.25},"Enter"]"#).unwrap();
    let generated: Vec<String> = [100, 225]
        .iter()
        .map(|&size| canonical_name(size, None, None, Some("dsa")))
        .collect();

    let found: Vec<Option<&str>> = positions
        .iter()
        .map(|p| {
            resolve_name(
                p.size_code(),
                Some(p.row.as_str()),
                Some(p.label.as_str()),
                &generated,
            )
        })
        .collect();

    assert_eq!(found, vec![Some("dsa_1_00U"), Some("dsa_2_25U")]);
}
