//! Properties of the generated enum header.
//!
//! The header is parsed back into its three parts per group (plain-C enum,
//! C++ enum, `conv_enum` arms) and checked against the catalog it came from.

use proptest::prelude::*;
use sungtool_core::enumgen::naming::rich_type_name;
use sungtool_core::enumgen::{
    BuiltinCatalog, Catalog, CatalogSource, ConversionTable, EnumGroup, RichValue, generate,
    render,
};
use std::collections::HashSet;

/// One group as it appears in the header text.
#[derive(Debug, Default)]
struct ParsedGroup {
    plain_type: String,
    plain_constants: Vec<String>,
    rich_type: String,
    rich_members: Vec<String>,
    cases: Vec<(String, String)>,
    fallback: Option<String>,
}

fn parse_header(header: &str) -> Vec<ParsedGroup> {
    #[derive(PartialEq)]
    enum State {
        Outside,
        Plain,
        Rich,
        Switch,
    }

    let mut groups: Vec<ParsedGroup> = Vec::new();
    let mut state = State::Outside;
    let mut pending_case: Option<String> = None;

    for line in header.lines() {
        let trimmed = line.trim();
        match state {
            State::Outside => {
                if let Some(rest) = trimmed.strip_prefix("typedef enum ") {
                    groups.push(ParsedGroup {
                        plain_type: rest.trim_end_matches(" {").to_string(),
                        ..ParsedGroup::default()
                    });
                    state = State::Plain;
                } else if let Some(rest) = trimmed.strip_prefix("enum class ") {
                    groups.last_mut().unwrap().rich_type = rest.trim_end_matches(" {").to_string();
                    state = State::Rich;
                } else if trimmed == "switch (e) {" {
                    state = State::Switch;
                }
            }
            State::Plain => {
                if trimmed.starts_with('}') {
                    state = State::Outside;
                } else {
                    let constant = trimmed.trim_end_matches(',').to_string();
                    groups.last_mut().unwrap().plain_constants.push(constant);
                }
            }
            State::Rich => {
                if trimmed == "};" {
                    state = State::Outside;
                } else {
                    let member = trimmed.trim_end_matches(',').to_string();
                    groups.last_mut().unwrap().rich_members.push(member);
                }
            }
            State::Switch => {
                let group = groups.last_mut().unwrap();
                if trimmed == "}" {
                    state = State::Outside;
                } else if let Some(constant) = trimmed.strip_prefix("case ") {
                    pending_case = Some(constant.trim_end_matches(':').to_string());
                } else if let Some(target) = trimmed.strip_prefix("return ") {
                    let target = target.trim_end_matches(';').to_string();
                    match pending_case.take() {
                        Some(constant) => group.cases.push((constant, target)),
                        None => group.fallback = Some(target),
                    }
                }
            }
        }
    }
    groups
}

fn two_mouse_groups() -> Catalog {
    let builtin = BuiltinCatalog.load().unwrap();
    Catalog::new("sung", builtin.groups()[..2].to_vec()).unwrap()
}

#[test]
fn test_mouse_groups_snapshot() {
    let catalog = two_mouse_groups();
    insta::assert_snapshot!("mouse_groups", render(&catalog));
}

#[test]
fn test_mouse_btn_scenario() {
    let group = EnumGroup::new("mouse btn", ["left", "right", "middle", "eoe"]).unwrap();
    let catalog = Catalog::new("sung", vec![group.clone()]).unwrap();
    let parsed = parse_header(&render(&catalog));

    assert_eq!(parsed.len(), 1);
    let parsed = &parsed[0];
    assert_eq!(parsed.plain_type, "SungMouseBtn");
    assert_eq!(
        parsed.plain_constants,
        vec![
            "SUNG_MOUSE_BTN_LEFT",
            "SUNG_MOUSE_BTN_RIGHT",
            "SUNG_MOUSE_BTN_MIDDLE",
            "SUNG_MOUSE_BTN_EOE",
        ]
    );
    assert_eq!(parsed.rich_type, "MouseBtn");
    assert_eq!(
        parsed.rich_members,
        vec!["left", "right", "middle", "eoe", "unknown"]
    );
    assert_eq!(
        parsed.cases[0],
        (
            "SUNG_MOUSE_BTN_LEFT".to_string(),
            "MouseBtn::left".to_string()
        )
    );
    assert_eq!(parsed.fallback.as_deref(), Some("MouseBtn::unknown"));

    let table = ConversionTable::new(catalog.naming(), &group);
    assert_eq!(table.convert(0), RichValue::Member("left".to_string()));
    assert_eq!(table.convert(99), RichValue::Unknown);
}

#[test]
fn test_builtin_header_is_consistent() {
    let catalog = BuiltinCatalog.load().unwrap();
    let parsed = parse_header(&render(&catalog));
    assert_eq!(parsed.len(), catalog.len());

    let key_code = &parsed[2];
    assert_eq!(key_code.plain_type, "SungKeyCode");
    assert_eq!(key_code.plain_constants[26], "SUNG_KEY_CODE_N0");
    assert_eq!(key_code.plain_constants.last().unwrap(), "SUNG_KEY_CODE_EOE");
    assert_eq!(key_code.rich_members.len(), key_code.plain_constants.len() + 1);
}

#[test]
fn test_generate_is_lazy_per_group() {
    let catalog = BuiltinCatalog.load().unwrap();
    let first_group: Vec<String> = generate(&catalog)
        .take_while(|line| line != "#endif")
        .collect();
    assert!(first_group.iter().any(|l| l == "} SungMouseBtn;"));
    assert!(!first_group.iter().any(|l| l.contains("SungMouseAction")));
}

// ==================== Property Tests ====================

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn group_strategy() -> impl Strategy<Value = EnumGroup> {
    (
        prop::collection::vec("[a-z][a-z0-9]{0,6}", 1..4),
        prop::collection::vec(identifier(), 0..16),
    )
        .prop_map(|(words, members)| {
            let mut seen = HashSet::new();
            let mut members: Vec<String> = members
                .into_iter()
                .filter(|m| m != "eoe" && m != "unknown")
                .filter(|m| seen.insert(m.clone()))
                .collect();
            members.push("eoe".to_string());
            EnumGroup::new(words.join(" "), members).unwrap()
        })
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(group_strategy(), 0..6).prop_map(|groups| {
        // keep only groups whose generated names stay unique
        let mut kept: Vec<EnumGroup> = Vec::new();
        for group in groups {
            let mut candidate = kept.clone();
            candidate.push(group);
            if Catalog::new("sung", candidate.clone()).is_ok() {
                kept = candidate;
            }
        }
        Catalog::new("sung", kept).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_generation_is_idempotent(catalog in catalog_strategy()) {
        prop_assert_eq!(render(&catalog), render(&catalog));
    }

    #[test]
    fn prop_plain_names_are_unique_across_groups(catalog in catalog_strategy()) {
        let parsed = parse_header(&render(&catalog));
        let mut names = HashSet::new();
        for group in &parsed {
            prop_assert!(names.insert(group.plain_type.clone()));
            for constant in &group.plain_constants {
                prop_assert!(names.insert(constant.clone()), "{} emitted twice", constant);
            }
        }
    }

    #[test]
    fn prop_one_pragma_and_groups_in_order(catalog in catalog_strategy()) {
        let header = render(&catalog);
        prop_assert!(header.starts_with("#pragma once\n\n"));
        prop_assert_eq!(header.matches("#pragma once").count(), 1);

        let parsed = parse_header(&header);
        prop_assert_eq!(parsed.len(), catalog.len());
        for (group, parsed) in catalog.iter().zip(&parsed) {
            prop_assert_eq!(&parsed.rich_type, &rich_type_name(group.name()));
        }
    }

    #[test]
    fn prop_constant_names_follow_the_group_label(catalog in catalog_strategy()) {
        let parsed = parse_header(&render(&catalog));
        for (group, parsed) in catalog.iter().zip(&parsed) {
            let prefix = group
                .name()
                .split_whitespace()
                .map(str::to_uppercase)
                .collect::<Vec<_>>()
                .join("_");
            for (member, constant) in group.members().iter().zip(&parsed.plain_constants) {
                prop_assert_eq!(
                    constant,
                    &format!("SUNG_{}_{}", prefix, member.to_uppercase())
                );
            }
            for (member, rich) in group.members().iter().zip(&parsed.rich_members) {
                prop_assert_eq!(rich, &member.to_lowercase());
            }
        }
    }

    #[test]
    fn prop_ordinals_line_up(catalog in catalog_strategy()) {
        let parsed = parse_header(&render(&catalog));
        for (group, parsed) in catalog.iter().zip(&parsed) {
            prop_assert_eq!(parsed.plain_constants.len(), group.len());
            // every catalog member keeps its ordinal; `unknown` comes after
            prop_assert_eq!(parsed.rich_members.len(), group.len() + 1);
            prop_assert_eq!(parsed.rich_members.last().unwrap(), "unknown");

            for (ordinal, (constant, target)) in parsed.cases.iter().enumerate() {
                prop_assert_eq!(constant, &parsed.plain_constants[ordinal]);
                prop_assert_eq!(
                    target,
                    &format!("{}::{}", parsed.rich_type, parsed.rich_members[ordinal])
                );
            }
            prop_assert_eq!(parsed.cases.len(), group.len());
        }
    }

    #[test]
    fn prop_sentinel_is_last(catalog in catalog_strategy()) {
        let parsed = parse_header(&render(&catalog));
        for (group, parsed) in catalog.iter().zip(&parsed) {
            let last = parsed.plain_constants.last().unwrap();
            prop_assert!(last.ends_with("_EOE"));
            prop_assert_eq!(parsed.plain_constants.len() - 1, group.sentinel_ordinal());
        }
    }

    #[test]
    fn prop_conversion_is_total(catalog in catalog_strategy(), value in any::<i64>()) {
        for group in &catalog {
            let table = ConversionTable::new(catalog.naming(), group);
            for (ordinal, member) in group.members().iter().enumerate() {
                prop_assert_eq!(
                    table.convert(ordinal as i64),
                    RichValue::Member(member.to_lowercase())
                );
            }
            let expected = if (0..group.len() as i64).contains(&value) {
                RichValue::Member(group.members()[value as usize].to_lowercase())
            } else {
                RichValue::Unknown
            };
            prop_assert_eq!(table.convert(value), expected);
        }
    }
}
