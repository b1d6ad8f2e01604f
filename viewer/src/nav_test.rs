use super::*;

// =============================================================
// MapGroup
// =============================================================

#[test]
fn group_display_is_two_digits() {
    assert_eq!(MapGroup::new(1).to_string(), "01");
    assert_eq!(MapGroup::new(4).to_string(), "04");
    assert_eq!(MapGroup::NONE.to_string(), "00");
}

#[test]
fn group_out_of_range_is_none() {
    assert_eq!(MapGroup::new(0), MapGroup::NONE);
    assert_eq!(MapGroup::new(5), MapGroup::NONE);
    assert_eq!(MapGroup::new(255), MapGroup::NONE);
}

#[test]
fn group_from_sections_matches_class() {
    let g = MapGroup::from_sections(|class| class == "map03-section");
    assert_eq!(g.number(), 3);
}

#[test]
fn group_from_sections_prefers_lowest_group() {
    let g = MapGroup::from_sections(|class| class == "map02-section" || class == "map04-section");
    assert_eq!(g, MapGroup::new(2));
}

#[test]
fn group_from_sections_defaults_to_none() {
    let g = MapGroup::from_sections(|_| false);
    assert_eq!(g, MapGroup::NONE);
}

#[test]
fn group_from_sections_checks_in_order() {
    let mut seen = Vec::new();
    MapGroup::from_sections(|class| {
        seen.push(class.to_string());
        false
    });
    assert_eq!(seen, SECTION_CLASSES.map(String::from).to_vec());
}

// =============================================================
// NavRole / page_path
// =============================================================

#[test]
fn role_letters() {
    assert_eq!(NavRole::A.to_string(), "A");
    assert_eq!(NavRole::B.to_string(), "B");
    assert_eq!(NavRole::C.to_string(), "C");
    assert_eq!(NavRole::D.to_string(), "D");
}

#[test]
fn page_path_template() {
    assert_eq!(page_path(MapGroup::new(1), NavRole::A), "page/grp01/pageA.html");
    assert_eq!(page_path(MapGroup::new(4), NavRole::D), "page/grp04/pageD.html");
    assert_eq!(page_path(MapGroup::NONE, NavRole::C), "page/grp00/pageC.html");
}

// =============================================================
// NavRoleMap
// =============================================================

#[test]
fn role_map_from_json() {
    let map = NavRoleMap::from_json(r#"{"nav-a": "A", "nav-b": "B", "right-2": "D"}"#);
    let Ok(map) = map else {
        panic!("valid role map rejected");
    };
    assert_eq!(map.len(), 3);
    assert_eq!(map.role("nav-a"), Some(NavRole::A));
    assert_eq!(map.role("right-2"), Some(NavRole::D));
    assert_eq!(map.role("missing"), None);
}

#[test]
fn role_map_rejects_unknown_role() {
    assert!(NavRoleMap::from_json(r#"{"nav-a": "E"}"#).is_err());
}

#[test]
fn role_map_insert_replaces() {
    let mut map = NavRoleMap::new();
    assert!(map.is_empty());
    map.insert("btn", NavRole::A);
    map.insert("btn", NavRole::C);
    assert_eq!(map.len(), 1);
    assert_eq!(map.role("btn"), Some(NavRole::C));
}

#[test]
fn role_map_from_iter() {
    let map: NavRoleMap = [("x", NavRole::B), ("y", NavRole::C)].into_iter().collect();
    assert_eq!(map.role("x"), Some(NavRole::B));
    assert_eq!(map.role("y"), Some(NavRole::C));
}

#[test]
fn role_map_serializes_as_plain_object() {
    let map: NavRoleMap = [("only", NavRole::A)].into_iter().collect();
    let json = serde_json::to_string(&map).unwrap_or_default();
    assert_eq!(json, r#"{"only":"A"}"#);
}
