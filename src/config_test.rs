use viewer::nav::NavRole;

use super::*;

#[test]
fn default_is_windowed_info() {
    let cfg = SiteConfig::default();
    assert!(cfg.windowed);
    assert_eq!(cfg.level(), log::Level::Info);
    assert!(cfg.nav_roles.is_empty());
    assert_eq!(cfg.window, WindowOptions::default());
}

#[test]
fn empty_object_gives_defaults() {
    let Ok(cfg) = SiteConfig::from_json("{}") else {
        panic!("empty config rejected");
    };
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn full_config_parses() {
    let raw = r#"{
        "windowed": false,
        "log_level": "debug",
        "nav_roles": { "nav-a": "A", "nav-d": "D" },
        "window": { "width": 900, "left": 10 }
    }"#;
    let Ok(cfg) = SiteConfig::from_json(raw) else {
        panic!("valid config rejected");
    };
    assert!(!cfg.windowed);
    assert_eq!(cfg.level(), log::Level::Debug);
    assert_eq!(cfg.nav_roles.role("nav-a"), Some(NavRole::A));
    assert_eq!(cfg.nav_roles.role("nav-d"), Some(NavRole::D));
    assert_eq!(cfg.window.width, Some(900.0));
    assert_eq!(cfg.window.left, Some(10.0));
    assert_eq!(cfg.window.height, None);
}

#[test]
fn unknown_level_falls_back_to_info() {
    let cfg = SiteConfig { log_level: "chatty".into(), ..SiteConfig::default() };
    assert_eq!(cfg.level(), log::Level::Info);
}

#[test]
fn level_is_case_insensitive() {
    let cfg = SiteConfig { log_level: "WARN".into(), ..SiteConfig::default() };
    assert_eq!(cfg.level(), log::Level::Warn);
}

#[test]
fn malformed_json_is_config_error() {
    let err = SiteConfig::from_json("{ not json");
    assert!(matches!(err, Err(SiteError::Config(_))));
}

#[test]
fn bad_role_is_config_error() {
    let err = SiteConfig::from_json(r#"{ "nav_roles": { "x": "Z" } }"#);
    assert!(matches!(err, Err(SiteError::Config(_))));
}
