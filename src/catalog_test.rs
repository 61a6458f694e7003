use super::*;

#[test]
fn builtin_has_six_categories() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.categories(), vec!["accessories", "body", "hands", "head", "legs", "patterns"]);
}

#[test]
fn builtin_head_skips_missing_numbers() {
    let catalog = Catalog::builtin();
    let heads = catalog.materials("head");
    assert_eq!(heads.len(), 10);
    assert_eq!(heads[0], "heads/1.png");
    assert_eq!(heads[6], "heads/11.png");
    assert_eq!(heads[9], "heads/14.png");
}

#[test]
fn builtin_counts_per_category() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.materials("hands").len(), 16);
    assert_eq!(catalog.materials("body").len(), 14);
    assert_eq!(catalog.materials("legs").len(), 9);
    assert_eq!(catalog.materials("accessories").len(), 16);
    assert_eq!(catalog.materials("patterns").len(), 13);
}

#[test]
fn builtin_accessories_live_under_assets() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.materials("accessories")[0], "assets/1.png");
    assert_eq!(catalog.materials("patterns")[12], "pattern/13.png");
}

#[test]
fn builtin_body_has_no_thirteen() {
    let catalog = Catalog::builtin();
    assert!(!catalog.materials("body").iter().any(|l| l == "body/13.png"));
}

#[test]
fn unknown_category_is_empty() {
    let catalog = Catalog::builtin();
    assert!(catalog.materials("hats").is_empty());
}

#[test]
fn from_json_keeps_locator_order() {
    let catalog = Catalog::from_json(r#"{"hats": ["b.png", "a.png"], "empty": []}"#).unwrap();
    assert_eq!(catalog.materials("hats"), ["b.png".to_string(), "a.png".to_string()]);
    assert!(catalog.materials("empty").is_empty());
    assert_eq!(catalog.categories(), vec!["empty", "hats"]);
}

#[test]
fn from_json_rejects_wrong_shape() {
    assert!(matches!(Catalog::from_json(r#"{"hats": "a.png"}"#), Err(EditorError::Config(_))));
}

#[test]
fn insert_replaces_category() {
    let mut catalog = Catalog::builtin();
    catalog.insert("head", vec!["x.png".into()]);
    assert_eq!(catalog.materials("head"), ["x.png".to_string()]);
    assert_eq!(catalog.len(), 6);
}

#[test]
fn default_is_empty() {
    let catalog = Catalog::default();
    assert!(catalog.is_empty());
    assert!(catalog.categories().is_empty());
}

#[test]
fn empty_message_only_for_empty_categories() {
    let mut catalog = Catalog::builtin();
    catalog.insert("hats", Vec::new());
    assert_eq!(catalog.empty_message("hats"), Some(EMPTY_CATEGORY_MESSAGE));
    assert_eq!(catalog.empty_message("unknown"), Some(EMPTY_CATEGORY_MESSAGE));
    assert_eq!(catalog.empty_message("head"), None);
}
