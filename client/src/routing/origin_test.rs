use super::*;

// =============================================================
// Origin
// =============================================================

#[test]
fn root_origin_is_slash() {
    let origin = Origin::root();
    assert_eq!(origin.pathname(), "/");
    assert_eq!(origin.href(), "/");
    assert_eq!(Origin::default(), origin);
}

#[test]
fn new_strips_leading_question_mark() {
    let origin = Origin::new("/protected", "?tab=2");
    assert_eq!(origin.search(), "tab=2");
    assert_eq!(origin.href(), "/protected?tab=2");
}

#[test]
fn href_without_search_is_pathname() {
    assert_eq!(Origin::new("/protected", "").href(), "/protected");
}

#[test]
fn from_query_missing_defaults_to_root() {
    assert_eq!(Origin::from_query(None), Origin::root());
}

#[test]
fn from_query_keeps_local_path() {
    let origin = Origin::from_query(Some("/protected"));
    assert_eq!(origin.pathname(), "/protected");
    assert_eq!(origin.search(), "");
}

#[test]
fn from_query_splits_search() {
    let origin = Origin::from_query(Some("/protected?tab=2"));
    assert_eq!(origin.pathname(), "/protected");
    assert_eq!(origin.search(), "tab=2");
}

#[test]
fn from_query_rejects_foreign_targets() {
    for raw in [
        "https://evil.example",
        "//evil.example/path",
        "protected",
        "",
        "/\\evil.example",
        "/\t/evil.example",
        "/\n/evil.example",
        "/\r/evil.example",
        "/protected\u{0}",
        "/ /evil.example",
    ] {
        assert_eq!(Origin::from_query(Some(raw)), Origin::root(), "expected root for {raw:?}");
    }
}

#[test]
fn from_query_rejects_control_characters_after_decode() {
    let decoded = urlencoding::decode("%2F%09%2Fevil.example").unwrap();
    assert_eq!(Origin::from_query(Some(&*decoded)), Origin::root());
}

#[test]
fn from_query_keeps_fragment() {
    let origin = Origin::from_query(Some("/protected?tab=2#details"));
    assert_eq!(origin.pathname(), "/protected");
    assert_eq!(origin.search(), "tab=2");
    assert_eq!(origin.hash(), "details");
    assert_eq!(origin.href(), "/protected?tab=2#details");
}

#[test]
fn with_hash_strips_leading_pound() {
    let origin = Origin::new("/protected", "").with_hash("#details");
    assert_eq!(origin.hash(), "details");
    assert_eq!(origin.href(), "/protected#details");
}

#[test]
fn from_query_refuses_login_loop() {
    assert_eq!(Origin::from_query(Some("/login?from=%2Fprotected")), Origin::root());
}

// =============================================================
// RedirectIntent
// =============================================================

#[test]
fn redirect_href_encodes_origin() {
    let intent = RedirectIntent::new(AppRoute::Login, Origin::new("/protected", ""));
    assert_eq!(intent.href(), "/login?from=%2Fprotected");
}

#[test]
fn redirect_href_encodes_origin_query() {
    let intent = RedirectIntent::new(AppRoute::Login, Origin::new("/protected", "tab=2&x=y"));
    assert_eq!(intent.href(), "/login?from=%2Fprotected%3Ftab%3D2%26x%3Dy");
}

#[test]
fn redirect_origin_survives_decode() {
    let origin = Origin::new("/protected", "tab=2").with_hash("details");
    let intent = RedirectIntent::new(AppRoute::Login, origin.clone());
    let encoded = intent.href();
    let (_, value) = encoded.split_once("from=").unwrap();
    let decoded = urlencoding::decode(value).unwrap();
    assert_eq!(Origin::from_query(Some(&*decoded)), origin);
}
