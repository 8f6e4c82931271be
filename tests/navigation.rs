//! Navigation behaviour of the application router.

use soundgate_router::history::{HistoryMode, MemoryHistory};
use soundgate_router::routing::MatchOptions;
use soundgate_router::{app_router, app_routes, create_router, RouterOptions, View};

#[test]
fn test_app_paths_resolve_to_views() {
    let router = app_router();
    assert_eq!(router.resolve("/").view, Some(View::SoundGate));
    assert_eq!(router.resolve("/home").view, Some(View::Landing));
}

#[test]
fn test_table_has_exactly_two_distinct_paths() {
    let router = app_router();
    let table = router.table();
    assert_eq!(table.len(), 2);

    let paths: Vec<&str> = table.entries().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "/home"]);
}

#[test]
fn test_no_other_paths_present() {
    let router = app_router();
    for path in ["/about", "/home/", "/HOME", "/index.html", "/home/extra"] {
        assert!(!router.table().contains_path(path), "unexpected route {path}");
        assert_eq!(router.resolve(path).view, None, "{path} should not match");
    }
}

#[test]
fn test_round_trip_resolves_identically() {
    let mut router = app_router();
    assert_eq!(router.mode(), HistoryMode::Web);
    assert_eq!(router.current_view(), Some(View::SoundGate));

    for _ in 0..3 {
        assert_eq!(router.push("/home").view, Some(View::Landing));
        assert_eq!(router.back().unwrap().view, Some(View::SoundGate));
        assert_eq!(router.forward().unwrap().view, Some(View::Landing));
        assert_eq!(router.push("/").view, Some(View::SoundGate));
    }
    assert_eq!(router.current_location().path, "/");
}

#[test]
fn test_back_at_start_is_noop() {
    let mut router = app_router();
    assert!(router.back().is_none());
    assert!(router.forward().is_none());
    assert_eq!(router.current_view(), Some(View::SoundGate));
}

#[test]
fn test_go_moves_multiple_entries() {
    let mut router = app_router();
    router.push("/home");
    router.push("/nowhere");
    assert_eq!(router.current_view(), None);

    assert_eq!(router.go(-2).unwrap().view, Some(View::SoundGate));
    assert!(router.go(3).is_none());
    assert_eq!(router.go(1).unwrap().view, Some(View::Landing));
}

#[test]
fn test_hrefs_follow_history_mode() {
    let web = create_router(RouterOptions {
        history: HistoryMode::Web.create("/app/"),
        routes: app_routes(),
        match_options: MatchOptions::default(),
    });
    assert_eq!(web.resolve("/home").href, "/app/home");
    assert_eq!(web.resolve_href("/app/home").unwrap().view, Some(View::Landing));

    let hash = create_router(RouterOptions {
        history: HistoryMode::Hash.create("/"),
        routes: app_routes(),
        match_options: MatchOptions::default(),
    });
    assert_eq!(hash.resolve("/home").href, "#/home");
    assert_eq!(hash.resolve_href("/#/home").unwrap().view, Some(View::Landing));
    assert_eq!(hash.resolve_href("/").unwrap().view, Some(View::SoundGate));
}

#[test]
fn test_lenient_matching() {
    let router = create_router(RouterOptions {
        history: Box::new(MemoryHistory::new("/")),
        routes: app_routes(),
        match_options: MatchOptions::lenient(),
    });
    assert_eq!(router.resolve("/HOME/").view, Some(View::Landing));
    assert_eq!(router.resolve("/Home?x=1").view, Some(View::Landing));
}
