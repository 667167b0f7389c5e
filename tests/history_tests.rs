mod common;

use common::fixtures::sample_routes;
use wayfinder::history::{base_from_env, normalize_base, HistoryMode, BASE_URL_ENV};
use wayfinder::{create_router, Navigator, RouterOptions};

fn navigator_with(mode: HistoryMode) -> Navigator {
    common::logging::init();
    create_router(RouterOptions::new(mode, sample_routes())).expect("sample table must validate")
}

#[test]
fn test_base_normalization() {
    assert_eq!(normalize_base(""), "");
    assert_eq!(normalize_base("/"), "");
    assert_eq!(normalize_base("campus"), "/campus");
    assert_eq!(normalize_base("/campus/"), "/campus");
    assert_eq!(normalize_base("campus/portal/"), "/campus/portal");
}

#[test]
fn test_base_from_env_round_trip() {
    // This is the only test touching the variable, so the sequence is safe.
    std::env::remove_var(BASE_URL_ENV);
    assert_eq!(base_from_env(), "");

    std::env::set_var(BASE_URL_ENV, "campus/");
    assert_eq!(base_from_env(), "/campus");

    std::env::remove_var(BASE_URL_ENV);
    assert_eq!(base_from_env(), "");
}

#[test]
fn test_web_mode_prefixes_base() {
    let navigator = navigator_with(HistoryMode::web("/campus"));
    let location = navigator.push("/students/12").unwrap();
    assert_eq!(location.path, "/students/12");
    assert_eq!(location.href, "/campus/students/12");
}

#[test]
fn test_web_hash_mode_wraps_path_in_fragment() {
    let navigator = navigator_with(HistoryMode::web_hash("/campus"));
    let location = navigator.push("/about").unwrap();
    assert_eq!(location.href, "/campus#/about");

    let rootless = navigator_with(HistoryMode::web_hash(""));
    let location = rootless.push("/about").unwrap();
    assert_eq!(location.href, "#/about");
}

#[test]
fn test_memory_mode_href_is_the_path() {
    let navigator = navigator_with(HistoryMode::memory());
    let location = navigator.push("/about").unwrap();
    assert_eq!(location.href, "/about");
}

#[test]
fn test_query_survives_into_href() {
    let navigator = navigator_with(HistoryMode::web("/campus"));
    let location = navigator.push("/students?cohort=2026").unwrap();
    assert_eq!(location.full_path, "/students?cohort=2026");
    assert_eq!(location.href, "/campus/students?cohort=2026");
}

#[test]
fn test_back_and_forward_walk_the_stack() {
    let navigator = navigator_with(HistoryMode::memory());
    navigator.push("/students").unwrap();
    navigator.push("/about").unwrap();

    let back = navigator.back().expect("one entry behind");
    assert_eq!(back.path, "/students");
    assert_eq!(navigator.current().path, "/students");

    let forward = navigator.forward().expect("one entry ahead");
    assert_eq!(forward.path, "/about");
}

#[test]
fn test_traversal_past_the_edges_is_ignored() {
    let navigator = navigator_with(HistoryMode::memory());
    navigator.push("/students").unwrap();

    assert!(navigator.forward().is_none());
    assert!(navigator.go(5).is_none());
    assert_eq!(navigator.current().path, "/students");

    navigator.back().expect("the start entry is behind");
    assert!(navigator.back().is_none());
}

#[test]
fn test_go_extreme_deltas_are_ignored() {
    let navigator = navigator_with(HistoryMode::memory());
    navigator.push("/students").unwrap();

    assert!(navigator.go(isize::MAX).is_none());
    assert!(navigator.go(isize::MIN).is_none());
    assert_eq!(navigator.current().path, "/students");
    assert_eq!(navigator.history_snapshot(), vec!["/", "/students"]);

    // The stack is still walkable after the rejected moves.
    assert_eq!(navigator.back().unwrap().path, "/");
}

#[test]
fn test_go_jumps_multiple_entries() {
    let navigator = navigator_with(HistoryMode::memory());
    navigator.push("/students").unwrap();
    navigator.push("/students/12").unwrap();
    navigator.push("/about").unwrap();

    let landed = navigator.go(-3).expect("three entries behind");
    assert_eq!(landed.path, "/");

    let ahead = navigator.go(2).expect("two entries ahead");
    assert_eq!(ahead.path, "/students/12");

    // go(0) re-enters the current entry.
    assert_eq!(navigator.go(0).unwrap().path, "/students/12");
}

#[test]
fn test_push_after_back_drops_forward_branch() {
    let navigator = navigator_with(HistoryMode::memory());
    navigator.push("/students").unwrap();
    navigator.push("/about").unwrap();
    navigator.back().unwrap();

    navigator.push("/students/12").unwrap();
    assert_eq!(
        navigator.history_snapshot(),
        vec!["/", "/students", "/students/12"]
    );
    assert!(navigator.forward().is_none());
}

#[test]
fn test_replace_keeps_forward_branch() {
    let navigator = navigator_with(HistoryMode::memory());
    navigator.push("/students").unwrap();
    navigator.push("/about").unwrap();
    navigator.back().unwrap();

    navigator.replace("/students/12").unwrap();
    assert_eq!(
        navigator.history_snapshot(),
        vec!["/", "/students/12", "/about"]
    );
    assert_eq!(navigator.forward().unwrap().path, "/about");
}
