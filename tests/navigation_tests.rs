mod common;

use common::fixtures::sample_routes;
use std::sync::Arc;
use wayfinder::{create_router, HistoryMode, NavigationError, Navigator, RouterOptions};

fn navigator() -> Navigator {
    common::logging::init();
    create_router(RouterOptions::new(HistoryMode::memory(), sample_routes()))
        .expect("sample table must validate")
}

#[test]
fn test_starts_at_the_start_location() {
    let navigator = navigator();
    let current = navigator.current();
    assert!(current.is_start());
    assert_eq!(current.path, "/");
    assert!(current.name.is_none());
    assert!(current.view.is_none());
    assert_eq!(navigator.history_snapshot(), vec!["/".to_string()]);
}

#[test]
fn test_push_commits_a_location() {
    let navigator = navigator();
    let location = navigator.push("/students/12").unwrap();

    assert_eq!(location.path, "/students/12");
    assert_eq!(location.full_path, "/students/12");
    assert_eq!(location.name.as_deref(), Some("Student"));
    assert_eq!(location.view.as_deref(), Some("StudentView"));
    assert_eq!(location.get_param("id"), Some("12"));
    assert!(!location.is_start());

    // current() hands out the same committed snapshot.
    let current = navigator.current();
    assert_eq!(current.full_path, location.full_path);
}

#[test]
fn test_push_parses_query_params() {
    let navigator = navigator();
    let location = navigator
        .push("/students/12?tab=grades&term=fall&tab=sports")
        .unwrap();

    assert_eq!(location.path, "/students/12");
    assert_eq!(location.full_path, "/students/12?tab=grades&term=fall&tab=sports");
    assert_eq!(location.get_query("term"), Some("fall"));
    // Duplicate keys keep order; lookup takes the last.
    assert_eq!(location.get_query("tab"), Some("sports"));
    assert_eq!(location.query.len(), 3);
    // Path params are unaffected by the query.
    assert_eq!(location.get_param("id"), Some("12"));
}

#[test]
fn test_push_decodes_query_values() {
    let navigator = navigator();
    let location = navigator.push("/students?q=linear%20algebra&flag").unwrap();
    assert_eq!(location.get_query("q"), Some("linear algebra"));
    // A bare key parses to an empty value.
    assert_eq!(location.get_query("flag"), Some(""));
}

#[test]
fn test_fragments_are_dropped() {
    let navigator = navigator();
    let location = navigator.push("/about#team").unwrap();
    assert_eq!(location.path, "/about");
    assert_eq!(location.full_path, "/about");
}

#[test]
fn test_not_found_leaves_everything_untouched() {
    let navigator = navigator();
    navigator.push("/students").unwrap();

    let err = navigator.push("/missing/page").unwrap_err();
    assert!(matches!(
        err,
        NavigationError::NotFound { ref path } if path == "/missing/page"
    ));

    assert_eq!(navigator.current().path, "/students");
    assert_eq!(
        navigator.history_snapshot(),
        vec!["/".to_string(), "/students".to_string()]
    );
}

#[test]
fn test_replace_swaps_current_entry() {
    let navigator = navigator();
    navigator.push("/students").unwrap();
    let location = navigator.replace("/about").unwrap();

    assert_eq!(location.path, "/about");
    assert_eq!(
        navigator.history_snapshot(),
        vec!["/".to_string(), "/about".to_string()]
    );
}

#[test]
fn test_named_navigation() {
    let navigator = navigator();
    let location = navigator.push_named("Student", &[("id", "12")]).unwrap();
    assert_eq!(location.path, "/students/12");
    assert_eq!(location.name.as_deref(), Some("Student"));
}

#[test]
fn test_named_navigation_encodes_values() {
    let navigator = navigator();
    let location = navigator
        .push_named("StudentCourse", &[("id", "12"), ("course", "set theory")])
        .unwrap();
    assert_eq!(location.path, "/students/12/courses/set%20theory");
    // The capture round-trips through the decoder.
    assert_eq!(location.get_param("course"), Some("set theory"));
}

#[test]
fn test_named_navigation_unknown_name() {
    let navigator = navigator();
    let err = navigator.push_named("Nowhere", &[]).unwrap_err();
    assert!(matches!(
        err,
        NavigationError::UnknownName { ref name } if name == "Nowhere"
    ));
    assert!(navigator.current().is_start());
}

#[test]
fn test_named_navigation_missing_param() {
    let navigator = navigator();
    let err = navigator.push_named("Student", &[]).unwrap_err();
    assert!(matches!(
        err,
        NavigationError::MissingParam { ref name, ref param }
            if name == "Student" && param == "id"
    ));
    assert!(navigator.current().is_start());
}

#[test]
fn test_relative_target_is_coerced() {
    let navigator = navigator();
    let location = navigator.push("about").unwrap();
    assert_eq!(location.path, "/about");
}

#[test]
fn test_snapshots_outlive_later_navigations() {
    let navigator = navigator();
    let first = navigator.push("/students").unwrap();
    navigator.push("/about").unwrap();

    // The earlier snapshot is unchanged by the later commit.
    assert_eq!(first.path, "/students");
    assert_eq!(navigator.current().path, "/about");
}

#[test]
fn test_navigator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Navigator>();
    assert_send_sync::<Arc<Navigator>>();
}

#[test]
fn test_concurrent_pushes_keep_stack_and_current_consistent() {
    let navigator = Arc::new(navigator());

    let handles: Vec<_> = ["/students", "/about", "/students/12", "/"]
        .into_iter()
        .map(|target| {
            let navigator = Arc::clone(&navigator);
            std::thread::spawn(move || {
                navigator.push(target).map(|loc| loc.full_path.clone())
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread must not panic").unwrap();
    }

    // Whatever the interleaving, the last stack entry is the current location.
    let snapshot = navigator.history_snapshot();
    assert_eq!(snapshot.len(), 5);
    assert_eq!(snapshot.last(), Some(&navigator.current().full_path));
}
