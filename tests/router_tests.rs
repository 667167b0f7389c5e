mod common;

use common::fixtures::sample_routes;
use wayfinder::{RouteError, RouteMatch, RouteTable, Router};

fn build_router() -> Router {
    common::logging::init();
    let table = RouteTable::new(sample_routes()).expect("sample table must validate");
    Router::new(table)
}

fn assert_route_match(router: &Router, path: &str, expected_name: &str) {
    let result = router.match_path(path);
    match result {
        Some(RouteMatch { name, .. }) => {
            println!("✅ {path} → {name}");
            assert_eq!(
                name, expected_name,
                "Route mismatch for {path}: expected '{expected_name}', got '{name}'"
            );
        }
        None => {
            println!("❌ {path} → no match");
            assert_eq!(
                expected_name, "<none>",
                "Expected a route to match for {path}"
            );
        }
    }
}

#[test]
fn test_router_root() {
    let router = build_router();
    assert_route_match(&router, "/", "home");
}

#[test]
fn test_router_static_paths() {
    let router = build_router();
    assert_route_match(&router, "/students", "Students");
    assert_route_match(&router, "/about", "about");
}

#[test]
fn test_router_static_wins_over_param() {
    let router = build_router();
    assert_route_match(&router, "/students/enrolled", "Enrolled");
    assert_route_match(&router, "/students/99", "Student");
}

#[test]
fn test_router_nested_params() {
    let router = build_router();
    assert_route_match(&router, "/students/99/courses/algebra", "StudentCourse");
}

#[test]
fn test_router_constraint_rejects_bad_segment() {
    let router = build_router();
    // `{id:[0-9]+}` only accepts digits, and "latest" is not a literal child.
    assert_route_match(&router, "/students/latest", "<none>");
}

#[test]
fn test_router_unknown_path() {
    let router = build_router();
    assert_route_match(&router, "/unknown", "<none>");
    assert_route_match(&router, "/students/99/courses", "<none>");
}

#[test]
fn test_router_trailing_slash() {
    let router = build_router();
    assert_route_match(&router, "/students/", "Students");
}

#[test]
fn test_params_are_captured_in_order() {
    let router = build_router();
    let m = router
        .match_path("/students/12/courses/linear%20algebra")
        .expect("route must match");

    assert_eq!(m.get_path_param("id"), Some("12"));
    // Percent-decoding happens before capture.
    assert_eq!(m.get_path_param("course"), Some("linear algebra"));
    assert_eq!(m.path_params.len(), 2);
    assert_eq!(m.path_params[0].0.as_ref(), "id");
    assert_eq!(m.path_params[1].0.as_ref(), "course");
}

#[test]
fn test_match_input_is_path_only() {
    // Splitting the query off a target is the navigator's job; the router
    // treats `?` as ordinary segment text.
    let router = build_router();
    assert!(router.match_path("/students?tab=all").is_none());
}

#[test]
fn test_route_by_name_lookup() {
    let router = build_router();
    assert_eq!(
        router.route_by_name("Enrolled").map(|r| r.path.as_str()),
        Some("/students/enrolled")
    );
    assert!(router.route_by_name("nope").is_none());
}

#[test]
fn test_reverse_routing_builds_paths() {
    let router = build_router();
    assert_eq!(router.path_for("home", &[]).unwrap(), "/");
    assert_eq!(
        router.path_for("Student", &[("id", "12")]).unwrap(),
        "/students/12"
    );
    assert_eq!(
        router
            .path_for("StudentCourse", &[("id", "12"), ("course", "set theory")])
            .unwrap(),
        "/students/12/courses/set%20theory"
    );
}

#[test]
fn test_reverse_routing_errors() {
    let router = build_router();
    assert!(matches!(
        router.path_for("nope", &[]).unwrap_err(),
        RouteError::UnknownName { name } if name == "nope"
    ));
    assert!(matches!(
        router.path_for("Student", &[]).unwrap_err(),
        RouteError::MissingParam { param, .. } if param == "id"
    ));
}

#[test]
fn test_match_then_interpolate_round_trips() {
    let router = build_router();
    let m = router.match_path("/students/12").expect("route must match");
    let rebuilt = router
        .path_for(&m.name, &[("id", m.get_path_param("id").unwrap())])
        .unwrap();
    assert_eq!(rebuilt, "/students/12");
}
