mod common;

use common::fixtures::{sample_routes, view};
use wayfinder::{Route, RouteError, RouteTable};

#[test]
fn test_sample_table_builds() {
    common::logging::init();
    let table = RouteTable::new(sample_routes()).expect("sample table must validate");
    assert_eq!(table.len(), 6);
}

#[test]
fn test_declaration_order_preserved() {
    let table = RouteTable::new(sample_routes()).unwrap();
    let paths: Vec<&str> = table.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "/",
            "/students",
            "/students/enrolled",
            "/students/{id:[0-9]+}",
            "/students/{id:[0-9]+}/courses/{course}",
            "/about",
        ]
    );
}

#[test]
fn test_rebuild_is_deterministic() {
    // Building twice from the same declarations yields the same table shape.
    let first: Vec<String> = RouteTable::new(sample_routes())
        .unwrap()
        .iter()
        .map(|r| format!("{}::{}", r.path, r.name))
        .collect();
    let second: Vec<String> = RouteTable::new(sample_routes())
        .unwrap()
        .iter()
        .map(|r| format!("{}::{}", r.path, r.name))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_literal_path_rejected() {
    let mut routes = sample_routes();
    routes.push(Route::new("/about", "about-duplicate", view("OtherView")));

    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(
        err,
        RouteError::DuplicatePath { path, .. } if path == "/about"
    ));
}

#[test]
fn test_trailing_slash_counts_as_duplicate() {
    let mut routes = sample_routes();
    routes.push(Route::new("/about/", "about-slash", view("OtherView")));

    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(err, RouteError::DuplicatePath { .. }));
}

#[test]
fn test_param_rename_counts_as_duplicate() {
    // `{id}` and `{student}` match the same set of paths, so the table must
    // refuse the pair regardless of the differing capture names.
    let routes = vec![
        Route::new("/students/{id}", "a", view("A")),
        Route::new("/students/{student}", "b", view("B")),
    ];

    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(err, RouteError::DuplicatePath { .. }));
}

#[test]
fn test_duplicate_name_rejected() {
    let mut routes = sample_routes();
    routes.push(Route::new("/welcome", "home", view("WelcomeView")));

    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(
        err,
        RouteError::DuplicateName { name, existing } if name == "home" && existing == "/"
    ));
}

#[test]
fn test_relative_path_rejected() {
    let routes = vec![Route::new("about", "about", view("AboutView"))];

    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(err, RouteError::RelativePath { path } if path == "about"));
}

#[test]
fn test_invalid_constraint_rejected() {
    let routes = vec![Route::new("/students/{id:[0-9}", "bad", view("X"))];

    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(err, RouteError::InvalidPattern { .. }));
}

#[test]
fn test_error_messages_name_the_offender() {
    let routes = vec![
        Route::new("/a", "dup", view("A")),
        Route::new("/b", "dup", view("B")),
    ];
    let err = RouteTable::new(routes).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("dup"), "got: {message}");
    assert!(message.contains("/a"), "got: {message}");
}
