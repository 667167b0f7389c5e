// Shared across the integration-test binaries; not every binary uses every
// helper.
#![allow(dead_code)]

pub mod fixtures {
    use std::sync::Arc;
    use wayfinder::{Route, View, ViewLoadError, ViewRef};

    /// Minimal view carrying only the component name tests assert on.
    pub struct StubView(pub &'static str);

    impl View for StubView {
        fn name(&self) -> &str {
            self.0
        }
        fn render(&self) -> String {
            format!("<div>{}</div>", self.0)
        }
    }

    /// Eager reference to a [`StubView`].
    pub fn view(name: &'static str) -> ViewRef {
        ViewRef::eager(StubView(name))
    }

    /// Loader producing a [`StubView`], for deferred-route tests.
    pub fn loader(name: &'static str) -> impl Fn() -> Result<Arc<dyn View>, ViewLoadError> {
        move || Ok(Arc::new(StubView(name)) as Arc<dyn View>)
    }

    /// A small mixed table: static routes, a parameterized route, and a
    /// constrained route, enough to exercise precedence and capture.
    pub fn sample_routes() -> Vec<Route> {
        vec![
            Route::new("/", "home", view("HomeView")),
            Route::new("/students", "Students", view("StudentListView")),
            Route::new("/students/enrolled", "Enrolled", view("EnrolledView")),
            Route::new("/students/{id:[0-9]+}", "Student", view("StudentView")),
            Route::new("/students/{id:[0-9]+}/courses/{course}", "StudentCourse", view("CourseView")),
            Route::new("/about", "about", view("AboutView")),
        ]
    }
}

pub mod logging {
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Install a test subscriber once per process; honors RUST_LOG.
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
                )
                .with_test_writer()
                .try_init();
        });
    }
}
