use std::sync::Arc;
use wayfinder::{View, ViewLoadError};

/// The about page.
///
/// This is the shell's one deferred view: the route table binds it through
/// [`load`] instead of constructing it up front, so the page is only built on
/// the first navigation to `/about`.
pub struct AboutView;

impl View for AboutView {
    fn name(&self) -> &str {
        "AboutView"
    }

    fn render(&self) -> String {
        concat!(
            "<main class=\"about\">",
            "<h1>About</h1>",
            "<p>A small campus administration shell used to exercise the navigator.</p>",
            "</main>"
        )
        .to_string()
    }
}

/// Deferred constructor used by the route table; stands in for fetching the
/// split "about" bundle.
pub fn load() -> Result<Arc<dyn View>, ViewLoadError> {
    Ok(Arc::new(AboutView))
}
