use wayfinder::View;

/// Landing page of the shell.
pub struct HomeView;

impl View for HomeView {
    fn name(&self) -> &str {
        "HomeView"
    }

    fn render(&self) -> String {
        concat!(
            "<main class=\"home\">",
            "<h1>Campus Shell</h1>",
            "<p>Pick a page from the menu to get started.</p>",
            "</main>"
        )
        .to_string()
    }
}
