use wayfinder::View;

/// Minimal single-input todo page.
pub struct SimpleTodoView;

impl View for SimpleTodoView {
    fn name(&self) -> &str {
        "SimpleTodoView"
    }

    fn render(&self) -> String {
        concat!(
            "<main class=\"simple-todo\">",
            "<h1>Simple Todo</h1>",
            "<input placeholder=\"What needs doing?\"/>",
            "</main>"
        )
        .to_string()
    }
}
