use wayfinder::View;

const SEED_TODOS: &[(&str, bool)] = &[
    ("Grade assignments", false),
    ("Book lecture hall", true),
    ("Publish syllabus", false),
];

/// Task list with completion state.
pub struct TodoListView;

impl View for TodoListView {
    fn name(&self) -> &str {
        "TodoListView"
    }

    fn render(&self) -> String {
        let mut out = String::from("<main class=\"todos\"><h1>Todos</h1><ul>");
        for (task, done) in SEED_TODOS {
            out.push_str(if *done {
                "<li class=\"done\">"
            } else {
                "<li>"
            });
            out.push_str(task);
            out.push_str("</li>");
        }
        out.push_str("</ul></main>");
        out
    }
}
