use wayfinder::View;

/// Board-style todo page; distinct from [`TodoListView`](crate::views::TodoListView)
/// which renders the flat list at `/todos`.
pub struct TodoList;

impl View for TodoList {
    fn name(&self) -> &str {
        "TodoList"
    }

    fn render(&self) -> String {
        concat!(
            "<main class=\"todo-board\">",
            "<h1>Todo Board</h1>",
            "<section><h2>Open</h2></section>",
            "<section><h2>Done</h2></section>",
            "</main>"
        )
        .to_string()
    }
}
