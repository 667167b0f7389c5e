use wayfinder::View;

pub struct ItemList;

impl View for ItemList {
    fn name(&self) -> &str {
        "ItemList"
    }

    fn render(&self) -> String {
        concat!(
            "<main class=\"items\">",
            "<h1>Items</h1>",
            "<ul><li>First</li><li>Second</li><li>Third</li></ul>",
            "</main>"
        )
        .to_string()
    }
}
