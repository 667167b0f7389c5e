use wayfinder::View;

pub struct NewPage;

impl View for NewPage {
    fn name(&self) -> &str {
        "NewPage"
    }

    fn render(&self) -> String {
        "<main class=\"new\"><h1>New Page</h1></main>".to_string()
    }
}
