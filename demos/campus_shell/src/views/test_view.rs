use wayfinder::View;

/// Scratch page kept around for experiments.
pub struct TestView;

impl View for TestView {
    fn name(&self) -> &str {
        "TestView"
    }

    fn render(&self) -> String {
        "<main class=\"test\"><h1>Test</h1><p>Playground page.</p></main>".to_string()
    }
}
