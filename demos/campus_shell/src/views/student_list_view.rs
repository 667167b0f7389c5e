use wayfinder::View;

// Seed roster shown until a data layer is wired in.
const SEED_STUDENTS: &[&str] = &["Ada Lovelace", "Alan Turing", "Grace Hopper", "Edsger Dijkstra"];

/// Read-only roster of enrolled students.
pub struct StudentListView;

impl View for StudentListView {
    fn name(&self) -> &str {
        "StudentListView"
    }

    fn render(&self) -> String {
        let mut out = String::from("<main class=\"students\"><h1>Students</h1><ul>");
        for student in SEED_STUDENTS {
            out.push_str("<li>");
            out.push_str(student);
            out.push_str("</li>");
        }
        out.push_str("</ul></main>");
        out
    }
}
