use wayfinder::View;

/// Enrollment form: add, edit, and remove students.
pub struct StudentManageView;

impl View for StudentManageView {
    fn name(&self) -> &str {
        "StudentManageView"
    }

    fn render(&self) -> String {
        concat!(
            "<main class=\"student-manage\">",
            "<h1>Manage Students</h1>",
            "<form>",
            "<input name=\"name\" placeholder=\"Full name\"/>",
            "<input name=\"email\" placeholder=\"Email\"/>",
            "<button type=\"submit\">Enroll</button>",
            "</form>",
            "</main>"
        )
        .to_string()
    }
}
