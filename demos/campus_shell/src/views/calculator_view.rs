use wayfinder::View;

const KEYS: &[&str] = &[
    "7", "8", "9", "/", "4", "5", "6", "*", "1", "2", "3", "-", "0", ".", "=", "+",
];

/// Pocket calculator page.
pub struct CalculatorView;

impl View for CalculatorView {
    fn name(&self) -> &str {
        "CalculatorView"
    }

    fn render(&self) -> String {
        let mut out = String::from("<main class=\"calculator\"><h1>Calculator</h1><div class=\"keys\">");
        for key in KEYS {
            out.push_str("<button>");
            out.push_str(key);
            out.push_str("</button>");
        }
        out.push_str("</div></main>");
        out
    }
}
