use wayfinder::View;

const SEED_PRODUCTS: &[(&str, &str)] = &[
    ("Notebook", "3.50"),
    ("Campus hoodie", "39.00"),
    ("Water bottle", "12.00"),
];

/// Campus store catalogue.
pub struct ProductView;

impl View for ProductView {
    fn name(&self) -> &str {
        "ProductView"
    }

    fn render(&self) -> String {
        let mut out = String::from("<main class=\"products\"><h1>Products</h1><table>");
        for (product, price) in SEED_PRODUCTS {
            out.push_str("<tr><td>");
            out.push_str(product);
            out.push_str("</td><td>");
            out.push_str(price);
            out.push_str("</td></tr>");
        }
        out.push_str("</table></main>");
        out
    }
}
