use wayfinder::View;

const SEED_CART: &[(&str, u32)] = &[("Notebook", 2), ("Water bottle", 1)];

/// Shopping cart with seeded line items.
pub struct ShoppingCartView;

impl ShoppingCartView {
    fn item_count() -> u32 {
        SEED_CART.iter().map(|(_, qty)| qty).sum()
    }
}

impl View for ShoppingCartView {
    fn name(&self) -> &str {
        "ShoppingCartView"
    }

    fn render(&self) -> String {
        let mut out = String::from("<main class=\"cart\"><h1>Shopping Cart</h1><ul>");
        for (item, qty) in SEED_CART {
            out.push_str("<li>");
            out.push_str(item);
            out.push_str(" x");
            out.push_str(&qty.to_string());
            out.push_str("</li>");
        }
        out.push_str("</ul><p class=\"count\">");
        out.push_str(&Self::item_count().to_string());
        out.push_str(" items</p></main>");
        out
    }
}
