//! Output formatting for the CLI.

use console::style;
use freshcart_commerce::cart::CartState;
use freshcart_commerce::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a product listing.
    pub fn products(&self, products: &[Product]) {
        let widths = [4, 24, 12, 10, 6];
        self.table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &widths);
        for product in products {
            let price = product.price.display();
            self.table_row(
                &[
                    product.id.as_str(),
                    &product.name,
                    &product.category,
                    &price,
                    stock_badge(product.in_stock).as_str(),
                ],
                &widths,
            );
        }
    }

    /// Print the lines and totals of a cart.
    pub fn cart(&self, cart: &CartState) {
        if cart.is_empty() {
            self.info("Cart is empty");
            return;
        }

        let widths = [4, 24, 5, 10];
        self.table_row(&["ID", "NAME", "QTY", "TOTAL"], &widths);
        for line in cart.items() {
            let quantity = line.quantity.to_string();
            let total = line.total_price.display();
            self.table_row(
                &[line.id().as_str(), line.name(), &quantity, &total],
                &widths,
            );
        }

        let nutrition = cart.nutrition_totals();
        self.kv("Items", &cart.total_item_count().to_string());
        self.kv("Total", &cart.total().display());
        self.kv(
            "Nutrition",
            &format!(
                "{:.0} kcal, {:.1}g protein, {:.1}g carbs, {:.1}g fats",
                nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fats
            ),
        );
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Stock badge for product listings.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("yes").green().to_string()
    } else {
        style("no").red().to_string()
    }
}
