//! Presentation of an order. Kept apart from the order itself so that
//! changing how an order looks never touches how an order is stored.

use crate::order::Order;

/// Writes the details of an order to the standard output.
pub struct OrderPrinter;

impl OrderPrinter {
    /// Prints every drink of the order in the order they were added,
    /// followed by the total price.
    pub fn print_order(&self, order: &Order) {
        print!("{}", self.format_order(order));
    }

    fn format_order(&self, order: &Order) -> String {
        let mut details = String::from("------- Order details -------\n");
        for drink in order.get_drinks() {
            details.push_str(&format!("- {}: ${}\n", drink.get_name(), drink.get_price()));
        }
        details.push_str(&format!("Total: ${}\n", order.total_price()));
        details.push_str("-----------------------------\n");
        details
    }
}
