//! Representation of a customer's order
use log::debug;

use crate::drink::Drink;

/// The drinks a customer asked for. Drinks are kept in the order they were added,
/// which is also the order they are shown in when printed.
pub struct Order {
    drinks: Vec<Drink>,
}

impl Order {
    pub fn new() -> Order {
        Order { drinks: Vec::new() }
    }

    /// Appends a drink at the end of the order.
    pub fn add_drink(&mut self, drink: Drink) {
        debug!("[ORDER] Added {}", drink.get_name());
        self.drinks.push(drink);
    }

    /// Sum of the prices of every drink in the order. Recomputed on every call.
    pub fn total_price(&self) -> f64 {
        self.drinks.iter().map(Drink::get_price).sum()
    }

    pub fn get_drinks(&self) -> &[Drink] {
        &self.drinks
    }
}
