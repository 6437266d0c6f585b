//! Menu of the coffee shop

/// Name of the cappuccino on the menu
pub const CAPPUCCINO_NAME: &str = "Cappuccino";

/// Price of a cappuccino
pub const CAPPUCCINO_PRICE: f64 = 3.0;

/// Name of the latte on the menu
pub const LATTE_NAME: &str = "Latte";

/// Price of a latte
pub const LATTE_PRICE: f64 = 3.5;
