//! Representation of a drink of the menu

/// A purchasable drink. Its name and price cannot change once it is made,
/// a different drink has to be created instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    name: String,
    price: f64,
}

impl Drink {
    pub fn new(name: String, price: f64) -> Drink {
        Drink { name, price }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_price(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_the_name_and_price_it_was_created_with() {
        let drink = Drink::new(String::from("Cappuccino"), 3.0);
        assert_eq!("Cappuccino", drink.get_name());
        assert_eq!(3.0, drink.get_price());
    }
}
