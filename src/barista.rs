//! Barista of the coffee shop. Prepares the drinks.
use log::debug;

use crate::drink::Drink;
use crate::drink_maker::DrinkMaker;

/// Prepares drinks by delegating to the drink maker it was given.
/// The barista does not choose its maker, it receives one when created
/// and keeps it for its whole lifetime.
pub struct Barista {
    drink_maker: Box<dyn DrinkMaker>,
}

impl Barista {
    pub fn new(drink_maker: Box<dyn DrinkMaker>) -> Barista {
        Barista { drink_maker }
    }

    /// Asks the maker for its drink and hands it back unchanged.
    pub fn prepare_drink(&self) -> Drink {
        let drink = self.drink_maker.make();
        debug!("[BARISTA] Prepared {}", drink.get_name());
        drink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TeaMaker;

    impl DrinkMaker for TeaMaker {
        fn make(&self) -> Drink {
            Drink::new(String::from("Tea"), 1.5)
        }
    }

    #[test]
    fn should_return_exactly_what_the_injected_maker_makes() {
        let barista = Barista::new(Box::new(TeaMaker));
        let drink = barista.prepare_drink();
        assert_eq!(Drink::new(String::from("Tea"), 1.5), drink);
    }
}
