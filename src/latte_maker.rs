use crate::constants::{LATTE_NAME, LATTE_PRICE};
use crate::drink::Drink;
use crate::drink_maker::DrinkMaker;

/// Makes lattes.
pub struct LatteMaker;

impl DrinkMaker for LatteMaker {
    fn make(&self) -> Drink {
        Drink::new(String::from(LATTE_NAME), LATTE_PRICE)
    }
}
