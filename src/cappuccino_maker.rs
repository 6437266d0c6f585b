use crate::constants::{CAPPUCCINO_NAME, CAPPUCCINO_PRICE};
use crate::drink::Drink;
use crate::drink_maker::DrinkMaker;

/// Makes cappuccinos.
pub struct CappuccinoMaker;

impl DrinkMaker for CappuccinoMaker {
    fn make(&self) -> Drink {
        Drink::new(String::from(CAPPUCCINO_NAME), CAPPUCCINO_PRICE)
    }
}
