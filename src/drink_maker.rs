//! Extension point of the menu

use crate::drink::Drink;

/// Capability of making one of the drinks of the menu.
/// Adding a new drink to the shop means adding a new implementation of this trait,
/// the rest of the shop does not change.
pub trait DrinkMaker {
    /// Produces the drink. Always succeeds and always returns the same drink.
    fn make(&self) -> Drink;
}
