pub mod barista;
pub mod cappuccino_maker;
pub mod constants;
pub mod drink;
pub mod drink_maker;
pub mod latte_maker;
pub mod order;
pub mod order_printer;

use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use barista::Barista;
use cappuccino_maker::CappuccinoMaker;
use latte_maker::LatteMaker;
use order::Order;
use order_printer::OrderPrinter;

fn main() {
    if SimpleLogger::new().with_level(LevelFilter::Info).init().is_err() {
        println!("[ERROR] Error setting up the logger");
    }
    info!("[COFFEE SHOP] Opening the shop");

    let cappuccino_barista = Barista::new(Box::new(CappuccinoMaker));
    let latte_barista = Barista::new(Box::new(LatteMaker));

    let mut order = Order::new();
    order.add_drink(cappuccino_barista.prepare_drink());
    order.add_drink(latte_barista.prepare_drink());

    let printer = OrderPrinter;
    printer.print_order(&order);
    info!("[COFFEE SHOP] Order served");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drink::Drink;

    #[test]
    fn should_serve_a_cappuccino_and_a_latte_in_that_order() {
        let cappuccino_barista = Barista::new(Box::new(CappuccinoMaker));
        let latte_barista = Barista::new(Box::new(LatteMaker));

        let mut order = Order::new();
        order.add_drink(cappuccino_barista.prepare_drink());
        order.add_drink(latte_barista.prepare_drink());

        assert_eq!(6.5, order.total_price());
        assert_eq!(
            vec![
                Drink::new(String::from("Cappuccino"), 3.0),
                Drink::new(String::from("Latte"), 3.5)
            ],
            order.get_drinks()
        );
    }
}
