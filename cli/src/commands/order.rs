use std::io::{self, BufRead};
use std::rc::Rc;

use anyhow::Context;
use colored::*;

use crate::commands::OrderArgs;
use crate::config::Config;
use crate::terminal::print::Detail;
use crate::terminal::sink::TerminalSink;
use crate::terminal::{colors, input, print};
use orderly_core::application::services::checkout::{self, OrderRequest, Receipt};
use orderly_core::domain::discount::{Discount, NoDiscount, PercentageDiscount};
use orderly_core::domain::models::menu::MenuItem;
use orderly_core::domain::models::payment::PaymentMethod;
use orderly_core::ports::outbound::message_sink::MessageSink;

const REJECTED: &str = "order was not placed";

/// A processed order together with the discount it was priced with.
#[derive(Debug)]
struct Placed {
    receipt: Receipt,
    discount: Option<PercentageDiscount>,
}

pub fn order(args: OrderArgs, cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let sink: Rc<dyn MessageSink> = Rc::new(TerminalSink);

    let placed = place(args, cfg, &mut reader, sink)?;
    print_receipt(&placed, cfg);
    Ok(())
}

/// Collects whatever choices `args` does not already carry from `reader`,
/// then runs the checkout. A bad item choice fails before the payment
/// method is asked for.
fn place<R: BufRead>(
    args: OrderArgs,
    cfg: &Config,
    reader: &mut R,
    sink: Rc<dyn MessageSink>,
) -> anyhow::Result<Placed> {
    print::header("place your order", cfg.quiet);

    let item_choice = match args.item {
        Some(choice) => choice,
        None => {
            print_choices(MenuItem::ALL.iter().map(|i| (i.choice(), i.to_string())));
            input::read_choice(reader, "Choose an item:")?
        }
    };
    MenuItem::from_choice(&item_choice).context(REJECTED)?;

    let payment_choice = match args.payment {
        Some(choice) => choice,
        None => {
            print_choices(PaymentMethod::ALL.iter().map(|p| (p.choice(), p.to_string())));
            input::read_choice(reader, "Choose a payment method:")?
        }
    };

    let discount: Option<PercentageDiscount> = args.discount.map(PercentageDiscount::new);
    let pricing: &dyn Discount = match &discount {
        Some(percentage) => percentage,
        None => &NoDiscount,
    };

    print::header("processing", cfg.quiet);
    let request = OrderRequest {
        order_id: args.order_id,
        item_choice: &item_choice,
        payment_choice: &payment_choice,
        discount: pricing,
    };
    let receipt = checkout::place_order(&request, sink).context(REJECTED)?;

    Ok(Placed { receipt, discount })
}

fn print_choices(choices: impl Iterator<Item = (u8, String)>) {
    for (number, label) in choices {
        print::print(&format!(
            "  {} {}",
            format!("[{number}]").color(colors::ACCENT),
            label.color(colors::TEXT_DEFAULT)
        ));
    }
}

fn receipt_details(placed: &Placed) -> Vec<Detail> {
    let order = &placed.receipt.order;
    let mut details: Vec<Detail> = vec![("Items".to_string(), order.items.join(", ").normal())];

    if let Some(discount) = &placed.discount {
        details.push((
            "Discount".to_string(),
            format!("{}% off ${:.2}", discount.percentage(), placed.receipt.item.price()).normal(),
        ));
    }

    details.push((
        "Total".to_string(),
        format!("${:.2}", order.total_amount).color(colors::AMOUNT),
    ));
    details.push((
        "Payment".to_string(),
        placed.receipt.payment_method.label().normal(),
    ));
    details
}

fn print_receipt(placed: &Placed, cfg: &Config) {
    let receipt = &placed.receipt;
    print::header("receipt", cfg.quiet);
    print::tree_head(0, &format!("Order #{}", receipt.order.id));
    print::tree(&receipt_details(placed));

    let summary: String = format!(
        "{} paid with {}",
        format!("${:.2}", receipt.order.total_amount).bold().green(),
        receipt.payment_method.label().bold()
    );
    match cfg.quiet {
        0 => {
            print::closing_rule();
            print::centerln(&summary);
        }
        _ => print::print_status(&summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderly_core::adapters::outbound::sink::memory::MemorySink;
    use std::io::Cursor;

    fn cfg() -> Config {
        Config {
            quiet: 2,
            no_banner: true,
        }
    }

    fn keys(details: &[Detail]) -> Vec<&str> {
        details.iter().map(|(key, _)| key.as_str()).collect()
    }

    #[test]
    fn prompts_for_both_choices() {
        let sink = Rc::new(MemorySink::new());
        let mut input = Cursor::new("1\n1\n");

        let placed = place(OrderArgs::default(), &cfg(), &mut input, sink.clone()).unwrap();

        assert_eq!(placed.receipt.item, MenuItem::Donut);
        assert_eq!(placed.receipt.payment_method, PaymentMethod::CreditCard);
        assert!(placed.discount.is_none());
        assert!(sink.contains("Processing credit card payment of $20."));
    }

    #[test]
    fn flags_skip_the_prompts() {
        let sink = Rc::new(MemorySink::new());
        let mut input = Cursor::new("");
        let args = OrderArgs {
            item: Some("2".to_string()),
            payment: Some("2".to_string()),
            discount: Some(25.0),
            order_id: 3,
        };

        let placed = place(args, &cfg(), &mut input, sink.clone()).unwrap();

        assert_eq!(placed.receipt.order.total_amount, 30.0);
        assert!(sink.contains("Processing PayPal payment of $30."));
        assert!(sink.contains("Order 3 saved to database."));
    }

    #[test]
    fn only_missing_choices_are_prompted() {
        let sink = Rc::new(MemorySink::new());
        let mut input = Cursor::new("1\n");
        let args = OrderArgs {
            item: Some("9".to_string()),
            ..OrderArgs::default()
        };

        let placed = place(args, &cfg(), &mut input, sink).unwrap();

        assert_eq!(placed.receipt.item, MenuItem::Burger);
        assert_eq!(placed.receipt.payment_method, PaymentMethod::CreditCard);
    }

    #[test]
    fn non_numeric_item_is_reported() {
        let sink = Rc::new(MemorySink::new());
        let mut input = Cursor::new("pizza\n1\n");

        let err = place(OrderArgs::default(), &cfg(), &mut input, sink.clone()).unwrap_err();

        assert_eq!(err.to_string(), "order was not placed");
        assert_eq!(err.root_cause().to_string(), "item choice 'pizza' is not a number");
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn bad_item_fails_before_payment_is_asked_for() {
        let sink = Rc::new(MemorySink::new());
        let mut input = Cursor::new("pizza\n");

        let err = place(OrderArgs::default(), &cfg(), &mut input, sink.clone()).unwrap_err();

        assert_eq!(err.root_cause().to_string(), "item choice 'pizza' is not a number");
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn missing_input_is_reported() {
        let sink = Rc::new(MemorySink::new());
        let mut input = Cursor::new("1\n");

        let err = place(OrderArgs::default(), &cfg(), &mut input, sink).unwrap_err();

        assert_eq!(
            err.to_string(),
            "input ended before 'Choose a payment method:' was answered"
        );
    }

    #[test]
    fn receipt_shows_the_discount_that_was_applied() {
        let sink = Rc::new(MemorySink::new());
        let args = OrderArgs {
            item: Some("2".to_string()),
            payment: Some("1".to_string()),
            discount: Some(25.0),
            ..OrderArgs::default()
        };

        let placed = place(args, &cfg(), &mut Cursor::new(""), sink).unwrap();
        let details = receipt_details(&placed);

        assert_eq!(keys(&details), vec!["Items", "Discount", "Total", "Payment"]);
        assert_eq!(&*details[1].1, "25% off $40.00");
        assert_eq!(&*details[2].1, "$30.00");
    }

    #[test]
    fn receipt_without_discount_has_no_discount_row() {
        let sink = Rc::new(MemorySink::new());
        let placed = place(OrderArgs::default(), &cfg(), &mut Cursor::new("1\n2\n"), sink).unwrap();

        let details = receipt_details(&placed);

        assert_eq!(keys(&details), vec!["Items", "Total", "Payment"]);
        assert_eq!(&*details[0].1, "Donut");
        assert_eq!(&*details[2].1, "PayPal");
    }
}
