#![cfg(test)]
use orderly_core::application::services::order_processing::SUCCESS_MESSAGE;
use orderly_core::domain::error::ChoiceError;
use orderly_core::domain::models::menu::MenuItem;
use orderly_core::domain::models::order::Order;
use orderly_core::domain::models::payment::PaymentMethod;

use crate::utils::checkout_with;

/// Donut paid by credit card: the first entry on both menus.
#[test]
fn donut_with_credit_card() {
    let (result, sink) = checkout_with("1", "1");

    assert!(result.is_ok(), "Checkout failed: {:?}", result.as_ref().err());
    let receipt = result.unwrap();

    assert_eq!(
        receipt.order,
        Order::new(1, vec!["Donut".to_string()], 20.0)
    );
    assert_eq!(receipt.payment_method, PaymentMethod::CreditCard);

    assert!(sink.contains("Processing credit card payment of $20."));
    assert!(sink.contains("Order 1 saved to database."));
    assert!(sink.contains(&format!("Sending email: {SUCCESS_MESSAGE}")));
}

#[test]
fn burger_with_paypal() {
    let (result, sink) = checkout_with("2", "2");
    let receipt = result.unwrap();

    assert_eq!(receipt.order.items, vec!["Burger".to_string()]);
    assert_eq!(receipt.order.total_amount, 40.0);
    assert_eq!(receipt.payment_method, PaymentMethod::PayPal);

    assert!(sink.contains("Processing PayPal payment of $40."));
    assert!(!sink.lines().iter().any(|l| l.contains("credit card")));
}

/// Any number other than 1 orders a burger; this is the menu's fallback.
#[test]
fn unknown_item_number_falls_back_to_burger() {
    let (result, sink) = checkout_with("9", "1");
    let receipt = result.unwrap();

    assert_eq!(receipt.item, MenuItem::Burger);
    assert_eq!(receipt.order.total_amount, 40.0);
    assert!(sink.contains("Processing credit card payment of $40."));
}

#[test]
fn payment_happens_before_save_and_notification() {
    let (result, sink) = checkout_with("1", "2");
    assert!(result.is_ok());

    let lines = sink.lines();
    let position = |needle: &str| {
        lines
            .iter()
            .position(|l| l.starts_with(needle))
            .unwrap_or_else(|| panic!("'{needle}' was never emitted: {lines:?}"))
    };

    let started = position("Processing order...");
    let paid = position("Processing PayPal payment");
    let saved = position("Order 1 saved");
    let notified = position("Sending email");
    let finished = position("Order processing complete.");
    assert!(started < paid, "processing must be announced first: {lines:?}");
    assert!(paid < saved, "payment must come before save: {lines:?}");
    assert!(saved < notified, "save must come before notification: {lines:?}");
    assert!(notified < finished, "completion comes after notification: {lines:?}");
    assert_eq!(lines.iter().filter(|l| l.starts_with("Sending email")).count(), 1);
}

#[test]
fn non_numeric_item_is_rejected_before_anything_happens() {
    let (result, sink) = checkout_with("donut", "1");

    match result {
        Err(ChoiceError::NotANumber(raw)) => assert_eq!(raw, "donut"),
        other => panic!("expected a rejected choice, got {other:?}"),
    }
    assert!(sink.lines().is_empty(), "nothing should be charged: {:?}", sink.lines());
}
