//! Pure text renderers: functions of their inputs, no state of their own.

use bigdecimal::{BigDecimal, RoundingMode};

use crate::application::checkout::SubmissionStatus;
use crate::domain::cart::Cart;
use crate::domain::menu::MenuItem;

fn money(amount: &BigDecimal) -> String {
    format!("${}", amount.with_scale_round(2, RoundingMode::HalfUp))
}

/// One block per menu item; a fixed message when the menu is empty.
pub fn menu(items: &[MenuItem]) -> String {
    if items.is_empty() {
        return "No menu items available.".to_string();
    }

    let mut out = String::from("Our Menu\n");
    for item in items {
        out.push_str(&format!("  [{}] {} - {}", item.id, item.name, money(&item.price)));
        if let Some(category) = &item.category {
            out.push_str(&format!(" ({category})"));
        }
        out.push('\n');
        let description = item
            .description
            .as_deref()
            .unwrap_or("No description available.");
        out.push_str(&format!("      {description}\n"));
    }
    out
}

/// Line items, each with unit price and line total, then the grand total.
pub fn cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut out = String::from("Current Order\n");
    for line in cart.lines() {
        out.push_str(&format!(
            "  {} x{} @ {} = {}\n",
            line.item.name,
            line.quantity,
            money(&line.item.price),
            money(&line.line_total()),
        ));
    }
    out.push_str(&format!("Grand Total: {}", money(&cart.grand_total())));
    out
}

/// The transient status line; `None` while idle.
pub fn status(status: &SubmissionStatus) -> Option<String> {
    match status {
        SubmissionStatus::Idle => None,
        SubmissionStatus::Rejected => Some("Cannot place an empty order.".to_string()),
        SubmissionStatus::Placing => Some("Placing order...".to_string()),
        SubmissionStatus::Placed(receipt) => Some(format!(
            "Order placed successfully! Order ID: {}",
            receipt.id
        )),
        SubmissionStatus::Failed(message) => Some(format!("Error placing order: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::domain::order::OrderReceipt;
    use crate::errors::ApiError;

    fn item(id: i64, name: &str, price: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: None,
            price: BigDecimal::from_str(price).expect("valid decimal"),
            category: None,
        }
    }

    #[test]
    fn empty_menu_renders_fixed_message() {
        assert_eq!(menu(&[]), "No menu items available.");
    }

    #[test]
    fn menu_renders_price_category_and_description_fallback() {
        let mut burger = item(1, "Burger", "9.9");
        burger.category = Some("Mains".to_string());

        let out = menu(&[burger]);

        assert!(out.contains("[1] Burger - $9.90 (Mains)"));
        assert!(out.contains("No description available."));
    }

    #[test]
    fn empty_cart_renders_fixed_message() {
        assert_eq!(cart(&Cart::new()), "Your cart is empty.");
    }

    #[test]
    fn cart_renders_line_totals_and_grand_total() {
        let mut c = Cart::new();
        c.add(&item(1, "Burger", "9.99"));
        c.update_quantity(1, 2);
        c.add(&item(2, "Cola", "3.50"));

        let out = cart(&c);

        assert!(out.contains("Burger x2 @ $9.99 = $19.98"));
        assert!(out.contains("Cola x1 @ $3.50 = $3.50"));
        assert!(out.contains("Grand Total: $23.48"));
    }

    #[test]
    fn status_messages_match_the_submission_outcome() {
        assert_eq!(status(&SubmissionStatus::Idle), None);
        assert_eq!(
            status(&SubmissionStatus::Rejected).unwrap(),
            "Cannot place an empty order."
        );
        assert_eq!(status(&SubmissionStatus::Placing).unwrap(), "Placing order...");

        let placed = SubmissionStatus::Placed(OrderReceipt {
            id: 42,
            status: None,
            timestamp: None,
        });
        assert_eq!(
            status(&placed).unwrap(),
            "Order placed successfully! Order ID: 42"
        );
    }

    #[test]
    fn failed_status_surfaces_the_server_detail() {
        let err = ApiError::Http {
            status: 400,
            detail: "Item out of stock".to_string(),
        };
        let failed = SubmissionStatus::Failed(err.to_string());

        assert_eq!(
            status(&failed).unwrap(),
            "Error placing order: Item out of stock"
        );
    }
}
