use bigdecimal::{BigDecimal, RoundingMode};

use super::errors::DomainError;
use super::menu::MenuItem;
use super::order::{OrderRequest, OrderRequestLine};

/// One menu item's entry in the cart. The full item is kept so renderers
/// can show name and price without a lookup; `quantity` is always >= 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity for this line, unrounded.
    pub fn line_total(&self) -> BigDecimal {
        self.item.price.clone() * BigDecimal::from(self.quantity)
    }
}

/// The in-progress, unsubmitted order: an insertion-ordered collection of
/// cart lines with at most one line per menu item id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `item`. An existing line for the same id accumulates
    /// quantity; a new line is appended, preserving first-add order.
    pub fn add(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item: item.clone(),
                quantity: 1,
            }),
        }
    }

    /// Remove the line for `item_id`. No-op if absent.
    pub fn remove(&mut self, item_id: i64) {
        self.lines.retain(|l| l.item.id != item_id);
    }

    /// Set the quantity of the line for `item_id`. A quantity of 0 removes
    /// the line; an absent line is a no-op.
    pub fn update_quantity(&mut self, item_id: i64, quantity: u32) {
        if quantity < 1 {
            self.remove(item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity over all lines, rounded half-up to 2 decimal
    /// places. Intermediate sums are exact; rounding happens once, here.
    pub fn grand_total(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::from(0), |total, line| total + line.line_total())
            .with_scale_round(2, RoundingMode::HalfUp)
    }

    /// Project the cart into the API's request shape. Fails for an empty
    /// cart; the caller decides how to surface that.
    pub fn to_order_request(&self) -> Result<OrderRequest, DomainError> {
        if self.lines.is_empty() {
            return Err(DomainError::EmptyOrder);
        }
        Ok(OrderRequest {
            items: self
                .lines
                .iter()
                .map(|l| OrderRequestLine {
                    menu_item: l.item.id,
                    quantity: l.quantity,
                })
                .collect(),
        })
    }
}
