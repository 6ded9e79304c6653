use std::time::Duration;

use tokio::time::Instant;

use crate::domain::cart::Cart;
use crate::domain::errors::DomainError;
use crate::domain::menu::MenuItem;
use crate::domain::order::OrderReceipt;
use crate::domain::ports::OrderApi;

/// How long an empty-cart rejection stays visible.
pub const REJECTION_CLEAR_AFTER: Duration = Duration::from_secs(3);
/// How long a submission result (success or failure) stays visible.
pub const RESULT_CLEAR_AFTER: Duration = Duration::from_secs(5);

/// Transient outcome of the last submission attempt. Every non-`Idle` state
/// reverts to `Idle` once its display window has passed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// Submit was invoked on an empty cart; the API was never called.
    Rejected,
    /// The order request is in flight.
    Placing,
    Placed(OrderReceipt),
    Failed(String),
}

/// Owns the session's single cart and status slot, and drives order
/// submission through an [`OrderApi`] implementation.
///
/// Submissions are not serialized here: a second `submit_order` while one is
/// in flight issues a second network call, and whichever completion lands
/// last wins the status slot.
pub struct CheckoutService<A> {
    api: A,
    cart: Cart,
    status: SubmissionStatus,
    status_clear_at: Option<Instant>,
}

impl<A: OrderApi> CheckoutService<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            cart: Cart::new(),
            status: SubmissionStatus::Idle,
            status_clear_at: None,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add(&mut self, item: &MenuItem) {
        self.cart.add(item);
    }

    pub fn remove(&mut self, item_id: i64) {
        self.cart.remove(item_id);
    }

    pub fn update_quantity(&mut self, item_id: i64, quantity: u32) {
        self.cart.update_quantity(item_id, quantity);
    }

    /// The current status, with expiry applied: reads past the display
    /// deadline observe `Idle`.
    pub fn status(&self) -> SubmissionStatus {
        match self.status_clear_at {
            Some(clear_at) if Instant::now() >= clear_at => SubmissionStatus::Idle,
            _ => self.status.clone(),
        }
    }

    /// Validate, project and submit the cart. On success the cart is
    /// cleared; on failure it is left untouched for another attempt.
    pub async fn submit_order(&mut self) {
        let request = match self.cart.to_order_request() {
            Ok(request) => request,
            Err(DomainError::EmptyOrder) => {
                self.set_status(SubmissionStatus::Rejected, Some(REJECTION_CLEAR_AFTER));
                return;
            }
        };

        self.set_status(SubmissionStatus::Placing, None);

        match self.api.create_order(&request).await {
            Ok(receipt) => {
                log::info!("order {} placed ({} lines)", receipt.id, request.items.len());
                self.cart.clear();
                self.set_status(SubmissionStatus::Placed(receipt), Some(RESULT_CLEAR_AFTER));
            }
            Err(err) => {
                log::warn!("order submission failed: {err}");
                self.set_status(SubmissionStatus::Failed(err.to_string()), Some(RESULT_CLEAR_AFTER));
            }
        }
    }

    fn set_status(&mut self, status: SubmissionStatus, clear_after: Option<Duration>) {
        self.status = status;
        self.status_clear_at = clear_after.map(|ttl| Instant::now() + ttl);
    }
}
