use super::menu::MenuItem;
use super::order::{OrderReceipt, OrderRequest};
use crate::errors::ApiError;

/// The transport seam the submission flow depends on. Exactly one network
/// round-trip per call; no retry, no caching; the caller decides.
#[allow(async_fn_in_trait)]
pub trait OrderApi {
    async fn fetch_menu_items(&self) -> Result<Vec<MenuItem>, ApiError>;

    async fn create_order(&self, request: &OrderRequest) -> Result<OrderReceipt, ApiError>;
}

impl<T: OrderApi> OrderApi for &T {
    async fn fetch_menu_items(&self) -> Result<Vec<MenuItem>, ApiError> {
        (**self).fetch_menu_items().await
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<OrderReceipt, ApiError> {
        (**self).create_order(request).await
    }
}
