use reqwest::Client;
use serde::Deserialize;

use crate::domain::menu::MenuItem;
use crate::domain::order::{OrderReceipt, OrderRequest};
use crate::domain::ports::OrderApi;
use crate::errors::ApiError;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

// ── HTTP client ───────────────────────────────────────────────────────────────

/// Error body the server sends alongside non-2xx order responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// [`OrderApi`] over HTTP. One request per call; no retry, no caching, and
/// no request timeout (only the *display* of outcomes is time-limited, by
/// the checkout service).
pub struct HttpOrderApi {
    http: Client,
    base_url: String,
}

impl HttpOrderApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }
}

impl OrderApi for HttpOrderApi {
    async fn fetch_menu_items(&self) -> Result<Vec<MenuItem>, ApiError> {
        let url = format!("{}/api/menu-items/", self.base_url);
        log::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }

        let items: Vec<MenuItem> = response.json().await?;
        log::debug!("fetched {} menu items", items.len());
        Ok(items)
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<OrderReceipt, ApiError> {
        let url = format!("{}/api/orders/", self.base_url);
        log::debug!("POST {url} ({} items)", request.items.len());

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            // Prefer the server's own message; fall back to the bare status
            // when the body is absent or not the expected shape.
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(match detail {
                Some(detail) => ApiError::Http {
                    status: status.as_u16(),
                    detail,
                },
                None => ApiError::from_status(status.as_u16()),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash_from_base_url() {
        let api = HttpOrderApi::new("http://localhost:8000/");
        assert_eq!(api.base_url, "http://localhost:8000");
    }
}
