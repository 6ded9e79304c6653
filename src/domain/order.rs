use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Write-only projection of the cart, built fresh at submission time.
///
/// Serializes to the wire shape `{"items": [{"menu_item": id, "quantity": n}]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub items: Vec<OrderRequestLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequestLine {
    pub menu_item: i64,
    pub quantity: u32,
}

/// The server's record of a created order. `id` is the only field the flow
/// relies on; the rest is display metadata and tolerated missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderReceipt {
    pub id: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_serializes_to_wire_shape() {
        let request = OrderRequest {
            items: vec![
                OrderRequestLine { menu_item: 1, quantity: 2 },
                OrderRequestLine { menu_item: 7, quantity: 1 },
            ],
        };

        let value = serde_json::to_value(&request).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({
                "items": [
                    {"menu_item": 1, "quantity": 2},
                    {"menu_item": 7, "quantity": 1}
                ]
            })
        );
    }

    #[test]
    fn receipt_tolerates_extra_and_missing_fields() {
        let receipt: OrderReceipt = serde_json::from_str(
            r#"{"id": 42, "items": [{"menu_item": 1, "quantity": 2}], "status": "pending", "timestamp": "2024-05-01T12:30:00.123456Z"}"#,
        )
        .expect("valid receipt");
        assert_eq!(receipt.id, 42);
        assert_eq!(receipt.status.as_deref(), Some("pending"));
        assert!(receipt.timestamp.is_some());

        let bare: OrderReceipt = serde_json::from_str(r#"{"id": 7}"#).expect("valid receipt");
        assert_eq!(bare.id, 7);
        assert!(bare.status.is_none());
        assert!(bare.timestamp.is_none());
    }
}
