use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A single entry of the restaurant menu, as served by the API.
///
/// Prices travel on the wire as decimal strings (e.g. `"9.99"`) and are
/// parsed into `BigDecimal`; money never goes through a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: BigDecimal,
    #[serde(default)]
    pub category: Option<String>,
}
