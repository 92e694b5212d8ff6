use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::whole_number;

/// One cart line as submitted by the client. Both fields are kept as raw
/// JSON so the line echoes back verbatim; `product_id`/`quantity` interpret
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub qty: Value,
}

impl CartItem {
    pub fn new(id: u64, qty: u32) -> Self {
        Self {
            id: Value::from(id),
            qty: Value::from(qty),
        }
    }

    /// The catalog id this line refers to, if `id` is a non-negative whole number.
    pub fn product_id(&self) -> Option<u64> {
        as_whole(&self.id)
    }

    /// Requested units, if `qty` is a positive whole number.
    pub fn quantity(&self) -> Option<u32> {
        as_whole(&self.qty)
            .filter(|q| *q > 0)
            .and_then(|q| u32::try_from(q).ok())
    }

    /// `id` as it should read in error messages.
    pub fn id_label(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

fn as_whole(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_number)),
        _ => None,
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckoutRequest {
    /// A missing or `null` cart is treated as empty.
    #[serde(default)]
    pub cart: Option<Vec<CartItem>>,
    /// Free-form, echoed into the order untouched. Defaults to `{}`.
    #[serde(default = "empty_object")]
    pub customer: Value,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: u64,
    pub cart: Vec<CartItem>,
    pub total: f64,
    pub customer: Value,
    pub created_at: DateTime<Utc>,
}
