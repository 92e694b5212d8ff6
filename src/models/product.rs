use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Catalog entry. Only checkout mutates it after creation, and only `stock`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub image: String,
}

impl Product {
    /// Line total for `qty` units at the current price.
    pub fn line_total(&self, qty: u32) -> f64 {
        self.price * f64::from(qty)
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Admin-add body. `price` and `stock` accept numbers or numeric strings.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
    pub image: Option<String>,
}

/// A create request that passed validation; only the id is left to assign.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub image: String,
}

impl NewProduct {
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            stock: self.stock,
            image: self.image,
        }
    }
}

impl TryFrom<CreateProduct> for NewProduct {
    type Error = AppError;

    fn try_from(payload: CreateProduct) -> AppResult<Self> {
        let title = payload
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(required)?;
        let price = match payload.price {
            None | Some(Value::Null) => return Err(required()),
            Some(raw) => coerce_number(&raw)
                .filter(|p| *p >= 0.0)
                .ok_or_else(|| {
                    AppError::Validation("price must be a non-negative number".to_string())
                })?,
        };
        let stock = match payload.stock {
            None | Some(Value::Null) => 0,
            Some(raw) => coerce_number(&raw)
                .filter(|s| *s >= 0.0 && s.fract() == 0.0 && *s <= f64::from(u32::MAX))
                .map(|s| s as u32)
                .ok_or_else(|| {
                    AppError::Validation("stock must be a non-negative integer".to_string())
                })?,
        };

        Ok(Self {
            title,
            description: payload.description.unwrap_or_default(),
            price,
            stock,
            image: payload.image.unwrap_or_default(),
        })
    }
}

fn required() -> AppError {
    AppError::Validation("title and price required".to_string())
}

/// Numbers pass through; strings are parsed after trimming. Anything else,
/// including non-finite results, is rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> CreateProduct {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn minimal_payload_fills_defaults() {
        let new = NewProduct::try_from(payload(json!({ "title": "Hat", "price": 5 }))).unwrap();
        assert_eq!(new.title, "Hat");
        assert_eq!(new.description, "");
        assert_eq!(new.image, "");
        assert_eq!(new.stock, 0);
        assert!((new.price - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let new = NewProduct::try_from(payload(json!({
            "title": "Scarf",
            "price": "12.50",
            "stock": "7",
        })))
        .unwrap();
        assert!((new.price - 12.5).abs() < f64::EPSILON);
        assert_eq!(new.stock, 7);
    }

    #[test]
    fn missing_or_blank_title_is_rejected() {
        for body in [json!({ "price": 1 }), json!({ "title": "   ", "price": 1 })] {
            let err = NewProduct::try_from(payload(body)).unwrap_err();
            assert_eq!(err.to_string(), "title and price required");
        }
    }

    #[test]
    fn missing_or_null_price_is_rejected() {
        for body in [json!({ "title": "Hat" }), json!({ "title": "Hat", "price": null })] {
            let err = NewProduct::try_from(payload(body)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
            assert_eq!(err.to_string(), "title and price required");
        }
    }

    #[test]
    fn bad_price_values_are_rejected() {
        for price in [json!(-1), json!("abc"), json!(true), json!([1])] {
            let err =
                NewProduct::try_from(payload(json!({ "title": "Hat", "price": price }))).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn bad_stock_values_are_rejected() {
        for stock in [json!(-3), json!(1.5), json!("lots")] {
            let err = NewProduct::try_from(payload(json!({
                "title": "Hat",
                "price": 5,
                "stock": stock,
            })))
            .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn line_total_multiplies_price() {
        let p = NewProduct::try_from(payload(json!({ "title": "Mug", "price": 9.5 })))
            .unwrap()
            .into_product(3);
        assert_eq!(p.id, 3);
        assert!((p.line_total(4) - 38.0).abs() < 1e-9);
    }
}
