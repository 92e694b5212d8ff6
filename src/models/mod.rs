mod order;
mod product;

pub use order::{CartItem, CheckoutRequest, Order};
pub use product::{CreateProduct, NewProduct, Product};

/// `Some(n)` when `value` is a finite, non-negative integral number that fits
/// a `u64` (so `2.0` is `2`, `2.5` and `-1` are `None`).
pub fn whole_number(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then(|| value as u64)
}
