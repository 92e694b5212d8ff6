use chrono::Utc;
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::{CartItem, NewProduct, Order, Product};
use crate::seed;

/// Owns every piece of storefront state: the catalog (insertion ordered,
/// keyed by id), the order log and the next product id.
///
/// Callers share it as `Arc<RwLock<Store>>`; anything that mutates takes
/// `&mut self`, so the write lock is held for the whole operation.
#[derive(Debug)]
pub struct Store {
    catalog: IndexMap<u64, Product>,
    orders: Vec<Order>,
    next_product_id: u64,
}

/// Result of a successful validation pass over a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutPlan {
    pub total: f64,
    /// Units to deduct per product id, in first-seen cart order.
    pub deductions: IndexMap<u64, u32>,
}

impl Default for Store {
    fn default() -> Self {
        Self::with_catalog(seed::demo_catalog())
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit catalog. The id counter continues after the
    /// highest id present.
    pub fn with_catalog(products: Vec<Product>) -> Self {
        let next_product_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            catalog: products.into_iter().map(|p| (p.id, p)).collect(),
            orders: Vec::new(),
            next_product_id,
        }
    }

    // ── Catalog ───────────────────────────────────────────────────────────────

    pub fn list_products(&self) -> Vec<Product> {
        self.catalog.values().cloned().collect()
    }

    pub fn get_product(&self, id: u64) -> AppResult<&Product> {
        self.catalog
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Not found".to_string()))
    }

    pub fn add_product(&mut self, new: NewProduct) -> Product {
        let id = self.next_product_id;
        self.next_product_id += 1;

        let product = new.into_product(id);
        self.catalog.insert(id, product.clone());
        product
    }

    // ── Orders ────────────────────────────────────────────────────────────────

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Validate the cart against the current catalog, then commit the stock
    /// deductions and record the order. Nothing changes unless every line
    /// validates.
    pub fn checkout(&mut self, cart: Vec<CartItem>, customer: Value) -> AppResult<Order> {
        let plan = self.plan_checkout(&cart)?;
        self.commit(&plan);

        let order = Order {
            id: self.orders.len() as u64 + 1,
            cart,
            total: plan.total,
            customer,
            created_at: Utc::now(),
        };
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Validation pass. Quantities for repeated lines of the same product
    /// are summed before comparing against stock.
    pub fn plan_checkout(&self, cart: &[CartItem]) -> AppResult<CheckoutPlan> {
        if cart.is_empty() {
            return Err(AppError::Validation("Cart empty".to_string()));
        }

        let mut total = 0.0;
        let mut deductions: IndexMap<u64, u32> = IndexMap::new();

        for item in cart {
            let product = item
                .product_id()
                .and_then(|id| self.catalog.get(&id))
                .ok_or_else(|| {
                    AppError::NotFound(format!("Product {} not found", item.id_label()))
                })?;

            let qty = item.quantity().ok_or_else(|| {
                AppError::Validation(format!("Invalid quantity for product {}", product.id))
            })?;

            let requested = deductions
                .get(&product.id)
                .copied()
                .unwrap_or(0)
                .saturating_add(qty);
            if requested > product.stock {
                return Err(AppError::InsufficientStock(format!(
                    "{} out of stock",
                    product.title
                )));
            }

            deductions.insert(product.id, requested);
            total += product.line_total(qty);
        }

        Ok(CheckoutPlan { total, deductions })
    }

    /// Commit pass. Only valid for a plan produced by `plan_checkout` on the
    /// same, unmodified store.
    fn commit(&mut self, plan: &CheckoutPlan) {
        for (id, qty) in &plan.deductions {
            if let Some(product) = self.catalog.get_mut(id) {
                product.stock -= qty;
            }
        }
    }

    /// Current stock for each product id, used to compare before/after states.
    #[cfg(test)]
    pub fn stock_levels(&self) -> std::collections::HashMap<u64, u32> {
        self.catalog.iter().map(|(id, p)| (*id, p.stock)).collect()
    }
}
