//! In-memory order repository
//!
//! The product module only reads orders; `record` exists so tests and
//! development setups can seed purchase history.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use digistore_domain::entities::Order;
use digistore_domain::error::Result;
use digistore_domain::ports::OrderRepository;

/// In-memory order repository
pub struct InMemoryOrderRepository {
    orders: Arc<DashMap<String, Order>>,
}

impl InMemoryOrderRepository {
    /// Create a new in-memory order repository
    pub fn new() -> Self {
        Self {
            orders: Arc::new(DashMap::new()),
        }
    }

    /// Seed an order (test/development helper, not part of the port)
    pub fn record(&self, order: Order) {
        self.orders.insert(order.id.clone(), order);
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_customer_and_product(
        &self,
        customer_id: &str,
        product_id: &str,
    ) -> Result<Option<Order>> {
        Ok(self
            .orders
            .iter()
            .find(|entry| {
                entry.value().customer_id == customer_id && entry.value().product_id == product_id
            })
            .map(|entry| entry.value().clone()))
    }
}
