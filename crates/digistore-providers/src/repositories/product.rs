//! In-memory product repository

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use digistore_domain::entities::{Feedback, ImageDetails, Product, Sku};
use digistore_domain::error::{Error, Result};
use digistore_domain::ports::ProductRepository;
use digistore_domain::value_objects::{CategoryGroup, ProductFilter, ProductPatch, SkuPatch};

/// In-memory product repository
///
/// Stores product documents in a concurrent hash map keyed by id.
pub struct InMemoryProductRepository {
    products: Arc<DashMap<String, Product>>,
}

impl InMemoryProductRepository {
    /// Create a new in-memory product repository
    pub fn new() -> Self {
        Self {
            products: Arc::new(DashMap::new()),
        }
    }

    fn matches(filter: &ProductFilter, product: &Product) -> bool {
        if let Some(category) = &filter.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            if !product.product_name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Snapshot of all products matching `filter`, newest first
    fn filtered(&self, filter: &ProductFilter) -> Vec<Product> {
        let mut items: Vec<Product> = self
            .products
            .iter()
            .filter(|entry| Self::matches(filter, entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> Result<Product> {
        if self.products.contains_key(&product.id) {
            return Err(Error::database(format!(
                "Product '{}' already exists",
                product.id
            )));
        }
        self.products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn find_one(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.products.get(id).map(|entry| entry.value().clone()))
    }

    async fn find(
        &self,
        filter: &ProductFilter,
        skip: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Product>> {
        let items = self.filtered(filter);
        let iter = items.into_iter().skip(skip as usize);
        Ok(match limit {
            Some(limit) => iter.take(limit as usize).collect(),
            None => iter.collect(),
        })
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64> {
        Ok(self.filtered(filter).len() as u64)
    }

    async fn find_grouped_by_category(&self, per_category: usize) -> Result<Vec<CategoryGroup>> {
        let all = self.filtered(&ProductFilter::default());

        // BTreeMap keeps group order stable across calls
        let mut groups: BTreeMap<String, Vec<Product>> = BTreeMap::new();
        for product in all {
            let entry = groups.entry(product.category.clone()).or_default();
            if entry.len() < per_category {
                entry.push(product);
            }
        }

        Ok(groups
            .into_iter()
            .map(|(category, products)| CategoryGroup { category, products })
            .collect())
    }

    async fn find_related(&self, category: &str, exclude_id: &str) -> Result<Vec<Product>> {
        let filter = ProductFilter {
            category: Some(category.to_string()),
            search: None,
        };
        Ok(self
            .filtered(&filter)
            .into_iter()
            .filter(|p| p.id != exclude_id)
            .collect())
    }

    async fn update_one(&self, id: &str, patch: &ProductPatch) -> Result<Option<Product>> {
        let Some(mut entry) = self.products.get_mut(id) else {
            return Ok(None);
        };
        let product = entry.value_mut();
        if let Some(name) = &patch.product_name {
            product.product_name = name.clone();
        }
        if let Some(description) = &patch.description {
            product.description = description.clone();
        }
        if let Some(category) = &patch.category {
            product.category = category.clone();
        }
        if let Some(ledger_id) = &patch.stripe_product_id {
            product.stripe_product_id = Some(ledger_id.clone());
        }
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete_one(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.products.remove(id).map(|(_, product)| product))
    }

    async fn push_skus(&self, product_id: &str, skus: Vec<Sku>) -> Result<Option<Product>> {
        let Some(mut entry) = self.products.get_mut(product_id) else {
            return Ok(None);
        };
        let product = entry.value_mut();
        product.skus.extend(skus);
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn update_sku(
        &self,
        product_id: &str,
        sku_id: &str,
        patch: &SkuPatch,
    ) -> Result<Option<Product>> {
        let Some(mut entry) = self.products.get_mut(product_id) else {
            return Ok(None);
        };
        let product = entry.value_mut();
        let Some(sku) = product.skus.iter_mut().find(|s| s.id == sku_id) else {
            return Ok(None);
        };
        if let Some(price) = patch.price {
            sku.price = price;
        }
        if let Some(lifetime) = patch.lifetime {
            sku.lifetime = lifetime;
        }
        if let Some(price_id) = &patch.stripe_price_id {
            sku.stripe_price_id = Some(price_id.clone());
        }
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn pull_sku(&self, product_id: &str, sku_id: &str) -> Result<Option<Product>> {
        let Some(mut entry) = self.products.get_mut(product_id) else {
            return Ok(None);
        };
        let product = entry.value_mut();
        let before = product.skus.len();
        product.skus.retain(|s| s.id != sku_id);
        if product.skus.len() == before {
            return Ok(None);
        }
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn set_image(
        &self,
        product_id: &str,
        url: &str,
        details: &ImageDetails,
    ) -> Result<Option<Product>> {
        let Some(mut entry) = self.products.get_mut(product_id) else {
            return Ok(None);
        };
        let product = entry.value_mut();
        product.image = Some(url.to_string());
        product.image_details = Some(details.clone());
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn push_feedback(
        &self,
        product_id: &str,
        feedback: Feedback,
        new_avg: &str,
    ) -> Result<Option<Product>> {
        let Some(mut entry) = self.products.get_mut(product_id) else {
            return Ok(None);
        };
        let product = entry.value_mut();

        // Compound product+customer uniqueness, checked under the entry
        // lock so two racing first reviews cannot both land
        if product
            .feedbacks
            .iter()
            .any(|f| f.customer_id == feedback.customer_id)
        {
            return Err(Error::validation(format!(
                "Customer '{}' already reviewed product '{product_id}'",
                feedback.customer_id
            )));
        }

        product.feedbacks.push(feedback);
        product.avg_rating = new_avg.to_string();
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn pull_feedback(
        &self,
        product_id: &str,
        feedback_id: &str,
        new_avg: &str,
    ) -> Result<Option<Product>> {
        let Some(mut entry) = self.products.get_mut(product_id) else {
            return Ok(None);
        };
        let product = entry.value_mut();
        let before = product.feedbacks.len();
        product.feedbacks.retain(|f| f.id != feedback_id);
        if product.feedbacks.len() == before {
            return Ok(None);
        }
        product.avg_rating = new_avg.to_string();
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn set_ledger_sync_pending(&self, product_id: &str, pending: bool) -> Result<()> {
        if let Some(mut entry) = self.products.get_mut(product_id) {
            entry.value_mut().ledger_sync_pending = pending;
        }
        Ok(())
    }
}
