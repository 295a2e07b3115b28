//! In-memory license repository

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use digistore_domain::entities::License;
use digistore_domain::error::Result;
use digistore_domain::ports::LicenseRepository;

/// In-memory license repository
pub struct InMemoryLicenseRepository {
    licenses: Arc<DashMap<String, License>>,
}

impl InMemoryLicenseRepository {
    /// Create a new in-memory license repository
    pub fn new() -> Self {
        Self {
            licenses: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryLicenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LicenseRepository for InMemoryLicenseRepository {
    async fn create(&self, license: License) -> Result<License> {
        self.licenses.insert(license.id.clone(), license.clone());
        Ok(license)
    }

    async fn find_by_product_and_sku(
        &self,
        product_id: &str,
        sku_id: &str,
    ) -> Result<Vec<License>> {
        let mut found: Vec<License> = self
            .licenses
            .iter()
            .filter(|entry| {
                entry.value().product_id == product_id && entry.value().sku_id == sku_id
            })
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(found)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64> {
        Ok(u64::from(self.licenses.remove(id).is_some()))
    }

    async fn delete_by_product_and_sku(&self, product_id: &str, sku_id: &str) -> Result<u64> {
        let ids: Vec<String> = self
            .licenses
            .iter()
            .filter(|entry| {
                entry.value().product_id == product_id && entry.value().sku_id == sku_id
            })
            .map(|entry| entry.key().clone())
            .collect();

        let mut deleted = 0;
        for id in ids {
            if self.licenses.remove(&id).is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    async fn update_key(&self, license_id: &str, new_key: &str) -> Result<Option<License>> {
        let Some(mut entry) = self.licenses.get_mut(license_id) else {
            return Ok(None);
        };
        entry.value_mut().license_key = new_key.to_string();
        Ok(Some(entry.value().clone()))
    }
}
