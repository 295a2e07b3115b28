//! Review lifecycle
//!
//! Reviews are purchase-gated: a feedback entry requires a prior order
//! linking the same customer and product, and each customer gets at most
//! one entry per product. `avg_rating` is recomputed on every insert and
//! delete; the feedback push/pull and the average set land in one store
//! update.

use tracing::info;

use digistore_domain::entities::{average_rating, Feedback, Product};
use digistore_domain::error::{Error, Result};
use digistore_domain::id::new_id;
use digistore_domain::value_objects::ApiResponse;

use crate::constants::{
    MSG_DUPLICATE_REVIEW, MSG_REVIEW_ADDED, MSG_REVIEW_REMOVED, MSG_REVIEW_WITHOUT_PURCHASE,
};

use super::ProductService;

impl ProductService {
    /// Add a review from a customer who purchased the product
    pub async fn add_product_review(
        &self,
        product_id: &str,
        rating: u32,
        feedback_msg: &str,
        customer_id: &str,
        customer_name: &str,
    ) -> Result<ApiResponse<Product>> {
        let product = self.require_product(product_id).await?;

        if product.has_feedback_from(customer_id) {
            return Err(Error::validation(MSG_DUPLICATE_REVIEW));
        }

        let order = self
            .orders
            .find_by_customer_and_product(customer_id, product_id)
            .await?;
        if order.is_none() {
            return Err(Error::validation(MSG_REVIEW_WITHOUT_PURCHASE));
        }

        let mut ratings: Vec<u32> = product.feedbacks.iter().map(|f| f.rating).collect();
        ratings.push(rating);
        let new_avg = average_rating(&ratings);

        let feedback = Feedback {
            id: new_id(),
            rating,
            feedback_msg: feedback_msg.to_string(),
            customer_id: customer_id.to_string(),
            customer_name: customer_name.to_string(),
        };

        let updated = self
            .products
            .push_feedback(product_id, feedback, &new_avg)
            .await?
            .ok_or_else(|| Error::not_found(format!("Product {product_id}")))?;

        info!(product_id, customer_id, rating, avg = %new_avg, "review added");
        Ok(ApiResponse::ok(MSG_REVIEW_ADDED, updated))
    }

    /// Remove a review by its id, recomputing the average over the
    /// remaining ratings
    pub async fn remove_product_review(
        &self,
        product_id: &str,
        review_id: &str,
    ) -> Result<ApiResponse<Product>> {
        let product = self.require_product(product_id).await?;

        if product.feedback(review_id).is_none() {
            return Err(Error::not_found(format!("Review {review_id}")));
        }

        let remaining: Vec<u32> = product
            .feedbacks
            .iter()
            .filter(|f| f.id != review_id)
            .map(|f| f.rating)
            .collect();
        let new_avg = average_rating(&remaining);

        // A None here means the review or the whole product vanished
        // between the read above and this write
        let updated = self
            .products
            .pull_feedback(product_id, review_id, &new_avg)
            .await?
            .ok_or_else(|| {
                Error::not_found(format!("Review {review_id} on product {product_id}"))
            })?;

        info!(product_id, review_id, avg = %new_avg, "review removed");
        Ok(ApiResponse::ok(MSG_REVIEW_REMOVED, updated))
    }
}
