use anyhow::Result;
use async_trait::async_trait;
use reqwest::{StatusCode, header::AUTHORIZATION};
use tracing::error;

use crate::config::config_model::DodoPayments;
use crate::domain::{
    repositories::payment_provider::PaymentProviderRepository,
    value_objects::products::ProductDetail,
};

/// Minimal Dodo Payments client built on reqwest.
pub struct DodoClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl DodoClient {
    pub fn new(config: &DodoPayments) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        error!(
            status = %status,
            response_body = %body,
            context = %context,
            "dodo api request failed"
        );

        anyhow::bail!("Dodo API request failed: {} (status {})", context, status);
    }
}

#[async_trait]
impl PaymentProviderRepository for DodoClient {
    /// Fetches one product from the Dodo catalog. A 404 means the product id
    /// is unknown to the provider and maps to `Ok(None)`.
    async fn get_product_details(&self, product_id: &str) -> Result<Option<ProductDetail>> {
        // https://docs.dodopayments.com/api-reference/products/get-product
        let resp = self
            .http
            .get(format!("{}/products/{}", self.base_url, product_id))
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = Self::ensure_success(resp, "get product details").await?;

        let product: ProductDetail = resp.json().await?;
        Ok(Some(product))
    }
}
