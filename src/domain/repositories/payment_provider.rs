use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::products::ProductDetail;

/// Read side of the payment provider's product catalog. `Ok(None)` means the
/// provider knows nothing about the product id.
#[async_trait]
#[automock]
pub trait PaymentProviderRepository {
    async fn get_product_details(&self, product_id: &str) -> Result<Option<ProductDetail>>;
}
