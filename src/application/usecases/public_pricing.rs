use anyhow::Result;
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{
    repositories::{payment_provider::PaymentProviderRepository, plans::PlanRepository},
    value_objects::plans::EnrichedPlanModel,
};

/// Builds the public pricing page: active plans from Postgres, each enriched
/// with live product data from the payment provider.
pub struct PublicPricingUseCase<P, D>
where
    P: PlanRepository + Send + Sync + 'static,
    D: PaymentProviderRepository + Send + Sync + 'static,
{
    plan_repository: Arc<P>,
    payment_provider: Arc<D>,
}

impl<P, D> PublicPricingUseCase<P, D>
where
    P: PlanRepository + Send + Sync + 'static,
    D: PaymentProviderRepository + Send + Sync + 'static,
{
    pub fn new(plan_repository: Arc<P>, payment_provider: Arc<D>) -> Self {
        Self {
            plan_repository,
            payment_provider,
        }
    }

    /// Loads all active plans and fans out one provider lookup per plan, all
    /// started before any is awaited. Lookup result i always pairs with plan
    /// i; one failing lookup fails the whole batch.
    pub async fn get_public_pricing_plans(&self) -> Result<Vec<EnrichedPlanModel>> {
        let plans = self.plan_repository.list_active_plans().await?;
        debug!(
            plan_count = plans.len(),
            "public_pricing: loaded active plans"
        );

        let lookups = plans.iter().map(|plan| {
            let product_id = plan.external_product_id.as_deref();
            async move {
                match product_id {
                    Some(product_id) => self.payment_provider.get_product_details(product_id).await,
                    // Plans not linked to a provider product get no lookup.
                    None => Ok(None),
                }
            }
        });
        let products = try_join_all(lookups).await?;

        Ok(plans
            .into_iter()
            .zip(products)
            .map(|(plan, product)| EnrichedPlanModel::enrich(plan, product))
            .collect())
    }
}
