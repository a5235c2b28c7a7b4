use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::plans::{PlanEntitlementEntity, PlanEntity};
use crate::domain::value_objects::enums::entitlement_types::EntitlementType;
use crate::domain::value_objects::products::ProductDetail;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanModel {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub external_product_id: Option<String>,
    pub external_price_id: Option<String>,
    pub tokens_granted: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub entitlements: Vec<PlanEntitlementModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanEntitlementModel {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub feature_slug: String,
    pub entitlement_type: EntitlementType,
    pub value: i32,
}

impl PlanModel {
    pub fn from_rows(plan: PlanEntity, entitlements: Vec<PlanEntitlementEntity>) -> Result<Self> {
        let entitlements = entitlements
            .into_iter()
            .map(PlanEntitlementModel::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: plan.id,
            name: plan.name,
            is_active: plan.is_active,
            external_product_id: plan.external_product_id,
            external_price_id: plan.external_price_id,
            tokens_granted: plan.tokens_granted,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
            entitlements,
        })
    }
}

impl TryFrom<PlanEntitlementEntity> for PlanEntitlementModel {
    type Error = anyhow::Error;

    fn try_from(row: PlanEntitlementEntity) -> Result<Self> {
        let entitlement_type = EntitlementType::from_str(&row.entitlement_type)
            .ok_or_else(|| anyhow!("Unknown entitlement type: {}", row.entitlement_type))?;

        Ok(Self {
            id: row.id,
            plan_id: row.plan_id,
            feature_slug: row.feature_slug,
            entitlement_type,
            value: row.value,
        })
    }
}

/// Simplified view of the provider's price block, as exposed on the public
/// pricing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceInfo {
    pub amount: i64,
    pub currency: String,
    pub interval: Option<String>,
}

/// Response shape of the public plans endpoint: the stored plan fields plus
/// whatever live data the provider returned for it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedPlanModel {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub external_product_id: Option<String>,
    pub external_price_id: Option<String>,
    pub tokens_granted: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub entitlements: Vec<PlanEntitlementModel>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<PriceInfo>,
}

impl EnrichedPlanModel {
    /// Merges one stored plan with the product detail fetched for it. A
    /// missing product or missing price block yields `price: None`, never a
    /// zero-valued `PriceInfo`. The interval is only carried over for
    /// recurring prices.
    pub fn enrich(plan: PlanModel, product: Option<ProductDetail>) -> Self {
        let (description, image_url, price) = match product {
            Some(product) => {
                let price = product.price.map(|block| {
                    let interval = if block.is_recurring() {
                        block.payment_frequency_interval
                    } else {
                        None
                    };

                    PriceInfo {
                        amount: block.price.unwrap_or(0),
                        currency: block.currency.unwrap_or_else(|| "USD".to_string()),
                        interval,
                    }
                });

                (product.description, product.image, price)
            }
            None => (None, None, None),
        };

        Self {
            id: plan.id,
            name: plan.name,
            is_active: plan.is_active,
            external_product_id: plan.external_product_id,
            external_price_id: plan.external_price_id,
            tokens_granted: plan.tokens_granted,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
            entitlements: plan.entitlements,
            description,
            image_url,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::products::ProductPrice;

    fn sample_plan() -> PlanModel {
        let now = Utc::now();
        PlanModel {
            id: Uuid::new_v4(),
            name: "Pro".to_string(),
            is_active: true,
            external_product_id: Some("prod_123".to_string()),
            external_price_id: None,
            tokens_granted: 100_000,
            created_at: now,
            updated_at: now,
            entitlements: vec![],
        }
    }

    #[test]
    fn recurring_price_carries_interval() {
        let product = ProductDetail {
            description: Some("Pro tier".to_string()),
            image: Some("https://cdn.example.com/pro.png".to_string()),
            price: Some(ProductPrice {
                type_: Some("recurring_price".to_string()),
                price: Some(1200),
                currency: Some("usd".to_string()),
                payment_frequency_interval: Some("Month".to_string()),
            }),
        };

        let enriched = EnrichedPlanModel::enrich(sample_plan(), Some(product));

        assert_eq!(
            enriched.price,
            Some(PriceInfo {
                amount: 1200,
                currency: "usd".to_string(),
                interval: Some("Month".to_string()),
            })
        );
        assert_eq!(enriched.description.as_deref(), Some("Pro tier"));
        assert_eq!(
            enriched.image_url.as_deref(),
            Some("https://cdn.example.com/pro.png")
        );
    }

    #[test]
    fn one_time_price_drops_interval_even_when_present() {
        let product = ProductDetail {
            description: None,
            image: None,
            price: Some(ProductPrice {
                type_: Some("one_time_price".to_string()),
                price: Some(500),
                currency: Some("USD".to_string()),
                payment_frequency_interval: Some("Month".to_string()),
            }),
        };

        let enriched = EnrichedPlanModel::enrich(sample_plan(), Some(product));

        assert_eq!(enriched.price.unwrap().interval, None);
    }

    #[test]
    fn missing_price_fields_fall_back_to_defaults() {
        let product = ProductDetail {
            description: None,
            image: None,
            price: Some(ProductPrice {
                type_: Some("recurring_price".to_string()),
                price: None,
                currency: None,
                payment_frequency_interval: None,
            }),
        };

        let enriched = EnrichedPlanModel::enrich(sample_plan(), Some(product));

        let price = enriched.price.unwrap();
        assert_eq!(price.amount, 0);
        assert_eq!(price.currency, "USD");
        assert_eq!(price.interval, None);
    }

    #[test]
    fn product_without_price_block_yields_no_price() {
        let product = ProductDetail {
            description: Some("Credits".to_string()),
            image: Some("https://cdn.example.com/credits.png".to_string()),
            price: None,
        };

        let enriched = EnrichedPlanModel::enrich(sample_plan(), Some(product));

        assert_eq!(enriched.price, None);
        assert_eq!(enriched.description.as_deref(), Some("Credits"));
        assert_eq!(
            enriched.image_url.as_deref(),
            Some("https://cdn.example.com/credits.png")
        );
    }

    #[test]
    fn absent_product_leaves_plan_fields_and_nulls_enrichment() {
        let plan = sample_plan();
        let plan_id = plan.id;

        let enriched = EnrichedPlanModel::enrich(plan, None);

        assert_eq!(enriched.id, plan_id);
        assert_eq!(enriched.name, "Pro");
        assert_eq!(enriched.tokens_granted, 100_000);
        assert_eq!(enriched.description, None);
        assert_eq!(enriched.image_url, None);
        assert_eq!(enriched.price, None);
    }

    #[test]
    fn unknown_entitlement_type_is_rejected() {
        let row = PlanEntitlementEntity {
            id: Uuid::new_v4(),
            plan_id: Uuid::new_v4(),
            feature_slug: "max_users".to_string(),
            entitlement_type: "QUOTA".to_string(),
            value: 10,
        };

        assert!(PlanEntitlementModel::try_from(row).is_err());
    }
}
