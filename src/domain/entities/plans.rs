use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::{plan_entitlements, plans};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = plans)]
pub struct PlanEntity {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub external_product_id: Option<String>,
    pub external_price_id: Option<String>,
    pub tokens_granted: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable, Associations)]
#[diesel(table_name = plan_entitlements)]
#[diesel(belongs_to(PlanEntity, foreign_key = plan_id))]
pub struct PlanEntitlementEntity {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub feature_slug: String,
    pub entitlement_type: String,
    pub value: i32,
}
