use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;

use crate::domain::{
    entities::plans::{PlanEntitlementEntity, PlanEntity},
    repositories::plans::PlanRepository,
    value_objects::plans::PlanModel,
};
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::plans};

pub struct PlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PlanRepository for PlanPostgres {
    async fn list_active_plans(&self) -> Result<Vec<PlanModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plan_rows = plans::table
            .filter(plans::is_active.eq(true))
            .select(PlanEntity::as_select())
            .load::<PlanEntity>(&mut conn)?;

        let entitlement_rows = PlanEntitlementEntity::belonging_to(&plan_rows)
            .select(PlanEntitlementEntity::as_select())
            .load::<PlanEntitlementEntity>(&mut conn)?;

        entitlement_rows
            .grouped_by(&plan_rows)
            .into_iter()
            .zip(plan_rows)
            .map(|(entitlements, plan)| PlanModel::from_rows(plan, entitlements))
            .collect()
    }
}
