use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::plans::PlanModel;

#[async_trait]
#[automock]
pub trait PlanRepository {
    async fn list_active_plans(&self) -> Result<Vec<PlanModel>>;
}
