use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::pricing_plans::{
    EditPricingPlanEntity, InsertPricingPlanEntity, PricingPlanEntity,
};

#[async_trait]
#[automock]
pub trait PricingPlanRepository {
    async fn find_by_id(&self, plan_id: i64) -> Result<Option<PricingPlanEntity>>;
    async fn list(&self) -> Result<Vec<PricingPlanEntity>>;
    async fn create(&self, insert_pricing_plan_entity: InsertPricingPlanEntity) -> Result<i64>;
    async fn update(
        &self,
        plan_id: i64,
        edit_pricing_plan_entity: EditPricingPlanEntity,
    ) -> Result<()>;
    async fn soft_delete(&self, plan_id: i64, deleted_by: Option<i64>) -> Result<()>;
}
