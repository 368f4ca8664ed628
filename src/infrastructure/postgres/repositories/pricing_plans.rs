use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use crate::domain::entities::pricing_plans::{
    EditPricingPlanEntity, InsertPricingPlanEntity, PricingPlanEntity,
};
use crate::domain::repositories::pricing_plans::PricingPlanRepository;
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::pricing_plans};

pub struct PricingPlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PricingPlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PricingPlanRepository for PricingPlanPostgres {
    async fn find_by_id(&self, plan_id: i64) -> Result<Option<PricingPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = pricing_plans::table
            .filter(pricing_plans::id.eq(plan_id))
            .filter(pricing_plans::deleted_at.is_null())
            .select(PricingPlanEntity::as_select())
            .first::<PricingPlanEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<PricingPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = pricing_plans::table
            .filter(pricing_plans::deleted_at.is_null())
            .order(pricing_plans::price_minor.asc())
            .select(PricingPlanEntity::as_select())
            .load::<PricingPlanEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn create(&self, insert_pricing_plan_entity: InsertPricingPlanEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let id = diesel::insert_into(pricing_plans::table)
            .values(&insert_pricing_plan_entity)
            .returning(pricing_plans::id)
            .get_result::<i64>(&mut conn)?;

        Ok(id)
    }

    async fn update(
        &self,
        plan_id: i64,
        edit_pricing_plan_entity: EditPricingPlanEntity,
    ) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::update(pricing_plans::table)
            .filter(pricing_plans::id.eq(plan_id))
            .filter(pricing_plans::deleted_at.is_null())
            .set(&edit_pricing_plan_entity)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn soft_delete(&self, plan_id: i64, deleted_by: Option<i64>) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        diesel::update(pricing_plans::table)
            .filter(pricing_plans::id.eq(plan_id))
            .filter(pricing_plans::deleted_at.is_null())
            .set((
                pricing_plans::deleted_at.eq(now),
                pricing_plans::deleted_by.eq(deleted_by),
                pricing_plans::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
