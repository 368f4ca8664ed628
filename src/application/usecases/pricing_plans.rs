use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::application::error::{UseCaseError, UseCaseResult};
use crate::domain::entities::pricing_plans::{EditPricingPlanEntity, InsertPricingPlanEntity};
use crate::domain::repositories::pricing_plans::PricingPlanRepository;
use crate::domain::value_objects::pricing_plans::{
    CreatePricingPlanModel, EditPricingPlanModel, PricingPlanDto,
};

pub struct PricingPlanUseCase<P>
where
    P: PricingPlanRepository + Send + Sync + 'static,
{
    pricing_plan_repository: Arc<P>,
}

impl<P> PricingPlanUseCase<P>
where
    P: PricingPlanRepository + Send + Sync + 'static,
{
    pub fn new(pricing_plan_repository: Arc<P>) -> Self {
        Self {
            pricing_plan_repository,
        }
    }

    pub async fn list(&self) -> UseCaseResult<Vec<PricingPlanDto>> {
        let plans = self.pricing_plan_repository.list().await.map_err(|err| {
            error!(db_error = ?err, "pricing_plans: failed to list plans");
            UseCaseError::Internal(err)
        })?;

        Ok(plans.into_iter().map(PricingPlanDto::from).collect())
    }

    pub async fn get(&self, plan_id: i64) -> UseCaseResult<PricingPlanDto> {
        let plan = self
            .pricing_plan_repository
            .find_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(plan_id, db_error = ?err, "pricing_plans: failed to load plan");
                UseCaseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(plan_id, status = 404_u16, "pricing_plans: plan not found");
                UseCaseError::NotFound("pricing plan")
            })?;

        Ok(plan.into())
    }

    pub async fn create(
        &self,
        created_by: Option<i64>,
        model: CreatePricingPlanModel,
    ) -> UseCaseResult<i64> {
        info!(name = %model.name, "pricing_plans: create requested");

        validate_name(&model.name)?;
        validate_price(model.price_minor)?;

        let now = Utc::now();
        let insert_pricing_plan_entity = InsertPricingPlanEntity {
            name: model.name,
            price_minor: model.price_minor,
            billing_period: model.billing_period,
            features: serde_json::to_value(model.features)
                .map_err(|err| UseCaseError::Internal(err.into()))?,
            is_popular: model.is_popular,
            created_at: now,
            updated_at: now,
            created_by,
        };

        let plan_id = self
            .pricing_plan_repository
            .create(insert_pricing_plan_entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "pricing_plans: failed to create plan");
                UseCaseError::Internal(err)
            })?;

        info!(plan_id, "pricing_plans: plan created");
        Ok(plan_id)
    }

    pub async fn update(
        &self,
        updated_by: Option<i64>,
        plan_id: i64,
        model: EditPricingPlanModel,
    ) -> UseCaseResult<()> {
        info!(plan_id, "pricing_plans: update requested");

        self.get(plan_id).await?;

        if let Some(name) = model.name.as_deref() {
            validate_name(name)?;
        }
        if let Some(price_minor) = model.price_minor {
            validate_price(price_minor)?;
        }

        let features = match model.features {
            Some(features) => Some(
                serde_json::to_value(features)
                    .map_err(|err| UseCaseError::Internal(err.into()))?,
            ),
            None => None,
        };

        let edit_pricing_plan_entity = EditPricingPlanEntity {
            name: model.name,
            price_minor: model.price_minor,
            billing_period: model.billing_period,
            features,
            is_popular: model.is_popular,
            updated_at: Utc::now(),
            updated_by,
        };

        self.pricing_plan_repository
            .update(plan_id, edit_pricing_plan_entity)
            .await
            .map_err(|err| {
                error!(plan_id, db_error = ?err, "pricing_plans: failed to update plan");
                UseCaseError::Internal(err)
            })?;

        Ok(())
    }

    pub async fn delete(&self, deleted_by: Option<i64>, plan_id: i64) -> UseCaseResult<()> {
        info!(plan_id, "pricing_plans: delete requested");

        self.get(plan_id).await?;

        self.pricing_plan_repository
            .soft_delete(plan_id, deleted_by)
            .await
            .map_err(|err| {
                error!(plan_id, db_error = ?err, "pricing_plans: failed to soft-delete plan");
                UseCaseError::Internal(err)
            })?;

        info!(plan_id, "pricing_plans: plan soft-deleted");
        Ok(())
    }
}

fn validate_name(name: &str) -> UseCaseResult<()> {
    if name.trim().is_empty() {
        warn!(status = 400_u16, "pricing_plans: empty name rejected");
        return Err(UseCaseError::bad_request("name must not be empty"));
    }
    Ok(())
}

fn validate_price(price_minor: i32) -> UseCaseResult<()> {
    if price_minor < 0 {
        warn!(price_minor, status = 400_u16, "pricing_plans: negative price rejected");
        return Err(UseCaseError::bad_request("price must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::pricing_plans::PricingPlanEntity;
    use crate::domain::repositories::pricing_plans::MockPricingPlanRepository;
    use axum::http::StatusCode;

    fn sample_plan(id: i64) -> PricingPlanEntity {
        let now = Utc::now();
        PricingPlanEntity {
            id,
            name: "Premium".to_string(),
            price_minor: 1499,
            billing_period: "monthly".to_string(),
            features: serde_json::json!(["4K streaming", "4 screens"]),
            is_popular: true,
            created_at: now,
            updated_at: now,
            created_by: None,
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_negative_price() {
        let usecase = PricingPlanUseCase::new(Arc::new(MockPricingPlanRepository::new()));

        let model = CreatePricingPlanModel {
            name: "Premium".to_string(),
            price_minor: -1,
            billing_period: "monthly".to_string(),
            features: vec![],
            is_popular: false,
        };

        let err = usecase.create(None, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_serializes_features_as_json() {
        let mut repo = MockPricingPlanRepository::new();
        repo.expect_create()
            .withf(|entity| {
                entity.features == serde_json::json!(["4K streaming", "4 screens"])
            })
            .returning(|_| Box::pin(async { Ok(3) }));

        let usecase = PricingPlanUseCase::new(Arc::new(repo));

        let model = CreatePricingPlanModel {
            name: "Premium".to_string(),
            price_minor: 1499,
            billing_period: "monthly".to_string(),
            features: vec!["4K streaming".to_string(), "4 screens".to_string()],
            is_popular: true,
        };

        let plan_id = usecase.create(None, model).await.unwrap();
        assert_eq!(plan_id, 3);
    }

    #[tokio::test]
    async fn get_missing_plan_is_not_found() {
        let mut repo = MockPricingPlanRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = PricingPlanUseCase::new(Arc::new(repo));

        let err = usecase.get(404).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dto_flattens_features_list() {
        let dto = PricingPlanDto::from(sample_plan(1));
        assert_eq!(dto.features, vec!["4K streaming", "4 screens"]);
    }
}
