use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::info;

use crate::application::usecases::pricing_plans::PricingPlanUseCase;
use crate::auth::AdminUser;
use crate::domain::repositories::pricing_plans::PricingPlanRepository;
use crate::domain::value_objects::pricing_plans::{CreatePricingPlanModel, EditPricingPlanModel};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::pricing_plans::PricingPlanPostgres;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let pricing_plan_repository = PricingPlanPostgres::new(Arc::clone(&db_pool));
    let usecase = PricingPlanUseCase::new(Arc::new(pricing_plan_repository));

    Router::new()
        .route("/", get(list).post(create))
        .route("/:plan_id", get(get_one).put(update).delete(delete_one))
        .with_state(Arc::new(usecase))
}

pub async fn list<P>(State(usecase): State<Arc<PricingPlanUseCase<P>>>) -> impl IntoResponse
where
    P: PricingPlanRepository + Send + Sync + 'static,
{
    match usecase.list().await {
        Ok(plans) => Json(plans).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_one<P>(
    State(usecase): State<Arc<PricingPlanUseCase<P>>>,
    Path(plan_id): Path<i64>,
) -> impl IntoResponse
where
    P: PricingPlanRepository + Send + Sync + 'static,
{
    match usecase.get(plan_id).await {
        Ok(plan) => Json(plan).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create<P>(
    State(usecase): State<Arc<PricingPlanUseCase<P>>>,
    AdminUser(admin): AdminUser,
    Json(model): Json<CreatePricingPlanModel>,
) -> impl IntoResponse
where
    P: PricingPlanRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, "pricing_plans: create request received");
    match usecase.create(Some(admin.user_id), model).await {
        Ok(plan_id) => (StatusCode::CREATED, Json(plan_id)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update<P>(
    State(usecase): State<Arc<PricingPlanUseCase<P>>>,
    AdminUser(admin): AdminUser,
    Path(plan_id): Path<i64>,
    Json(model): Json<EditPricingPlanModel>,
) -> impl IntoResponse
where
    P: PricingPlanRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, plan_id, "pricing_plans: update request received");
    match usecase.update(Some(admin.user_id), plan_id, model).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_one<P>(
    State(usecase): State<Arc<PricingPlanUseCase<P>>>,
    AdminUser(admin): AdminUser,
    Path(plan_id): Path<i64>,
) -> impl IntoResponse
where
    P: PricingPlanRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, plan_id, "pricing_plans: delete request received");
    match usecase.delete(Some(admin.user_id), plan_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
