use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post},
};
use tracing::info;

use crate::application::usecases::reviews::ReviewUseCase;
use crate::auth::AuthUser;
use crate::domain::repositories::movies::MovieRepository;
use crate::domain::repositories::reviews::ReviewRepository;
use crate::domain::repositories::tv_series::TvSeriesRepository;
use crate::domain::repositories::users::UserRepository;
use crate::domain::value_objects::reviews::CreateReviewModel;
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::{
    movies::MoviePostgres, reviews::ReviewPostgres, tv_series::TvSeriesPostgres,
    users::UserPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let usecase = ReviewUseCase::new(
        Arc::new(ReviewPostgres::new(Arc::clone(&db_pool))),
        Arc::new(MoviePostgres::new(Arc::clone(&db_pool))),
        Arc::new(TvSeriesPostgres::new(Arc::clone(&db_pool))),
        Arc::new(UserPostgres::new(Arc::clone(&db_pool))),
    );

    Router::new()
        .route("/", post(add))
        .route("/:review_id", delete(delete_one))
        .with_state(Arc::new(usecase))
}

pub async fn add<R, M, S, U>(
    State(usecase): State<Arc<ReviewUseCase<R, M, S, U>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(model): Json<CreateReviewModel>,
) -> impl IntoResponse
where
    R: ReviewRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    info!(%user_id, "reviews: add request received");
    match usecase.add(user_id, model).await {
        Ok(review_id) => (StatusCode::CREATED, Json(review_id)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_one<R, M, S, U>(
    State(usecase): State<Arc<ReviewUseCase<R, M, S, U>>>,
    auth: AuthUser,
    Path(review_id): Path<i64>,
) -> impl IntoResponse
where
    R: ReviewRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    info!(user_id = %auth.user_id, review_id, "reviews: delete request received");
    match usecase.delete(auth.user_id, auth.role, review_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
