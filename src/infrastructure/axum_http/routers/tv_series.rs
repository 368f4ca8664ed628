use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use tracing::info;

use crate::application::usecases::{
    actors::ActorUseCase, reviews::ReviewUseCase, tv_series::TvSeriesUseCase,
};
use crate::auth::AdminUser;
use crate::domain::repositories::movies::MovieRepository;
use crate::domain::repositories::reviews::ReviewRepository;
use crate::domain::repositories::tv_series::TvSeriesRepository;
use crate::domain::repositories::users::UserRepository;
use crate::domain::value_objects::tv_series::{
    CreateEpisodeModel, CreateTvSeriesModel, EditEpisodeModel, EditTvSeriesModel,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::{
    actors::ActorPostgres, movies::MoviePostgres, reviews::ReviewPostgres,
    tv_series::TvSeriesPostgres, users::UserPostgres,
};

use super::actors::{link_series_cast, series_cast};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let tv_series_repository = TvSeriesPostgres::new(Arc::clone(&db_pool));
    let tv_series_usecase = TvSeriesUseCase::new(Arc::new(tv_series_repository));

    let review_usecase = ReviewUseCase::new(
        Arc::new(ReviewPostgres::new(Arc::clone(&db_pool))),
        Arc::new(MoviePostgres::new(Arc::clone(&db_pool))),
        Arc::new(TvSeriesPostgres::new(Arc::clone(&db_pool))),
        Arc::new(UserPostgres::new(Arc::clone(&db_pool))),
    );

    let actor_usecase = ActorUseCase::new(
        Arc::new(ActorPostgres::new(Arc::clone(&db_pool))),
        Arc::new(MoviePostgres::new(Arc::clone(&db_pool))),
        Arc::new(TvSeriesPostgres::new(Arc::clone(&db_pool))),
    );

    let review_routes = Router::new()
        .route("/:series_id/reviews", get(list_series_reviews))
        .with_state(Arc::new(review_usecase));

    let cast_routes = Router::new()
        .route("/:series_id/cast", get(series_cast).post(link_series_cast))
        .with_state(Arc::new(actor_usecase));

    Router::new()
        .route("/", get(list).post(create))
        .route("/:series_id", get(get_one).put(update).delete(delete_one))
        .route("/:series_id/episodes", get(list_episodes).post(add_episode))
        .route(
            "/episodes/:episode_id",
            put(update_episode).delete(delete_episode),
        )
        .with_state(Arc::new(tv_series_usecase))
        .merge(review_routes)
        .merge(cast_routes)
}

pub async fn list<S>(State(usecase): State<Arc<TvSeriesUseCase<S>>>) -> impl IntoResponse
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    match usecase.list().await {
        Ok(series) => Json(series).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_one<S>(
    State(usecase): State<Arc<TvSeriesUseCase<S>>>,
    Path(series_id): Path<i64>,
) -> impl IntoResponse
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    match usecase.get(series_id).await {
        Ok(series) => Json(series).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create<S>(
    State(usecase): State<Arc<TvSeriesUseCase<S>>>,
    AdminUser(admin): AdminUser,
    Json(model): Json<CreateTvSeriesModel>,
) -> impl IntoResponse
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, "tv_series: create request received");
    match usecase.create(Some(admin.user_id), model).await {
        Ok(series_id) => (StatusCode::CREATED, Json(series_id)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update<S>(
    State(usecase): State<Arc<TvSeriesUseCase<S>>>,
    AdminUser(admin): AdminUser,
    Path(series_id): Path<i64>,
    Json(model): Json<EditTvSeriesModel>,
) -> impl IntoResponse
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, series_id, "tv_series: update request received");
    match usecase.update(Some(admin.user_id), series_id, model).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_one<S>(
    State(usecase): State<Arc<TvSeriesUseCase<S>>>,
    AdminUser(admin): AdminUser,
    Path(series_id): Path<i64>,
) -> impl IntoResponse
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, series_id, "tv_series: delete request received");
    match usecase.delete(Some(admin.user_id), series_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_episodes<S>(
    State(usecase): State<Arc<TvSeriesUseCase<S>>>,
    Path(series_id): Path<i64>,
) -> impl IntoResponse
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    match usecase.list_episodes(series_id).await {
        Ok(episodes) => Json(episodes).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn add_episode<S>(
    State(usecase): State<Arc<TvSeriesUseCase<S>>>,
    AdminUser(admin): AdminUser,
    Path(series_id): Path<i64>,
    Json(model): Json<CreateEpisodeModel>,
) -> impl IntoResponse
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, series_id, "tv_series: add episode request received");
    match usecase.add_episode(Some(admin.user_id), series_id, model).await {
        Ok(episode_id) => (StatusCode::CREATED, Json(episode_id)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update_episode<S>(
    State(usecase): State<Arc<TvSeriesUseCase<S>>>,
    AdminUser(admin): AdminUser,
    Path(episode_id): Path<i64>,
    Json(model): Json<EditEpisodeModel>,
) -> impl IntoResponse
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, episode_id, "tv_series: update episode request received");
    match usecase
        .update_episode(Some(admin.user_id), episode_id, model)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_episode<S>(
    State(usecase): State<Arc<TvSeriesUseCase<S>>>,
    AdminUser(admin): AdminUser,
    Path(episode_id): Path<i64>,
) -> impl IntoResponse
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, episode_id, "tv_series: delete episode request received");
    match usecase.delete_episode(Some(admin.user_id), episode_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_series_reviews<R, M, S, U>(
    State(usecase): State<Arc<ReviewUseCase<R, M, S, U>>>,
    Path(series_id): Path<i64>,
) -> impl IntoResponse
where
    R: ReviewRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    match usecase.list_for_series(series_id).await {
        Ok(reviews) => Json(reviews).into_response(),
        Err(err) => err.into_response(),
    }
}
