use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::info;

use crate::application::usecases::actors::ActorUseCase;
use crate::auth::AdminUser;
use crate::domain::repositories::actors::ActorRepository;
use crate::domain::repositories::movies::MovieRepository;
use crate::domain::repositories::tv_series::TvSeriesRepository;
use crate::domain::value_objects::actors::{CreateActorModel, EditActorModel, LinkCastModel};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::{
    actors::ActorPostgres, movies::MoviePostgres, tv_series::TvSeriesPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let usecase = ActorUseCase::new(
        Arc::new(ActorPostgres::new(Arc::clone(&db_pool))),
        Arc::new(MoviePostgres::new(Arc::clone(&db_pool))),
        Arc::new(TvSeriesPostgres::new(Arc::clone(&db_pool))),
    );

    Router::new()
        .route("/", get(list).post(create))
        .route("/:actor_id", get(get_one).put(update).delete(delete_one))
        .with_state(Arc::new(usecase))
}

pub async fn list<A, M, S>(State(usecase): State<Arc<ActorUseCase<A, M, S>>>) -> impl IntoResponse
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    match usecase.list().await {
        Ok(actors) => Json(actors).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_one<A, M, S>(
    State(usecase): State<Arc<ActorUseCase<A, M, S>>>,
    Path(actor_id): Path<i64>,
) -> impl IntoResponse
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    match usecase.get(actor_id).await {
        Ok(actor) => Json(actor).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create<A, M, S>(
    State(usecase): State<Arc<ActorUseCase<A, M, S>>>,
    AdminUser(admin): AdminUser,
    Json(model): Json<CreateActorModel>,
) -> impl IntoResponse
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, "actors: create request received");
    match usecase.create(Some(admin.user_id), model).await {
        Ok(actor_id) => (StatusCode::CREATED, Json(actor_id)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update<A, M, S>(
    State(usecase): State<Arc<ActorUseCase<A, M, S>>>,
    AdminUser(admin): AdminUser,
    Path(actor_id): Path<i64>,
    Json(model): Json<EditActorModel>,
) -> impl IntoResponse
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, actor_id, "actors: update request received");
    match usecase.update(Some(admin.user_id), actor_id, model).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_one<A, M, S>(
    State(usecase): State<Arc<ActorUseCase<A, M, S>>>,
    AdminUser(admin): AdminUser,
    Path(actor_id): Path<i64>,
) -> impl IntoResponse
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, actor_id, "actors: delete request received");
    match usecase.delete(Some(admin.user_id), actor_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn movie_cast<A, M, S>(
    State(usecase): State<Arc<ActorUseCase<A, M, S>>>,
    Path(movie_id): Path<i64>,
) -> impl IntoResponse
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    match usecase.movie_cast(movie_id).await {
        Ok(cast) => Json(cast).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn link_movie_cast<A, M, S>(
    State(usecase): State<Arc<ActorUseCase<A, M, S>>>,
    AdminUser(admin): AdminUser,
    Path(movie_id): Path<i64>,
    Json(model): Json<LinkCastModel>,
) -> impl IntoResponse
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, movie_id, "actors: link movie cast request received");
    match usecase.link_movie_cast(movie_id, model).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn series_cast<A, M, S>(
    State(usecase): State<Arc<ActorUseCase<A, M, S>>>,
    Path(series_id): Path<i64>,
) -> impl IntoResponse
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    match usecase.series_cast(series_id).await {
        Ok(cast) => Json(cast).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn link_series_cast<A, M, S>(
    State(usecase): State<Arc<ActorUseCase<A, M, S>>>,
    AdminUser(admin): AdminUser,
    Path(series_id): Path<i64>,
    Json(model): Json<LinkCastModel>,
) -> impl IntoResponse
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, series_id, "actors: link series cast request received");
    match usecase.link_series_cast(series_id, model).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
