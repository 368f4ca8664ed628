use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::info;

use crate::application::usecases::{
    actors::ActorUseCase, movies::MovieUseCase, reviews::ReviewUseCase,
};
use crate::auth::AdminUser;
use crate::domain::repositories::movies::MovieRepository;
use crate::domain::repositories::reviews::ReviewRepository;
use crate::domain::repositories::tv_series::TvSeriesRepository;
use crate::domain::repositories::users::UserRepository;
use crate::domain::value_objects::movies::{CreateMovieModel, EditMovieModel, MovieSearchFilter};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::{
    actors::ActorPostgres, movies::MoviePostgres, reviews::ReviewPostgres,
    tv_series::TvSeriesPostgres, users::UserPostgres,
};

use super::actors::{link_movie_cast, movie_cast};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let movie_repository = MoviePostgres::new(Arc::clone(&db_pool));
    let movie_usecase = MovieUseCase::new(Arc::new(movie_repository));

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
        .route("/:movie_id/reviews", get(list_movie_reviews))
        .with_state(Arc::new(review_usecase));

    let cast_routes = Router::new()
        .route("/:movie_id/cast", get(movie_cast).post(link_movie_cast))
        .with_state(Arc::new(actor_usecase));

    Router::new()
        .route("/", get(list).post(create))
        .route("/search", get(search))
        .route("/featured", get(list_featured))
        .route("/banner", get(list_banner))
        .route("/genres", get(list_genres))
        .route("/:movie_id", get(get_one).put(update).delete(delete_one))
        .route("/:movie_id/related", get(list_related))
        .with_state(Arc::new(movie_usecase))
        .merge(review_routes)
        .merge(cast_routes)
}

pub async fn list<M>(State(usecase): State<Arc<MovieUseCase<M>>>) -> impl IntoResponse
where
    M: MovieRepository + Send + Sync + 'static,
{
    match usecase.list().await {
        Ok(movies) => Json(movies).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn search<M>(
    State(usecase): State<Arc<MovieUseCase<M>>>,
    Query(filter): Query<MovieSearchFilter>,
) -> impl IntoResponse
where
    M: MovieRepository + Send + Sync + 'static,
{
    match usecase.search(filter).await {
        Ok(movies) => Json(movies).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_featured<M>(State(usecase): State<Arc<MovieUseCase<M>>>) -> impl IntoResponse
where
    M: MovieRepository + Send + Sync + 'static,
{
    match usecase.featured().await {
        Ok(movies) => Json(movies).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_banner<M>(State(usecase): State<Arc<MovieUseCase<M>>>) -> impl IntoResponse
where
    M: MovieRepository + Send + Sync + 'static,
{
    match usecase.banner().await {
        Ok(movies) => Json(movies).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_genres<M>(State(usecase): State<Arc<MovieUseCase<M>>>) -> impl IntoResponse
where
    M: MovieRepository + Send + Sync + 'static,
{
    match usecase.genres().await {
        Ok(genres) => Json(genres).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_one<M>(
    State(usecase): State<Arc<MovieUseCase<M>>>,
    Path(movie_id): Path<i64>,
) -> impl IntoResponse
where
    M: MovieRepository + Send + Sync + 'static,
{
    match usecase.get(movie_id).await {
        Ok(movie) => Json(movie).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_related<M>(
    State(usecase): State<Arc<MovieUseCase<M>>>,
    Path(movie_id): Path<i64>,
) -> impl IntoResponse
where
    M: MovieRepository + Send + Sync + 'static,
{
    match usecase.related(movie_id).await {
        Ok(movies) => Json(movies).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create<M>(
    State(usecase): State<Arc<MovieUseCase<M>>>,
    AdminUser(admin): AdminUser,
    Json(model): Json<CreateMovieModel>,
) -> impl IntoResponse
where
    M: MovieRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, "movies: create request received");
    match usecase.create(Some(admin.user_id), model).await {
        Ok(movie_id) => (StatusCode::CREATED, Json(movie_id)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update<M>(
    State(usecase): State<Arc<MovieUseCase<M>>>,
    AdminUser(admin): AdminUser,
    Path(movie_id): Path<i64>,
    Json(model): Json<EditMovieModel>,
) -> impl IntoResponse
where
    M: MovieRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, movie_id, "movies: update request received");
    match usecase.update(Some(admin.user_id), movie_id, model).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_one<M>(
    State(usecase): State<Arc<MovieUseCase<M>>>,
    AdminUser(admin): AdminUser,
    Path(movie_id): Path<i64>,
) -> impl IntoResponse
where
    M: MovieRepository + Send + Sync + 'static,
{
    info!(user_id = %admin.user_id, movie_id, "movies: delete request received");
    match usecase.delete(Some(admin.user_id), movie_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_movie_reviews<R, M, S, U>(
    State(usecase): State<Arc<ReviewUseCase<R, M, S, U>>>,
    Path(movie_id): Path<i64>,
) -> impl IntoResponse
where
    R: ReviewRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    match usecase.list_for_movie(movie_id).await {
        Ok(listing) => Json(listing).into_response(),
        Err(err) => err.into_response(),
    }
}
