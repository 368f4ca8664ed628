use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use tracing::info;

use crate::application::usecases::watchlist::WatchlistUseCase;
use crate::auth::AuthUser;
use crate::domain::repositories::movies::MovieRepository;
use crate::domain::repositories::users::UserRepository;
use crate::domain::repositories::watchlist::WatchlistRepository;
use crate::domain::value_objects::watchlist::AddWatchlistModel;
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::{
    movies::MoviePostgres, users::UserPostgres, watchlist::WatchlistPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let usecase = WatchlistUseCase::new(
        Arc::new(WatchlistPostgres::new(Arc::clone(&db_pool))),
        Arc::new(UserPostgres::new(Arc::clone(&db_pool))),
        Arc::new(MoviePostgres::new(Arc::clone(&db_pool))),
    );

    Router::new()
        .route("/", get(list).post(add))
        .route("/:movie_id", delete(remove))
        .with_state(Arc::new(usecase))
}

pub async fn list<W, U, M>(
    State(usecase): State<Arc<WatchlistUseCase<W, U, M>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    W: WatchlistRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
{
    match usecase.list(user_id).await {
        Ok(items) => Json(items).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn add<W, U, M>(
    State(usecase): State<Arc<WatchlistUseCase<W, U, M>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(model): Json<AddWatchlistModel>,
) -> impl IntoResponse
where
    W: WatchlistRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
{
    info!(%user_id, movie_id = model.movie_id, "watchlist: add request received");
    match usecase.add(user_id, model.movie_id).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn remove<W, U, M>(
    State(usecase): State<Arc<WatchlistUseCase<W, U, M>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(movie_id): Path<i64>,
) -> impl IntoResponse
where
    W: WatchlistRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
{
    info!(%user_id, movie_id, "watchlist: remove request received");
    match usecase.remove(user_id, movie_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
