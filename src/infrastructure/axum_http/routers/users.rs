use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::info;

use crate::application::usecases::users::UserUseCase;
use crate::auth::AdminUser;
use crate::domain::repositories::users::UserRepository;
use crate::domain::value_objects::users::EditUserModel;
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::users::UserPostgres;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let usecase = UserUseCase::new(Arc::new(user_repository));

    Router::new()
        .route("/", get(list))
        .route("/:user_id", get(get_one).put(update).delete(delete_one))
        .with_state(Arc::new(usecase))
}

pub async fn list<U>(
    State(usecase): State<Arc<UserUseCase<U>>>,
    AdminUser(_): AdminUser,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match usecase.list().await {
        Ok(users) => Json(users).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_one<U>(
    State(usecase): State<Arc<UserUseCase<U>>>,
    AdminUser(_): AdminUser,
    Path(user_id): Path<i64>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match usecase.get(user_id).await {
        Ok(user) => Json(user).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update<U>(
    State(usecase): State<Arc<UserUseCase<U>>>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<i64>,
    Json(model): Json<EditUserModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    info!(admin_id = %admin.user_id, %user_id, "users: update request received");
    match usecase.update(Some(admin.user_id), user_id, model).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_one<U>(
    State(usecase): State<Arc<UserUseCase<U>>>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<i64>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    info!(admin_id = %admin.user_id, %user_id, "users: delete request received");
    match usecase.delete(Some(admin.user_id), user_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
