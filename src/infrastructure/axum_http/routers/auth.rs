use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::info;

use crate::application::usecases::auth::AuthUseCase;
use crate::auth::AuthUser;
use crate::domain::repositories::users::UserRepository;
use crate::domain::value_objects::auth::{LoginModel, RegisterModel};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::users::UserPostgres;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let usecase = AuthUseCase::new(Arc::new(user_repository));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .with_state(Arc::new(usecase))
}

pub async fn register<U>(
    State(usecase): State<Arc<AuthUseCase<U>>>,
    Json(model): Json<RegisterModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    info!("auth: register request received");
    match usecase.register(model).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn login<U>(
    State(usecase): State<Arc<AuthUseCase<U>>>,
    Json(model): Json<LoginModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    info!("auth: login request received");
    match usecase.login(model).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn me<U>(
    State(usecase): State<Arc<AuthUseCase<U>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match usecase.me(user_id).await {
        Ok(user) => Json(user).into_response(),
        Err(err) => err.into_response(),
    }
}
