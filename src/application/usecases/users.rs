use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::application::error::{UseCaseError, UseCaseResult};
use crate::domain::entities::users::EditUserEntity;
use crate::domain::repositories::users::UserRepository;
use crate::domain::value_objects::enums::user_roles::UserRole;
use crate::domain::value_objects::users::{EditUserModel, UserDto};

/// Admin-side user management. Registration and login live in the auth usecase.
pub struct UserUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    user_repository: Arc<U>,
}

impl<U> UserUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    pub async fn list(&self) -> UseCaseResult<Vec<UserDto>> {
        let users = self.user_repository.list().await.map_err(|err| {
            error!(db_error = ?err, "users: failed to list users");
            UseCaseError::Internal(err)
        })?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn get(&self, user_id: i64) -> UseCaseResult<UserDto> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "users: failed to load user");
                UseCaseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, status = 404_u16, "users: user not found");
                UseCaseError::NotFound("user")
            })?;

        Ok(user.into())
    }

    pub async fn update(
        &self,
        updated_by: Option<i64>,
        user_id: i64,
        model: EditUserModel,
    ) -> UseCaseResult<()> {
        info!(%user_id, "users: update requested");

        self.get(user_id).await?;

        if let Some(name) = model.name.as_deref() {
            if name.trim().is_empty() {
                warn!(%user_id, status = 400_u16, "users: empty name rejected");
                return Err(UseCaseError::bad_request("name must not be empty"));
            }
        }

        let role = match model.role.as_deref() {
            Some(raw) => Some(
                UserRole::from_str(raw)
                    .ok_or_else(|| {
                        warn!(%user_id, role = raw, status = 400_u16, "users: unknown role");
                        UseCaseError::bad_request(format!("unknown role: {}", raw))
                    })?
                    .to_string(),
            ),
            None => None,
        };

        let edit_user_entity = EditUserEntity {
            name: model.name,
            email: None,
            password_hash: None,
            role,
            is_active: model.is_active,
            avatar_url: model.avatar_url,
            updated_at: Utc::now(),
            updated_by,
        };

        self.user_repository
            .update(user_id, edit_user_entity)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "users: failed to update user");
                UseCaseError::Internal(err)
            })?;

        info!(%user_id, "users: user updated");
        Ok(())
    }

    pub async fn delete(&self, deleted_by: Option<i64>, user_id: i64) -> UseCaseResult<()> {
        info!(%user_id, "users: delete requested");

        self.get(user_id).await?;

        self.user_repository
            .soft_delete(user_id, deleted_by)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "users: failed to soft-delete user");
                UseCaseError::Internal(err)
            })?;

        info!(%user_id, "users: user soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserEntity;
    use crate::domain::repositories::users::MockUserRepository;
    use axum::http::StatusCode;

    fn sample_user(id: i64) -> UserEntity {
        let now = Utc::now();
        UserEntity {
            id,
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: "user".to_string(),
            is_active: true,
            avatar_url: None,
            created_at: now,
            updated_at: now,
            created_by: None,
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
        }
    }

    #[tokio::test]
    async fn update_rejects_unknown_role() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_user(id))) }));

        let usecase = UserUseCase::new(Arc::new(repo));

        let model = EditUserModel {
            role: Some("superuser".to_string()),
            ..Default::default()
        };

        let err = usecase.update(Some(1), 5, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_promotes_to_admin() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_user(id))) }));
        repo.expect_update()
            .withf(|user_id, entity| {
                *user_id == 5
                    && entity.role.as_deref() == Some("admin")
                    && entity.updated_by == Some(1)
            })
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let usecase = UserUseCase::new(Arc::new(repo));

        let model = EditUserModel {
            role: Some("admin".to_string()),
            ..Default::default()
        };

        usecase.update(Some(1), 5, model).await.unwrap();
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = UserUseCase::new(Arc::new(repo));

        let err = usecase.get(404).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dto_never_exposes_password_hash() {
        let dto = UserDto::from(sample_user(5));
        let serialized = serde_json::to_string(&dto).unwrap();
        assert!(!serialized.contains("argon2id"));
        assert!(!serialized.contains("password"));
    }
}
