use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::application::error::{UseCaseError, UseCaseResult};
use crate::auth::{self, password};
use crate::domain::entities::users::RegisterUserEntity;
use crate::domain::repositories::users::UserRepository;
use crate::domain::value_objects::auth::{AuthResponseDto, LoginModel, RegisterModel};
use crate::domain::value_objects::enums::user_roles::UserRole;
use crate::domain::value_objects::users::UserDto;

const MIN_PASSWORD_LENGTH: usize = 6;

// One message for both unknown email and wrong password, so the endpoint
// does not leak which emails are registered.
const INVALID_CREDENTIALS: &str = "invalid email or password";

pub struct AuthUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    user_repository: Arc<U>,
}

impl<U> AuthUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    pub async fn register(&self, model: RegisterModel) -> UseCaseResult<AuthResponseDto> {
        info!(email = %model.email, "auth: register requested");

        if model.name.trim().is_empty() {
            warn!(status = 400_u16, "auth: empty name rejected");
            return Err(UseCaseError::bad_request("name must not be empty"));
        }

        let email = model.email.trim().to_lowercase();
        if !email.contains('@') {
            warn!(status = 400_u16, "auth: malformed email rejected");
            return Err(UseCaseError::bad_request("email is not valid"));
        }

        if model.password.len() < MIN_PASSWORD_LENGTH {
            warn!(status = 400_u16, "auth: short password rejected");
            return Err(UseCaseError::bad_request(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let existing = self
            .user_repository
            .find_by_email(&email)
            .await
            .map_err(UseCaseError::Internal)?;

        if existing.is_some() {
            warn!(email = %email, status = 400_u16, "auth: email already registered");
            return Err(UseCaseError::bad_request("email is already registered"));
        }

        let password_hash = password::hash_password(&model.password).map_err(|err| {
            error!(hash_error = ?err, "auth: password hashing failed");
            UseCaseError::Internal(err)
        })?;

        let now = Utc::now();
        let register_user_entity = RegisterUserEntity {
            name: model.name,
            email: email.clone(),
            password_hash,
            role: UserRole::User.to_string(),
            is_active: true,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        };

        let user_id = self
            .user_repository
            .register(register_user_entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: failed to register user");
                UseCaseError::Internal(err)
            })?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                error!(%user_id, "auth: freshly registered user missing");
                UseCaseError::Internal(anyhow::anyhow!("registered user not found"))
            })?;

        let token = auth::issue_token(user.id, UserRole::User, &user.email).map_err(|err| {
            error!(token_error = ?err, "auth: failed to issue token");
            UseCaseError::Internal(err)
        })?;

        info!(%user_id, "auth: user registered");
        Ok(AuthResponseDto {
            token,
            expires_in: auth::TOKEN_TTL_SECONDS,
            user: UserDto::from(user),
        })
    }

    pub async fn login(&self, model: LoginModel) -> UseCaseResult<AuthResponseDto> {
        info!(email = %model.email, "auth: login requested");

        let email = model.email.trim().to_lowercase();

        let user = self
            .user_repository
            .find_by_email(&email)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(email = %email, status = 401_u16, "auth: unknown email");
                UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string())
            })?;

        let password_matches =
            password::verify_password(&model.password, &user.password_hash).map_err(|err| {
                error!(verify_error = ?err, "auth: password verification failed");
                UseCaseError::Internal(err)
            })?;

        if !password_matches {
            warn!(user_id = %user.id, status = 401_u16, "auth: wrong password");
            return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        if !user.is_active {
            warn!(user_id = %user.id, status = 401_u16, "auth: inactive account");
            return Err(UseCaseError::Unauthorized(
                "account is deactivated".to_string(),
            ));
        }

        let role = UserRole::from_str(&user.role).unwrap_or_default();
        let token = auth::issue_token(user.id, role, &user.email).map_err(|err| {
            error!(token_error = ?err, "auth: failed to issue token");
            UseCaseError::Internal(err)
        })?;

        info!(user_id = %user.id, "auth: login succeeded");
        Ok(AuthResponseDto {
            token,
            expires_in: auth::TOKEN_TTL_SECONDS,
            user: UserDto::from(user),
        })
    }

    pub async fn me(&self, user_id: i64) -> UseCaseResult<UserDto> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(%user_id, status = 404_u16, "auth: user not found");
                UseCaseError::NotFound("user")
            })?;

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserEntity;
    use crate::domain::repositories::users::MockUserRepository;
    use axum::http::StatusCode;

    fn set_env_vars() {
        unsafe {
            std::env::set_var("JWT_SECRET", "test-secret-at-least-32-bytes-long!!");
        }
    }

    fn hashed_user(id: i64, plaintext: &str, is_active: bool) -> UserEntity {
        let now = Utc::now();
        UserEntity {
            id,
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            password_hash: password::hash_password(plaintext).unwrap(),
            role: "user".to_string(),
            is_active,
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
    async fn register_rejects_short_password() {
        let usecase = AuthUseCase::new(Arc::new(MockUserRepository::new()));

        let model = RegisterModel {
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            password: "12345".to_string(),
        };

        let err = usecase.register(model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(Some(hashed_user(1, "hunter22", true))) }));

        let usecase = AuthUseCase::new(Arc::new(repo));

        let model = RegisterModel {
            name: "Alex".to_string(),
            email: "ALEX@example.com".to_string(),
            password: "hunter22".to_string(),
        };

        let err = usecase.register(model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_stores_hash_not_plaintext() {
        set_env_vars();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));
        repo.expect_register()
            .withf(|entity| {
                entity.password_hash.starts_with("$argon2id$")
                    && entity.password_hash != "hunter22"
                    && entity.email == "alex@example.com"
                    && entity.role == "user"
            })
            .returning(|_| Box::pin(async { Ok(7) }));
        repo.expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(hashed_user(id, "hunter22", true))) }));

        let usecase = AuthUseCase::new(Arc::new(repo));

        let model = RegisterModel {
            name: "Alex".to_string(),
            email: "  ALEX@Example.com ".to_string(),
            password: "hunter22".to_string(),
        };

        let response = usecase.register(model).await.unwrap();
        assert_eq!(response.expires_in, auth::TOKEN_TTL_SECONDS);
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn login_unknown_email_and_wrong_password_share_a_message() {
        set_env_vars();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "nobody@example.com")
            .returning(|_| Box::pin(async { Ok(None) }));
        repo.expect_find_by_email()
            .withf(|email| email == "alex@example.com")
            .returning(|_| Box::pin(async { Ok(Some(hashed_user(1, "hunter22", true))) }));

        let usecase = AuthUseCase::new(Arc::new(repo));

        let unknown = usecase
            .login(LoginModel {
                email: "nobody@example.com".to_string(),
                password: "whatever".to_string(),
            })
            .await
            .unwrap_err();

        let wrong_password = usecase
            .login(LoginModel {
                email: "alex@example.com".to_string(),
                password: "not-the-password".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(unknown.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.to_string(), wrong_password.to_string());
    }

    #[tokio::test]
    async fn login_inactive_account_is_unauthorized() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(Some(hashed_user(1, "hunter22", false))) }));

        let usecase = AuthUseCase::new(Arc::new(repo));

        let err = usecase
            .login(LoginModel {
                email: "alex@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_succeeds_with_correct_password() {
        set_env_vars();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(Some(hashed_user(1, "hunter22", true))) }));

        let usecase = AuthUseCase::new(Arc::new(repo));

        let response = usecase
            .login(LoginModel {
                email: "Alex@Example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user.id, 1);
        assert_eq!(response.expires_in, auth::TOKEN_TTL_SECONDS);
    }
}
