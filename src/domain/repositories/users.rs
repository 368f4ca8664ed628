use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::users::{EditUserEntity, RegisterUserEntity, UserEntity};

#[async_trait]
#[automock]
pub trait UserRepository {
    async fn find_by_id(&self, user_id: i64) -> Result<Option<UserEntity>>;
    /// Email matching is case-insensitive.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>>;
    async fn list(&self) -> Result<Vec<UserEntity>>;
    async fn register(&self, register_user_entity: RegisterUserEntity) -> Result<i64>;
    async fn update(&self, user_id: i64, edit_user_entity: EditUserEntity) -> Result<()>;
    async fn soft_delete(&self, user_id: i64, deleted_by: Option<i64>) -> Result<()>;
}
