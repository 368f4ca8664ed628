use serde::{Deserialize, Serialize};

use crate::domain::entities::users::UserEntity;
use crate::domain::value_objects::enums::user_roles::UserRole;

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub avatar_url: Option<String>,
}

impl From<UserEntity> for UserDto {
    fn from(value: UserEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            role: UserRole::from_str(&value.role).unwrap_or_default(),
            is_active: value.is_active,
            avatar_url: value.avatar_url,
        }
    }
}

/// Admin-side user edit: role changes, activation toggles, profile fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditUserModel {
    pub name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub avatar_url: Option<String>,
}
