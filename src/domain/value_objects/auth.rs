use serde::{Deserialize, Serialize};

use crate::domain::value_objects::users::UserDto;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginModel {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponseDto {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserDto,
}
