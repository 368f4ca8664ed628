use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::define_sql_function;
use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::domain::entities::users::{EditUserEntity, RegisterUserEntity, UserEntity};
use crate::domain::repositories::users::UserRepository;
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::users};

define_sql_function! { fn lower(x: Text) -> Text; }

pub struct UserPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl UserPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserRepository for UserPostgres {
    async fn find_by_id(&self, user_id: i64) -> Result<Option<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = users::table
            .filter(users::id.eq(user_id))
            .filter(users::deleted_at.is_null())
            .select(UserEntity::as_select())
            .first::<UserEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = users::table
            .filter(lower(users::email).eq(email.to_lowercase()))
            .filter(users::deleted_at.is_null())
            .select(UserEntity::as_select())
            .first::<UserEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = users::table
            .filter(users::deleted_at.is_null())
            .order(users::created_at.desc())
            .select(UserEntity::as_select())
            .load::<UserEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn register(&self, register_user_entity: RegisterUserEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let id = diesel::insert_into(users::table)
            .values(&register_user_entity)
            .returning(users::id)
            .get_result::<i64>(&mut conn)?;

        Ok(id)
    }

    async fn update(&self, user_id: i64, edit_user_entity: EditUserEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::update(users::table)
            .filter(users::id.eq(user_id))
            .filter(users::deleted_at.is_null())
            .set(&edit_user_entity)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn soft_delete(&self, user_id: i64, deleted_by: Option<i64>) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        diesel::update(users::table)
            .filter(users::id.eq(user_id))
            .filter(users::deleted_at.is_null())
            .set((
                users::deleted_at.eq(now),
                users::deleted_by.eq(deleted_by),
                users::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
