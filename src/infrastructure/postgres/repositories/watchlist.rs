use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::entities::{movies::MovieEntity, watchlist_items::WatchlistItemEntity};
use crate::domain::repositories::watchlist::WatchlistRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{movies, watchlist_items},
};

pub struct WatchlistPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl WatchlistPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl WatchlistRepository for WatchlistPostgres {
    async fn exists(&self, user_id: i64, movie_id: i64) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count: i64 = watchlist_items::table
            .filter(watchlist_items::user_id.eq(user_id))
            .filter(watchlist_items::movie_id.eq(movie_id))
            .count()
            .get_result(&mut conn)?;

        Ok(count > 0)
    }

    async fn add(&self, watchlist_item_entity: WatchlistItemEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::insert_into(watchlist_items::table)
            .values(&watchlist_item_entity)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn remove(&self, user_id: i64, movie_id: i64) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::delete(
            watchlist_items::table
                .filter(watchlist_items::user_id.eq(user_id))
                .filter(watchlist_items::movie_id.eq(movie_id)),
        )
        .execute(&mut conn)?;

        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<(WatchlistItemEntity, MovieEntity)>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = watchlist_items::table
            .inner_join(movies::table)
            .filter(watchlist_items::user_id.eq(user_id))
            .filter(movies::deleted_at.is_null())
            .order(watchlist_items::added_at.desc())
            .select((watchlist_items::all_columns, MovieEntity::as_select()))
            .load::<(WatchlistItemEntity, MovieEntity)>(&mut conn)?;

        Ok(rows)
    }
}
