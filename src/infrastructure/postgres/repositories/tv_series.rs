use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use crate::domain::entities::episodes::{EditEpisodeEntity, EpisodeEntity, InsertEpisodeEntity};
use crate::domain::entities::tv_series::{
    EditTvSeriesEntity, InsertTvSeriesEntity, TvSeriesEntity,
};
use crate::domain::repositories::tv_series::TvSeriesRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{episodes, tv_series},
};

pub struct TvSeriesPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl TvSeriesPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl TvSeriesRepository for TvSeriesPostgres {
    async fn find_by_id(&self, series_id: i64) -> Result<Option<TvSeriesEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = tv_series::table
            .filter(tv_series::id.eq(series_id))
            .filter(tv_series::deleted_at.is_null())
            .select(TvSeriesEntity::as_select())
            .first::<TvSeriesEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn list(&self, include_hidden: bool) -> Result<Vec<TvSeriesEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = tv_series::table
            .filter(tv_series::deleted_at.is_null())
            .into_boxed();

        if !include_hidden {
            query = query.filter(tv_series::is_hidden.eq(false));
        }

        let rows = query
            .order(tv_series::created_at.desc())
            .select(TvSeriesEntity::as_select())
            .load::<TvSeriesEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn create(&self, insert_tv_series_entity: InsertTvSeriesEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let id = diesel::insert_into(tv_series::table)
            .values(&insert_tv_series_entity)
            .returning(tv_series::id)
            .get_result::<i64>(&mut conn)?;

        Ok(id)
    }

    async fn update(
        &self,
        series_id: i64,
        edit_tv_series_entity: EditTvSeriesEntity,
    ) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::update(tv_series::table)
            .filter(tv_series::id.eq(series_id))
            .filter(tv_series::deleted_at.is_null())
            .set(&edit_tv_series_entity)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn soft_delete(&self, series_id: i64, deleted_by: Option<i64>) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        diesel::update(tv_series::table)
            .filter(tv_series::id.eq(series_id))
            .filter(tv_series::deleted_at.is_null())
            .set((
                tv_series::deleted_at.eq(now),
                tv_series::deleted_by.eq(deleted_by),
                tv_series::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn find_episode_by_id(&self, episode_id: i64) -> Result<Option<EpisodeEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = episodes::table
            .filter(episodes::id.eq(episode_id))
            .filter(episodes::deleted_at.is_null())
            .select(EpisodeEntity::as_select())
            .first::<EpisodeEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn list_episodes(&self, series_id: i64) -> Result<Vec<EpisodeEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = episodes::table
            .filter(episodes::series_id.eq(series_id))
            .filter(episodes::deleted_at.is_null())
            .order((
                episodes::season_number.asc(),
                episodes::episode_number.asc(),
            ))
            .select(EpisodeEntity::as_select())
            .load::<EpisodeEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn create_episode(&self, insert_episode_entity: InsertEpisodeEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let id = diesel::insert_into(episodes::table)
            .values(&insert_episode_entity)
            .returning(episodes::id)
            .get_result::<i64>(&mut conn)?;

        Ok(id)
    }

    async fn update_episode(
        &self,
        episode_id: i64,
        edit_episode_entity: EditEpisodeEntity,
    ) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::update(episodes::table)
            .filter(episodes::id.eq(episode_id))
            .filter(episodes::deleted_at.is_null())
            .set(&edit_episode_entity)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn soft_delete_episode(&self, episode_id: i64, deleted_by: Option<i64>) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        diesel::update(episodes::table)
            .filter(episodes::id.eq(episode_id))
            .filter(episodes::deleted_at.is_null())
            .set((
                episodes::deleted_at.eq(now),
                episodes::deleted_by.eq(deleted_by),
                episodes::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
