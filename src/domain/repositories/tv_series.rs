use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::episodes::{EditEpisodeEntity, EpisodeEntity, InsertEpisodeEntity};
use crate::domain::entities::tv_series::{
    EditTvSeriesEntity, InsertTvSeriesEntity, TvSeriesEntity,
};

#[async_trait]
#[automock]
pub trait TvSeriesRepository {
    async fn find_by_id(&self, series_id: i64) -> Result<Option<TvSeriesEntity>>;
    async fn list(&self, include_hidden: bool) -> Result<Vec<TvSeriesEntity>>;
    async fn create(&self, insert_tv_series_entity: InsertTvSeriesEntity) -> Result<i64>;
    async fn update(&self, series_id: i64, edit_tv_series_entity: EditTvSeriesEntity)
    -> Result<()>;
    async fn soft_delete(&self, series_id: i64, deleted_by: Option<i64>) -> Result<()>;

    async fn find_episode_by_id(&self, episode_id: i64) -> Result<Option<EpisodeEntity>>;
    async fn list_episodes(&self, series_id: i64) -> Result<Vec<EpisodeEntity>>;
    async fn create_episode(&self, insert_episode_entity: InsertEpisodeEntity) -> Result<i64>;
    async fn update_episode(
        &self,
        episode_id: i64,
        edit_episode_entity: EditEpisodeEntity,
    ) -> Result<()>;
    async fn soft_delete_episode(&self, episode_id: i64, deleted_by: Option<i64>) -> Result<()>;
}
