use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::{movies::MovieEntity, watchlist_items::WatchlistItemEntity};

#[async_trait]
#[automock]
pub trait WatchlistRepository {
    async fn exists(&self, user_id: i64, movie_id: i64) -> Result<bool>;
    async fn add(&self, watchlist_item_entity: WatchlistItemEntity) -> Result<()>;
    async fn remove(&self, user_id: i64, movie_id: i64) -> Result<()>;
    async fn list_for_user(&self, user_id: i64)
    -> Result<Vec<(WatchlistItemEntity, MovieEntity)>>;
}
