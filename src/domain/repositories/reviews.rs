use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::reviews::{InsertReviewEntity, ReviewEntity};

#[async_trait]
#[automock]
pub trait ReviewRepository {
    async fn find_by_id(&self, review_id: i64) -> Result<Option<ReviewEntity>>;
    async fn create(&self, insert_review_entity: InsertReviewEntity) -> Result<i64>;
    async fn list_for_movie(&self, movie_id: i64) -> Result<Vec<ReviewEntity>>;
    async fn list_for_series(&self, series_id: i64) -> Result<Vec<ReviewEntity>>;
    async fn average_rating_for_movie(&self, movie_id: i64) -> Result<Option<f64>>;
    async fn soft_delete(&self, review_id: i64, deleted_by: Option<i64>) -> Result<()>;
}
