use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use crate::domain::entities::reviews::{InsertReviewEntity, ReviewEntity};
use crate::domain::repositories::reviews::ReviewRepository;
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::reviews};

pub struct ReviewPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ReviewPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ReviewRepository for ReviewPostgres {
    async fn find_by_id(&self, review_id: i64) -> Result<Option<ReviewEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = reviews::table
            .filter(reviews::id.eq(review_id))
            .filter(reviews::deleted_at.is_null())
            .select(ReviewEntity::as_select())
            .first::<ReviewEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn create(&self, insert_review_entity: InsertReviewEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let id = diesel::insert_into(reviews::table)
            .values(&insert_review_entity)
            .returning(reviews::id)
            .get_result::<i64>(&mut conn)?;

        Ok(id)
    }

    async fn list_for_movie(&self, movie_id: i64) -> Result<Vec<ReviewEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = reviews::table
            .filter(reviews::movie_id.eq(movie_id))
            .filter(reviews::deleted_at.is_null())
            .order(reviews::created_at.desc())
            .select(ReviewEntity::as_select())
            .load::<ReviewEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn list_for_series(&self, series_id: i64) -> Result<Vec<ReviewEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = reviews::table
            .filter(reviews::series_id.eq(series_id))
            .filter(reviews::deleted_at.is_null())
            .order(reviews::created_at.desc())
            .select(ReviewEntity::as_select())
            .load::<ReviewEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn average_rating_for_movie(&self, movie_id: i64) -> Result<Option<f64>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let ratings = reviews::table
            .filter(reviews::movie_id.eq(movie_id))
            .filter(reviews::deleted_at.is_null())
            .select(reviews::rating)
            .load::<i32>(&mut conn)?;

        if ratings.is_empty() {
            return Ok(None);
        }

        let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
        Ok(Some(sum as f64 / ratings.len() as f64))
    }

    async fn soft_delete(&self, review_id: i64, deleted_by: Option<i64>) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        diesel::update(reviews::table)
            .filter(reviews::id.eq(review_id))
            .filter(reviews::deleted_at.is_null())
            .set((
                reviews::deleted_at.eq(now),
                reviews::deleted_by.eq(deleted_by),
                reviews::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
