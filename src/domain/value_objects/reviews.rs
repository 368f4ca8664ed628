use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::reviews::ReviewEntity;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewModel {
    pub movie_id: Option<i64>,
    pub series_id: Option<i64>,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewDto {
    pub id: i64,
    pub movie_id: Option<i64>,
    pub series_id: Option<i64>,
    pub user_id: i64,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Reviews for one title together with the mean of their ratings.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewListDto {
    pub reviews: Vec<ReviewDto>,
    pub average_rating: Option<f64>,
}

impl From<ReviewEntity> for ReviewDto {
    fn from(value: ReviewEntity) -> Self {
        Self {
            id: value.id,
            movie_id: value.movie_id,
            series_id: value.series_id,
            user_id: value.user_id,
            user_name: value.user_name,
            rating: value.rating,
            comment: value.comment,
            created_at: value.created_at,
        }
    }
}
