use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{movies::MovieEntity, watchlist_items::WatchlistItemEntity};
use crate::domain::value_objects::movies::MovieDto;

#[derive(Debug, Clone, Deserialize)]
pub struct AddWatchlistModel {
    pub movie_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WatchlistItemDto {
    pub movie: MovieDto,
    pub added_at: DateTime<Utc>,
}

impl From<(WatchlistItemEntity, MovieEntity)> for WatchlistItemDto {
    fn from((item, movie): (WatchlistItemEntity, MovieEntity)) -> Self {
        Self {
            movie: movie.into(),
            added_at: item.added_at,
        }
    }
}
