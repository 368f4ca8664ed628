use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::watchlist_items;

#[derive(Debug, Clone, Insertable, Selectable, Queryable)]
#[diesel(table_name = watchlist_items)]
pub struct WatchlistItemEntity {
    pub user_id: i64,
    pub movie_id: i64,
    pub added_at: DateTime<Utc>,
}
