use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::episodes;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = episodes)]
pub struct EpisodeEntity {
    pub id: i64,
    pub series_id: i64,
    pub season_number: i32,
    pub episode_number: i32,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub video_url: Option<String>,
    pub air_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<i64>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = episodes)]
pub struct InsertEpisodeEntity {
    pub series_id: i64,
    pub season_number: i32,
    pub episode_number: i32,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub video_url: Option<String>,
    pub air_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = episodes)]
pub struct EditEpisodeEntity {
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub video_url: Option<String>,
    pub air_date: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<i64>,
}
