use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::movies;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = movies)]
pub struct MovieEntity {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub rating: f64,
    pub genre: String,
    pub duration_minutes: i32,
    pub country: String,
    pub director: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub video_url: Option<String>,
    pub actor_names: Vec<String>,
    pub is_featured: bool,
    pub is_hidden: bool,
    pub is_banner: bool,
    pub release_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<i64>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = movies)]
pub struct InsertMovieEntity {
    pub title: String,
    pub description: String,
    pub year: i32,
    pub rating: f64,
    pub genre: String,
    pub duration_minutes: i32,
    pub country: String,
    pub director: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub video_url: Option<String>,
    pub actor_names: Vec<String>,
    pub is_featured: bool,
    pub is_hidden: bool,
    pub is_banner: bool,
    pub release_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = movies)]
pub struct EditMovieEntity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre: Option<String>,
    pub duration_minutes: Option<i32>,
    pub country: Option<String>,
    pub director: Option<String>,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub video_url: Option<String>,
    pub actor_names: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub is_hidden: Option<bool>,
    pub is_banner: Option<bool>,
    pub release_date: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<i64>,
}
