use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::{actors, movie_cast, series_cast};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = actors)]
pub struct ActorEntity {
    pub id: i64,
    pub name: String,
    pub biography: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<i64>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = actors)]
pub struct InsertActorEntity {
    pub name: String,
    pub biography: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = actors)]
pub struct EditActorEntity {
    pub name: Option<String>,
    pub biography: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<i64>,
}

#[derive(Debug, Clone, Insertable, Queryable)]
#[diesel(table_name = movie_cast)]
pub struct MovieCastEntity {
    pub movie_id: i64,
    pub actor_id: i64,
    pub role_name: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, Queryable)]
#[diesel(table_name = series_cast)]
pub struct SeriesCastEntity {
    pub series_id: i64,
    pub actor_id: i64,
    pub role_name: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}
