use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{episodes::EpisodeEntity, tv_series::TvSeriesEntity};
use crate::domain::value_objects::enums::series_statuses::SeriesStatus;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTvSeriesModel {
    pub title: String,
    pub description: String,
    pub year: i32,
    #[serde(default)]
    pub rating: f64,
    pub genre: String,
    pub duration_minutes: i32,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub director: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(default)]
    pub actor_names: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub is_banner: bool,
    #[serde(default)]
    pub season_count: i32,
    #[serde(default)]
    pub episode_count: i32,
    #[serde(default)]
    pub creator_name: String,
    pub status: String,
    pub first_aired: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditTvSeriesModel {
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
    pub season_count: Option<i32>,
    pub episode_count: Option<i32>,
    pub creator_name: Option<String>,
    pub status: Option<String>,
    pub first_aired: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TvSeriesDto {
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
    pub is_banner: bool,
    pub season_count: i32,
    pub episode_count: i32,
    pub creator_name: String,
    pub status: SeriesStatus,
    pub first_aired: Option<NaiveDate>,
}

impl From<TvSeriesEntity> for TvSeriesDto {
    fn from(value: TvSeriesEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            year: value.year,
            rating: value.rating,
            genre: value.genre,
            duration_minutes: value.duration_minutes,
            country: value.country,
            director: value.director,
            poster_url: value.poster_url,
            backdrop_url: value.backdrop_url,
            video_url: value.video_url,
            actor_names: value.actor_names,
            is_featured: value.is_featured,
            is_banner: value.is_banner,
            season_count: value.season_count,
            episode_count: value.episode_count,
            creator_name: value.creator_name,
            status: SeriesStatus::from_str(&value.status).unwrap_or_default(),
            first_aired: value.first_aired,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEpisodeModel {
    pub season_number: i32,
    pub episode_number: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration_minutes: i32,
    pub video_url: Option<String>,
    pub air_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditEpisodeModel {
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub video_url: Option<String>,
    pub air_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EpisodeDto {
    pub id: i64,
    pub series_id: i64,
    pub season_number: i32,
    pub episode_number: i32,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub video_url: Option<String>,
    pub air_date: Option<NaiveDate>,
}

impl From<EpisodeEntity> for EpisodeDto {
    fn from(value: EpisodeEntity) -> Self {
        Self {
            id: value.id,
            series_id: value.series_id,
            season_number: value.season_number,
            episode_number: value.episode_number,
            title: value.title,
            description: value.description,
            duration_minutes: value.duration_minutes,
            video_url: value.video_url,
            air_date: value.air_date,
        }
    }
}
