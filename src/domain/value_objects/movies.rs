use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::movies::MovieEntity;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieModel {
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
    pub release_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditMovieModel {
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
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieSearchFilter {
    pub q: Option<String>,
    pub genre: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieDto {
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
    pub release_date: Option<NaiveDate>,
}

impl From<MovieEntity> for MovieDto {
    fn from(value: MovieEntity) -> Self {
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
            release_date: value.release_date,
        }
    }
}
