use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::movies::{EditMovieEntity, InsertMovieEntity, MovieEntity};

#[async_trait]
#[automock]
pub trait MovieRepository {
    async fn find_by_id(&self, movie_id: i64) -> Result<Option<MovieEntity>>;
    async fn list(&self, include_hidden: bool) -> Result<Vec<MovieEntity>>;
    async fn search(&self, query: Option<String>, genre: Option<String>)
    -> Result<Vec<MovieEntity>>;
    async fn list_featured(&self) -> Result<Vec<MovieEntity>>;
    async fn list_banner(&self) -> Result<Vec<MovieEntity>>;
    async fn list_related(&self, movie_id: i64, genre: String) -> Result<Vec<MovieEntity>>;
    async fn list_genres(&self) -> Result<Vec<String>>;
    async fn create(&self, insert_movie_entity: InsertMovieEntity) -> Result<i64>;
    async fn update(&self, movie_id: i64, edit_movie_entity: EditMovieEntity) -> Result<()>;
    async fn soft_delete(&self, movie_id: i64, deleted_by: Option<i64>) -> Result<()>;
}
