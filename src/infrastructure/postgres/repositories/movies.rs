use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use crate::domain::entities::movies::{EditMovieEntity, InsertMovieEntity, MovieEntity};
use crate::domain::repositories::movies::MovieRepository;
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::movies};

pub struct MoviePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl MoviePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl MovieRepository for MoviePostgres {
    async fn find_by_id(&self, movie_id: i64) -> Result<Option<MovieEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = movies::table
            .filter(movies::id.eq(movie_id))
            .filter(movies::deleted_at.is_null())
            .select(MovieEntity::as_select())
            .first::<MovieEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn list(&self, include_hidden: bool) -> Result<Vec<MovieEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = movies::table
            .filter(movies::deleted_at.is_null())
            .into_boxed();

        if !include_hidden {
            query = query.filter(movies::is_hidden.eq(false));
        }

        let rows = query
            .order(movies::created_at.desc())
            .select(MovieEntity::as_select())
            .load::<MovieEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn search(
        &self,
        query: Option<String>,
        genre: Option<String>,
    ) -> Result<Vec<MovieEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut stmt = movies::table
            .filter(movies::deleted_at.is_null())
            .filter(movies::is_hidden.eq(false))
            .into_boxed();

        if let Some(q) = query {
            stmt = stmt.filter(movies::title.ilike(format!("%{}%", q)));
        }

        if let Some(genre) = genre {
            stmt = stmt.filter(movies::genre.eq(genre));
        }

        let rows = stmt
            .order(movies::rating.desc())
            .select(MovieEntity::as_select())
            .load::<MovieEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn list_featured(&self) -> Result<Vec<MovieEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = movies::table
            .filter(movies::deleted_at.is_null())
            .filter(movies::is_hidden.eq(false))
            .filter(movies::is_featured.eq(true))
            .order(movies::rating.desc())
            .select(MovieEntity::as_select())
            .load::<MovieEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn list_banner(&self) -> Result<Vec<MovieEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = movies::table
            .filter(movies::deleted_at.is_null())
            .filter(movies::is_hidden.eq(false))
            .filter(movies::is_banner.eq(true))
            .order(movies::created_at.desc())
            .select(MovieEntity::as_select())
            .load::<MovieEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn list_related(&self, movie_id: i64, genre: String) -> Result<Vec<MovieEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = movies::table
            .filter(movies::deleted_at.is_null())
            .filter(movies::is_hidden.eq(false))
            .filter(movies::genre.eq(genre))
            .filter(movies::id.ne(movie_id))
            .order(movies::rating.desc())
            .select(MovieEntity::as_select())
            .load::<MovieEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn list_genres(&self) -> Result<Vec<String>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let genres = movies::table
            .filter(movies::deleted_at.is_null())
            .filter(movies::is_hidden.eq(false))
            .select(movies::genre)
            .load::<String>(&mut conn)?;

        Ok(genres)
    }

    async fn create(&self, insert_movie_entity: InsertMovieEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let id = diesel::insert_into(movies::table)
            .values(&insert_movie_entity)
            .returning(movies::id)
            .get_result::<i64>(&mut conn)?;

        Ok(id)
    }

    async fn update(&self, movie_id: i64, edit_movie_entity: EditMovieEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::update(movies::table)
            .filter(movies::id.eq(movie_id))
            .filter(movies::deleted_at.is_null())
            .set(&edit_movie_entity)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn soft_delete(&self, movie_id: i64, deleted_by: Option<i64>) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        diesel::update(movies::table)
            .filter(movies::id.eq(movie_id))
            .filter(movies::deleted_at.is_null())
            .set((
                movies::deleted_at.eq(now),
                movies::deleted_by.eq(deleted_by),
                movies::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
