use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use crate::domain::entities::actors::{
    ActorEntity, EditActorEntity, InsertActorEntity, MovieCastEntity, SeriesCastEntity,
};
use crate::domain::repositories::actors::ActorRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{actors, movie_cast, series_cast},
};

pub struct ActorPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ActorPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ActorRepository for ActorPostgres {
    async fn find_by_id(&self, actor_id: i64) -> Result<Option<ActorEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = actors::table
            .filter(actors::id.eq(actor_id))
            .filter(actors::deleted_at.is_null())
            .select(ActorEntity::as_select())
            .first::<ActorEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ActorEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = actors::table
            .filter(actors::deleted_at.is_null())
            .order(actors::name.asc())
            .select(ActorEntity::as_select())
            .load::<ActorEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn create(&self, insert_actor_entity: InsertActorEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let id = diesel::insert_into(actors::table)
            .values(&insert_actor_entity)
            .returning(actors::id)
            .get_result::<i64>(&mut conn)?;

        Ok(id)
    }

    async fn update(&self, actor_id: i64, edit_actor_entity: EditActorEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::update(actors::table)
            .filter(actors::id.eq(actor_id))
            .filter(actors::deleted_at.is_null())
            .set(&edit_actor_entity)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn soft_delete(&self, actor_id: i64, deleted_by: Option<i64>) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        diesel::update(actors::table)
            .filter(actors::id.eq(actor_id))
            .filter(actors::deleted_at.is_null())
            .set((
                actors::deleted_at.eq(now),
                actors::deleted_by.eq(deleted_by),
                actors::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn link_movie_cast(&self, link: MovieCastEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::insert_into(movie_cast::table)
            .values(&link)
            .on_conflict((movie_cast::movie_id, movie_cast::actor_id))
            .do_update()
            .set((
                movie_cast::role_name.eq(&link.role_name),
                movie_cast::display_order.eq(link.display_order),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn link_series_cast(&self, link: SeriesCastEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::insert_into(series_cast::table)
            .values(&link)
            .on_conflict((series_cast::series_id, series_cast::actor_id))
            .do_update()
            .set((
                series_cast::role_name.eq(&link.role_name),
                series_cast::display_order.eq(link.display_order),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn list_cast_for_movie(
        &self,
        movie_id: i64,
    ) -> Result<Vec<(MovieCastEntity, ActorEntity)>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = movie_cast::table
            .inner_join(actors::table)
            .filter(movie_cast::movie_id.eq(movie_id))
            .filter(actors::deleted_at.is_null())
            .order(movie_cast::display_order.asc())
            .select((movie_cast::all_columns, ActorEntity::as_select()))
            .load::<(MovieCastEntity, ActorEntity)>(&mut conn)?;

        Ok(rows)
    }

    async fn list_cast_for_series(
        &self,
        series_id: i64,
    ) -> Result<Vec<(SeriesCastEntity, ActorEntity)>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = series_cast::table
            .inner_join(actors::table)
            .filter(series_cast::series_id.eq(series_id))
            .filter(actors::deleted_at.is_null())
            .order(series_cast::display_order.asc())
            .select((series_cast::all_columns, ActorEntity::as_select()))
            .load::<(SeriesCastEntity, ActorEntity)>(&mut conn)?;

        Ok(rows)
    }
}
