use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::actors::{
    ActorEntity, EditActorEntity, InsertActorEntity, MovieCastEntity, SeriesCastEntity,
};

#[async_trait]
#[automock]
pub trait ActorRepository {
    async fn find_by_id(&self, actor_id: i64) -> Result<Option<ActorEntity>>;
    async fn list(&self) -> Result<Vec<ActorEntity>>;
    async fn create(&self, insert_actor_entity: InsertActorEntity) -> Result<i64>;
    async fn update(&self, actor_id: i64, edit_actor_entity: EditActorEntity) -> Result<()>;
    async fn soft_delete(&self, actor_id: i64, deleted_by: Option<i64>) -> Result<()>;

    async fn link_movie_cast(&self, link: MovieCastEntity) -> Result<()>;
    async fn link_series_cast(&self, link: SeriesCastEntity) -> Result<()>;
    async fn list_cast_for_movie(&self, movie_id: i64)
    -> Result<Vec<(MovieCastEntity, ActorEntity)>>;
    async fn list_cast_for_series(
        &self,
        series_id: i64,
    ) -> Result<Vec<(SeriesCastEntity, ActorEntity)>>;
}
