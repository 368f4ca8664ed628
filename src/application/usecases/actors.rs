use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::application::error::{UseCaseError, UseCaseResult};
use crate::domain::entities::actors::{
    EditActorEntity, InsertActorEntity, MovieCastEntity, SeriesCastEntity,
};
use crate::domain::repositories::actors::ActorRepository;
use crate::domain::repositories::movies::MovieRepository;
use crate::domain::repositories::tv_series::TvSeriesRepository;
use crate::domain::value_objects::actors::{
    ActorDto, CastMemberDto, CreateActorModel, EditActorModel, LinkCastModel,
};

pub struct ActorUseCase<A, M, S>
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    actor_repository: Arc<A>,
    movie_repository: Arc<M>,
    tv_series_repository: Arc<S>,
}

impl<A, M, S> ActorUseCase<A, M, S>
where
    A: ActorRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
{
    pub fn new(
        actor_repository: Arc<A>,
        movie_repository: Arc<M>,
        tv_series_repository: Arc<S>,
    ) -> Self {
        Self {
            actor_repository,
            movie_repository,
            tv_series_repository,
        }
    }

    pub async fn list(&self) -> UseCaseResult<Vec<ActorDto>> {
        let actors = self.actor_repository.list().await.map_err(|err| {
            error!(db_error = ?err, "actors: failed to list actors");
            UseCaseError::Internal(err)
        })?;

        Ok(actors.into_iter().map(ActorDto::from).collect())
    }

    pub async fn get(&self, actor_id: i64) -> UseCaseResult<ActorDto> {
        let actor = self.require_actor(actor_id).await?;
        Ok(actor)
    }

    pub async fn create(
        &self,
        created_by: Option<i64>,
        model: CreateActorModel,
    ) -> UseCaseResult<i64> {
        info!(name = %model.name, "actors: create requested");

        validate_name(&model.name)?;

        let now = Utc::now();
        let insert_actor_entity = InsertActorEntity {
            name: model.name,
            biography: model.biography,
            birth_date: model.birth_date,
            nationality: model.nationality,
            photo_url: model.photo_url,
            created_at: now,
            updated_at: now,
            created_by,
        };

        let actor_id = self
            .actor_repository
            .create(insert_actor_entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "actors: failed to create actor");
                UseCaseError::Internal(err)
            })?;

        info!(actor_id, "actors: actor created");
        Ok(actor_id)
    }

    pub async fn update(
        &self,
        updated_by: Option<i64>,
        actor_id: i64,
        model: EditActorModel,
    ) -> UseCaseResult<()> {
        info!(actor_id, "actors: update requested");

        self.require_actor(actor_id).await?;

        if let Some(name) = model.name.as_deref() {
            validate_name(name)?;
        }

        let edit_actor_entity = EditActorEntity {
            name: model.name,
            biography: model.biography,
            birth_date: model.birth_date,
            nationality: model.nationality,
            photo_url: model.photo_url,
            updated_at: Utc::now(),
            updated_by,
        };

        self.actor_repository
            .update(actor_id, edit_actor_entity)
            .await
            .map_err(|err| {
                error!(actor_id, db_error = ?err, "actors: failed to update actor");
                UseCaseError::Internal(err)
            })?;

        Ok(())
    }

    pub async fn delete(&self, deleted_by: Option<i64>, actor_id: i64) -> UseCaseResult<()> {
        info!(actor_id, "actors: delete requested");

        self.require_actor(actor_id).await?;

        self.actor_repository
            .soft_delete(actor_id, deleted_by)
            .await
            .map_err(|err| {
                error!(actor_id, db_error = ?err, "actors: failed to soft-delete actor");
                UseCaseError::Internal(err)
            })?;

        info!(actor_id, "actors: actor soft-deleted");
        Ok(())
    }

    pub async fn link_movie_cast(
        &self,
        movie_id: i64,
        model: LinkCastModel,
    ) -> UseCaseResult<()> {
        info!(
            movie_id,
            actor_id = model.actor_id,
            "actors: link movie cast requested"
        );

        validate_role_name(&model.role_name)?;

        self.movie_repository
            .find_by_id(movie_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(movie_id, status = 404_u16, "actors: movie not found");
                UseCaseError::NotFound("movie")
            })?;

        self.require_actor(model.actor_id).await?;

        let link = MovieCastEntity {
            movie_id,
            actor_id: model.actor_id,
            role_name: model.role_name,
            display_order: model.display_order,
            created_at: Utc::now(),
        };

        self.actor_repository
            .link_movie_cast(link)
            .await
            .map_err(|err| {
                error!(movie_id, db_error = ?err, "actors: failed to link movie cast");
                UseCaseError::Internal(err)
            })?;

        Ok(())
    }

    pub async fn link_series_cast(
        &self,
        series_id: i64,
        model: LinkCastModel,
    ) -> UseCaseResult<()> {
        info!(
            series_id,
            actor_id = model.actor_id,
            "actors: link series cast requested"
        );

        validate_role_name(&model.role_name)?;

        self.tv_series_repository
            .find_by_id(series_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(series_id, status = 404_u16, "actors: series not found");
                UseCaseError::NotFound("tv series")
            })?;

        self.require_actor(model.actor_id).await?;

        let link = SeriesCastEntity {
            series_id,
            actor_id: model.actor_id,
            role_name: model.role_name,
            display_order: model.display_order,
            created_at: Utc::now(),
        };

        self.actor_repository
            .link_series_cast(link)
            .await
            .map_err(|err| {
                error!(series_id, db_error = ?err, "actors: failed to link series cast");
                UseCaseError::Internal(err)
            })?;

        Ok(())
    }

    pub async fn movie_cast(&self, movie_id: i64) -> UseCaseResult<Vec<CastMemberDto>> {
        self.movie_repository
            .find_by_id(movie_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(movie_id, status = 404_u16, "actors: movie not found");
                UseCaseError::NotFound("movie")
            })?;

        let cast = self
            .actor_repository
            .list_cast_for_movie(movie_id)
            .await
            .map_err(|err| {
                error!(movie_id, db_error = ?err, "actors: failed to list movie cast");
                UseCaseError::Internal(err)
            })?;

        Ok(cast.into_iter().map(CastMemberDto::from).collect())
    }

    pub async fn series_cast(&self, series_id: i64) -> UseCaseResult<Vec<CastMemberDto>> {
        self.tv_series_repository
            .find_by_id(series_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(series_id, status = 404_u16, "actors: series not found");
                UseCaseError::NotFound("tv series")
            })?;

        let cast = self
            .actor_repository
            .list_cast_for_series(series_id)
            .await
            .map_err(|err| {
                error!(series_id, db_error = ?err, "actors: failed to list series cast");
                UseCaseError::Internal(err)
            })?;

        Ok(cast.into_iter().map(CastMemberDto::from).collect())
    }

    async fn require_actor(&self, actor_id: i64) -> UseCaseResult<ActorDto> {
        let actor = self
            .actor_repository
            .find_by_id(actor_id)
            .await
            .map_err(|err| {
                error!(actor_id, db_error = ?err, "actors: failed to load actor");
                UseCaseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(actor_id, status = 404_u16, "actors: actor not found");
                UseCaseError::NotFound("actor")
            })?;

        Ok(actor.into())
    }
}

fn validate_name(name: &str) -> UseCaseResult<()> {
    if name.trim().is_empty() {
        warn!(status = 400_u16, "actors: empty name rejected");
        return Err(UseCaseError::bad_request("name must not be empty"));
    }
    Ok(())
}

fn validate_role_name(role_name: &str) -> UseCaseResult<()> {
    if role_name.trim().is_empty() {
        warn!(status = 400_u16, "actors: empty role name rejected");
        return Err(UseCaseError::bad_request("role_name must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::actors::ActorEntity;
    use crate::domain::entities::movies::MovieEntity;
    use crate::domain::repositories::actors::MockActorRepository;
    use crate::domain::repositories::movies::MockMovieRepository;
    use crate::domain::repositories::tv_series::MockTvSeriesRepository;
    use axum::http::StatusCode;

    fn sample_actor(id: i64) -> ActorEntity {
        let now = Utc::now();
        ActorEntity {
            id,
            name: "Idris Elba".to_string(),
            biography: "".to_string(),
            birth_date: None,
            nationality: Some("UK".to_string()),
            photo_url: None,
            created_at: now,
            updated_at: now,
            created_by: None,
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
        }
    }

    fn sample_movie(id: i64) -> MovieEntity {
        let now = Utc::now();
        MovieEntity {
            id,
            title: "Heat".to_string(),
            description: "".to_string(),
            year: 1995,
            rating: 8.3,
            genre: "Crime".to_string(),
            duration_minutes: 170,
            country: "USA".to_string(),
            director: "Michael Mann".to_string(),
            poster_url: None,
            backdrop_url: None,
            video_url: None,
            actor_names: vec![],
            is_featured: false,
            is_hidden: false,
            is_banner: false,
            release_date: None,
            created_at: now,
            updated_at: now,
            created_by: None,
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let usecase = ActorUseCase::new(
            Arc::new(MockActorRepository::new()),
            Arc::new(MockMovieRepository::new()),
            Arc::new(MockTvSeriesRepository::new()),
        );

        let model = CreateActorModel {
            name: "   ".to_string(),
            biography: "".to_string(),
            birth_date: None,
            nationality: None,
            photo_url: None,
        };

        let err = usecase.create(None, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn link_movie_cast_requires_existing_movie() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = ActorUseCase::new(
            Arc::new(MockActorRepository::new()),
            Arc::new(movie_repo),
            Arc::new(MockTvSeriesRepository::new()),
        );

        let model = LinkCastModel {
            actor_id: 1,
            role_name: "Neil McCauley".to_string(),
            display_order: 0,
        };

        let err = usecase.link_movie_cast(42, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn link_movie_cast_requires_existing_actor() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_movie(id))) }));

        let mut actor_repo = MockActorRepository::new();
        actor_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = ActorUseCase::new(
            Arc::new(actor_repo),
            Arc::new(movie_repo),
            Arc::new(MockTvSeriesRepository::new()),
        );

        let model = LinkCastModel {
            actor_id: 9,
            role_name: "Neil McCauley".to_string(),
            display_order: 0,
        };

        let err = usecase.link_movie_cast(1, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn link_movie_cast_succeeds() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_movie(id))) }));

        let mut actor_repo = MockActorRepository::new();
        actor_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_actor(id))) }));
        actor_repo
            .expect_link_movie_cast()
            .withf(|link| link.movie_id == 1 && link.actor_id == 2)
            .returning(|_| Box::pin(async { Ok(()) }));

        let usecase = ActorUseCase::new(
            Arc::new(actor_repo),
            Arc::new(movie_repo),
            Arc::new(MockTvSeriesRepository::new()),
        );

        let model = LinkCastModel {
            actor_id: 2,
            role_name: "Neil McCauley".to_string(),
            display_order: 1,
        };

        usecase.link_movie_cast(1, model).await.unwrap();
    }

    #[tokio::test]
    async fn link_cast_rejects_blank_role() {
        let usecase = ActorUseCase::new(
            Arc::new(MockActorRepository::new()),
            Arc::new(MockMovieRepository::new()),
            Arc::new(MockTvSeriesRepository::new()),
        );

        let model = LinkCastModel {
            actor_id: 2,
            role_name: "".to_string(),
            display_order: 0,
        };

        let err = usecase.link_movie_cast(1, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
