use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::{error, info, warn};

use crate::application::error::{UseCaseError, UseCaseResult};
use crate::domain::entities::episodes::{EditEpisodeEntity, InsertEpisodeEntity};
use crate::domain::entities::tv_series::{EditTvSeriesEntity, InsertTvSeriesEntity};
use crate::domain::repositories::tv_series::TvSeriesRepository;
use crate::domain::value_objects::enums::series_statuses::SeriesStatus;
use crate::domain::value_objects::tv_series::{
    CreateEpisodeModel, CreateTvSeriesModel, EditEpisodeModel, EditTvSeriesModel, EpisodeDto,
    TvSeriesDto,
};

pub struct TvSeriesUseCase<S>
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    tv_series_repository: Arc<S>,
}

impl<S> TvSeriesUseCase<S>
where
    S: TvSeriesRepository + Send + Sync + 'static,
{
    pub fn new(tv_series_repository: Arc<S>) -> Self {
        Self {
            tv_series_repository,
        }
    }

    pub async fn list(&self) -> UseCaseResult<Vec<TvSeriesDto>> {
        let series = self
            .tv_series_repository
            .list(false)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "tv_series: failed to list series");
                UseCaseError::Internal(err)
            })?;

        Ok(series.into_iter().map(TvSeriesDto::from).collect())
    }

    pub async fn get(&self, series_id: i64) -> UseCaseResult<TvSeriesDto> {
        let series = self
            .tv_series_repository
            .find_by_id(series_id)
            .await
            .map_err(|err| {
                error!(series_id, db_error = ?err, "tv_series: failed to load series");
                UseCaseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(series_id, status = 404_u16, "tv_series: series not found");
                UseCaseError::NotFound("tv series")
            })?;

        Ok(series.into())
    }

    pub async fn create(
        &self,
        actor_id: Option<i64>,
        model: CreateTvSeriesModel,
    ) -> UseCaseResult<i64> {
        info!(title = %model.title, "tv_series: create requested");

        validate_title(&model.title)?;
        validate_rating(model.rating)?;
        validate_year(model.year)?;
        validate_duration(model.duration_minutes)?;
        validate_count("season count", model.season_count)?;
        validate_count("episode count", model.episode_count)?;
        let status = parse_status(&model.status)?;

        let now = Utc::now();
        let insert_tv_series_entity = InsertTvSeriesEntity {
            title: model.title,
            description: model.description,
            year: model.year,
            rating: model.rating,
            genre: model.genre,
            duration_minutes: model.duration_minutes,
            country: model.country,
            director: model.director,
            poster_url: model.poster_url,
            backdrop_url: model.backdrop_url,
            video_url: model.video_url,
            actor_names: model.actor_names,
            is_featured: model.is_featured,
            is_hidden: model.is_hidden,
            is_banner: model.is_banner,
            season_count: model.season_count,
            episode_count: model.episode_count,
            creator_name: model.creator_name,
            status: status.to_string(),
            first_aired: model.first_aired,
            created_at: now,
            updated_at: now,
            created_by: actor_id,
        };

        let series_id = self
            .tv_series_repository
            .create(insert_tv_series_entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "tv_series: failed to create series");
                UseCaseError::Internal(err)
            })?;

        info!(series_id, "tv_series: series created");
        Ok(series_id)
    }

    pub async fn update(
        &self,
        actor_id: Option<i64>,
        series_id: i64,
        model: EditTvSeriesModel,
    ) -> UseCaseResult<()> {
        info!(series_id, "tv_series: update requested");

        self.require_series(series_id).await?;

        if let Some(title) = model.title.as_deref() {
            validate_title(title)?;
        }
        if let Some(rating) = model.rating {
            validate_rating(rating)?;
        }
        if let Some(year) = model.year {
            validate_year(year)?;
        }
        if let Some(duration_minutes) = model.duration_minutes {
            validate_duration(duration_minutes)?;
        }
        if let Some(season_count) = model.season_count {
            validate_count("season count", season_count)?;
        }
        if let Some(episode_count) = model.episode_count {
            validate_count("episode count", episode_count)?;
        }
        let status = match model.status.as_deref() {
            Some(raw) => Some(parse_status(raw)?.to_string()),
            None => None,
        };

        let edit_tv_series_entity = EditTvSeriesEntity {
            title: model.title,
            description: model.description,
            year: model.year,
            rating: model.rating,
            genre: model.genre,
            duration_minutes: model.duration_minutes,
            country: model.country,
            director: model.director,
            poster_url: model.poster_url,
            backdrop_url: model.backdrop_url,
            video_url: model.video_url,
            actor_names: model.actor_names,
            is_featured: model.is_featured,
            is_hidden: model.is_hidden,
            is_banner: model.is_banner,
            season_count: model.season_count,
            episode_count: model.episode_count,
            creator_name: model.creator_name,
            status,
            first_aired: model.first_aired,
            updated_at: Utc::now(),
            updated_by: actor_id,
        };

        self.tv_series_repository
            .update(series_id, edit_tv_series_entity)
            .await
            .map_err(|err| {
                error!(series_id, db_error = ?err, "tv_series: failed to update series");
                UseCaseError::Internal(err)
            })?;

        info!(series_id, "tv_series: series updated");
        Ok(())
    }

    pub async fn delete(&self, actor_id: Option<i64>, series_id: i64) -> UseCaseResult<()> {
        info!(series_id, "tv_series: delete requested");

        self.require_series(series_id).await?;

        self.tv_series_repository
            .soft_delete(series_id, actor_id)
            .await
            .map_err(|err| {
                error!(series_id, db_error = ?err, "tv_series: failed to soft-delete series");
                UseCaseError::Internal(err)
            })?;

        info!(series_id, "tv_series: series soft-deleted");
        Ok(())
    }

    pub async fn list_episodes(&self, series_id: i64) -> UseCaseResult<Vec<EpisodeDto>> {
        self.require_series(series_id).await?;

        let episodes = self
            .tv_series_repository
            .list_episodes(series_id)
            .await
            .map_err(|err| {
                error!(series_id, db_error = ?err, "tv_series: failed to list episodes");
                UseCaseError::Internal(err)
            })?;

        Ok(episodes.into_iter().map(EpisodeDto::from).collect())
    }

    pub async fn add_episode(
        &self,
        actor_id: Option<i64>,
        series_id: i64,
        model: CreateEpisodeModel,
    ) -> UseCaseResult<i64> {
        info!(
            series_id,
            season = model.season_number,
            episode = model.episode_number,
            "tv_series: add episode requested"
        );

        self.require_series(series_id).await?;

        validate_title(&model.title)?;
        validate_numbering("season number", model.season_number)?;
        validate_numbering("episode number", model.episode_number)?;

        let now = Utc::now();
        let insert_episode_entity = InsertEpisodeEntity {
            series_id,
            season_number: model.season_number,
            episode_number: model.episode_number,
            title: model.title,
            description: model.description,
            duration_minutes: model.duration_minutes,
            video_url: model.video_url,
            air_date: model.air_date,
            created_at: now,
            updated_at: now,
            created_by: actor_id,
        };

        let episode_id = self
            .tv_series_repository
            .create_episode(insert_episode_entity)
            .await
            .map_err(|err| {
                error!(series_id, db_error = ?err, "tv_series: failed to create episode");
                UseCaseError::Internal(err)
            })?;

        info!(series_id, episode_id, "tv_series: episode created");
        Ok(episode_id)
    }

    pub async fn update_episode(
        &self,
        actor_id: Option<i64>,
        episode_id: i64,
        model: EditEpisodeModel,
    ) -> UseCaseResult<()> {
        info!(episode_id, "tv_series: update episode requested");

        self.tv_series_repository
            .find_episode_by_id(episode_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(episode_id, status = 404_u16, "tv_series: episode not found");
                UseCaseError::NotFound("episode")
            })?;

        if let Some(title) = model.title.as_deref() {
            validate_title(title)?;
        }
        if let Some(season_number) = model.season_number {
            validate_numbering("season number", season_number)?;
        }
        if let Some(episode_number) = model.episode_number {
            validate_numbering("episode number", episode_number)?;
        }

        let edit_episode_entity = EditEpisodeEntity {
            season_number: model.season_number,
            episode_number: model.episode_number,
            title: model.title,
            description: model.description,
            duration_minutes: model.duration_minutes,
            video_url: model.video_url,
            air_date: model.air_date,
            updated_at: Utc::now(),
            updated_by: actor_id,
        };

        self.tv_series_repository
            .update_episode(episode_id, edit_episode_entity)
            .await
            .map_err(|err| {
                error!(episode_id, db_error = ?err, "tv_series: failed to update episode");
                UseCaseError::Internal(err)
            })?;

        Ok(())
    }

    pub async fn delete_episode(
        &self,
        actor_id: Option<i64>,
        episode_id: i64,
    ) -> UseCaseResult<()> {
        info!(episode_id, "tv_series: delete episode requested");

        self.tv_series_repository
            .find_episode_by_id(episode_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(episode_id, status = 404_u16, "tv_series: episode not found");
                UseCaseError::NotFound("episode")
            })?;

        self.tv_series_repository
            .soft_delete_episode(episode_id, actor_id)
            .await
            .map_err(|err| {
                error!(episode_id, db_error = ?err, "tv_series: failed to soft-delete episode");
                UseCaseError::Internal(err)
            })?;

        Ok(())
    }

    async fn require_series(&self, series_id: i64) -> UseCaseResult<()> {
        self.tv_series_repository
            .find_by_id(series_id)
            .await
            .map_err(|err| {
                error!(series_id, db_error = ?err, "tv_series: failed to load series");
                UseCaseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(series_id, status = 404_u16, "tv_series: series not found");
                UseCaseError::NotFound("tv series")
            })?;

        Ok(())
    }
}

fn validate_title(title: &str) -> UseCaseResult<()> {
    if title.trim().is_empty() {
        warn!(status = 400_u16, "tv_series: empty title rejected");
        return Err(UseCaseError::bad_request("title must not be empty"));
    }
    Ok(())
}

fn validate_rating(rating: f64) -> UseCaseResult<()> {
    if !(0.0..=10.0).contains(&rating) {
        warn!(rating, status = 400_u16, "tv_series: rating out of range");
        return Err(UseCaseError::bad_request(
            "rating must be between 0 and 10",
        ));
    }
    Ok(())
}

fn validate_year(year: i32) -> UseCaseResult<()> {
    let max_year = Utc::now().year() + 5;
    if year < 1900 || year > max_year {
        warn!(year, status = 400_u16, "tv_series: year out of range");
        return Err(UseCaseError::bad_request(format!(
            "year must be between 1900 and {}",
            max_year
        )));
    }
    Ok(())
}

fn validate_duration(duration_minutes: i32) -> UseCaseResult<()> {
    if duration_minutes <= 0 {
        warn!(duration_minutes, status = 400_u16, "tv_series: invalid duration");
        return Err(UseCaseError::bad_request("duration must be positive"));
    }
    Ok(())
}

fn validate_count(label: &'static str, count: i32) -> UseCaseResult<()> {
    if count < 0 {
        warn!(label, count, status = 400_u16, "tv_series: negative count rejected");
        return Err(UseCaseError::bad_request(format!(
            "{} must not be negative",
            label
        )));
    }
    Ok(())
}

fn validate_numbering(label: &'static str, number: i32) -> UseCaseResult<()> {
    if number < 1 {
        warn!(label, number, status = 400_u16, "tv_series: invalid episode numbering");
        return Err(UseCaseError::bad_request(format!("{} starts at 1", label)));
    }
    Ok(())
}

fn parse_status(raw: &str) -> UseCaseResult<SeriesStatus> {
    SeriesStatus::from_str(raw).ok_or_else(|| {
        warn!(status_value = raw, status = 400_u16, "tv_series: unknown status");
        UseCaseError::bad_request(format!("unknown series status: {}", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::episodes::EpisodeEntity;
    use crate::domain::entities::tv_series::TvSeriesEntity;
    use crate::domain::repositories::tv_series::MockTvSeriesRepository;
    use axum::http::StatusCode;

    fn sample_series(id: i64) -> TvSeriesEntity {
        let now = Utc::now();
        TvSeriesEntity {
            id,
            title: "The Wire".to_string(),
            description: "Baltimore through many lenses.".to_string(),
            year: 2002,
            rating: 9.3,
            genre: "Crime".to_string(),
            duration_minutes: 60,
            country: "USA".to_string(),
            director: "".to_string(),
            poster_url: None,
            backdrop_url: None,
            video_url: None,
            actor_names: vec![],
            is_featured: true,
            is_hidden: false,
            is_banner: false,
            season_count: 5,
            episode_count: 60,
            creator_name: "David Simon".to_string(),
            status: "completed".to_string(),
            first_aired: None,
            created_at: now,
            updated_at: now,
            created_by: None,
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
        }
    }

    fn sample_episode(id: i64) -> EpisodeEntity {
        let now = Utc::now();
        EpisodeEntity {
            id,
            series_id: 1,
            season_number: 1,
            episode_number: 1,
            title: "The Target".to_string(),
            description: "".to_string(),
            duration_minutes: 62,
            video_url: None,
            air_date: None,
            created_at: now,
            updated_at: now,
            created_by: None,
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
        }
    }

    fn sample_create_model() -> CreateTvSeriesModel {
        CreateTvSeriesModel {
            title: "The Wire".to_string(),
            description: "Baltimore through many lenses.".to_string(),
            year: 2002,
            rating: 9.3,
            genre: "Crime".to_string(),
            duration_minutes: 60,
            country: "USA".to_string(),
            director: "".to_string(),
            poster_url: None,
            backdrop_url: None,
            video_url: None,
            actor_names: vec![],
            is_featured: true,
            is_hidden: false,
            is_banner: false,
            season_count: 5,
            episode_count: 60,
            creator_name: "David Simon".to_string(),
            status: "completed".to_string(),
            first_aired: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_status() {
        let usecase = TvSeriesUseCase::new(Arc::new(MockTvSeriesRepository::new()));

        let mut model = sample_create_model();
        model.status = "paused".to_string();

        let err = usecase.create(None, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_negative_counts() {
        let usecase = TvSeriesUseCase::new(Arc::new(MockTvSeriesRepository::new()));

        let mut model = sample_create_model();
        model.season_count = -1;

        let err = usecase.create(None, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_nonpositive_duration() {
        let usecase = TvSeriesUseCase::new(Arc::new(MockTvSeriesRepository::new()));

        let mut model = sample_create_model();
        model.duration_minutes = -30;

        let err = usecase.create(None, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_rejects_nonpositive_duration() {
        let mut repo = MockTvSeriesRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_series(id))) }));

        let usecase = TvSeriesUseCase::new(Arc::new(repo));
        let model = EditTvSeriesModel {
            duration_minutes: Some(0),
            ..Default::default()
        };

        let err = usecase.update(None, 1, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_rejects_negative_count_without_other_field() {
        let mut repo = MockTvSeriesRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_series(id))) }));

        let usecase = TvSeriesUseCase::new(Arc::new(repo));
        let model = EditTvSeriesModel {
            season_count: Some(-1),
            ..Default::default()
        };

        let err = usecase.update(None, 1, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_episode_to_missing_series_is_not_found() {
        let mut repo = MockTvSeriesRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = TvSeriesUseCase::new(Arc::new(repo));
        let model = CreateEpisodeModel {
            season_number: 1,
            episode_number: 1,
            title: "The Target".to_string(),
            description: "".to_string(),
            duration_minutes: 62,
            video_url: None,
            air_date: None,
        };

        let err = usecase.add_episode(None, 99, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn add_episode_rejects_zero_numbering() {
        let mut repo = MockTvSeriesRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_series(id))) }));

        let usecase = TvSeriesUseCase::new(Arc::new(repo));
        let model = CreateEpisodeModel {
            season_number: 0,
            episode_number: 1,
            title: "The Target".to_string(),
            description: "".to_string(),
            duration_minutes: 62,
            video_url: None,
            air_date: None,
        };

        let err = usecase.add_episode(None, 1, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_episode_rejects_zero_season_without_episode_number() {
        let mut repo = MockTvSeriesRepository::new();
        repo.expect_find_episode_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_episode(id))) }));

        let usecase = TvSeriesUseCase::new(Arc::new(repo));
        let model = EditEpisodeModel {
            season_number: Some(0),
            ..Default::default()
        };

        let err = usecase.update_episode(None, 10, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_episode_succeeds() {
        let mut repo = MockTvSeriesRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_series(id))) }));
        repo.expect_create_episode()
            .withf(|entity| entity.series_id == 1 && entity.created_at == entity.updated_at)
            .returning(|_| Box::pin(async { Ok(10) }));

        let usecase = TvSeriesUseCase::new(Arc::new(repo));
        let model = CreateEpisodeModel {
            season_number: 1,
            episode_number: 1,
            title: "The Target".to_string(),
            description: "".to_string(),
            duration_minutes: 62,
            video_url: None,
            air_date: None,
        };

        let episode_id = usecase.add_episode(None, 1, model).await.unwrap();
        assert_eq!(episode_id, 10);
    }
}
