use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::{error, info, warn};

use crate::application::error::{UseCaseError, UseCaseResult};
use crate::domain::entities::movies::{EditMovieEntity, InsertMovieEntity};
use crate::domain::repositories::movies::MovieRepository;
use crate::domain::value_objects::movies::{
    CreateMovieModel, EditMovieModel, MovieDto, MovieSearchFilter,
};

pub struct MovieUseCase<M>
where
    M: MovieRepository + Send + Sync + 'static,
{
    movie_repository: Arc<M>,
}

impl<M> MovieUseCase<M>
where
    M: MovieRepository + Send + Sync + 'static,
{
    pub fn new(movie_repository: Arc<M>) -> Self {
        Self { movie_repository }
    }

    pub async fn list(&self) -> UseCaseResult<Vec<MovieDto>> {
        let movies = self.movie_repository.list(false).await.map_err(|err| {
            error!(db_error = ?err, "movies: failed to list movies");
            UseCaseError::Internal(err)
        })?;

        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    pub async fn get(&self, movie_id: i64) -> UseCaseResult<MovieDto> {
        let movie = self
            .movie_repository
            .find_by_id(movie_id)
            .await
            .map_err(|err| {
                error!(movie_id, db_error = ?err, "movies: failed to load movie");
                UseCaseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(movie_id, status = 404_u16, "movies: movie not found");
                UseCaseError::NotFound("movie")
            })?;

        Ok(movie.into())
    }

    pub async fn search(&self, filter: MovieSearchFilter) -> UseCaseResult<Vec<MovieDto>> {
        info!(q = ?filter.q, genre = ?filter.genre, "movies: search requested");

        let movies = self
            .movie_repository
            .search(filter.q, filter.genre)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "movies: search failed");
                UseCaseError::Internal(err)
            })?;

        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    pub async fn featured(&self) -> UseCaseResult<Vec<MovieDto>> {
        let movies = self.movie_repository.list_featured().await.map_err(|err| {
            error!(db_error = ?err, "movies: failed to list featured movies");
            UseCaseError::Internal(err)
        })?;

        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    pub async fn banner(&self) -> UseCaseResult<Vec<MovieDto>> {
        let movies = self.movie_repository.list_banner().await.map_err(|err| {
            error!(db_error = ?err, "movies: failed to list banner movies");
            UseCaseError::Internal(err)
        })?;

        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    pub async fn related(&self, movie_id: i64) -> UseCaseResult<Vec<MovieDto>> {
        let movie = self
            .movie_repository
            .find_by_id(movie_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(movie_id, status = 404_u16, "movies: related lookup on missing movie");
                UseCaseError::NotFound("movie")
            })?;

        let related = self
            .movie_repository
            .list_related(movie_id, movie.genre)
            .await
            .map_err(|err| {
                error!(movie_id, db_error = ?err, "movies: failed to list related movies");
                UseCaseError::Internal(err)
            })?;

        Ok(related.into_iter().map(MovieDto::from).collect())
    }

    /// Distinct genres of all visible movies, alphabetically ordered.
    pub async fn genres(&self) -> UseCaseResult<Vec<String>> {
        let genres = self.movie_repository.list_genres().await.map_err(|err| {
            error!(db_error = ?err, "movies: failed to load genres");
            UseCaseError::Internal(err)
        })?;

        let distinct: BTreeSet<String> = genres.into_iter().collect();
        Ok(distinct.into_iter().collect())
    }

    pub async fn create(
        &self,
        actor_id: Option<i64>,
        model: CreateMovieModel,
    ) -> UseCaseResult<i64> {
        info!(title = %model.title, "movies: create requested");

        validate_title(&model.title)?;
        validate_rating(model.rating)?;
        validate_year(model.year)?;
        validate_duration(model.duration_minutes)?;

        let now = Utc::now();
        let insert_movie_entity = InsertMovieEntity {
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
            release_date: model.release_date,
            created_at: now,
            updated_at: now,
            created_by: actor_id,
        };

        let movie_id = self
            .movie_repository
            .create(insert_movie_entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "movies: failed to create movie");
                UseCaseError::Internal(err)
            })?;

        info!(movie_id, "movies: movie created");
        Ok(movie_id)
    }

    pub async fn update(
        &self,
        actor_id: Option<i64>,
        movie_id: i64,
        model: EditMovieModel,
    ) -> UseCaseResult<()> {
        info!(movie_id, "movies: update requested");

        self.movie_repository
            .find_by_id(movie_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(movie_id, status = 404_u16, "movies: update on missing movie");
                UseCaseError::NotFound("movie")
            })?;

        if let Some(title) = model.title.as_deref() {
            validate_title(title)?;
        }
        if let Some(rating) = model.rating {
            validate_rating(rating)?;
        }
        if let Some(year) = model.year {
            validate_year(year)?;
        }
        if let Some(duration) = model.duration_minutes {
            validate_duration(duration)?;
        }

        // created_at is never touched on update.
        let edit_movie_entity = EditMovieEntity {
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
            release_date: model.release_date,
            updated_at: Utc::now(),
            updated_by: actor_id,
        };

        self.movie_repository
            .update(movie_id, edit_movie_entity)
            .await
            .map_err(|err| {
                error!(movie_id, db_error = ?err, "movies: failed to update movie");
                UseCaseError::Internal(err)
            })?;

        info!(movie_id, "movies: movie updated");
        Ok(())
    }

    pub async fn delete(&self, actor_id: Option<i64>, movie_id: i64) -> UseCaseResult<()> {
        info!(movie_id, "movies: delete requested");

        self.movie_repository
            .find_by_id(movie_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(movie_id, status = 404_u16, "movies: delete on missing movie");
                UseCaseError::NotFound("movie")
            })?;

        self.movie_repository
            .soft_delete(movie_id, actor_id)
            .await
            .map_err(|err| {
                error!(movie_id, db_error = ?err, "movies: failed to soft-delete movie");
                UseCaseError::Internal(err)
            })?;

        info!(movie_id, "movies: movie soft-deleted");
        Ok(())
    }
}

fn validate_title(title: &str) -> UseCaseResult<()> {
    if title.trim().is_empty() {
        warn!(status = 400_u16, "movies: empty title rejected");
        return Err(UseCaseError::bad_request("title must not be empty"));
    }
    Ok(())
}

fn validate_rating(rating: f64) -> UseCaseResult<()> {
    if !(0.0..=10.0).contains(&rating) {
        warn!(rating, status = 400_u16, "movies: rating out of range");
        return Err(UseCaseError::bad_request(
            "rating must be between 0 and 10",
        ));
    }
    Ok(())
}

fn validate_year(year: i32) -> UseCaseResult<()> {
    let max_year = Utc::now().year() + 5;
    if year < 1900 || year > max_year {
        warn!(year, status = 400_u16, "movies: year out of range");
        return Err(UseCaseError::bad_request(format!(
            "year must be between 1900 and {}",
            max_year
        )));
    }
    Ok(())
}

fn validate_duration(duration_minutes: i32) -> UseCaseResult<()> {
    if duration_minutes <= 0 {
        warn!(duration_minutes, status = 400_u16, "movies: invalid duration");
        return Err(UseCaseError::bad_request("duration must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::movies::MovieEntity;
    use crate::domain::repositories::movies::MockMovieRepository;
    use axum::http::StatusCode;

    fn sample_model() -> CreateMovieModel {
        CreateMovieModel {
            title: "The Conversation".to_string(),
            description: "A surveillance expert has a crisis of conscience.".to_string(),
            year: 1974,
            rating: 7.8,
            genre: "Drama".to_string(),
            duration_minutes: 113,
            country: "USA".to_string(),
            director: "Francis Ford Coppola".to_string(),
            poster_url: None,
            backdrop_url: None,
            video_url: None,
            actor_names: vec!["Gene Hackman".to_string()],
            is_featured: false,
            is_hidden: false,
            is_banner: false,
            release_date: None,
        }
    }

    fn sample_entity(id: i64) -> MovieEntity {
        let now = Utc::now();
        MovieEntity {
            id,
            title: "The Conversation".to_string(),
            description: "A surveillance expert has a crisis of conscience.".to_string(),
            year: 1974,
            rating: 7.8,
            genre: "Drama".to_string(),
            duration_minutes: 113,
            country: "USA".to_string(),
            director: "Francis Ford Coppola".to_string(),
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
    async fn create_stamps_creation_and_update_timestamps() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_create()
            .withf(|entity| entity.created_at == entity.updated_at)
            .returning(|_| Box::pin(async { Ok(1) }));

        let usecase = MovieUseCase::new(Arc::new(movie_repo));
        let movie_id = usecase.create(Some(7), sample_model()).await.unwrap();
        assert_eq!(movie_id, 1);
    }

    #[tokio::test]
    async fn create_rejects_rating_out_of_range() {
        let usecase = MovieUseCase::new(Arc::new(MockMovieRepository::new()));

        let mut model = sample_model();
        model.rating = 10.5;

        let err = usecase.create(None, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_year_out_of_range() {
        let usecase = MovieUseCase::new(Arc::new(MockMovieRepository::new()));

        let mut model = sample_model();
        model.year = 1899;
        let err = usecase.create(None, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let mut model = sample_model();
        model.year = Utc::now().year() + 6;
        let err = usecase.create(None, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_preserves_created_at() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_entity(id))) }));
        movie_repo
            .expect_update()
            .withf(|_, edit| edit.title.as_deref() == Some("Renamed"))
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let usecase = MovieUseCase::new(Arc::new(movie_repo));
        let model = EditMovieModel {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        usecase.update(Some(7), 1, model).await.unwrap();
    }

    #[tokio::test]
    async fn update_missing_movie_is_not_found() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = MovieUseCase::new(Arc::new(movie_repo));
        let err = usecase
            .update(None, 99, EditMovieModel::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_is_soft() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_entity(id))) }));
        movie_repo
            .expect_soft_delete()
            .withf(|movie_id, deleted_by| *movie_id == 1 && *deleted_by == Some(7))
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let usecase = MovieUseCase::new(Arc::new(movie_repo));
        usecase.delete(Some(7), 1).await.unwrap();
    }

    #[tokio::test]
    async fn genres_are_distinct_and_sorted() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo.expect_list_genres().returning(|| {
            Box::pin(async {
                Ok(vec![
                    "Drama".to_string(),
                    "Crime".to_string(),
                    "Drama".to_string(),
                ])
            })
        });

        let usecase = MovieUseCase::new(Arc::new(movie_repo));
        let genres = usecase.genres().await.unwrap();
        assert_eq!(genres, vec!["Crime".to_string(), "Drama".to_string()]);
    }
}
