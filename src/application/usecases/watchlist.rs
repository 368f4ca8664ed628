use std::sync::Arc;

use chrono::Utc;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{error, info, warn};

use crate::application::error::{UseCaseError, UseCaseResult};
use crate::domain::entities::watchlist_items::WatchlistItemEntity;
use crate::domain::repositories::movies::MovieRepository;
use crate::domain::repositories::users::UserRepository;
use crate::domain::repositories::watchlist::WatchlistRepository;
use crate::domain::value_objects::watchlist::WatchlistItemDto;

pub struct WatchlistUseCase<W, U, M>
where
    W: WatchlistRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
{
    watchlist_repository: Arc<W>,
    user_repository: Arc<U>,
    movie_repository: Arc<M>,
}

impl<W, U, M> WatchlistUseCase<W, U, M>
where
    W: WatchlistRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
{
    pub fn new(
        watchlist_repository: Arc<W>,
        user_repository: Arc<U>,
        movie_repository: Arc<M>,
    ) -> Self {
        Self {
            watchlist_repository,
            user_repository,
            movie_repository,
        }
    }

    pub async fn add(&self, user_id: i64, movie_id: i64) -> UseCaseResult<()> {
        info!(%user_id, movie_id, "watchlist: add requested");

        self.user_repository
            .find_by_id(user_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(%user_id, status = 404_u16, "watchlist: user not found");
                UseCaseError::NotFound("user")
            })?;

        self.movie_repository
            .find_by_id(movie_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(movie_id, status = 404_u16, "watchlist: movie not found");
                UseCaseError::NotFound("movie")
            })?;

        let already_listed = self
            .watchlist_repository
            .exists(user_id, movie_id)
            .await
            .map_err(UseCaseError::Internal)?;

        if already_listed {
            warn!(%user_id, movie_id, status = 400_u16, "watchlist: duplicate add");
            return Err(UseCaseError::bad_request("movie is already in watchlist"));
        }

        let watchlist_item_entity = WatchlistItemEntity {
            user_id,
            movie_id,
            added_at: Utc::now(),
        };

        // Two concurrent adds can both pass the exists check; the composite
        // primary key settles it, and the loser surfaces as a duplicate.
        self.watchlist_repository
            .add(watchlist_item_entity)
            .await
            .map_err(|err| {
                if let Some(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) =
                    err.downcast_ref::<DieselError>()
                {
                    warn!(%user_id, movie_id, status = 400_u16, "watchlist: duplicate add raced");
                    return UseCaseError::bad_request("movie is already in watchlist");
                }

                error!(%user_id, movie_id, db_error = ?err, "watchlist: failed to add item");
                UseCaseError::Internal(err)
            })?;

        info!(%user_id, movie_id, "watchlist: item added");
        Ok(())
    }

    pub async fn remove(&self, user_id: i64, movie_id: i64) -> UseCaseResult<()> {
        info!(%user_id, movie_id, "watchlist: remove requested");

        let listed = self
            .watchlist_repository
            .exists(user_id, movie_id)
            .await
            .map_err(UseCaseError::Internal)?;

        if !listed {
            warn!(%user_id, movie_id, status = 404_u16, "watchlist: item not found");
            return Err(UseCaseError::NotFound("watchlist item"));
        }

        self.watchlist_repository
            .remove(user_id, movie_id)
            .await
            .map_err(|err| {
                error!(%user_id, movie_id, db_error = ?err, "watchlist: failed to remove item");
                UseCaseError::Internal(err)
            })?;

        info!(%user_id, movie_id, "watchlist: item removed");
        Ok(())
    }

    pub async fn list(&self, user_id: i64) -> UseCaseResult<Vec<WatchlistItemDto>> {
        let items = self
            .watchlist_repository
            .list_for_user(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "watchlist: failed to list items");
                UseCaseError::Internal(err)
            })?;

        Ok(items.into_iter().map(WatchlistItemDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::movies::MovieEntity;
    use crate::domain::entities::users::UserEntity;
    use crate::domain::repositories::movies::MockMovieRepository;
    use crate::domain::repositories::users::MockUserRepository;
    use crate::domain::repositories::watchlist::MockWatchlistRepository;
    use axum::http::StatusCode;

    fn sample_user(id: i64) -> UserEntity {
        let now = Utc::now();
        UserEntity {
            id,
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: "user".to_string(),
            is_active: true,
            avatar_url: None,
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

    fn repos_with_user_and_movie() -> (MockUserRepository, MockMovieRepository) {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_user(id))) }));

        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_movie(id))) }));

        (user_repo, movie_repo)
    }

    #[tokio::test]
    async fn add_duplicate_is_bad_request() {
        let (user_repo, movie_repo) = repos_with_user_and_movie();

        let mut watchlist_repo = MockWatchlistRepository::new();
        watchlist_repo
            .expect_exists()
            .returning(|_, _| Box::pin(async { Ok(true) }));

        let usecase = WatchlistUseCase::new(
            Arc::new(watchlist_repo),
            Arc::new(user_repo),
            Arc::new(movie_repo),
        );

        let err = usecase.add(5, 1).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_raced_unique_violation_is_bad_request() {
        let (user_repo, movie_repo) = repos_with_user_and_movie();

        let mut watchlist_repo = MockWatchlistRepository::new();
        watchlist_repo
            .expect_exists()
            .returning(|_, _| Box::pin(async { Ok(false) }));
        watchlist_repo.expect_add().returning(|_| {
            Box::pin(async {
                Err(anyhow::Error::new(DieselError::DatabaseError(
                    DatabaseErrorKind::UniqueViolation,
                    Box::new("duplicate key value".to_string()),
                )))
            })
        });

        let usecase = WatchlistUseCase::new(
            Arc::new(watchlist_repo),
            Arc::new(user_repo),
            Arc::new(movie_repo),
        );

        let err = usecase.add(5, 1).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_missing_movie_is_not_found() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_user(id))) }));

        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = WatchlistUseCase::new(
            Arc::new(MockWatchlistRepository::new()),
            Arc::new(user_repo),
            Arc::new(movie_repo),
        );

        let err = usecase.add(5, 404).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn add_succeeds() {
        let (user_repo, movie_repo) = repos_with_user_and_movie();

        let mut watchlist_repo = MockWatchlistRepository::new();
        watchlist_repo
            .expect_exists()
            .returning(|_, _| Box::pin(async { Ok(false) }));
        watchlist_repo
            .expect_add()
            .withf(|item| item.user_id == 5 && item.movie_id == 1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let usecase = WatchlistUseCase::new(
            Arc::new(watchlist_repo),
            Arc::new(user_repo),
            Arc::new(movie_repo),
        );

        usecase.add(5, 1).await.unwrap();
    }

    #[tokio::test]
    async fn remove_missing_item_is_not_found() {
        let mut watchlist_repo = MockWatchlistRepository::new();
        watchlist_repo
            .expect_exists()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let usecase = WatchlistUseCase::new(
            Arc::new(watchlist_repo),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockMovieRepository::new()),
        );

        let err = usecase.remove(5, 1).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
