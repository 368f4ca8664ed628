use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::application::error::{UseCaseError, UseCaseResult};
use crate::domain::entities::reviews::InsertReviewEntity;
use crate::domain::repositories::movies::MovieRepository;
use crate::domain::repositories::reviews::ReviewRepository;
use crate::domain::repositories::tv_series::TvSeriesRepository;
use crate::domain::repositories::users::UserRepository;
use crate::domain::value_objects::enums::user_roles::UserRole;
use crate::domain::value_objects::reviews::{CreateReviewModel, ReviewDto, ReviewListDto};

pub struct ReviewUseCase<R, M, S, U>
where
    R: ReviewRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    review_repository: Arc<R>,
    movie_repository: Arc<M>,
    tv_series_repository: Arc<S>,
    user_repository: Arc<U>,
}

impl<R, M, S, U> ReviewUseCase<R, M, S, U>
where
    R: ReviewRepository + Send + Sync + 'static,
    M: MovieRepository + Send + Sync + 'static,
    S: TvSeriesRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(
        review_repository: Arc<R>,
        movie_repository: Arc<M>,
        tv_series_repository: Arc<S>,
        user_repository: Arc<U>,
    ) -> Self {
        Self {
            review_repository,
            movie_repository,
            tv_series_repository,
            user_repository,
        }
    }

    pub async fn add(&self, user_id: i64, model: CreateReviewModel) -> UseCaseResult<i64> {
        info!(%user_id, "reviews: add requested");

        // A review points at a movie or a series, never both, never neither.
        match (model.movie_id, model.series_id) {
            (Some(_), None) | (None, Some(_)) => {}
            _ => {
                warn!(%user_id, status = 400_u16, "reviews: invalid target combination");
                return Err(UseCaseError::bad_request(
                    "exactly one of movie_id or series_id must be set",
                ));
            }
        }

        if !(1..=10).contains(&model.rating) {
            warn!(rating = model.rating, status = 400_u16, "reviews: rating out of range");
            return Err(UseCaseError::bad_request(
                "rating must be between 1 and 10",
            ));
        }

        if model.comment.trim().is_empty() {
            warn!(%user_id, status = 400_u16, "reviews: empty comment rejected");
            return Err(UseCaseError::bad_request("comment must not be empty"));
        }

        if let Some(movie_id) = model.movie_id {
            self.movie_repository
                .find_by_id(movie_id)
                .await
                .map_err(UseCaseError::Internal)?
                .ok_or_else(|| {
                    warn!(movie_id, status = 404_u16, "reviews: movie not found");
                    UseCaseError::NotFound("movie")
                })?;
        }

        if let Some(series_id) = model.series_id {
            self.tv_series_repository
                .find_by_id(series_id)
                .await
                .map_err(UseCaseError::Internal)?
                .ok_or_else(|| {
                    warn!(series_id, status = 404_u16, "reviews: series not found");
                    UseCaseError::NotFound("tv series")
                })?;
        }

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(%user_id, status = 404_u16, "reviews: user not found");
                UseCaseError::NotFound("user")
            })?;

        let now = Utc::now();
        let insert_review_entity = InsertReviewEntity {
            movie_id: model.movie_id,
            series_id: model.series_id,
            user_id,
            user_name: user.name,
            rating: model.rating,
            comment: model.comment,
            created_at: now,
            updated_at: now,
            created_by: Some(user_id),
        };

        let review_id = self
            .review_repository
            .create(insert_review_entity)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "reviews: failed to create review");
                UseCaseError::Internal(err)
            })?;

        info!(review_id, "reviews: review created");
        Ok(review_id)
    }

    pub async fn list_for_movie(&self, movie_id: i64) -> UseCaseResult<ReviewListDto> {
        self.movie_repository
            .find_by_id(movie_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(movie_id, status = 404_u16, "reviews: movie not found");
                UseCaseError::NotFound("movie")
            })?;

        let reviews = self
            .review_repository
            .list_for_movie(movie_id)
            .await
            .map_err(|err| {
                error!(movie_id, db_error = ?err, "reviews: failed to list reviews");
                UseCaseError::Internal(err)
            })?;

        let average_rating = self
            .review_repository
            .average_rating_for_movie(movie_id)
            .await
            .map_err(UseCaseError::Internal)?;

        Ok(ReviewListDto {
            reviews: reviews.into_iter().map(ReviewDto::from).collect(),
            average_rating,
        })
    }

    pub async fn list_for_series(&self, series_id: i64) -> UseCaseResult<Vec<ReviewDto>> {
        self.tv_series_repository
            .find_by_id(series_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(series_id, status = 404_u16, "reviews: series not found");
                UseCaseError::NotFound("tv series")
            })?;

        let reviews = self
            .review_repository
            .list_for_series(series_id)
            .await
            .map_err(|err| {
                error!(series_id, db_error = ?err, "reviews: failed to list reviews");
                UseCaseError::Internal(err)
            })?;

        Ok(reviews.into_iter().map(ReviewDto::from).collect())
    }

    /// Authors may delete their own reviews; admins may delete any.
    pub async fn delete(
        &self,
        user_id: i64,
        role: UserRole,
        review_id: i64,
    ) -> UseCaseResult<()> {
        info!(review_id, %user_id, "reviews: delete requested");

        let review = self
            .review_repository
            .find_by_id(review_id)
            .await
            .map_err(UseCaseError::Internal)?
            .ok_or_else(|| {
                warn!(review_id, status = 404_u16, "reviews: review not found");
                UseCaseError::NotFound("review")
            })?;

        if review.user_id != user_id && role != UserRole::Admin {
            warn!(review_id, %user_id, status = 403_u16, "reviews: delete forbidden");
            return Err(UseCaseError::Forbidden);
        }

        self.review_repository
            .soft_delete(review_id, Some(user_id))
            .await
            .map_err(|err| {
                error!(review_id, db_error = ?err, "reviews: failed to soft-delete review");
                UseCaseError::Internal(err)
            })?;

        info!(review_id, "reviews: review soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::movies::MovieEntity;
    use crate::domain::entities::reviews::ReviewEntity;
    use crate::domain::entities::users::UserEntity;
    use crate::domain::repositories::movies::MockMovieRepository;
    use crate::domain::repositories::reviews::MockReviewRepository;
    use crate::domain::repositories::tv_series::MockTvSeriesRepository;
    use crate::domain::repositories::users::MockUserRepository;
    use axum::http::StatusCode;

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

    fn sample_review(id: i64, user_id: i64) -> ReviewEntity {
        let now = Utc::now();
        ReviewEntity {
            id,
            movie_id: Some(1),
            series_id: None,
            user_id,
            user_name: "Alex".to_string(),
            rating: 8,
            comment: "Tense from start to finish.".to_string(),
            created_at: now,
            updated_at: now,
            created_by: Some(user_id),
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
        }
    }

    fn usecase_with(
        review_repo: MockReviewRepository,
        movie_repo: MockMovieRepository,
        user_repo: MockUserRepository,
    ) -> ReviewUseCase<
        MockReviewRepository,
        MockMovieRepository,
        MockTvSeriesRepository,
        MockUserRepository,
    > {
        ReviewUseCase::new(
            Arc::new(review_repo),
            Arc::new(movie_repo),
            Arc::new(MockTvSeriesRepository::new()),
            Arc::new(user_repo),
        )
    }

    #[tokio::test]
    async fn add_rejects_both_targets() {
        let usecase = usecase_with(
            MockReviewRepository::new(),
            MockMovieRepository::new(),
            MockUserRepository::new(),
        );

        let model = CreateReviewModel {
            movie_id: Some(1),
            series_id: Some(2),
            rating: 7,
            comment: "both".to_string(),
        };

        let err = usecase.add(5, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_rejects_no_target() {
        let usecase = usecase_with(
            MockReviewRepository::new(),
            MockMovieRepository::new(),
            MockUserRepository::new(),
        );

        let model = CreateReviewModel {
            movie_id: None,
            series_id: None,
            rating: 7,
            comment: "neither".to_string(),
        };

        let err = usecase.add(5, model).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_rejects_rating_out_of_range() {
        let usecase = usecase_with(
            MockReviewRepository::new(),
            MockMovieRepository::new(),
            MockUserRepository::new(),
        );

        for rating in [0, 11] {
            let model = CreateReviewModel {
                movie_id: Some(1),
                series_id: None,
                rating,
                comment: "out of range".to_string(),
            };

            let err = usecase.add(5, model).await.unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn add_snapshots_reviewer_name() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_movie(id))) }));

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_user(id))) }));

        let mut review_repo = MockReviewRepository::new();
        review_repo
            .expect_create()
            .withf(|entity| entity.user_name == "Alex" && entity.user_id == 5)
            .returning(|_| Box::pin(async { Ok(33) }));

        let usecase = usecase_with(review_repo, movie_repo, user_repo);

        let model = CreateReviewModel {
            movie_id: Some(1),
            series_id: None,
            rating: 8,
            comment: "Tense from start to finish.".to_string(),
        };

        let review_id = usecase.add(5, model).await.unwrap();
        assert_eq!(review_id, 33);
    }

    #[tokio::test]
    async fn delete_by_other_user_is_forbidden() {
        let mut review_repo = MockReviewRepository::new();
        review_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_review(id, 5))) }));

        let usecase = usecase_with(
            review_repo,
            MockMovieRepository::new(),
            MockUserRepository::new(),
        );

        let err = usecase.delete(6, UserRole::User, 1).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn delete_by_admin_is_allowed() {
        let mut review_repo = MockReviewRepository::new();
        review_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_review(id, 5))) }));
        review_repo
            .expect_soft_delete()
            .withf(|review_id, deleted_by| *review_id == 1 && *deleted_by == Some(99))
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let usecase = usecase_with(
            review_repo,
            MockMovieRepository::new(),
            MockUserRepository::new(),
        );

        usecase.delete(99, UserRole::Admin, 1).await.unwrap();
    }

    #[tokio::test]
    async fn list_for_movie_includes_average() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_find_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(sample_movie(id))) }));

        let mut review_repo = MockReviewRepository::new();
        review_repo
            .expect_list_for_movie()
            .returning(|_| Box::pin(async { Ok(vec![sample_review(1, 5), sample_review(2, 6)]) }));
        review_repo
            .expect_average_rating_for_movie()
            .returning(|_| Box::pin(async { Ok(Some(8.0)) }));

        let usecase = usecase_with(review_repo, movie_repo, MockUserRepository::new());

        let listing = usecase.list_for_movie(1).await.unwrap();
        assert_eq!(listing.reviews.len(), 2);
        assert_eq!(listing.average_rating, Some(8.0));
    }
}
