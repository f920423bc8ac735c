//! Courses service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::domain::courses::{
    data::NewCourse,
    errors::CoursesServiceError,
    records::{CourseId, CourseRecord, PricePolicyRecord},
    repository::PgCoursesRepository,
};

#[derive(Debug, Clone)]
pub struct PgCoursesService {
    repository: PgCoursesRepository,
}

impl PgCoursesService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgCoursesRepository::new(pool),
        }
    }
}

#[async_trait]
impl CoursesService for PgCoursesService {
    async fn get_course(&self, course: CourseId) -> Result<CourseRecord, CoursesServiceError> {
        self.repository
            .get_course(course)
            .await
            .map_err(Into::into)
    }

    async fn list_price_policies(
        &self,
        course: CourseId,
    ) -> Result<Vec<PricePolicyRecord>, CoursesServiceError> {
        self.repository
            .list_price_policies(course)
            .await
            .map_err(Into::into)
    }

    async fn create_course(
        &self,
        course: NewCourse,
    ) -> Result<(CourseRecord, Vec<PricePolicyRecord>), CoursesServiceError> {
        let mut tx = self.repository.begin().await?;

        let created = self
            .repository
            .create_course(&mut tx, &course.name, &course.course_img)
            .await?;

        let mut policies = Vec::with_capacity(course.price_policies.len());

        for policy in course.price_policies {
            policies.push(
                self.repository
                    .create_price_policy(&mut tx, created.id, policy)
                    .await?,
            );
        }

        tx.commit().await?;

        info!(course_id = %created.id, policies = policies.len(), "created course");

        Ok((created, policies))
    }
}

#[automock]
#[async_trait]
pub trait CoursesService: Send + Sync {
    /// Retrieve a single course.
    async fn get_course(&self, course: CourseId) -> Result<CourseRecord, CoursesServiceError>;

    /// All price policies offered for a course.
    async fn list_price_policies(
        &self,
        course: CourseId,
    ) -> Result<Vec<PricePolicyRecord>, CoursesServiceError>;

    /// Create a course together with its price policies.
    async fn create_course(
        &self,
        course: NewCourse,
    ) -> Result<(CourseRecord, Vec<PricePolicyRecord>), CoursesServiceError>;
}
