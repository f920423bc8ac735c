//! Courses Repository

use sqlx::{FromRow, PgPool, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{to_db_amount, try_get_amount},
    domain::courses::{
        data::NewPricePolicy,
        records::{CourseId, CourseRecord, PricePolicyId, PricePolicyRecord, ValidPeriod},
    },
};

const GET_COURSE_SQL: &str = include_str!("sql/get_course.sql");
const CREATE_COURSE_SQL: &str = include_str!("sql/create_course.sql");
const LIST_PRICE_POLICIES_SQL: &str = include_str!("sql/list_price_policies.sql");
const CREATE_PRICE_POLICY_SQL: &str = include_str!("sql/create_price_policy.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgCoursesRepository {
    pool: PgPool,
}

impl PgCoursesRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    pub(crate) async fn get_course(&self, course: CourseId) -> Result<CourseRecord, sqlx::Error> {
        query_as::<Postgres, CourseRecord>(GET_COURSE_SQL)
            .bind(course.into_i64())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn list_price_policies(
        &self,
        course: CourseId,
    ) -> Result<Vec<PricePolicyRecord>, sqlx::Error> {
        query_as::<Postgres, PricePolicyRecord>(LIST_PRICE_POLICIES_SQL)
            .bind(course.into_i64())
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn create_course(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        course_img: &str,
    ) -> Result<CourseRecord, sqlx::Error> {
        query_as::<Postgres, CourseRecord>(CREATE_COURSE_SQL)
            .bind(name)
            .bind(course_img)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_price_policy(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        course: CourseId,
        policy: NewPricePolicy,
    ) -> Result<PricePolicyRecord, sqlx::Error> {
        let valid_period =
            i32::try_from(policy.valid_period.days()).map_err(|e| sqlx::Error::ColumnDecode {
                index: "valid_period".to_string(),
                source: Box::new(e),
            })?;

        query_as::<Postgres, PricePolicyRecord>(CREATE_PRICE_POLICY_SQL)
            .bind(course.into_i64())
            .bind(valid_period)
            .bind(to_db_amount(policy.price, "price")?)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CourseRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CourseId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            course_img: row.try_get("course_img")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for PricePolicyRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let valid_period: i32 = row.try_get("valid_period")?;

        let valid_period = u32::try_from(valid_period).map_err(|e| sqlx::Error::ColumnDecode {
            index: "valid_period".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: PricePolicyId::from_i64(row.try_get("id")?),
            course_id: CourseId::from_i64(row.try_get("course_id")?),
            valid_period: ValidPeriod::from_days(valid_period),
            price: try_get_amount(row, "price")?,
        })
    }
}
