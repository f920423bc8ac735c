//! Coupons Repository

use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::{to_db_amount, try_get_amount},
    domain::{
        accounts::records::AccountId,
        coupons::{
            data::NewCoupon,
            records::{
                AvailableCoupon, CouponGrantId, CouponGrantRecord, CouponId, CouponRecord,
                CouponStatus, CouponType,
            },
        },
        courses::records::CourseId,
    },
};

const CREATE_COUPON_SQL: &str = include_str!("sql/create_coupon.sql");
const CREATE_COUPON_RECORD_SQL: &str = include_str!("sql/create_coupon_record.sql");
const LIST_AVAILABLE_COUPONS_SQL: &str = include_str!("sql/list_available_coupons.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgCouponsRepository {
    pool: PgPool,
}

impl PgCouponsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_coupon(
        &self,
        coupon: NewCoupon,
    ) -> Result<CouponRecord, sqlx::Error> {
        query_as::<Postgres, CouponRecord>(CREATE_COUPON_SQL)
            .bind(coupon.name)
            .bind(coupon.coupon_type.as_i16())
            .bind(to_db_amount(coupon.money_equivalent_value, "money_equivalent_value")?)
            .bind(coupon.off_percent.map(i16::from))
            .bind(to_db_amount(coupon.minimum_consume, "minimum_consume")?)
            .bind(SqlxDate::from(coupon.valid_begin_date))
            .bind(SqlxDate::from(coupon.valid_end_date))
            .bind(coupon.course_id.map(CourseId::into_i64))
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn create_coupon_grant(
        &self,
        account: AccountId,
        coupon: CouponId,
    ) -> Result<CouponGrantRecord, sqlx::Error> {
        query_as::<Postgres, CouponGrantRecord>(CREATE_COUPON_RECORD_SQL)
            .bind(coupon.into_i64())
            .bind(account.into_i64())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn list_available_coupons(
        &self,
        account: AccountId,
        today: Date,
    ) -> Result<Vec<AvailableCoupon>, sqlx::Error> {
        query_as::<Postgres, AvailableCoupon>(LIST_AVAILABLE_COUPONS_SQL)
            .bind(account.into_i64())
            .bind(SqlxDate::from(today))
            .fetch_all(&self.pool)
            .await
    }
}

fn decode_error(column: &str, message: String) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: message.into(),
    }
}

impl<'r> FromRow<'r, PgRow> for CouponRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let coupon_type: i16 = row.try_get("coupon_type")?;

        let coupon_type = CouponType::try_from(coupon_type)
            .map_err(|value| decode_error("coupon_type", format!("unknown coupon type {value}")))?;

        let off_percent = row
            .try_get::<Option<i16>, _>("off_percent")?
            .map(u8::try_from)
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "off_percent".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: CouponId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            coupon_type,
            money_equivalent_value: try_get_amount(row, "money_equivalent_value")?,
            off_percent,
            minimum_consume: try_get_amount(row, "minimum_consume")?,
            valid_begin_date: row.try_get::<SqlxDate, _>("valid_begin_date")?.to_jiff(),
            valid_end_date: row.try_get::<SqlxDate, _>("valid_end_date")?.to_jiff(),
            course_id: row
                .try_get::<Option<i64>, _>("course_id")?
                .map(CourseId::from_i64),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AvailableCoupon {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            grant_id: CouponGrantId::from_i64(row.try_get("grant_id")?),
            coupon: CouponRecord::from_row(row)?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CouponGrantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: i16 = row.try_get("status")?;

        let status = CouponStatus::try_from(status)
            .map_err(|value| decode_error("status", format!("unknown coupon status {value}")))?;

        Ok(Self {
            id: CouponGrantId::from_i64(row.try_get("id")?),
            coupon_id: CouponId::from_i64(row.try_get("coupon_id")?),
            account_id: AccountId::from_i64(row.try_get("account_id")?),
            status,
            received_at: row.try_get::<SqlxTimestamp, _>("received_at")?.to_jiff(),
            used_at: row
                .try_get::<Option<SqlxTimestamp>, _>("used_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
