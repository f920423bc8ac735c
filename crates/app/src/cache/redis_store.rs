//! Redis-backed cache store.

use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, Script, aio::MultiplexedConnection};
use tracing::debug;

use crate::cache::{CacheError, CacheStore};

/// Atomically replaces a hash field when it still holds the expected value.
///
/// `ARGV[2]` is `"1"` when a previous value is expected, `"0"` when the field
/// must be absent.
const COMPARE_AND_SWAP_SCRIPT: &str = r"
local current = redis.call('HGET', KEYS[1], ARGV[1])
local matches
if ARGV[2] == '1' then
  matches = current == ARGV[3]
else
  matches = current == false
end
if matches then
  redis.call('HSET', KEYS[1], ARGV[1], ARGV[4])
  return 1
end
return 0
";

/// Cache store speaking to Redis over a multiplexed connection.
#[derive(Clone)]
pub struct RedisCacheStore {
    connection: MultiplexedConnection,
    compare_and_swap: Arc<Script>,
}

impl RedisCacheStore {
    /// Connect to the Redis server at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the connection fails.
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client = Client::open(url)?;
        let connection = client.get_multiplexed_async_connection().await?;

        Ok(Self {
            connection,
            compare_and_swap: Arc::new(Script::new(COMPARE_AND_SWAP_SCRIPT)),
        })
    }
}

impl std::fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, CacheError> {
        let mut connection = self.connection.clone();

        let value: Option<String> = connection.hget(namespace, key).await?;

        Ok(value)
    }

    async fn set(&self, namespace: &str, key: &str, value: &str) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();

        connection
            .hset::<_, _, _, ()>(namespace, key, value)
            .await?;

        Ok(())
    }

    async fn compare_and_swap(
        &self,
        namespace: &str,
        key: &str,
        expected: Option<&str>,
        value: &str,
    ) -> Result<bool, CacheError> {
        let mut connection = self.connection.clone();

        let swapped: i64 = self
            .compare_and_swap
            .key(namespace)
            .arg(key)
            .arg(if expected.is_some() { "1" } else { "0" })
            .arg(expected.unwrap_or_default())
            .arg(value)
            .invoke_async(&mut connection)
            .await?;

        match swapped {
            1 => Ok(true),
            0 => {
                debug!(namespace, key, "compare-and-swap lost a race");

                Ok(false)
            }
            other => Err(CacheError::UnexpectedReply(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            accounts::records::AccountId,
            carts::{CacheCartsService, CartsService},
            courses::{
                MockCoursesService,
                records::{CourseId, CourseRecord, PricePolicyId, PricePolicyRecord, ValidPeriod},
            },
        },
        test::TestRedis,
    };

    use super::*;

    #[tokio::test]
    async fn swap_into_absent_field_writes() -> TestResult {
        let redis = TestRedis::new().await;

        let swapped = redis
            .store
            .compare_and_swap(&redis.namespace, "1", None, "first")
            .await?;

        assert!(swapped, "absent field should accept an expected-absent swap");
        assert_eq!(
            redis.store.get(&redis.namespace, "1").await?.as_deref(),
            Some("first")
        );

        Ok(())
    }

    #[tokio::test]
    async fn swap_expecting_absence_fails_once_written() -> TestResult {
        let redis = TestRedis::new().await;

        redis.store.set(&redis.namespace, "1", "taken").await?;

        let swapped = redis
            .store
            .compare_and_swap(&redis.namespace, "1", None, "mine")
            .await?;

        assert!(!swapped, "present field must not match an expected absence");
        assert_eq!(
            redis.store.get(&redis.namespace, "1").await?.as_deref(),
            Some("taken")
        );

        Ok(())
    }

    #[tokio::test]
    async fn swap_against_stale_value_leaves_field_alone() -> TestResult {
        let redis = TestRedis::new().await;

        redis.store.set(&redis.namespace, "1", "current").await?;

        let swapped = redis
            .store
            .compare_and_swap(&redis.namespace, "1", Some("stale"), "next")
            .await?;

        assert!(!swapped, "stale expectation should not write");
        assert_eq!(
            redis.store.get(&redis.namespace, "1").await?.as_deref(),
            Some("current")
        );

        Ok(())
    }

    #[tokio::test]
    async fn swap_against_current_value_replaces_it() -> TestResult {
        let redis = TestRedis::new().await;

        redis.store.set(&redis.namespace, "1", "current").await?;

        let swapped = redis
            .store
            .compare_and_swap(&redis.namespace, "1", Some("current"), "next")
            .await?;

        assert!(swapped, "matching expectation should write");
        assert_eq!(
            redis.store.get(&redis.namespace, "1").await?.as_deref(),
            Some("next")
        );

        Ok(())
    }

    #[tokio::test]
    async fn fields_are_scoped_to_their_namespace() -> TestResult {
        let first = TestRedis::new().await;
        let second = TestRedis::new().await;

        first.store.set(&first.namespace, "1", "cart").await?;

        assert_eq!(second.store.get(&second.namespace, "1").await?, None);

        Ok(())
    }

    /// Course 5 offers policy 1, course 6 offers policy 3.
    fn catalog() -> MockCoursesService {
        let mut courses = MockCoursesService::new();

        courses.expect_get_course().returning(|course| {
            Ok(CourseRecord {
                id: course,
                name: format!("Course {course}"),
                course_img: format!("img/{course}.png"),
            })
        });

        courses.expect_list_price_policies().returning(|course| {
            let policy = if course == CourseId::from_i64(5) { 1 } else { 3 };

            Ok(vec![PricePolicyRecord {
                id: PricePolicyId::from_i64(policy),
                course_id: course,
                valid_period: ValidPeriod::from_days(30),
                price: 99_00,
            }])
        });

        courses
    }

    #[tokio::test]
    async fn concurrent_cart_adds_both_land() -> TestResult {
        let redis = TestRedis::new().await;
        let account = AccountId::from_i64(1);

        let carts = Arc::new(CacheCartsService::new(
            Arc::new(redis.store.clone()),
            Arc::new(catalog()),
            redis.namespace.clone(),
        ));

        let first = tokio::spawn({
            let carts = carts.clone();
            async move {
                carts
                    .add_course(account, CourseId::from_i64(5), PricePolicyId::from_i64(1))
                    .await
            }
        });

        let second = tokio::spawn({
            let carts = carts.clone();
            async move {
                carts
                    .add_course(account, CourseId::from_i64(6), PricePolicyId::from_i64(3))
                    .await
            }
        });

        first.await??;
        second.await??;

        let cart = carts.get_cart(account).await?.ok_or("cart should exist")?;

        assert_eq!(cart.len(), 2);
        assert!(cart.contains_key(&CourseId::from_i64(5)), "course 5 lost");
        assert!(cart.contains_key(&CourseId::from_i64(6)), "course 6 lost");

        Ok(())
    }
}
