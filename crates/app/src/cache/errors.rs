//! Cache errors.

use redis::RedisError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache command failed")]
    Redis(#[from] RedisError),

    #[error("unexpected reply from cache: {0}")]
    UnexpectedReply(i64),
}
