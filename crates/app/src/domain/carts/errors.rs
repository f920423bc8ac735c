//! Carts service errors.

use thiserror::Error;

use crate::{cache::CacheError, domain::courses::CoursesServiceError};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("course not found")]
    CourseNotFound,

    #[error("price policy not found for course")]
    PricePolicyNotFound,

    #[error("cart not found")]
    CartNotFound,

    #[error("course not in cart")]
    CourseNotInCart,

    #[error("cart was modified concurrently too many times")]
    Conflict,

    #[error("cache error")]
    Cache(#[from] CacheError),

    #[error("course catalog error")]
    Catalog(#[source] CoursesServiceError),

    #[error("stored cart could not be decoded")]
    Decode(#[from] serde_json::Error),
}

impl From<CoursesServiceError> for CartsServiceError {
    fn from(error: CoursesServiceError) -> Self {
        match error {
            CoursesServiceError::NotFound => Self::CourseNotFound,
            other => Self::Catalog(other),
        }
    }
}
