//! Checkout service errors.

use thiserror::Error;

use crate::{
    cache::CacheError,
    domain::{
        carts::CartsServiceError, coupons::CouponsServiceError, courses::CoursesServiceError,
    },
};

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("course not found")]
    CourseNotFound,

    #[error("course not in cart")]
    CourseNotInCart,

    #[error("price policy not offered for the cart line")]
    KeyNotFound,

    #[error("no checkout summary stored")]
    SummaryNotFound,

    #[error("cache error")]
    Cache(#[from] CacheError),

    #[error("course catalog error")]
    Catalog(#[source] CoursesServiceError),

    #[error("cart error")]
    Cart(#[source] CartsServiceError),

    #[error("coupons error")]
    Coupons(#[from] CouponsServiceError),

    #[error("checkout summary could not be encoded or decoded")]
    Decode(#[from] serde_json::Error),
}

impl From<CoursesServiceError> for CheckoutServiceError {
    fn from(error: CoursesServiceError) -> Self {
        match error {
            CoursesServiceError::NotFound => Self::CourseNotFound,
            other => Self::Catalog(other),
        }
    }
}

impl From<CartsServiceError> for CheckoutServiceError {
    fn from(error: CartsServiceError) -> Self {
        match error {
            CartsServiceError::CartNotFound | CartsServiceError::CourseNotInCart => {
                Self::CourseNotInCart
            }
            other => Self::Cart(other),
        }
    }
}
