//! Shopping carts held in the key-value cache

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
