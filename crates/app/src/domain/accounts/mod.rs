//! Accounts and authentication tokens

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod token;

pub use errors::AccountsServiceError;
pub use service::*;
