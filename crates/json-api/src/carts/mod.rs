//! Shopping cart endpoints

mod errors;
pub(crate) mod handlers;
