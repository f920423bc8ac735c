//! Checkout endpoints

pub(crate) mod handlers;
