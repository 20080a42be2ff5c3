//! Deliveries

mod errors;
mod handlers;
mod query;
mod responses;

pub(crate) use handlers::*;
