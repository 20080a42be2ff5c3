//! Delivery store and application services for Dockside.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
