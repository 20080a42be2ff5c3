//! Deliveries

pub mod data;
pub mod errors;
mod repository;
pub mod service;

pub use dockside::deliveries::{DeliveryRecord, DeliveryStatus, DeliveryUuid};
pub use errors::DeliveriesServiceError;
pub use service::*;
