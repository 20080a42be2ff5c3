//! Last Update Marker
//!
//! A single row recording when deliveries were last inserted or deleted. Clients poll it
//! to notice that their copy is stale; it carries no ordering guarantee.

pub mod records;
pub(crate) mod repository;

pub use records::{ParseOperationError, UpdateMarker, UpdateOperation};
