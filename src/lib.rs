//! Dockside
//!
//! Dockside tracks deliveries through a loading dock: how long each one has been waiting,
//! which ones are overdue, and the sorted, filtered table staff work from.

pub mod board;
pub mod collation;
pub mod deliveries;
pub mod fields;
pub mod filter;
pub mod fixtures;
pub mod metrics;
pub mod prelude;
pub mod report;
pub mod sort;
pub mod uuids;
