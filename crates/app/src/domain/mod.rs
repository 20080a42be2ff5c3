//! Dockside Domain Concerns

pub mod deliveries;
pub mod updates;
