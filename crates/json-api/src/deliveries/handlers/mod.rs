//! Delivery Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod last_update;
pub(crate) mod report;
pub(crate) mod status;
