//! Dockside prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    board::{DeliveryBoard, DeliveryRow},
    deliveries::{DeliveryRecord, DeliveryStatus, DeliveryUuid, ParseStatusError},
    fields::{DeliveryField, FieldValue, ParseFieldError},
    filter::{DistinctValues, FilterSelections, apply_filters, distinct_values},
    fixtures::{DeliveryFixture, FixtureError},
    metrics::{DEFAULT_OVERDUE_THRESHOLD_DAYS, days_at_dock, dock_days, is_overdue},
    report::{DockReport, DockReportRow, ReportError},
    sort::{ParseDirectionError, SortDirection, SortOrder, sort_by_status, sort_records},
    uuids::TypedUuid,
};
