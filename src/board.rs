//! Delivery Board
//!
//! The state behind a delivery table: the full record collection in display order, the
//! active sort and the column filters. The board is owned by whoever presents it and
//! only changes when told to; store calls happen elsewhere and their confirmed results
//! are applied with [`DeliveryBoard::insert`], [`DeliveryBoard::apply_update`] and
//! [`DeliveryBoard::remove`].

use jiff::Timestamp;

use crate::{
    deliveries::{DeliveryRecord, DeliveryUuid},
    fields::DeliveryField,
    filter::{DistinctValues, FilterSelections, apply_filters, distinct_values},
    metrics::{dock_days, is_overdue},
    report::DockReport,
    sort::{SortOrder, sort_by_status, sort_records},
};

/// A visible table row with its derived dock metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRow {
    /// The delivery
    pub record: DeliveryRecord,

    /// Days at the dock, `None` when in transit
    pub dock_days: Option<u64>,

    /// Whether the delivery reached the overdue threshold
    pub overdue: bool,
}

impl DeliveryRow {
    /// Derive the dock metrics for a record.
    #[must_use]
    pub fn new(record: DeliveryRecord, now: Timestamp, threshold_days: u64) -> Self {
        Self {
            dock_days: dock_days(&record, now),
            overdue: is_overdue(&record, now, threshold_days),
            record,
        }
    }
}

/// Delivery table state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryBoard {
    records: Vec<DeliveryRecord>,
    sort: SortOrder,
    filters: FilterSelections,
}

impl DeliveryBoard {
    /// Create a board over `records` in the order given.
    #[must_use]
    pub fn new(records: Vec<DeliveryRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Replace the collection after a full reload.
    ///
    /// Records take the order given, as with [`DeliveryBoard::new`]. The active sort
    /// order and filters are kept and apply to the new records.
    pub fn replace(&mut self, records: Vec<DeliveryRecord>) {
        self.records = records;
    }

    /// The full, unfiltered collection in display order.
    #[must_use]
    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    /// The active sort.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Sort by a column, flipping direction when it is already the active one.
    pub fn sort_by(&mut self, field: DeliveryField) {
        self.sort.toggle(field);
        self.records = sort_records(&self.records, self.sort.field, self.sort.direction);
    }

    /// Sort by an explicit field and direction.
    pub fn sort(&mut self, order: SortOrder) {
        self.sort = order;
        self.records = sort_records(&self.records, order.field, order.direction);
    }

    /// Move every delivery at the dock ahead of those in transit.
    pub fn group_by_status(&mut self) {
        self.records = sort_by_status(&self.records);
    }

    /// Active filters.
    #[must_use]
    pub fn filters(&self) -> &FilterSelections {
        &self.filters
    }

    /// Filter a column on a value. An empty value clears the column.
    pub fn set_filter(&mut self, field: DeliveryField, value: impl Into<String>) {
        self.filters.set(field, value);
    }

    /// Clear one column filter.
    pub fn clear_filter(&mut self, field: DeliveryField) {
        self.filters.clear(field);
    }

    /// Clear every filter.
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
    }

    /// Selectable values per column, taken from the unfiltered collection.
    #[must_use]
    pub fn distinct_values(&self) -> DistinctValues {
        distinct_values(&self.records)
    }

    /// Records passing the filters, in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<DeliveryRecord> {
        apply_filters(&self.records, &self.filters)
    }

    /// Visible rows with their dock metrics.
    #[must_use]
    pub fn rows(&self, now: Timestamp, threshold_days: u64) -> Vec<DeliveryRow> {
        self.visible()
            .into_iter()
            .map(|record| DeliveryRow::new(record, now, threshold_days))
            .collect()
    }

    /// Printable dock report of the visible rows.
    #[must_use]
    pub fn dock_report(&self, now: Timestamp, threshold_days: u64) -> DockReport {
        DockReport::new(&self.visible(), now, threshold_days)
    }

    /// Append a record the store has created.
    pub fn insert(&mut self, record: DeliveryRecord) {
        self.records.push(record);
    }

    /// Replace a record with the store's updated copy. Returns `false` if unknown.
    pub fn apply_update(&mut self, record: DeliveryRecord) -> bool {
        match self.records.iter_mut().find(|r| r.uuid == record.uuid) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    /// Drop a record the store has deleted. Returns `false` if unknown.
    pub fn remove(&mut self, uuid: DeliveryUuid) -> bool {
        let before = self.records.len();

        self.records.retain(|record| record.uuid != uuid);

        self.records.len() != before
    }
}
