//! Filter Engine
//!
//! Per-column equality filters. Selections are always applied to the full record set,
//! so removing a filter restores exactly what was there before.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::{deliveries::DeliveryRecord, fields::DeliveryField};

/// Selected value per field. Fields without a selection are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelections {
    selections: FxHashMap<DeliveryField, String>,
}

impl FilterSelections {
    /// No constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a value for a field. An empty value clears the field.
    pub fn set(&mut self, field: DeliveryField, value: impl Into<String>) {
        let value = value.into();

        if value.is_empty() {
            self.selections.remove(&field);
        } else {
            self.selections.insert(field, value);
        }
    }

    /// Builder form of [`FilterSelections::set`].
    #[must_use]
    pub fn with(mut self, field: DeliveryField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Clear a single field.
    pub fn clear(&mut self, field: DeliveryField) {
        self.selections.remove(&field);
    }

    /// Clear every field.
    pub fn clear_all(&mut self) {
        self.selections.clear();
    }

    /// Selected value for a field.
    #[must_use]
    pub fn get(&self, field: DeliveryField) -> Option<&str> {
        self.selections
            .get(&field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Whether no field is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.values().all(String::is_empty)
    }

    /// Constrained fields and their values, in column order.
    pub fn iter(&self) -> impl Iterator<Item = (DeliveryField, &str)> {
        DeliveryField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// Whether a record satisfies every selection, ignoring case.
    #[must_use]
    pub fn matches(&self, record: &DeliveryRecord) -> bool {
        self.iter()
            .all(|(field, value)| record.field_text(field).to_lowercase() == value.to_lowercase())
    }
}

impl<S: Into<String>> FromIterator<(DeliveryField, S)> for FilterSelections {
    fn from_iter<I: IntoIterator<Item = (DeliveryField, S)>>(iter: I) -> Self {
        let mut selections = Self::new();

        for (field, value) in iter {
            selections.set(field, value);
        }

        selections
    }
}

/// Distinct string values per field, used to populate selection controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistinctValues {
    values: FxHashMap<DeliveryField, BTreeSet<String>>,
}

impl DistinctValues {
    /// Values for one field in ascending lexicographic order.
    pub fn get(&self, field: DeliveryField) -> impl Iterator<Item = &str> {
        self.values
            .get(&field)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Number of distinct values for one field.
    #[must_use]
    pub fn count(&self, field: DeliveryField) -> usize {
        self.values.get(&field).map_or(0, BTreeSet::len)
    }

    /// Every field with its values, in column order.
    pub fn iter(&self) -> impl Iterator<Item = (DeliveryField, Vec<&str>)> {
        DeliveryField::ALL
            .into_iter()
            .map(|field| (field, self.get(field).collect()))
    }
}

/// Collect the distinct string values of every field across `records`.
#[must_use]
pub fn distinct_values(records: &[DeliveryRecord]) -> DistinctValues {
    let mut values: FxHashMap<DeliveryField, BTreeSet<String>> = DeliveryField::ALL
        .into_iter()
        .map(|field| (field, BTreeSet::new()))
        .collect();

    for record in records {
        for (field, set) in &mut values {
            set.insert(record.field_text(*field));
        }
    }

    DistinctValues { values }
}

/// Keep the records matching every selection, in their original order.
#[must_use]
pub fn apply_filters(
    records: &[DeliveryRecord],
    selections: &FilterSelections,
) -> Vec<DeliveryRecord> {
    if selections.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| selections.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::deliveries::{DeliveryStatus, DeliveryUuid};

    use super::*;

    fn record(invoice: &str, destination: &str, status: DeliveryStatus) -> DeliveryRecord {
        DeliveryRecord {
            uuid: DeliveryUuid::new(),
            client: "Acme".to_string(),
            invoice: invoice.to_string(),
            destination: destination.to_string(),
            weight: 12.0,
            volume: 1.5,
            status,
            observation: String::new(),
            dock_arrival_time: "2026-03-01T08:00:00Z".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn records() -> Vec<DeliveryRecord> {
        vec![
            record("NF-1", "Recife", DeliveryStatus::AtDock),
            record("NF-2", "Natal", DeliveryStatus::InTransit),
            record("NF-3", "Recife", DeliveryStatus::InTransit),
        ]
    }

    fn invoices(records: &[DeliveryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.invoice.as_str()).collect()
    }

    #[test]
    fn empty_selection_returns_input_unchanged() {
        let records = records();

        assert_eq!(apply_filters(&records, &FilterSelections::new()), records);
    }

    #[test]
    fn matches_ignoring_case() {
        let records = records();
        let selections = FilterSelections::new().with(DeliveryField::Destination, "recife");

        let filtered = apply_filters(&records, &selections);

        assert_eq!(invoices(&filtered), ["NF-1", "NF-3"]);
    }

    #[test]
    fn selections_combine_with_and() {
        let records = records();
        let selections = FilterSelections::new()
            .with(DeliveryField::Destination, "Recife")
            .with(DeliveryField::Status, "intransit");

        let filtered = apply_filters(&records, &selections);

        assert_eq!(invoices(&filtered), ["NF-3"]);
    }

    #[test]
    fn numeric_fields_match_their_text_form() {
        let records = records();
        let selections = FilterSelections::new().with(DeliveryField::Volume, "1.5");

        assert_eq!(apply_filters(&records, &selections).len(), 3);
    }

    #[test]
    fn empty_values_do_not_constrain() {
        let records = records();
        let selections: FilterSelections =
            [(DeliveryField::Client, ""), (DeliveryField::Invoice, "")]
                .into_iter()
                .collect();

        assert!(selections.is_empty());
        assert_eq!(apply_filters(&records, &selections), records);
    }

    #[test]
    fn clearing_a_filter_restores_the_full_set() {
        let records = records();
        let mut selections = FilterSelections::new().with(DeliveryField::Destination, "Natal");

        assert_eq!(apply_filters(&records, &selections).len(), 1);

        selections.clear(DeliveryField::Destination);

        assert_eq!(apply_filters(&records, &selections), records);
    }

    #[test]
    fn filter_order_does_not_matter() {
        let records = records();

        let a = FilterSelections::new()
            .with(DeliveryField::Status, "InTransit")
            .with(DeliveryField::Destination, "Recife");
        let b = FilterSelections::new()
            .with(DeliveryField::Destination, "Recife")
            .with(DeliveryField::Status, "InTransit");

        assert_eq!(apply_filters(&records, &a), apply_filters(&records, &b));
    }

    #[test]
    fn distinct_values_are_sorted_and_deduplicated() {
        let values = distinct_values(&records());

        assert_eq!(
            values.get(DeliveryField::Destination).collect::<Vec<_>>(),
            ["Natal", "Recife"]
        );
        assert_eq!(
            values.get(DeliveryField::Status).collect::<Vec<_>>(),
            ["AtDock", "InTransit"]
        );
        assert_eq!(values.count(DeliveryField::Weight), 1);
    }

    #[test]
    fn distinct_values_cover_every_field() {
        let values = distinct_values(&records());

        assert_eq!(values.iter().count(), DeliveryField::ALL.len());
        assert!(values.iter().all(|(_, list)| !list.is_empty()));
    }
}
