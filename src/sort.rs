//! Sort Engine
//!
//! Orders deliveries by a single field. Text fields use [`collation::compare`], numeric
//! fields compare numerically, and the sort is stable so repeated sorts on tied keys
//! keep the previous arrangement.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    collation,
    deliveries::DeliveryRecord,
    fields::{DeliveryField, FieldValue},
};

/// Errors returned when parsing a [`SortDirection`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort direction: {0}")]
pub struct ParseDirectionError(pub String);

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    #[serde(rename = "asc")]
    Ascending,

    /// Largest first
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Short text form (`asc` / `desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseDirectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ParseDirectionError(value.to_string())),
        }
    }
}

/// The active sort of a table: which field, which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// Field being sorted on
    pub field: DeliveryField,

    /// Direction of the sort
    pub direction: SortDirection,
}

impl SortOrder {
    /// Create a sort order.
    #[must_use]
    pub const fn new(field: DeliveryField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Apply a click on a column header: the active field flips direction, any other
    /// field becomes active in ascending order.
    pub fn toggle(&mut self, field: DeliveryField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::new(DeliveryField::Invoice, SortDirection::Ascending)
    }
}

/// Compare two records on one field, ascending.
///
/// Two text values compare with locale-aware ordering and two points in time
/// chronologically; anything else is coerced to numbers. Numbers that cannot be parsed
/// sort after every other number.
///
/// Dock arrival times that parse sort chronologically ahead of those that do not, which
/// fall back to text ordering among themselves.
#[must_use]
pub fn compare_field(a: &DeliveryRecord, b: &DeliveryRecord, field: DeliveryField) -> Ordering {
    if field == DeliveryField::DockArrivalTime {
        return compare_arrivals(a, b);
    }

    match (a.field_value(field), b.field_value(field)) {
        (FieldValue::Text(left), FieldValue::Text(right)) => collation::compare(&left, &right),
        (FieldValue::Time(left), FieldValue::Time(right)) => left.cmp(&right),
        (left, right) => compare_numbers(left.as_number(), right.as_number()),
    }
}

fn compare_arrivals(a: &DeliveryRecord, b: &DeliveryRecord) -> Ordering {
    match (a.dock_arrival(), b.dock_arrival()) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collation::compare(&a.dock_arrival_time, &b.dock_arrival_time),
    }
}

/// `NaN` of either sign ranks after every number, so the order stays total.
fn compare_numbers(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (false, false) => left.total_cmp(&right),
        (true, true) => Ordering::Equal,
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
    }
}

/// Return the records ordered by `field` in `direction`. Stable; the input is untouched.
#[must_use]
pub fn sort_records(
    records: &[DeliveryRecord],
    field: DeliveryField,
    direction: SortDirection,
) -> Vec<DeliveryRecord> {
    let mut sorted = records.to_vec();

    sorted.sort_by(|a, b| direction.apply(compare_field(a, b, field)));

    sorted
}

/// Return the records with everything at the dock first. Stable; the input is untouched.
#[must_use]
pub fn sort_by_status(records: &[DeliveryRecord]) -> Vec<DeliveryRecord> {
    let mut sorted = records.to_vec();

    sorted.sort_by_key(|record| !record.is_at_dock());

    sorted
}
