//! Delivery Fields
//!
//! A closed set of selectors over [`DeliveryRecord`] attributes, used by the sort and
//! filter engines in place of string-keyed lookups.

use std::{
    borrow::Cow,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deliveries::DeliveryRecord;

/// Errors returned when parsing a [`DeliveryField`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown delivery field: {0}")]
pub struct ParseFieldError(pub String);

/// A sortable and filterable delivery attribute. The identifier is not one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryField {
    /// Client name
    Client,
    /// Invoice number
    Invoice,
    /// Destination
    Destination,
    /// Weight
    Weight,
    /// Volume
    Volume,
    /// Status
    Status,
    /// Observation
    Observation,
    /// Dock arrival time
    DockArrivalTime,
    /// Creation time
    CreatedAt,
}

impl DeliveryField {
    /// Every field, in table column order.
    pub const ALL: [Self; 9] = [
        Self::Client,
        Self::Invoice,
        Self::Destination,
        Self::Weight,
        Self::Volume,
        Self::Status,
        Self::Observation,
        Self::DockArrivalTime,
        Self::CreatedAt,
    ];

    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Invoice => "invoice",
            Self::Destination => "destination",
            Self::Weight => "weight",
            Self::Volume => "volume",
            Self::Status => "status",
            Self::Observation => "observation",
            Self::DockArrivalTime => "dockArrivalTime",
            Self::CreatedAt => "createdAt",
        }
    }

    const fn snake_case(self) -> &'static str {
        match self {
            Self::DockArrivalTime => "dock_arrival_time",
            Self::CreatedAt => "created_at",
            other => other.as_str(),
        }
    }
}

impl Display for DeliveryField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryField {
    type Err = ParseFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();

        Self::ALL
            .into_iter()
            .find(|field| {
                field.as_str().eq_ignore_ascii_case(trimmed)
                    || field.snake_case().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParseFieldError(value.to_string()))
    }
}

/// The value of a single field on a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Textual value, compared with locale-aware ordering.
    Text(Cow<'a, str>),

    /// Numeric quantity, compared numerically.
    Number(f64),

    /// Point in time, compared chronologically.
    Time(Timestamp),
}

impl FieldValue<'_> {
    /// Numeric coercion. Blank text is zero and unparsable text is `NaN`.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Time(timestamp) => timestamp.as_duration().as_secs_f64(),
            Self::Text(text) => {
                let trimmed = text.trim();

                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl Display for FieldValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Text(text) => f.write_str(text),
            // Adding zero turns -0 into 0.
            Self::Number(value) => Display::fmt(&(value + 0.0), f),
            Self::Time(timestamp) => Display::fmt(timestamp, f),
        }
    }
}

impl DeliveryRecord {
    /// Read a single field.
    #[must_use]
    pub fn field_value(&self, field: DeliveryField) -> FieldValue<'_> {
        match field {
            DeliveryField::Client => FieldValue::Text(Cow::Borrowed(&self.client)),
            DeliveryField::Invoice => FieldValue::Text(Cow::Borrowed(&self.invoice)),
            DeliveryField::Destination => FieldValue::Text(Cow::Borrowed(&self.destination)),
            DeliveryField::Weight => FieldValue::Number(self.weight),
            DeliveryField::Volume => FieldValue::Number(self.volume),
            DeliveryField::Status => FieldValue::Text(Cow::Borrowed(self.status.as_str())),
            DeliveryField::Observation => FieldValue::Text(Cow::Borrowed(&self.observation)),
            DeliveryField::DockArrivalTime => {
                FieldValue::Text(Cow::Borrowed(&self.dock_arrival_time))
            }
            DeliveryField::CreatedAt => FieldValue::Time(self.created_at),
        }
    }

    /// String representation of a field, as shown in filter selections.
    #[must_use]
    pub fn field_text(&self, field: DeliveryField) -> String {
        self.field_value(field).to_string()
    }
}
