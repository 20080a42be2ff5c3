//! Deliveries

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{metrics::parse_dock_arrival, uuids::TypedUuid};

/// Delivery UUID
pub type DeliveryUuid = TypedUuid<DeliveryRecord>;

/// Errors returned when parsing a [`DeliveryStatus`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown delivery status: {0}")]
pub struct ParseStatusError(pub String);

/// Where a shipment currently is.
///
/// Transitions are user triggered in both directions and there is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// Held at the dock awaiting dispatch.
    #[default]
    AtDock,

    /// Dispatched for delivery.
    InTransit,
}

impl DeliveryStatus {
    /// Both statuses, in grouping order.
    pub const ALL: [Self; 2] = [Self::AtDock, Self::InTransit];

    /// Canonical text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AtDock => "AtDock",
            Self::InTransit => "InTransit",
        }
    }

    /// The other status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::AtDock => Self::InTransit,
            Self::InTransit => Self::AtDock,
        }
    }

    /// Whether the shipment is waiting at the dock.
    #[must_use]
    pub const fn is_at_dock(self) -> bool {
        matches!(self, Self::AtDock)
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();

        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseStatusError(value.to_string()))
    }
}

/// A delivery as held by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecord {
    /// Store-assigned identifier
    #[serde(default = "DeliveryUuid::new")]
    pub uuid: DeliveryUuid,

    /// Client name
    pub client: String,

    /// Invoice number
    pub invoice: String,

    /// Destination city
    pub destination: String,

    /// Weight in kilograms
    pub weight: f64,

    /// Volume in cubic metres
    pub volume: f64,

    /// Current status
    #[serde(default)]
    pub status: DeliveryStatus,

    /// Free-form notes
    #[serde(default)]
    pub observation: String,

    /// When the delivery entered the dock, as RFC 3339 text.
    ///
    /// Set once at creation. Not reset when the delivery returns to the dock.
    pub dock_arrival_time: String,

    /// Store-assigned creation time
    #[serde(default = "Timestamp::now")]
    pub created_at: Timestamp,
}

impl DeliveryRecord {
    /// Parsed dock arrival time, `None` when the stored text is malformed.
    #[must_use]
    pub fn dock_arrival(&self) -> Option<Timestamp> {
        parse_dock_arrival(&self.dock_arrival_time)
    }

    /// Whether the delivery is currently at the dock.
    #[must_use]
    pub fn is_at_dock(&self) -> bool {
        self.status.is_at_dock()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_parses_case_insensitively() -> TestResult {
        assert_eq!("AtDock".parse::<DeliveryStatus>()?, DeliveryStatus::AtDock);
        assert_eq!(" intransit ".parse::<DeliveryStatus>()?, DeliveryStatus::InTransit);

        Ok(())
    }

    #[test]
    fn status_rejects_unknown_text() {
        let result = "Delivered".parse::<DeliveryStatus>();

        assert_eq!(result, Err(ParseStatusError("Delivered".to_string())));
    }

    #[test]
    fn status_toggles_between_both_states() {
        assert_eq!(DeliveryStatus::AtDock.toggled(), DeliveryStatus::InTransit);
        assert_eq!(DeliveryStatus::InTransit.toggled(), DeliveryStatus::AtDock);
    }

    #[test]
    fn record_deserializes_with_defaults() -> TestResult {
        let record: DeliveryRecord = serde_norway::from_str(
            "client: Acme\n\
             invoice: NF-1\n\
             destination: Recife\n\
             weight: 30\n\
             volume: 1.5\n\
             dockArrivalTime: 2026-03-01T08:00:00Z\n",
        )?;

        assert_eq!(record.status, DeliveryStatus::AtDock);
        assert_eq!(record.observation, "");
        assert!((record.weight - 30.0).abs() < f64::EPSILON);
        assert_eq!(record.dock_arrival(), Some("2026-03-01T08:00:00Z".parse()?));

        Ok(())
    }
}
