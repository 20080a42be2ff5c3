//! Delivery Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dockside::{
    board::DeliveryRow,
    deliveries::DeliveryRecord,
    filter::{DistinctValues, FilterSelections},
};

/// A delivery with its derived dock metrics
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeliveryResponse {
    /// The unique identifier of the delivery
    pub uuid: Uuid,

    /// Client name
    pub client: String,

    /// Invoice number
    pub invoice: String,

    /// Destination
    pub destination: String,

    /// Weight in kilograms
    pub weight: f64,

    /// Volume in cubic meters
    pub volume: f64,

    /// `AtDock` or `InTransit`
    pub status: String,

    /// Free-text observation
    pub observation: String,

    /// When the delivery arrived at the dock, as stored
    pub dock_arrival_time: String,

    /// The date and time the delivery was created
    pub created_at: String,

    /// Whole days at the dock, null when in transit
    pub days_at_dock: Option<u64>,

    /// Whether the delivery reached the overdue threshold
    pub overdue: bool,
}

impl DeliveryResponse {
    pub(crate) fn new(record: DeliveryRecord, days_at_dock: Option<u64>, overdue: bool) -> Self {
        DeliveryResponse {
            uuid: record.uuid.into(),
            client: record.client,
            invoice: record.invoice,
            destination: record.destination,
            weight: record.weight,
            volume: record.volume,
            status: record.status.to_string(),
            observation: record.observation,
            dock_arrival_time: record.dock_arrival_time,
            created_at: record.created_at.to_string(),
            days_at_dock,
            overdue,
        }
    }
}

impl From<DeliveryRow> for DeliveryResponse {
    fn from(row: DeliveryRow) -> Self {
        DeliveryResponse::new(row.record, row.dock_days, row.overdue)
    }
}

/// Selectable values for one column
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FilterOptionsResponse {
    /// Field name, usable as a query parameter
    pub field: String,

    /// Distinct values across every delivery, ascending
    pub values: Vec<String>,

    /// The active selection, if any
    pub selected: Option<String>,
}

pub(crate) fn filter_options(
    values: &DistinctValues,
    selections: &FilterSelections,
) -> Vec<FilterOptionsResponse> {
    values
        .iter()
        .map(|(field, values)| FilterOptionsResponse {
            field: field.as_str().to_string(),
            values: values.into_iter().map(str::to_string).collect(),
            selected: selections.get(field).map(str::to_string),
        })
        .collect()
}
