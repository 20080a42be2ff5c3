//! Dock Report Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dockside::board::DeliveryBoard;

use crate::{
    deliveries::{errors::into_status_error, query::BoardQuery, responses::DeliveryResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DockReportResponse {
    /// Point in time the day counts were taken at
    pub generated_at: String,

    /// Days at the dock after which a delivery is overdue
    pub threshold_days: u64,

    /// Deliveries at the dock
    pub at_dock: usize,

    /// Overdue deliveries
    pub overdue: usize,

    /// Every visible delivery at the dock, in display order
    pub rows: Vec<DeliveryResponse>,
}

/// Dock Report Handler
///
/// The print view: every visible delivery still at the dock with its day count. Accepts
/// the same sorting and filtering parameters as the listing.
#[endpoint(
    tags("deliveries"),
    summary = "Dock Report",
    responses(
        (status_code = StatusCode::OK, description = "Dock report"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    at: QueryParam<String, false>,
    threshold: QueryParam<u64, false>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DockReportResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let point_in_time = at.into_point_in_time()?;
    let threshold = threshold
        .into_inner()
        .unwrap_or(state.overdue_threshold_days);
    let query = BoardQuery::from_request(req)?;

    let records = state
        .app
        .deliveries
        .list_deliveries()
        .await
        .map_err(into_status_error)?;

    let mut board = DeliveryBoard::new(records);

    query.apply(&mut board);

    let report = board.dock_report(point_in_time, threshold);

    Ok(Json(DockReportResponse {
        generated_at: report.generated_at().to_string(),
        threshold_days: report.threshold_days(),
        at_dock: report.rows().len(),
        overdue: report.overdue_count(),
        rows: report
            .rows()
            .iter()
            .map(|row| {
                DeliveryResponse::new(row.record.clone(), Some(row.days_at_dock), row.overdue)
            })
            .collect(),
    }))
}
