//! Delivery Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dockside::board::DeliveryBoard;

use crate::{
    deliveries::{
        errors::into_status_error,
        query::BoardQuery,
        responses::{DeliveryResponse, FilterOptionsResponse, filter_options},
    },
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeliveriesResponse {
    /// Visible deliveries in display order
    pub deliveries: Vec<DeliveryResponse>,

    /// Selectable values per column, from every delivery
    pub filters: Vec<FilterOptionsResponse>,
}

/// Delivery Index Handler
///
/// Lists deliveries, sorted, grouped and filtered by the query string. Any field name
/// (`client`, `destination`, `status`, ...) may be passed to filter on that column.
#[endpoint(
    tags("deliveries"),
    summary = "List Deliveries",
    responses(
        (status_code = StatusCode::OK, description = "Deliveries"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    at: QueryParam<String, false>,
    threshold: QueryParam<u64, false>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DeliveriesResponse>, StatusError> {
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

    Ok(Json(DeliveriesResponse {
        deliveries: board
            .rows(point_in_time, threshold)
            .into_iter()
            .map(Into::into)
            .collect(),
        filters: filter_options(&board.distinct_values(), board.filters()),
    }))
}
