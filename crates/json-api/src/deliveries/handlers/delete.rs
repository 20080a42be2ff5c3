//! Delete Delivery Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{deliveries::errors::into_status_error, extensions::*, state::State};

/// Delete Delivery Handler
#[endpoint(
    tags("deliveries"),
    summary = "Delete Delivery",
    responses(
        (status_code = StatusCode::OK, description = "Delivery deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Delivery not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "deliveries.delete",
    skip(uuid, depot),
    fields(delivery_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let uuid = uuid.into_inner();

    tracing::Span::current().record("delivery_uuid", tracing::field::display(uuid));

    state
        .app
        .deliveries
        .delete_delivery(uuid.into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
