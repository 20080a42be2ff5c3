//! Update Delivery Status Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dockside::{board::DeliveryRow, deliveries::DeliveryStatus};

use crate::{
    deliveries::{errors::into_status_error, responses::DeliveryResponse},
    extensions::*,
    state::State,
};

/// Update Delivery Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    /// `AtDock` or `InTransit`
    pub status: String,
}

/// Update Delivery Status Handler
///
/// Moves a delivery to or from the dock. The dock arrival time is not changed.
#[endpoint(
    tags("deliveries"),
    summary = "Update Delivery Status",
    responses(
        (status_code = StatusCode::OK, description = "Delivery updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Delivery not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "deliveries.update_status",
    skip(uuid, json, depot),
    fields(
        delivery_uuid = tracing::field::Empty,
        status = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<DeliveryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let uuid = uuid.into_inner();

    let span = tracing::Span::current();

    span.record("delivery_uuid", tracing::field::display(uuid));

    let status = json
        .into_inner()
        .status
        .parse::<DeliveryStatus>()
        .or_400("invalid status")?;

    span.record("status", status.as_str());

    let updated = state
        .app
        .deliveries
        .update_status(uuid.into(), status)
        .await
        .map_err(into_status_error)?;

    let row = DeliveryRow::new(updated, Timestamp::now(), state.overdue_threshold_days);

    Ok(Json(row.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use dockside_app::domain::deliveries::{
        DeliveriesServiceError, DeliveryUuid, MockDeliveriesService,
    };

    use crate::test_helpers::{deliveries_service, make_delivery};

    use super::*;

    fn make_service(repo: MockDeliveriesService) -> Service {
        deliveries_service(
            repo,
            Router::with_path("deliveries/{uuid}/status").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_status_success() -> TestResult {
        let delivery = make_delivery("NF-1", DeliveryStatus::InTransit, "2026-03-01T00:00:00Z");
        let uuid = delivery.uuid;
        let mut repo = MockDeliveriesService::new();

        repo.expect_update_status()
            .once()
            .withf(move |u, status| *u == uuid && *status == DeliveryStatus::InTransit)
            .return_once(move |_, _| Ok(delivery));

        repo.expect_list_deliveries().never();
        repo.expect_create_delivery().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let mut res = TestClient::put(format!("http://example.com/deliveries/{uuid}/status"))
            .json(&json!({ "status": "inTransit" }))
            .send(&make_service(repo))
            .await;

        let body: DeliveryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.status, "InTransit");
        assert_eq!(body.dock_arrival_time, "2026-03-01T00:00:00Z");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_status_missing_delivery_returns_404() -> TestResult {
        let uuid = DeliveryUuid::new();
        let mut repo = MockDeliveriesService::new();

        repo.expect_update_status()
            .once()
            .withf(move |u, _| *u == uuid)
            .return_once(|_, _| Err(DeliveriesServiceError::NotFound));

        repo.expect_list_deliveries().never();
        repo.expect_create_delivery().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let res = TestClient::put(format!("http://example.com/deliveries/{uuid}/status"))
            .json(&json!({ "status": "AtDock" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_status_unknown_status_returns_400() -> TestResult {
        let uuid = DeliveryUuid::new();
        let mut repo = MockDeliveriesService::new();

        repo.expect_update_status().never();
        repo.expect_list_deliveries().never();
        repo.expect_create_delivery().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let res = TestClient::put(format!("http://example.com/deliveries/{uuid}/status"))
            .json(&json!({ "status": "Delivered" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
