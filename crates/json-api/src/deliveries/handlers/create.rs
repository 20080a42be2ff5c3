//! Create Delivery Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use dockside::{
    board::DeliveryRow,
    deliveries::{DeliveryStatus, ParseStatusError},
    metrics::parse_dock_arrival,
};
use dockside_app::domain::deliveries::data::{InvalidDelivery, NewDelivery};

use crate::{
    deliveries::{errors::into_status_error, responses::DeliveryResponse},
    extensions::*,
    state::State,
};

/// Create Delivery Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDeliveryRequest {
    pub client: String,
    pub invoice: String,
    pub destination: String,
    pub weight: f64,
    pub volume: f64,

    /// Defaults to `AtDock`
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub observation: String,

    /// Defaults to now
    #[serde(default)]
    pub dock_arrival_time: Option<String>,
}

#[derive(Debug, Error)]
pub(crate) enum CreateDeliveryRequestError {
    #[error(transparent)]
    Status(#[from] ParseStatusError),

    #[error("invalid dock arrival time: {0}")]
    DockArrivalTime(String),

    #[error(transparent)]
    Invalid(#[from] InvalidDelivery),
}

impl TryFrom<CreateDeliveryRequest> for NewDelivery {
    type Error = CreateDeliveryRequestError;

    fn try_from(request: CreateDeliveryRequest) -> Result<Self, Self::Error> {
        let status = request
            .status
            .as_deref()
            .map(str::parse::<DeliveryStatus>)
            .transpose()?
            .unwrap_or_default();

        let dock_arrival_time = match request.dock_arrival_time {
            Some(value) => parse_dock_arrival(&value)
                .ok_or(CreateDeliveryRequestError::DockArrivalTime(value))?,
            None => Timestamp::now(),
        };

        let delivery = NewDelivery {
            client: request.client,
            invoice: request.invoice,
            destination: request.destination,
            weight: request.weight,
            volume: request.volume,
            status,
            observation: request.observation,
            dock_arrival_time,
        };

        delivery.validate()?;

        Ok(delivery)
    }
}

/// Create Delivery Handler
#[endpoint(
    tags("deliveries"),
    summary = "Create Delivery",
    responses(
        (status_code = StatusCode::CREATED, description = "Delivery created"),
        (status_code = StatusCode::CONFLICT, description = "Delivery already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "deliveries.create",
    skip(json, depot, res),
    fields(
        invoice = tracing::field::Empty,
        delivery_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateDeliveryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DeliveryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let span = tracing::Span::current();

    let delivery = NewDelivery::try_from(json.into_inner()).or_400("invalid delivery")?;

    span.record("invoice", delivery.invoice.as_str());

    let created = state
        .app
        .deliveries
        .create_delivery(delivery)
        .await
        .map_err(into_status_error)?;

    span.record("delivery_uuid", tracing::field::display(created.uuid));

    res.add_header(LOCATION, format!("/deliveries/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    let row = DeliveryRow::new(created, Timestamp::now(), state.overdue_threshold_days);

    Ok(Json(row.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use dockside_app::domain::deliveries::{
        DeliveriesServiceError, DeliveryRecord, MockDeliveriesService,
    };

    use crate::test_helpers::{deliveries_service, make_delivery};

    use super::*;

    fn make_service(repo: MockDeliveriesService) -> Service {
        deliveries_service(repo, Router::with_path("deliveries").post(handler))
    }

    fn stored(new: &NewDelivery) -> DeliveryRecord {
        let mut record = make_delivery(
            &new.invoice,
            new.status,
            &new.dock_arrival_time.to_string(),
        );

        record.observation.clone_from(&new.observation);

        record
    }

    #[tokio::test]
    async fn test_create_delivery_success() -> TestResult {
        let mut repo = MockDeliveriesService::new();

        repo.expect_create_delivery()
            .once()
            .withf(|new| {
                new.invoice == "NF-7"
                    && new.status == DeliveryStatus::InTransit
                    && new.observation == "fragile"
                    && new.dock_arrival_time.to_string() == "2026-03-01T08:00:00Z"
            })
            .returning(|new| Ok(stored(&new)));

        repo.expect_list_deliveries().never();
        repo.expect_update_status().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let mut res = TestClient::post("http://example.com/deliveries")
            .json(&json!({
                "client": "Acme",
                "invoice": "NF-7",
                "destination": "Recife",
                "weight": 30,
                "volume": 1.5,
                "status": "InTransit",
                "observation": "fragile",
                "dockArrivalTime": "2026-03-01T08:00:00Z",
            }))
            .send(&make_service(repo))
            .await;

        let body: DeliveryResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/deliveries/{}", body.uuid).as_str()));
        assert_eq!(body.status, "InTransit");
        assert_eq!(body.days_at_dock, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_delivery_defaults_to_at_dock_now() -> TestResult {
        let before = Timestamp::now();
        let mut repo = MockDeliveriesService::new();

        repo.expect_create_delivery()
            .once()
            .withf(move |new| {
                new.status == DeliveryStatus::AtDock
                    && new.observation.is_empty()
                    && new.dock_arrival_time >= before
            })
            .returning(|new| Ok(stored(&new)));

        repo.expect_list_deliveries().never();
        repo.expect_update_status().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let mut res = TestClient::post("http://example.com/deliveries")
            .json(&json!({
                "client": "Acme",
                "invoice": "NF-8",
                "destination": "Natal",
                "weight": 5,
                "volume": 0.5,
            }))
            .send(&make_service(repo))
            .await;

        let body: DeliveryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.days_at_dock, Some(0));
        assert!(!body.overdue, "a new delivery is never overdue");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_delivery_unknown_status_returns_400() -> TestResult {
        let mut repo = MockDeliveriesService::new();

        repo.expect_create_delivery().never();
        repo.expect_list_deliveries().never();
        repo.expect_update_status().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let res = TestClient::post("http://example.com/deliveries")
            .json(&json!({
                "client": "Acme",
                "invoice": "NF-9",
                "destination": "Natal",
                "weight": 5,
                "volume": 0.5,
                "status": "Lost",
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_delivery_malformed_arrival_returns_400() -> TestResult {
        let mut repo = MockDeliveriesService::new();

        repo.expect_create_delivery().never();
        repo.expect_list_deliveries().never();
        repo.expect_update_status().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let res = TestClient::post("http://example.com/deliveries")
            .json(&json!({
                "client": "Acme",
                "invoice": "NF-9",
                "destination": "Natal",
                "weight": 5,
                "volume": 0.5,
                "dockArrivalTime": "yesterday",
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_delivery_missing_field_returns_400() -> TestResult {
        let mut repo = MockDeliveriesService::new();

        repo.expect_create_delivery().never();
        repo.expect_list_deliveries().never();
        repo.expect_update_status().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let res = TestClient::post("http://example.com/deliveries")
            .json(&json!({
                "client": "  ",
                "invoice": "NF-9",
                "destination": "Natal",
                "weight": 5,
                "volume": 0.5,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_delivery_negative_weight_returns_400() -> TestResult {
        let mut repo = MockDeliveriesService::new();

        repo.expect_create_delivery().never();
        repo.expect_list_deliveries().never();
        repo.expect_update_status().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let res = TestClient::post("http://example.com/deliveries")
            .json(&json!({
                "client": "Acme",
                "invoice": "NF-9",
                "destination": "Natal",
                "weight": -1,
                "volume": 0.5,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_delivery_store_rejection_returns_400() -> TestResult {
        let mut repo = MockDeliveriesService::new();

        repo.expect_create_delivery()
            .once()
            .return_once(|_| Err(DeliveriesServiceError::InvalidData));

        repo.expect_list_deliveries().never();
        repo.expect_update_status().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let res = TestClient::post("http://example.com/deliveries")
            .json(&json!({
                "client": "Acme",
                "invoice": "NF-9",
                "destination": "Natal",
                "weight": 5,
                "volume": 0.5,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_delivery_conflict_returns_409() -> TestResult {
        let mut repo = MockDeliveriesService::new();

        repo.expect_create_delivery()
            .once()
            .return_once(|_| Err(DeliveriesServiceError::AlreadyExists));

        repo.expect_list_deliveries().never();
        repo.expect_update_status().never();
        repo.expect_delete_delivery().never();
        repo.expect_last_update().never();

        let res = TestClient::post("http://example.com/deliveries")
            .json(&json!({
                "client": "Acme",
                "invoice": "NF-1",
                "destination": "Natal",
                "weight": 5,
                "volume": 0.5,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
