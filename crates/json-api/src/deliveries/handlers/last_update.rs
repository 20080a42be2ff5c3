//! Last Update Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use dockside_app::domain::updates::UpdateMarker;

use crate::{deliveries::errors::into_status_error, extensions::*, state::State};

/// When deliveries were last inserted or deleted. Both fields are null if never.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LastUpdateResponse {
    /// The date and time of the last insert or delete
    pub updated_at: Option<String>,

    /// `insert` or `delete`
    pub operation: Option<String>,
}

impl From<UpdateMarker> for LastUpdateResponse {
    fn from(marker: UpdateMarker) -> Self {
        LastUpdateResponse {
            updated_at: Some(marker.updated_at.to_string()),
            operation: Some(marker.operation.to_string()),
        }
    }
}

/// Last Update Handler
///
/// Clients compare this with the time of their last reload to notice a stale table.
#[endpoint(tags("deliveries"), summary = "Last Delivery Update")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<LastUpdateResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let marker = state
        .app
        .deliveries
        .last_update()
        .await
        .map_err(into_status_error)?;

    Ok(Json(marker.map(Into::into).unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use dockside_app::domain::{deliveries::MockDeliveriesService, updates::UpdateOperation};

    use crate::test_helpers::deliveries_service;

    use super::*;

    fn make_service(repo: MockDeliveriesService) -> Service {
        deliveries_service(repo, Router::with_path("deliveries/last-update").get(handler))
    }

    fn mock_marker(marker: Option<UpdateMarker>) -> MockDeliveriesService {
        let mut repo = MockDeliveriesService::new();

        repo.expect_last_update()
            .once()
            .return_once(move || Ok(marker));

        repo.expect_list_deliveries().never();
        repo.expect_create_delivery().never();
        repo.expect_update_status().never();
        repo.expect_delete_delivery().never();

        repo
    }

    #[tokio::test]
    async fn test_last_update_returns_marker() -> TestResult {
        let marker = UpdateMarker {
            updated_at: "2026-03-10T09:30:00Z".parse()?,
            operation: UpdateOperation::Delete,
        };

        let body: LastUpdateResponse = TestClient::get("http://example.com/deliveries/last-update")
            .send(&make_service(mock_marker(Some(marker))))
            .await
            .take_json()
            .await?;

        assert_eq!(body.updated_at.as_deref(), Some("2026-03-10T09:30:00Z"));
        assert_eq!(body.operation.as_deref(), Some("delete"));

        Ok(())
    }

    #[tokio::test]
    async fn test_last_update_never_touched_returns_nulls() -> TestResult {
        let mut res = TestClient::get("http://example.com/deliveries/last-update")
            .send(&make_service(mock_marker(None)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: LastUpdateResponse = res.take_json().await?;

        assert_eq!(body.updated_at, None);
        assert_eq!(body.operation, None);

        Ok(())
    }
}
