//! Delivery Errors

use salvo::http::StatusError;
use tracing::error;

use dockside_app::domain::deliveries::DeliveriesServiceError;

pub(crate) fn into_status_error(error: DeliveriesServiceError) -> StatusError {
    match error {
        DeliveriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Delivery already exists")
        }
        DeliveriesServiceError::Invalid(reason) => {
            StatusError::bad_request().brief(format!("Invalid delivery: {reason}"))
        }
        DeliveriesServiceError::MissingRequiredData | DeliveriesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid delivery payload")
        }
        DeliveriesServiceError::NotFound => StatusError::not_found().brief("Delivery not found"),
        DeliveriesServiceError::Sql(source) => {
            error!("delivery store error: {source}");

            StatusError::internal_server_error()
        }
    }
}
