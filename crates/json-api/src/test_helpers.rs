//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use dockside_app::{
    context::AppContext,
    domain::deliveries::{DeliveryRecord, DeliveryStatus, DeliveryUuid, MockDeliveriesService},
};

use crate::state::State;

pub(crate) const TEST_THRESHOLD_DAYS: u64 = 5;

pub(crate) fn state_with_deliveries(deliveries: MockDeliveriesService) -> Arc<State> {
    State::from_app_context(
        AppContext {
            deliveries: Arc::new(deliveries),
        },
        TEST_THRESHOLD_DAYS,
    )
}

pub(crate) fn deliveries_service(deliveries: MockDeliveriesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_deliveries(deliveries)))
            .push(route),
    )
}

pub(crate) fn make_delivery(invoice: &str, status: DeliveryStatus, arrival: &str) -> DeliveryRecord {
    DeliveryRecord {
        uuid: DeliveryUuid::new(),
        client: "Acme".to_string(),
        invoice: invoice.to_string(),
        destination: "Recife".to_string(),
        weight: 30.0,
        volume: 1.5,
        status,
        observation: String::new(),
        dock_arrival_time: arrival.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
