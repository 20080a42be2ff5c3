//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{deliveries, healthcheck, observability::request_logging, state::State};

/// Static paths under `deliveries` are registered before `{uuid}`.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("deliveries")
                .get(deliveries::index::handler)
                .post(deliveries::create::handler)
                .push(Router::with_path("report").get(deliveries::report::handler))
                .push(Router::with_path("last-update").get(deliveries::last_update::handler))
                .push(
                    Router::with_path("{uuid}")
                        .delete(deliveries::delete::handler)
                        .push(Router::with_path("status").put(deliveries::status::handler)),
                ),
        )
}
