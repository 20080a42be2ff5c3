//! State

use std::sync::Arc;

use dockside_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) overdue_threshold_days: u64,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, overdue_threshold_days: u64) -> Self {
        Self {
            app,
            overdue_threshold_days,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, overdue_threshold_days: u64) -> Arc<Self> {
        Arc::new(Self::new(app, overdue_threshold_days))
    }
}
