use std::sync::Arc;

use axum::Router;

pub mod irrigation;
pub mod schemes;

/// Both advisory workflows behind a single router.
pub fn advisor_router(
    schemes: Arc<schemes::SchemeAdvisor>,
    irrigation: Arc<irrigation::ScheduleAdjuster>,
) -> Router {
    schemes::scheme_router(schemes).merge(irrigation::irrigation_router(irrigation))
}
