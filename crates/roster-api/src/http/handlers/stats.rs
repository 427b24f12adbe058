//! Summary statistics endpoint.
//!
//! GET /api/v1/stats - Counters for the unfiltered list.

use axum::extract::State;

use roster_core::view;
use roster_types::view::ViewStats;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/v1/stats - Total, with-remarks and remark categories.
pub async fn get_stats(State(state): State<AppState>) -> Result<ApiResponse<ViewStats>, AppError> {
    let timer = RequestTimer::start();

    let registry = state.registry.lock().await;
    let records = registry.records();
    let stats = view::stats(records, records.len());

    Ok(timer.finish(stats).with_link("self", "/api/v1/stats"))
}
