//! Record Route
//!
//! GET /api/v1/apod - today's record as JSON, for browser clients that
//! render the view themselves. The access key stays on the server.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::fetcher::DayRecord;

/// GET /api/v1/apod
pub async fn get_record(State(state): State<Arc<AppState>>) -> ApiResult<Json<DayRecord>> {
    let record = state.source.fetch_day_record().await?;
    Ok(Json(record))
}
