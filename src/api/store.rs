//! Store state and form option endpoints.

use axum::extract::State;
use serde::Serialize;

use super::{respond, ApiResult};
use crate::models::{SelectOption, StoreStatus};
use crate::seed::{entity_options, manager_options, status_options};
use crate::AppState;

/// Option lists backing the form selects and table filters.
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub entities: Vec<SelectOption>,
    pub managers: Vec<SelectOption>,
    pub statuses: Vec<SelectOption>,
}

/// GET /api/options
pub async fn get_options(State(state): State<AppState>) -> ApiResult<FormOptions> {
    let options = FormOptions {
        entities: entity_options(),
        managers: manager_options(),
        statuses: status_options(),
    };
    respond(&state.store, Ok(options)).await
}

/// GET /api/store - Loading flag, last error and revision.
pub async fn get_store_status(State(state): State<AppState>) -> ApiResult<StoreStatus> {
    let status = state.store.status().await;
    respond(&state.store, Ok(status)).await
}

/// DELETE /api/store/error - Reset the last error.
pub async fn clear_store_error(State(state): State<AppState>) -> ApiResult<()> {
    state.store.clear_error().await;
    respond(&state.store, Ok(())).await
}
