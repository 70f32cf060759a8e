//! REST API module.
//!
//! Every response is wrapped in an envelope that carries the store revision
//! observed after the handler ran, so clients can tell stale lists apart.

mod store;
mod teams;

pub use store::*;
pub use teams::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{AppError, AppErrorWithRevision};
use crate::store::TeamStore;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: i64,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppErrorWithRevision>;

/// Wrap an operation outcome together with the store's current revision.
pub async fn respond<T: Serialize>(store: &TeamStore, outcome: Result<T, AppError>) -> ApiResult<T> {
    let revision_id = store.revision().await;
    match outcome {
        Ok(data) => Ok(ApiResponse {
            success: true,
            data,
            revision_id,
        }),
        Err(error) => Err(AppErrorWithRevision { error, revision_id }),
    }
}
