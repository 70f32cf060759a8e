//! Team API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{respond, ApiResult};
use crate::errors::AppError;
use crate::models::{Team, TeamFormData, TeamStats};
use crate::query::{EntityFilter, Page, TeamFilter, TeamQuery, DEFAULT_PAGE_SIZE};
use crate::validation::{
    validate_list_params, validate_sort_direction, validate_sort_field, validate_status_filter,
    validate_team, validate_unique_team_code,
};
use crate::AppState;

/// List query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamsParams {
    #[serde(default)]
    pub search: Option<String>,
    /// Status name or "All"
    #[serde(default)]
    pub status: Option<String>,
    /// Entity name or "All"
    #[serde(default)]
    pub entity: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_direction: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl ListTeamsParams {
    /// Turn raw query parameters into a checked [`TeamQuery`].
    pub fn into_query(self) -> Result<TeamQuery, AppError> {
        validate_list_params(self.search.as_deref(), self.page, self.page_size)?;

        let status = validate_status_filter(self.status.as_deref())?;

        let sort = match self.sort_by.as_deref() {
            None => None,
            Some(field) => {
                let key = validate_sort_field(field)?;
                let direction = validate_sort_direction(self.sort_direction.as_deref())?;
                Some((key, direction))
            }
        };

        Ok(TeamQuery {
            filter: TeamFilter {
                search: self.search.unwrap_or_default(),
                status,
                entity: EntityFilter::parse(self.entity.as_deref()),
            },
            sort,
            page: self.page,
            page_size: self.page_size,
        })
    }
}

/// GET /api/teams - Filtered, sorted, paginated list.
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<ListTeamsParams>,
) -> ApiResult<Page<Team>> {
    let outcome = match params.into_query() {
        Ok(query) => Ok(query.run(&state.store.snapshot().await)),
        Err(e) => Err(e),
    };
    respond(&state.store, outcome).await
}

/// GET /api/teams/{id} - Get a single team.
pub async fn get_team(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Team> {
    let outcome = state
        .store
        .get_by_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()));
    respond(&state.store, outcome).await
}

/// POST /api/teams - Create a new team.
pub async fn create_team(
    State(state): State<AppState>,
    Json(form): Json<TeamFormData>,
) -> ApiResult<Team> {
    let outcome = state.store.create(&form).await;
    respond(&state.store, outcome).await
}

/// PUT /api/teams/{id} - Replace a team's editable fields.
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<TeamFormData>,
) -> ApiResult<Team> {
    let outcome = state.store.update(&id, &form).await;
    respond(&state.store, outcome).await
}

/// DELETE /api/teams/{id} - Delete a team.
pub async fn delete_team(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let outcome = state.store.delete(&id).await;
    respond(&state.store, outcome).await
}

/// Outcome of a dry-run form validation.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub success: bool,
    pub errors: serde_json::Map<String, serde_json::Value>,
}

/// POST /api/teams/validate - Check a form without touching the store.
pub async fn validate_team_form(
    State(state): State<AppState>,
    Json(form): Json<TeamFormData>,
) -> ApiResult<ValidationReport> {
    let report = match validate_team(&form) {
        Ok(()) => ValidationReport {
            success: true,
            errors: serde_json::Map::new(),
        },
        Err(errors) => ValidationReport {
            success: false,
            errors: errors.to_map(),
        },
    };
    respond(&state.store, Ok(report)).await
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAvailabilityParams {
    pub code: String,
    #[serde(default)]
    pub exclude_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CodeAvailability {
    pub code: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /api/teams/code-availability - Advisory code uniqueness check.
pub async fn check_code_availability(
    State(state): State<AppState>,
    Query(params): Query<CodeAvailabilityParams>,
) -> ApiResult<CodeAvailability> {
    let message = validate_unique_team_code(
        &params.code,
        params.exclude_id.as_deref(),
        state.config.code_check_delay,
    )
    .await;

    let availability = CodeAvailability {
        code: params.code,
        available: message.is_none(),
        message,
    };
    respond(&state.store, Ok(availability)).await
}

/// GET /api/teams/stats - Collection counts.
pub async fn team_stats(State(state): State<AppState>) -> ApiResult<TeamStats> {
    let stats = state.store.stats().await;
    respond(&state.store, Ok(stats)).await
}
