//! Validation rules for team form payloads and list queries.
//!
//! Every check is pure and returns its outcome by value. Each field reports
//! only the first rule it violates, and fields are reported in form order.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{TeamFormData, TeamStatus};
use crate::query::{SortDirection, SortKey, StatusFilter};

mod rules;

pub use rules::*;

/// Codes already taken by teams outside this service.
pub const RESERVED_TEAM_CODES: [&str; 5] = ["ADM", "CMG", "IMG", "SQM", "PBM"];

static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+$").expect("code pattern compiles"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A single field-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Ordered set of field failures, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Message of the first failing field.
    pub fn summary(&self) -> String {
        self.first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "Validation failed".to_string())
    }

    /// `{ field: message }` object for response bodies.
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.errors
            .iter()
            .map(|e| (e.field.clone(), serde_json::Value::String(e.message.clone())))
            .collect()
    }

    fn push(&mut self, field: &str, outcome: Option<&'static str>) {
        if let Some(message) = outcome {
            self.errors.push(FieldError::new(field, message));
        }
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

/// Validate a full team form.
pub fn validate_team(form: &TeamFormData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.push("name", NAME_RULES.check(&form.name));
    errors.push("description", DESCRIPTION_RULES.check(&form.description));
    errors.push("code", check_code(&form.code));
    errors.push("email", check_email(&form.email));
    errors.push("entity", ENTITY_RULES.check(&form.entity));
    errors.push("manager", MANAGER_RULES.check(&form.manager));
    errors.push("status", check_status(&form.status));
    errors.into_result()
}

fn check_code(value: &str) -> Option<&'static str> {
    CODE_RULES.check(value).or_else(|| {
        (!CODE_PATTERN.is_match(value.trim()))
            .then_some("Code must contain only uppercase letters and numbers")
    })
}

fn check_email(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required");
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some("Please enter a valid email address");
    }
    if value.chars().count() > 100 {
        return Some("Email must be less than 100 characters");
    }
    None
}

fn check_status(value: &str) -> Option<&'static str> {
    TeamStatus::parse(value.trim())
        .is_none()
        .then_some("Invalid status")
}

pub fn validate_team_name(name: &str) -> Option<String> {
    NAME_RULES.check(name).map(str::to_string)
}

pub fn validate_team_code(code: &str) -> Option<String> {
    check_code(code).map(str::to_string)
}

pub fn validate_team_email(email: &str) -> Option<String> {
    check_email(email).map(str::to_string)
}

/// Advisory uniqueness check for a team code.
///
/// Simulates a remote lookup: waits `delay`, then checks the code against
/// [`RESERVED_TEAM_CODES`]. `_exclude_id` is accepted so callers editing an
/// existing team can pass their own id once a real lookup exists.
pub async fn validate_unique_team_code(
    code: &str,
    _exclude_id: Option<&str>,
    delay: Duration,
) -> Option<String> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let upper = code.trim().to_uppercase();
    if RESERVED_TEAM_CODES.contains(&upper.as_str()) {
        tracing::debug!(code = %upper, "Team code collides with a reserved code");
        return Some("Team code already exists".to_string());
    }
    None
}

/// Validate list query parameters before running a query.
pub fn validate_list_params(
    search: Option<&str>,
    page: u32,
    page_size: u32,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if search.is_some_and(|s| s.chars().count() > 100) {
        errors.push(
            "query",
            Some("Search query must be less than 100 characters"),
        );
    }
    if page < 1 {
        errors.push("page", Some("Page must be at least 1"));
    }
    if page_size < 1 {
        errors.push("pageSize", Some("Page size must be at least 1"));
    } else if page_size > 100 {
        errors.push("pageSize", Some("Page size must be at most 100"));
    }

    errors.into_result()
}

/// Resolve a sort field name into a [`SortKey`].
pub fn validate_sort_field(field: &str) -> Result<SortKey, ValidationErrors> {
    let field = field.trim();
    if field.is_empty() {
        return Err(vec![FieldError::new("field", "Sort field is required")].into());
    }
    SortKey::parse(field).ok_or_else(|| vec![FieldError::new("field", "Unknown sort field")].into())
}

/// Resolve a status filter; absent, blank and "All" mean no filtering.
pub fn validate_status_filter(status: Option<&str>) -> Result<StatusFilter, ValidationErrors> {
    StatusFilter::parse(status)
        .ok_or_else(|| vec![FieldError::new("status", "Invalid status")].into())
}

/// Resolve a sort direction; absent means ascending.
pub fn validate_sort_direction(
    direction: Option<&str>,
) -> Result<SortDirection, ValidationErrors> {
    match direction {
        None => Ok(SortDirection::Asc),
        Some(raw) => SortDirection::parse(raw).ok_or_else(|| {
            vec![FieldError::new("direction", "Sort direction must be asc or desc")].into()
        }),
    }
}
