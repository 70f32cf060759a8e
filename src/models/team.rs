//! Team model matching the frontend ITeam interface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a team.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TeamStatus {
    Active,
    Inactive,
}

impl TeamStatus {
    pub const ALL: [TeamStatus; 2] = [TeamStatus::Active, TeamStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Active => "Active",
            TeamStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(TeamStatus::Active),
            "Inactive" => Some(TeamStatus::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A team managed through the admin screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: String,
    pub code: String,
    pub email: String,
    pub entity: String,
    pub manager: String,
    pub status: TeamStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable subset of a team, as submitted by the create/edit form.
///
/// `status` stays a raw string so that unknown values reach validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub status: String,
}

impl TeamFormData {
    /// Copy of the form with every string field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            code: self.code.trim().to_string(),
            email: self.email.trim().to_string(),
            entity: self.entity.trim().to_string(),
            manager: self.manager.trim().to_string(),
            status: self.status.trim().to_string(),
        }
    }
}

impl From<&Team> for TeamFormData {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            description: team.description.clone(),
            code: team.code.clone(),
            email: team.email.clone(),
            entity: team.entity.clone(),
            manager: team.manager.clone(),
            status: team.status.as_str().to_string(),
        }
    }
}

/// Aggregate counts over the collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Number of distinct owning entities
    pub entities: usize,
    /// Number of distinct managers
    pub managers: usize,
}

/// A `{ value, label }` pair for select inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn same(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

/// Observable state of the team store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatus {
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    pub revision_id: i64,
    pub total: usize,
}
