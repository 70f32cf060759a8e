//! Derived views over a snapshot of the team collection.
//!
//! Everything here is a pure function of its input slice. Nothing is cached.

mod paginate;

pub use paginate::*;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{Team, TeamStatus};

/// Value that selects every record in a status or entity filter.
pub const ALL: &str = "All";

/// Status predicate of a filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TeamStatus),
}

impl StatusFilter {
    /// Blank and "All" select everything. Unknown values yield `None`.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value.map(str::trim) {
            None | Some("") | Some(ALL) => Some(StatusFilter::All),
            Some(s) => TeamStatus::parse(s).map(StatusFilter::Only),
        }
    }

    fn matches(&self, status: TeamStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Entity predicate of a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EntityFilter {
    #[default]
    All,
    Only(String),
}

impl EntityFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL) => EntityFilter::All,
            Some(s) => EntityFilter::Only(s.to_string()),
        }
    }

    fn matches(&self, entity: &str) -> bool {
        match self {
            EntityFilter::All => true,
            EntityFilter::Only(wanted) => wanted == entity,
        }
    }
}

/// Conjunctive filter over search term, status and entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    pub search: String,
    pub status: StatusFilter,
    pub entity: EntityFilter,
}

impl TeamFilter {
    pub fn matches(&self, team: &Team) -> bool {
        self.matches_needle(team, self.needle().as_deref())
    }

    /// Lower-cased search term, or `None` when it is blank. Only the blank
    /// check trims; surrounding whitespace in a real term takes part in the match.
    fn needle(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    fn matches_needle(&self, team: &Team, needle: Option<&str>) -> bool {
        let search_hit = match needle {
            None => true,
            Some(needle) => {
                team.name.to_lowercase().contains(needle)
                    || team.code.to_lowercase().contains(needle)
            }
        };
        search_hit && self.status.matches(team.status) && self.entity.matches(&team.entity)
    }
}

/// Records matching `filter`, in their original order.
pub fn filter_teams(teams: &[Team], filter: &TeamFilter) -> Vec<Team> {
    let needle = filter.needle();
    teams
        .iter()
        .filter(|team| filter.matches_needle(team, needle.as_deref()))
        .cloned()
        .collect()
}

/// Sortable team column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    Name,
    Description,
    Code,
    Email,
    Entity,
    Manager,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Description => "description",
            SortKey::Code => "code",
            SortKey::Email => "email",
            SortKey::Entity => "entity",
            SortKey::Manager => "manager",
            SortKey::Status => "status",
            SortKey::CreatedAt => "createdAt",
            SortKey::UpdatedAt => "updatedAt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(SortKey::Id),
            "name" => Some(SortKey::Name),
            "description" => Some(SortKey::Description),
            "code" => Some(SortKey::Code),
            "email" => Some(SortKey::Email),
            "entity" => Some(SortKey::Entity),
            "manager" => Some(SortKey::Manager),
            "status" => Some(SortKey::Status),
            "createdAt" => Some(SortKey::CreatedAt),
            "updatedAt" => Some(SortKey::UpdatedAt),
            _ => None,
        }
    }

    /// Compare two teams on this column.
    pub fn compare(&self, a: &Team, b: &Team) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Description => a.description.cmp(&b.description),
            SortKey::Code => a.code.cmp(&b.code),
            SortKey::Email => a.email.cmp(&b.email),
            SortKey::Entity => a.entity.cmp(&b.entity),
            SortKey::Manager => a.manager.cmp(&b.manager),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Stable in-place sort. Equal keys keep their relative order in both directions.
pub fn sort_teams(teams: &mut [Team], key: SortKey, direction: SortDirection) {
    match direction {
        SortDirection::Asc => teams.sort_by(|a, b| key.compare(a, b)),
        SortDirection::Desc => teams.sort_by(|a, b| key.compare(b, a)),
    }
}

/// Column header sort state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Clicking the active column flips direction; a new column starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Asc;
        }
    }
}

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Filter, then sort, then paginate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamQuery {
    pub filter: TeamFilter,
    pub sort: Option<(SortKey, SortDirection)>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for TeamQuery {
    fn default() -> Self {
        Self {
            filter: TeamFilter::default(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TeamQuery {
    pub fn run(&self, teams: &[Team]) -> Page<Team> {
        let mut rows = filter_teams(teams, &self.filter);
        if let Some((key, direction)) = self.sort {
            sort_teams(&mut rows, key, direction);
        }
        paginate(&rows, self.page, self.page_size)
    }
}
