//! Deterministic mock data the store starts with.

mod catalog;

pub use catalog::*;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{SelectOption, Team, TeamStatus};

/// Number of teams a fresh store is seeded with.
pub const DEFAULT_SEED_COUNT: usize = 520;

/// Largest seed whose codes keep a three-digit suffix and stay within five characters.
pub const MAX_SEED_COUNT: usize = 999;

const DESCRIPTION_TEMPLATES: [&str; 10] = [
    "Manages {} operations and ensures service delivery excellence.",
    "Responsible for {} processes and continuous improvement initiatives.",
    "Handles {} activities and maintains operational standards.",
    "Oversees {} functions and drives organizational efficiency.",
    "Coordinates {} efforts and ensures compliance with policies.",
    "Supports {} initiatives and maintains service quality.",
    "Leads {} operations and implements best practices.",
    "Manages {} resources and optimizes performance metrics.",
    "Executes {} strategies and delivers business value.",
    "Administers {} systems and ensures reliability.",
];

/// Generate `count` teams, capped at [`MAX_SEED_COUNT`]. The same index always
/// yields the same team.
pub fn seed_teams(count: usize) -> Vec<Team> {
    (0..count.min(MAX_SEED_COUNT)).map(generate_team).collect()
}

fn generate_team(index: usize) -> Team {
    let template = NAME_TEMPLATES[index % NAME_TEMPLATES.len()];
    let name = format!("{} Team {}", template, index / NAME_TEMPLATES.len() + 1);
    let code = team_code(index);
    let entity = ENTITIES[index % ENTITIES.len()];
    let manager = MANAGERS[index % MANAGERS.len()];
    let status = if index % 10 == 0 {
        TeamStatus::Inactive
    } else {
        TeamStatus::Active
    };

    let created_at = base_date() + Duration::days(index as i64);
    let updated_at = created_at + Duration::days((index % 30) as i64);

    Team {
        id: format!("team-{:03}", index + 1),
        description: describe(&name),
        email: team_email(&code, entity),
        name,
        code,
        entity: entity.to_string(),
        manager: manager.to_string(),
        status,
        created_at,
        updated_at,
    }
}

fn base_date() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn team_code(index: usize) -> String {
    let prefix = CODE_PREFIXES[index % CODE_PREFIXES.len()];
    format!("{}{:02}", prefix, index + 1)
}

fn team_email(code: &str, entity: &str) -> String {
    let domain: String = entity
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("{}@{}.com", code.to_lowercase(), domain)
}

/// Pick a description template from a 32-bit rolling hash of the name.
fn describe(name: &str) -> String {
    let hash = name
        .encode_utf16()
        .fold(0i32, |h, c| h.wrapping_shl(5).wrapping_sub(h).wrapping_add(c as i32));
    let index = (hash as i64).unsigned_abs() as usize % DESCRIPTION_TEMPLATES.len();
    DESCRIPTION_TEMPLATES[index].replacen("{}", &name.to_lowercase(), 1)
}

pub fn entity_options() -> Vec<SelectOption> {
    ENTITIES.iter().map(|e| SelectOption::same(e)).collect()
}

pub fn manager_options() -> Vec<SelectOption> {
    MANAGERS.iter().map(|m| SelectOption::same(m)).collect()
}

pub fn status_options() -> Vec<SelectOption> {
    TeamStatus::ALL
        .iter()
        .map(|s| SelectOption::same(s.as_str()))
        .collect()
}
