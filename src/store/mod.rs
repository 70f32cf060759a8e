//! In-memory team store.
//!
//! Owns the collection plus its loading/error flags. Mutations validate first,
//! then wait out a simulated backend latency before touching the collection.
//! Overlapping calls are not serialized: each one releases the lock during
//! its latency window, so two creates may interleave and both append, and an
//! update racing a delete on the same id resolves in lock-acquisition order.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::{StoreStatus, Team, TeamFormData, TeamStats, TeamStatus};
use crate::seed::seed_teams;
use crate::validation::validate_team;

const NOT_FOUND_MESSAGE: &str = "Team not found";

#[derive(Debug, Default)]
struct StoreState {
    teams: Vec<Team>,
    last_error: Option<String>,
    revision: i64,
}

/// Store for all team data operations.
#[derive(Debug)]
pub struct TeamStore {
    state: RwLock<StoreState>,
    /// Mutations currently inside their latency window
    pending: AtomicUsize,
    latency: Duration,
}

/// Marks one mutation as in flight until dropped, including when the
/// calling future is cancelled mid-latency.
struct PendingGuard<'a>(&'a AtomicUsize);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl TeamStore {
    pub fn new(teams: Vec<Team>, latency: Duration) -> Self {
        Self {
            state: RwLock::new(StoreState {
                teams,
                ..Default::default()
            }),
            pending: AtomicUsize::new(0),
            latency,
        }
    }

    /// Store pre-filled with `count` generated teams.
    pub fn seeded(count: usize, latency: Duration) -> Self {
        Self::new(seed_teams(count), latency)
    }

    // ==================== READS ====================

    pub async fn snapshot(&self) -> Vec<Team> {
        self.state.read().await.teams.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.teams.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.teams.is_empty()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Team> {
        self.state
            .read()
            .await
            .teams
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub async fn is_loading(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    pub async fn revision(&self) -> i64 {
        self.state.read().await.revision
    }

    pub async fn status(&self) -> StoreStatus {
        let state = self.state.read().await;
        StoreStatus {
            is_loading: self.pending.load(Ordering::SeqCst) > 0,
            last_error: state.last_error.clone(),
            revision_id: state.revision,
            total: state.teams.len(),
        }
    }

    pub async fn active_teams(&self) -> Vec<Team> {
        self.select(|t| t.status == TeamStatus::Active).await
    }

    pub async fn teams_by_entity(&self, entity: &str) -> Vec<Team> {
        self.select(|t| t.entity == entity).await
    }

    pub async fn teams_by_manager(&self, manager: &str) -> Vec<Team> {
        self.select(|t| t.manager == manager).await
    }

    pub async fn stats(&self) -> TeamStats {
        let state = self.state.read().await;
        let active = state
            .teams
            .iter()
            .filter(|t| t.status == TeamStatus::Active)
            .count();
        let entities: HashSet<&str> = state.teams.iter().map(|t| t.entity.as_str()).collect();
        let managers: HashSet<&str> = state.teams.iter().map(|t| t.manager.as_str()).collect();

        TeamStats {
            total: state.teams.len(),
            active,
            inactive: state.teams.len() - active,
            entities: entities.len(),
            managers: managers.len(),
        }
    }

    async fn select(&self, predicate: impl Fn(&Team) -> bool) -> Vec<Team> {
        self.state
            .read()
            .await
            .teams
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }

    // ==================== MUTATIONS ====================

    /// Validate and append a new team.
    pub async fn create(&self, form: &TeamFormData) -> Result<Team, AppError> {
        let form = self.validated(form).await?;
        let _pending = self.begin().await;
        self.simulate_latency().await;

        let mut state = self.state.write().await;
        let now = Utc::now();
        let team = Team {
            id: format!("team-{}", uuid::Uuid::new_v4().simple()),
            name: form.name,
            description: form.description,
            code: form.code,
            email: form.email,
            entity: form.entity,
            manager: form.manager,
            status: parse_status(&form.status),
            created_at: now,
            updated_at: now,
        };
        state.teams.push(team.clone());
        state.revision += 1;

        tracing::info!(id = %team.id, code = %team.code, "Created team");
        Ok(team)
    }

    /// Validate and replace every editable field of an existing team.
    pub async fn update(&self, id: &str, form: &TeamFormData) -> Result<Team, AppError> {
        let form = self.validated(form).await?;
        let _pending = self.begin().await;
        self.simulate_latency().await;

        let mut state = self.state.write().await;

        let Some(position) = state.teams.iter().position(|t| t.id == id) else {
            tracing::warn!(id, "Update of unknown team");
            state.last_error = Some(NOT_FOUND_MESSAGE.to_string());
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        };

        let existing = &mut state.teams[position];
        existing.name = form.name;
        existing.description = form.description;
        existing.code = form.code;
        existing.email = form.email;
        existing.entity = form.entity;
        existing.manager = form.manager;
        existing.status = parse_status(&form.status);
        existing.updated_at = Utc::now().max(existing.created_at);
        let updated = existing.clone();
        state.revision += 1;

        tracing::info!(id, "Updated team");
        Ok(updated)
    }

    /// Remove a team.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _pending = self.begin().await;
        self.simulate_latency().await;

        let mut state = self.state.write().await;

        let Some(position) = state.teams.iter().position(|t| t.id == id) else {
            tracing::warn!(id, "Delete of unknown team");
            state.last_error = Some(NOT_FOUND_MESSAGE.to_string());
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        };

        state.teams.remove(position);
        state.revision += 1;

        tracing::info!(id, "Deleted team");
        Ok(())
    }

    pub async fn clear_error(&self) {
        self.state.write().await.last_error = None;
    }

    /// Trimmed copy of `form`, or the validation failure mirrored into `last_error`.
    async fn validated(&self, form: &TeamFormData) -> Result<TeamFormData, AppError> {
        let form = form.trimmed();
        if let Err(errors) = validate_team(&form) {
            tracing::debug!(error = %errors.summary(), "Rejected team form");
            self.state.write().await.last_error = Some(errors.summary());
            return Err(AppError::Validation(errors));
        }
        Ok(form)
    }

    async fn begin(&self) -> PendingGuard<'_> {
        self.pending.fetch_add(1, Ordering::SeqCst);
        let guard = PendingGuard(&self.pending);
        self.state.write().await.last_error = None;
        guard
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn parse_status(value: &str) -> TeamStatus {
    // Validation has already rejected anything else
    TeamStatus::parse(value).unwrap_or(TeamStatus::Active)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn qa_form() -> TeamFormData {
        TeamFormData {
            name: "QA Team".to_string(),
            description: "Handles quality assurance tasks daily".to_string(),
            code: "QA1".to_string(),
            email: "qa@bank.com".to_string(),
            entity: "Access Bank Nigeria".to_string(),
            manager: "Jane Doe".to_string(),
            status: "Active".to_string(),
        }
    }

    fn store(count: usize) -> TeamStore {
        TeamStore::seeded(count, Duration::ZERO)
    }

    #[tokio::test]
    async fn test_create_appends_with_fresh_id() {
        let store = store(5);
        let before: Vec<String> = store.snapshot().await.into_iter().map(|t| t.id).collect();

        let team = store.create(&qa_form()).await.unwrap();

        assert!(!before.contains(&team.id));
        assert!(team.id.starts_with("team-"));
        assert_eq!(team.created_at, team.updated_at);
        assert_eq!(team.status, TeamStatus::Active);
        assert_eq!(store.len().await, 6);
        assert_eq!(store.snapshot().await.last().unwrap().id, team.id);
        assert_eq!(store.revision().await, 1);
        assert!(!store.is_loading().await);
        assert!(store.last_error().await.is_none());
    }

    #[tokio::test]
    async fn test_create_stores_trimmed_values() {
        let store = store(0);
        assert!(store.is_empty().await);
        let mut form = qa_form();
        form.name = "  QA Team  ".to_string();
        let team = store.create(&form).await.unwrap();
        assert_eq!(team.name, "QA Team");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_form_without_mutation() {
        let store = store(3);
        let mut form = qa_form();
        form.code = "qa1".to_string();

        let err = store.create(&form).await.unwrap_err();

        match &err {
            AppError::Validation(errors) => assert_eq!(
                errors.get("code"),
                Some("Code must contain only uppercase letters and numbers")
            ),
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(store.len().await, 3);
        assert_eq!(
            store.last_error().await.as_deref(),
            Some("Code must contain only uppercase letters and numbers")
        );
        assert!(!store.is_loading().await);
        assert_eq!(store.revision().await, 0);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_preserves_identity() {
        let store = store(3);
        let original = store.get_by_id("team-002").await.unwrap();

        let mut form = qa_form();
        form.status = "Inactive".to_string();
        let updated = store.update("team-002", &form).await.unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(updated.name, "QA Team");
        assert_eq!(updated.status, TeamStatus::Inactive);
        assert_eq!(store.get_by_id("team-002").await.unwrap(), updated);
        // Position in stored order is unchanged
        assert_eq!(store.snapshot().await[1].id, "team-002");
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_form_without_mutation() {
        let store = store(3);
        let original = store.get_by_id("team-002").await.unwrap();
        let mut form = qa_form();
        form.code = "qa1".to_string();

        let err = store.update("team-002", &form).await.unwrap_err();

        match &err {
            AppError::Validation(errors) => assert_eq!(
                errors.get("code"),
                Some("Code must contain only uppercase letters and numbers")
            ),
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(store.get_by_id("team-002").await.unwrap(), original);
        assert_eq!(
            store.last_error().await.as_deref(),
            Some("Code must contain only uppercase letters and numbers")
        );
        assert_eq!(store.revision().await, 0);
        assert!(!store.is_loading().await);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = store(4);
        let err = store.update("team-999", &qa_form()).await.unwrap_err();
        assert_eq!(err, AppError::NotFound("Team not found".to_string()));
        assert_eq!(store.len().await, 4);
        assert_eq!(store.last_error().await.as_deref(), Some("Team not found"));
        assert!(!store.is_loading().await);
    }

    #[tokio::test]
    async fn test_delete_then_lookup() {
        let store = store(4);
        store.delete("team-003").await.unwrap();
        assert!(store.get_by_id("team-003").await.is_none());
        assert_eq!(store.len().await, 3);

        let err = store.delete("team-003").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_clear_error_only_touches_error() {
        let store = store(2);
        let _ = store.delete("missing").await;
        let revision = store.revision().await;
        assert!(store.last_error().await.is_some());

        store.clear_error().await;

        assert!(store.last_error().await.is_none());
        assert_eq!(store.len().await, 2);
        assert_eq!(store.revision().await, revision);
    }

    #[tokio::test]
    async fn test_successful_mutation_clears_stale_error() {
        let store = store(2);
        let _ = store.delete("missing").await;
        store.create(&qa_form()).await.unwrap();
        assert!(store.last_error().await.is_none());
    }

    #[tokio::test]
    async fn test_loading_visible_during_latency() {
        let store = Arc::new(TeamStore::seeded(1, Duration::from_millis(50)));
        let task = {
            let store = store.clone();
            tokio::spawn(async move { store.create(&qa_form()).await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(store.is_loading().await);
        assert_eq!(store.len().await, 1);

        task.await.unwrap().unwrap();
        assert!(!store.is_loading().await);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_cancelled_create_clears_loading() {
        let store = TeamStore::seeded(1, Duration::from_millis(200));

        let outcome =
            tokio::time::timeout(Duration::from_millis(20), store.create(&qa_form())).await;
        assert!(outcome.is_err());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(!store.is_loading().await);
        assert!(!store.status().await.is_loading);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.revision().await, 0);
    }

    #[tokio::test]
    async fn test_cancelled_delete_leaves_other_mutation_loading() {
        let store = Arc::new(TeamStore::seeded(2, Duration::from_millis(100)));
        let task = {
            let store = store.clone();
            tokio::spawn(async move { store.delete("team-001").await })
        };

        let dropped =
            tokio::time::timeout(Duration::from_millis(10), store.delete("team-002")).await;
        assert!(dropped.is_err());
        assert!(store.is_loading().await);

        task.await.unwrap().unwrap();
        assert!(!store.is_loading().await);
        assert_eq!(store.len().await, 1);
        assert!(store.get_by_id("team-002").await.is_some());
    }

    #[tokio::test]
    async fn test_overlapping_creates_both_append() {
        let store = TeamStore::seeded(0, Duration::from_millis(20));
        let first = qa_form();
        let mut second = qa_form();
        second.code = "QA2".to_string();

        let (a, b) = tokio::join!(store.create(&first), store.create(&second));

        assert_ne!(a.unwrap().id, b.unwrap().id);
        assert_eq!(store.len().await, 2);
        assert_eq!(store.revision().await, 2);
    }

    #[tokio::test]
    async fn test_selectors_and_stats() {
        let store = store(520);
        let stats = store.stats().await;
        assert_eq!(stats.total, 520);
        assert_eq!(stats.inactive, 52);
        assert_eq!(stats.active, 468);
        assert_eq!(stats.entities, 20);
        assert_eq!(stats.managers, 30);

        assert_eq!(store.active_teams().await.len(), 468);
        assert_eq!(store.teams_by_entity("Access Bank Ghana").await.len(), 26);
        assert!(store.teams_by_manager("Jane Doe").await.is_empty());
        assert_eq!(store.teams_by_manager("Joshua Gladness").await.len(), 18);
    }
}
