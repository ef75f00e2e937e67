//! Store controller: the single owner of application state
//!
//! Every mutation goes through one of the operations below. Update and
//! delete on an unknown id are silent no-ops; only `login` can fail.

use chrono::Utc;
use tracing::{debug, info, warn};

use super::AppState;
use crate::application::identity::{CredentialTable, Credentials};
use crate::config::AppConfig;
use crate::domain::{
    AuthError, AuthResult, Container, CreateContainerDto, CreateFeedbackDto, CreateUserDto,
    Feedback, FeedbackStatus, Theme, UpdateContainerDto, UpdateFeedbackDto, UpdateUserDto, User,
};
use crate::infrastructure::preferences::THEME_KEY;
use crate::infrastructure::{
    FilePreferences, Fixtures, InMemoryPreferences, PreferenceStore,
};
use crate::shared::id::unique_id;
use crate::shared::time::now_after;
use crate::shared::InfraError;

pub struct StoreController {
    state: AppState,
    credentials: CredentialTable,
    preferences: Box<dyn PreferenceStore>,
}

impl StoreController {
    /// Wrap `state` and re-apply the theme saved in `preferences`, if any.
    pub fn new(
        mut state: AppState,
        credentials: CredentialTable,
        preferences: Box<dyn PreferenceStore>,
    ) -> Self {
        if let Some(theme) = load_theme(preferences.as_ref()) {
            state.theme = theme;
        }
        Self {
            state,
            credentials,
            preferences,
        }
    }

    /// Build a controller the way the console starts one: seed collections
    /// and credentials per `[seed]`, theme storage per `[preferences]`.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, InfraError> {
        let cost = cfg.security.bcrypt_cost;
        let (state, credentials) = if cfg.seed.load_fixtures {
            let fixtures = Fixtures::load();
            let hashes = fixtures.credentials(&cfg.seed.default_password, cost)?;
            info!(
                users = fixtures.users.len(),
                containers = fixtures.containers.len(),
                warehouses = fixtures.warehouses.len(),
                feedbacks = fixtures.feedbacks.len(),
                "Loaded fixtures"
            );
            (
                AppState::from_fixtures(fixtures),
                CredentialTable::with_hashes(hashes, cost)?,
            )
        } else {
            (AppState::default(), CredentialTable::new(cost)?)
        };

        let preferences: Box<dyn PreferenceStore> = if cfg.preferences.persist {
            let path = cfg.preferences.resolved_path();
            debug!(path = %path.display(), "Using preferences file");
            Box::new(FilePreferences::new(path))
        } else {
            Box::new(InMemoryPreferences::new())
        };

        Ok(Self::new(state, credentials, preferences))
    }

    // ── Snapshot ───────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.current_user.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    // ── Session ────────────────────────────────────────────────

    /// Authenticate against the user collection and the credential table.
    ///
    /// Unknown username, inactive account and wrong secret all return the
    /// same error; state is left untouched on failure.
    pub fn login(&mut self, credentials: &Credentials) -> AuthResult<User> {
        let user = self
            .state
            .users
            .iter()
            .find(|u| u.username == credentials.username && u.is_active);

        let Some(user) = user else {
            debug!(username = %credentials.username, "Login rejected: no active user");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.credentials.verify(&user.id, &credentials.password) {
            debug!(username = %credentials.username, "Login rejected: bad secret");
            return Err(AuthError::InvalidCredentials);
        }

        let user = user.clone();
        info!(user_id = %user.id, username = %user.username, role = %user.role, "Logged in");
        self.state.current_user = Some(user.clone());
        Ok(user)
    }

    /// Clear the session. Callers should send the user back to the default
    /// tab.
    pub fn logout(&mut self) {
        if let Some(user) = self.state.current_user.take() {
            info!(username = %user.username, "Logged out");
        }
    }

    // ── Theme ──────────────────────────────────────────────────

    /// Flip light/dark and persist the result.
    ///
    /// A failed write is logged; the in-memory theme still flips.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.theme.toggled();
        self.state.theme = theme;
        if let Err(e) = self.preferences.set(THEME_KEY, theme.as_str()) {
            warn!(error = %e, theme = %theme, "Failed to persist theme");
        }
        debug!(theme = %theme, "Theme toggled");
        theme
    }

    // ── Users ──────────────────────────────────────────────────

    pub fn create_user(&mut self, dto: CreateUserDto) -> User {
        let users = &self.state.users;
        let id = unique_id(|candidate| users.iter().any(|u| u.id == candidate));

        let user = User {
            id,
            username: dto.username,
            email: dto.email,
            role: dto.role,
            name: dto.name,
            created_at: Utc::now(),
            is_active: dto.is_active,
        };

        if let Some(ref password) = dto.password {
            self.store_secret(&user.id, password);
        }

        info!(user_id = %user.id, username = %user.username, role = %user.role, "User created");
        self.state.users.push(user.clone());
        user
    }

    /// Merge `patch` into the user with `id`. Returns the updated record,
    /// or `None` when no user has that id.
    pub fn update_user(&mut self, id: &str, patch: UpdateUserDto) -> Option<User> {
        let Some(user) = self.state.users.iter_mut().find(|u| u.id == id) else {
            debug!(user_id = id, "update_user: no such user");
            return None;
        };

        patch.apply_to(user);
        let updated = user.clone();

        if let Some(ref password) = patch.password {
            self.store_secret(id, password);
        }

        if self
            .state
            .current_user
            .as_ref()
            .is_some_and(|current| current.id == id)
        {
            self.state.current_user = Some(updated.clone());
        }

        if !patch.is_empty() {
            info!(user_id = id, "User updated");
        }
        Some(updated)
    }

    /// Remove the user with `id` along with its secret. Returns whether a
    /// record was removed.
    pub fn delete_user(&mut self, id: &str) -> bool {
        let before = self.state.users.len();
        self.state.users.retain(|u| u.id != id);
        let removed = self.state.users.len() < before;

        if removed {
            self.credentials.remove(id);
            info!(user_id = id, "User deleted");
        } else {
            debug!(user_id = id, "delete_user: no such user");
        }
        removed
    }

    // ── Containers ─────────────────────────────────────────────

    pub fn create_container(&mut self, dto: CreateContainerDto) -> Container {
        let containers = &self.state.containers;
        let id = unique_id(|candidate| containers.iter().any(|c| c.id == candidate));
        let now = Utc::now();

        let container = Container {
            id,
            code: dto.code,
            container_type: dto.container_type,
            status: dto.status,
            warehouse_id: dto.warehouse_id,
            notes: dto.notes,
            location: dto.location,
            weight: dto.weight,
            dimensions: dto.dimensions,
            created_at: now,
            updated_at: now,
            last_updated_by: dto.last_updated_by,
        };

        info!(container_id = %container.id, code = %container.code, "Container created");
        self.state.containers.push(container.clone());
        container
    }

    /// Merge `patch` into the container with `id` and stamp `updated_at`.
    pub fn update_container(&mut self, id: &str, patch: UpdateContainerDto) -> Option<Container> {
        let Some(container) = self.state.containers.iter_mut().find(|c| c.id == id) else {
            debug!(container_id = id, "update_container: no such container");
            return None;
        };

        patch.apply_to(container);
        container.updated_at = now_after(container.updated_at);

        info!(
            container_id = id,
            status = %container.status,
            by = %container.last_updated_by,
            "Container updated"
        );
        Some(container.clone())
    }

    pub fn delete_container(&mut self, id: &str) -> bool {
        let before = self.state.containers.len();
        self.state.containers.retain(|c| c.id != id);
        let removed = self.state.containers.len() < before;

        if removed {
            info!(container_id = id, "Container deleted");
        } else {
            debug!(container_id = id, "delete_container: no such container");
        }
        removed
    }

    // ── Feedback ───────────────────────────────────────────────

    /// Append a new feedback item. It always starts out pending.
    pub fn create_feedback(&mut self, dto: CreateFeedbackDto) -> Feedback {
        let feedbacks = &self.state.feedbacks;
        let id = unique_id(|candidate| feedbacks.iter().any(|f| f.id == candidate));

        let feedback = Feedback {
            id,
            user_id: dto.user_id,
            user_name: dto.user_name,
            container_id: dto.container_id.filter(|c| !c.is_empty()),
            message: dto.message,
            feedback_type: dto.feedback_type,
            status: FeedbackStatus::Pending,
            created_at: Utc::now(),
            response: None,
            responded_by: None,
            responded_at: None,
        };

        info!(
            feedback_id = %feedback.id,
            kind = feedback.feedback_type.as_str(),
            user_id = %feedback.user_id,
            "Feedback submitted"
        );
        self.state.feedbacks.push(feedback.clone());
        feedback
    }

    /// Apply `patch` to the feedback with `id`.
    ///
    /// Status only moves forward; a backwards or repeated status is
    /// ignored. Response, responder and response time are written together,
    /// and only on the transition to resolved with a response present. The
    /// responder defaults to the logged-in user; with no responder the
    /// status still moves but the response is dropped.
    pub fn update_feedback(&mut self, id: &str, patch: UpdateFeedbackDto) -> Option<Feedback> {
        let responder = patch.responded_by.clone().or_else(|| {
            self.state
                .current_user
                .as_ref()
                .map(|u| u.username.clone())
        });

        let Some(feedback) = self.state.feedbacks.iter_mut().find(|f| f.id == id) else {
            debug!(feedback_id = id, "update_feedback: no such feedback");
            return None;
        };

        if let Some(next) = patch.status {
            if feedback.status.can_transition_to(next) {
                if next == FeedbackStatus::Resolved {
                    match (patch.response, responder) {
                        (Some(response), Some(by)) => {
                            feedback.response = Some(response);
                            feedback.responded_by = Some(by);
                            feedback.responded_at = Some(Utc::now());
                        }
                        (Some(_), None) => {
                            warn!(feedback_id = id, "Dropping feedback response with no responder");
                        }
                        (None, _) => {}
                    }
                }
                info!(
                    feedback_id = id,
                    from = feedback.status.as_str(),
                    to = next.as_str(),
                    "Feedback status changed"
                );
                feedback.status = next;
            } else {
                debug!(
                    feedback_id = id,
                    current = feedback.status.as_str(),
                    requested = next.as_str(),
                    "Ignoring non-forward feedback transition"
                );
            }
        }

        Some(feedback.clone())
    }

    pub fn mark_feedback_reviewed(&mut self, id: &str) -> Option<Feedback> {
        self.update_feedback(id, UpdateFeedbackDto::reviewed())
    }

    /// Resolve with a response from the logged-in user. A blank response
    /// changes nothing; otherwise the text is stored as given.
    pub fn respond_to_feedback(&mut self, id: &str, response: &str) -> Option<Feedback> {
        if response.trim().is_empty() {
            debug!(feedback_id = id, "Ignoring blank feedback response");
            return None;
        }
        self.update_feedback(id, UpdateFeedbackDto::resolved(response))
    }

    // ── Helpers ────────────────────────────────────────────────

    fn store_secret(&mut self, user_id: &str, password: &str) {
        if let Err(e) = self.credentials.set(user_id, password) {
            warn!(user_id, error = %e, "Failed to hash password; account cannot log in");
        }
    }
}

fn load_theme(preferences: &dyn PreferenceStore) -> Option<Theme> {
    match preferences.get(THEME_KEY) {
        Ok(Some(raw)) => {
            let theme = Theme::from_str(&raw);
            if theme.is_none() {
                warn!(value = %raw, "Ignoring unknown stored theme");
            }
            theme
        }
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "Failed to read stored theme");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContainerStatus, Dimensions, FeedbackType, UserRole};
    use crate::infrastructure::crypto::password::MIN_COST;

    fn controller() -> StoreController {
        controller_with(InMemoryPreferences::new())
    }

    fn controller_with(preferences: InMemoryPreferences) -> StoreController {
        let fixtures = Fixtures::load();
        let hashes = fixtures.credentials("password", MIN_COST).unwrap();
        StoreController::new(
            AppState::from_fixtures(fixtures),
            CredentialTable::with_hashes(hashes, MIN_COST).unwrap(),
            Box::new(preferences),
        )
    }

    fn new_user(username: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.to_string(),
            email: format!("{username}@container.com"),
            role: UserRole::Staff,
            name: "New Hire".to_string(),
            is_active: true,
            password: Some("s3cret".to_string()),
        }
    }

    fn new_container(code: &str) -> CreateContainerDto {
        CreateContainerDto {
            code: code.to_string(),
            container_type: "20ft Standard".to_string(),
            status: ContainerStatus::InTransit,
            warehouse_id: "1".to_string(),
            notes: String::new(),
            location: "Port".to_string(),
            weight: 12000.0,
            dimensions: Dimensions::default(),
            last_updated_by: "admin".to_string(),
        }
    }

    fn complaint() -> CreateFeedbackDto {
        CreateFeedbackDto {
            user_id: "3".to_string(),
            user_name: "Tran Thi B".to_string(),
            container_id: None,
            message: "Late again".to_string(),
            feedback_type: FeedbackType::Complaint,
        }
    }

    // ── Session ──

    #[test]
    fn admin_login_sets_identity() {
        let mut store = controller();
        let user = store.login(&Credentials::new("admin", "password")).unwrap();

        let fixture = Fixtures::load().users.remove(0);
        assert_eq!(user, fixture);
        assert_eq!(store.current_user(), Some(&fixture));
    }

    #[test]
    fn wrong_secret_fails_without_touching_state() {
        let mut store = controller();
        let before = store.state().clone();

        let err = store.login(&Credentials::new("admin", "wrong")).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(store.current_user().is_none());
        assert_eq!(store.state().users, before.users);
    }

    #[test]
    fn unknown_and_inactive_users_fail_the_same_way() {
        let mut store = controller();
        let unknown = store.login(&Credentials::new("ghost", "password")).unwrap_err();

        store.update_user("2", UpdateUserDto { is_active: Some(false), ..Default::default() });
        let inactive = store.login(&Credentials::new("staff1", "password")).unwrap_err();

        assert_eq!(unknown, inactive);
        assert_eq!(unknown.to_string(), "Invalid username or password");
    }

    #[test]
    fn logout_clears_identity() {
        let mut store = controller();
        store.login(&Credentials::new("user1", "password")).unwrap();
        store.logout();
        assert!(!store.state().is_logged_in());
    }

    #[test]
    fn created_user_logs_in_with_own_secret() {
        let mut store = controller();
        store.create_user(new_user("staff2"));

        assert!(store.login(&Credentials::new("staff2", "password")).is_err());
        assert!(store.login(&Credentials::new("staff2", "s3cret")).is_ok());
    }

    // ── Users ──

    #[test]
    fn create_user_appends_with_fresh_id() {
        let mut store = controller();
        let before = store.state().users.len();

        let user = store.create_user(new_user("staff2"));

        let users = &store.state().users;
        assert_eq!(users.len(), before + 1);
        assert_eq!(users.last(), Some(&user));
        assert_eq!(users.iter().filter(|u| u.id == user.id).count(), 1);
    }

    #[test]
    fn update_user_changes_only_target() {
        let mut store = controller();
        let before = store.state().users.clone();

        let updated = store
            .update_user("3", UpdateUserDto { name: Some("Renamed".into()), ..Default::default() })
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.created_at, before[2].created_at);
        assert_eq!(&store.state().users[..2], &before[..2]);
    }

    #[test]
    fn empty_user_patch_is_identity() {
        let mut store = controller();
        let before = store.state().users.clone();

        let same = store.update_user("1", UpdateUserDto::default()).unwrap();

        assert_eq!(same, before[0]);
        assert_eq!(store.state().users, before);
    }

    #[test]
    fn update_refreshes_session_identity() {
        let mut store = controller();
        store.login(&Credentials::new("admin", "password")).unwrap();
        store.update_user("1", UpdateUserDto { email: Some("root@container.com".into()), ..Default::default() });
        assert_eq!(store.current_user().unwrap().email, "root@container.com");
    }

    #[test]
    fn update_user_password_rotates_secret() {
        let mut store = controller();
        store.update_user("3", UpdateUserDto { password: Some("fresh".into()), ..Default::default() });
        assert!(store.login(&Credentials::new("user1", "password")).is_err());
        assert!(store.login(&Credentials::new("user1", "fresh")).is_ok());
    }

    #[test]
    fn update_unknown_user_is_noop() {
        let mut store = controller();
        let before = store.state().users.clone();
        assert!(store.update_user("missing", UpdateUserDto { name: Some("x".into()), ..Default::default() }).is_none());
        assert_eq!(store.state().users, before);
    }

    #[test]
    fn delete_user_keeps_order_of_the_rest() {
        let mut store = controller();
        assert!(store.delete_user("2"));

        let ids: Vec<_> = store.state().users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(store.login(&Credentials::new("staff1", "password")).is_err());
        assert!(!store.delete_user("2"));
    }

    // ── Containers ──

    #[test]
    fn create_container_stamps_both_timestamps() {
        let mut store = controller();
        let container = store.create_container(new_container("CONT-004"));

        assert_eq!(container.created_at, container.updated_at);
        assert_eq!(store.state().containers.len(), 4);
        assert_eq!(store.state().container(&container.id), Some(&container));
    }

    #[test]
    fn update_container_bumps_updated_at() {
        let mut store = controller();
        let created = store.create_container(new_container("CONT-004"));

        let first = store
            .update_container(&created.id, UpdateContainerDto::status(ContainerStatus::Arrived, "staff1"))
            .unwrap();
        let second = store
            .update_container(&created.id, UpdateContainerDto::default())
            .unwrap();

        assert!(first.updated_at > created.updated_at);
        assert!(second.updated_at > first.updated_at);
        assert_eq!(first.status, ContainerStatus::Arrived);
        assert_eq!(first.last_updated_by, "staff1");
        assert_eq!(first.created_at, created.created_at);
    }

    #[test]
    fn update_container_leaves_others_alone() {
        let mut store = controller();
        let before = store.state().containers.clone();

        store.update_container("2", UpdateContainerDto { notes: Some("Inspected".into()), ..Default::default() });

        let after = &store.state().containers;
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].notes, "Inspected");
    }

    #[test]
    fn delete_container_filters_by_id() {
        let mut store = controller();
        assert!(store.delete_container("1"));
        assert!(!store.delete_container("1"));

        let codes: Vec<_> = store.state().containers.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CONT-002", "CONT-003"]);
    }

    // ── Feedback ──

    #[test]
    fn new_feedback_is_pending_without_container() {
        let mut store = controller();
        let feedback = store.create_feedback(complaint());

        assert_eq!(feedback.status, FeedbackStatus::Pending);
        assert_eq!(feedback.feedback_type, FeedbackType::Complaint);
        assert!(feedback.container_id.is_none());
        assert!(feedback.response.is_none());
        assert_eq!(store.state().feedbacks.len(), 3);
    }

    #[test]
    fn blank_container_id_is_unset() {
        let mut store = controller();
        let feedback = store.create_feedback(CreateFeedbackDto {
            container_id: Some(String::new()),
            ..complaint()
        });
        assert!(feedback.container_id.is_none());
    }

    #[test]
    fn resolved_feedback_cannot_go_back_to_reviewed() {
        let mut store = controller();
        store.login(&Credentials::new("staff1", "password")).unwrap();

        let resolved = store
            .update_feedback("1", UpdateFeedbackDto {
                status: Some(FeedbackStatus::Resolved),
                response: Some("ok".into()),
                responded_by: None,
            })
            .unwrap();
        assert_eq!(resolved.status, FeedbackStatus::Resolved);
        assert_eq!(resolved.response.as_deref(), Some("ok"));
        assert_eq!(resolved.responded_by.as_deref(), Some("staff1"));
        assert!(resolved.responded_at.is_some());

        let after = store.mark_feedback_reviewed("1").unwrap();
        assert_eq!(after.status, FeedbackStatus::Resolved);
        assert_eq!(after, resolved);
    }

    #[test]
    fn response_without_resolution_is_ignored() {
        let mut store = controller();
        let reviewed = store
            .update_feedback("1", UpdateFeedbackDto {
                status: Some(FeedbackStatus::Reviewed),
                response: Some("early".into()),
                responded_by: Some("admin".into()),
            })
            .unwrap();

        assert_eq!(reviewed.status, FeedbackStatus::Reviewed);
        assert!(reviewed.response.is_none());
        assert!(reviewed.responded_by.is_none());
        assert!(reviewed.responded_at.is_none());
    }

    #[test]
    fn respond_requires_text() {
        let mut store = controller();
        store.login(&Credentials::new("admin", "password")).unwrap();
        assert!(store.respond_to_feedback("1", "   ").is_none());
        assert_eq!(store.state().feedback("1").unwrap().status, FeedbackStatus::Pending);

        let done = store.respond_to_feedback("1", " On its way ").unwrap();
        assert_eq!(done.response.as_deref(), Some(" On its way "));
        assert_eq!(done.responded_by.as_deref(), Some("admin"));
    }

    #[test]
    fn response_without_session_or_responder_is_dropped() {
        let mut store = controller();
        let resolved = store.respond_to_feedback("1", "ok").unwrap();

        assert_eq!(resolved.status, FeedbackStatus::Resolved);
        assert!(resolved.response.is_none());
        assert!(resolved.responded_by.is_none());
        assert!(resolved.responded_at.is_none());
    }

    #[test]
    fn explicit_responder_works_without_session() {
        let mut store = controller();
        let resolved = store
            .update_feedback("1", UpdateFeedbackDto {
                status: Some(FeedbackStatus::Resolved),
                response: Some("ok".into()),
                responded_by: Some("staff1".into()),
            })
            .unwrap();

        assert_eq!(resolved.status, FeedbackStatus::Resolved);
        assert_eq!(resolved.response.as_deref(), Some("ok"));
        assert_eq!(resolved.responded_by.as_deref(), Some("staff1"));
        assert!(resolved.responded_at.is_some());
    }

    #[test]
    fn response_without_status_changes_nothing() {
        let mut store = controller();
        store.login(&Credentials::new("admin", "password")).unwrap();
        let only_response = || UpdateFeedbackDto {
            status: None,
            response: Some("late reply".into()),
            responded_by: None,
        };

        let before = store.state().feedback("1").unwrap().clone();
        assert_eq!(store.update_feedback("1", only_response()).unwrap(), before);

        let resolved = store.respond_to_feedback("1", "first").unwrap();
        assert_eq!(store.update_feedback("1", only_response()).unwrap(), resolved);
        assert_eq!(resolved.response.as_deref(), Some("first"));
    }

    #[test]
    fn update_unknown_feedback_is_noop() {
        let mut store = controller();
        assert!(store.mark_feedback_reviewed("nope").is_none());
    }

    // ── Theme ──

    #[test]
    fn stored_theme_is_reapplied() {
        let store = controller_with(InMemoryPreferences::new().with_value(THEME_KEY, "dark"));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn garbage_stored_theme_falls_back_to_light() {
        let store = controller_with(InMemoryPreferences::new().with_value(THEME_KEY, "neon"));
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn toggle_persists_across_controllers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let fixtures = Fixtures::load();
        let mut store = StoreController::new(
            AppState::from_fixtures(fixtures.clone()),
            CredentialTable::new(MIN_COST).unwrap(),
            Box::new(FilePreferences::new(&path)),
        );
        assert_eq!(store.toggle_theme(), Theme::Dark);

        let reopened = StoreController::new(
            AppState::from_fixtures(fixtures),
            CredentialTable::new(MIN_COST).unwrap(),
            Box::new(FilePreferences::new(&path)),
        );
        assert_eq!(reopened.theme(), Theme::Dark);
    }

    #[test]
    fn from_config_without_fixtures_is_empty() {
        let mut cfg = AppConfig::default();
        cfg.seed.load_fixtures = false;
        cfg.security.bcrypt_cost = MIN_COST;
        cfg.preferences.persist = false;

        let store = StoreController::from_config(&cfg).unwrap();
        assert!(store.state().users.is_empty());
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn from_config_rejects_bad_cost() {
        let mut cfg = AppConfig::default();
        cfg.security.bcrypt_cost = 99;
        cfg.preferences.persist = false;
        assert!(StoreController::from_config(&cfg).is_err());
    }
}
