//! Interactive console over a [`StoreController`]
//!
//! Stands in for the dashboard screens: each command reads or mutates the
//! store and prints the result as JSON. Role checks happen here, the same
//! way the screens hide buttons; the store itself does not enforce them.

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use container_dashboard::application::views::{
    visible_tabs, ContainerQuery, DashboardSummary, FeedbackQuery, ListQuery, Navigator,
    Permissions, Tab, UserQuery, WarehouseOverview,
};
use container_dashboard::domain::{
    AuthError, CreateContainerDto, CreateFeedbackDto, CreateUserDto, Dimensions,
    UpdateContainerDto, UpdateUserDto, User,
};
use container_dashboard::{Credentials, StoreController};

use crate::commands::{split_words, Command, Line};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("{0}")]
    Usage(String),

    #[error("Please log in first")]
    NotLoggedIn,

    #[error("Not allowed for your role: {0}")]
    Forbidden(&'static str),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("No {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a command produced
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

pub struct Console {
    store: StoreController,
    navigator: Navigator,
}

impl Console {
    pub fn new(store: StoreController) -> Self {
        Self {
            store,
            navigator: Navigator::new(),
        }
    }

    pub fn store(&self) -> &StoreController {
        &self.store
    }

    /// Read commands from `input` until EOF or `quit`.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> std::io::Result<()> {
        writeln!(out, "Container Dashboard console. Type 'help' for commands.")?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match self.execute(&line) {
                Ok(Reply::Output(text)) => writeln!(out, "{text}")?,
                Ok(Reply::Quit) => break,
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, line: &str) -> Result<Reply, ConsoleError> {
        let words = split_words(line);
        debug!(command = words.first().map(String::as_str).unwrap_or(""), "Console command");

        let parsed = match Line::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                let rendered = e.render().to_string().trim_end().to_string();
                return match e.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => text(rendered),
                    _ => Err(ConsoleError::Usage(rendered)),
                };
            }
        };
        self.dispatch(parsed.command)
    }

    fn dispatch(&mut self, command: Command) -> Result<Reply, ConsoleError> {
        match command {
            Command::Login { username, password } => {
                let user = self.store.login(&Credentials::new(username, password))?;
                self.navigator.reset();
                text(format!("Welcome, {} ({})", user.name, user.role))
            }
            Command::Logout => {
                self.store.logout();
                self.navigator.reset();
                text("Logged out")
            }
            Command::Whoami => {
                let user = self.require_user()?;
                let permissions = Permissions::for_role(user.role);
                json(&serde_json::json!({
                    "user": user,
                    "permissions": permissions,
                    "tab": self.navigator.active(),
                }))
            }
            Command::Theme => {
                let theme = self.store.toggle_theme();
                text(format!("Theme: {theme}"))
            }
            Command::Tabs => {
                let role = self.require_user()?.role;
                json(&visible_tabs(role))
            }
            Command::Tab { name } => {
                let tab = Tab::from_str(&name)
                    .ok_or_else(|| ConsoleError::Usage(format!("unknown tab '{name}'")))?;
                self.open(tab)?;
                text(format!("Tab: {}", tab.as_str()))
            }
            Command::Dashboard => {
                self.open(Tab::Dashboard)?;
                json(&DashboardSummary::compute(self.store.state()))
            }

            Command::Users { search, role } => {
                self.open(Tab::Users)?;
                let query = UserQuery { search, role };
                json(&query.apply(&self.store.state().users))
            }
            Command::UserAdd { username, email, name, role, password, inactive } => {
                self.open(Tab::Users)?;
                let dto = CreateUserDto {
                    username,
                    email,
                    role,
                    name,
                    is_active: !inactive,
                    password,
                };
                dto.validate()?;
                json(&self.store.create_user(dto))
            }
            Command::UserEdit { id, username, email, name, role, active, password } => {
                self.open(Tab::Users)?;
                let patch = UpdateUserDto {
                    username,
                    email,
                    role,
                    name,
                    is_active: active,
                    password,
                };
                patch.validate()?;
                let user = self
                    .store
                    .update_user(&id, patch)
                    .ok_or(ConsoleError::NotFound { entity: "user", id })?;
                json(&user)
            }
            Command::UserDel { id } => {
                self.open(Tab::Users)?;
                if !self.store.delete_user(&id) {
                    return Err(ConsoleError::NotFound { entity: "user", id });
                }
                text(format!("Deleted user {id}"))
            }

            Command::Containers { search, status } => {
                self.open(Tab::Containers)?;
                let query = ContainerQuery { search, status };
                json(&query.apply(&self.store.state().containers))
            }
            Command::Container { id } => {
                self.open(Tab::Containers)?;
                let container = self
                    .store
                    .state()
                    .container(&id)
                    .ok_or_else(|| ConsoleError::NotFound { entity: "container", id: id.clone() })?;
                json(container)
            }
            Command::ContainerAdd {
                code,
                container_type,
                status,
                warehouse,
                location,
                notes,
                weight,
                length,
                width,
                height,
            } => {
                let user = self.open(Tab::Containers)?;
                if !Permissions::for_role(user.role).create_container {
                    return Err(ConsoleError::Forbidden("create container"));
                }
                let dto = CreateContainerDto {
                    code,
                    container_type,
                    status,
                    warehouse_id: warehouse,
                    notes,
                    location,
                    weight,
                    dimensions: Dimensions { length, width, height },
                    last_updated_by: user.username,
                };
                dto.validate()?;
                json(&self.store.create_container(dto))
            }
            Command::ContainerEdit { id, code, container_type, warehouse, location, notes, weight } => {
                let user = self.open(Tab::Containers)?;
                if !Permissions::for_role(user.role).edit_container {
                    return Err(ConsoleError::Forbidden("edit container"));
                }
                let patch = UpdateContainerDto {
                    code,
                    container_type,
                    warehouse_id: warehouse,
                    location,
                    notes,
                    weight,
                    last_updated_by: Some(user.username),
                    ..UpdateContainerDto::default()
                };
                patch.validate()?;
                let container = self
                    .store
                    .update_container(&id, patch)
                    .ok_or(ConsoleError::NotFound { entity: "container", id })?;
                json(&container)
            }
            Command::ContainerStatus { id, status } => {
                let user = self.open(Tab::Containers)?;
                if !Permissions::for_role(user.role).edit_container {
                    return Err(ConsoleError::Forbidden("change container status"));
                }
                let container = self
                    .store
                    .update_container(&id, UpdateContainerDto::status(status, user.username))
                    .ok_or(ConsoleError::NotFound { entity: "container", id })?;
                json(&container)
            }
            Command::ContainerDel { id } => {
                let user = self.open(Tab::Containers)?;
                if !Permissions::for_role(user.role).delete_container {
                    return Err(ConsoleError::Forbidden("delete container"));
                }
                if !self.store.delete_container(&id) {
                    return Err(ConsoleError::NotFound { entity: "container", id });
                }
                text(format!("Deleted container {id}"))
            }

            Command::Warehouses => {
                self.open(Tab::Warehouses)?;
                json(&WarehouseOverview::compute(&self.store.state().warehouses))
            }

            Command::Feedback { search, status, feedback_type } => {
                self.open(Tab::Feedback)?;
                let query = FeedbackQuery { search, status, feedback_type };
                json(&query.apply(&self.store.state().feedbacks))
            }
            Command::FeedbackAdd { feedback_type, container, message } => {
                let user = self.open(Tab::Feedback)?;
                let dto = CreateFeedbackDto {
                    user_id: user.id,
                    user_name: user.name,
                    container_id: container,
                    message: message.join(" "),
                    feedback_type,
                };
                dto.validate()?;
                json(&self.store.create_feedback(dto))
            }
            Command::FeedbackReview { id } => {
                let user = self.open(Tab::Feedback)?;
                if !Permissions::for_role(user.role).respond_feedback {
                    return Err(ConsoleError::Forbidden("review feedback"));
                }
                let feedback = self
                    .store
                    .mark_feedback_reviewed(&id)
                    .ok_or(ConsoleError::NotFound { entity: "feedback", id })?;
                json(&feedback)
            }
            Command::FeedbackRespond { id, response } => {
                let user = self.open(Tab::Feedback)?;
                if !Permissions::for_role(user.role).respond_feedback {
                    return Err(ConsoleError::Forbidden("respond to feedback"));
                }
                let response = response.join(" ");
                if response.trim().is_empty() {
                    return Err(ConsoleError::Usage("response must not be blank".into()));
                }
                let feedback = self
                    .store
                    .respond_to_feedback(&id, &response)
                    .ok_or(ConsoleError::NotFound { entity: "feedback", id })?;
                json(&feedback)
            }

            Command::Quit => Ok(Reply::Quit),
        }
    }

    fn require_user(&self) -> Result<User, ConsoleError> {
        self.store.current_user().cloned().ok_or(ConsoleError::NotLoggedIn)
    }

    /// Switch to `tab` for the logged-in user and hand back that user.
    fn open(&mut self, tab: Tab) -> Result<User, ConsoleError> {
        let user = self.require_user()?;
        if !self.navigator.select(tab, user.role) {
            return Err(ConsoleError::Forbidden("this tab"));
        }
        Ok(user)
    }
}

fn text(s: impl Into<String>) -> Result<Reply, ConsoleError> {
    Ok(Reply::Output(s.into()))
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<Reply, ConsoleError> {
    Ok(Reply::Output(serde_json::to_string_pretty(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use container_dashboard::infrastructure::crypto::password::MIN_COST;
    use container_dashboard::AppConfig;

    fn console() -> Console {
        let mut cfg = AppConfig::default();
        cfg.security.bcrypt_cost = MIN_COST;
        cfg.preferences.persist = false;
        Console::new(StoreController::from_config(&cfg).unwrap())
    }

    fn output(reply: Reply) -> String {
        match reply {
            Reply::Output(s) => s,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn commands_need_a_session() {
        let mut c = console();
        assert!(matches!(c.execute("containers"), Err(ConsoleError::NotLoggedIn)));
    }

    #[test]
    fn bad_login_is_generic() {
        let mut c = console();
        let err = c.execute("login admin wrong").unwrap_err();
        assert_eq!(err.to_string(), "Invalid username or password");
    }

    #[test]
    fn staff_cannot_open_users_tab() {
        let mut c = console();
        c.execute("login staff1 password").unwrap();
        assert!(matches!(c.execute("users"), Err(ConsoleError::Forbidden(_))));
        assert!(matches!(c.execute("container-del 1"), Err(ConsoleError::Forbidden(_))));
    }

    #[test]
    fn staff_changes_status_and_is_recorded() {
        let mut c = console();
        c.execute("login staff1 password").unwrap();
        let out = output(c.execute("container-status 1 arrived").unwrap());
        assert!(out.contains("\"status\": \"arrived\""));
        assert_eq!(c.store().state().containers[0].last_updated_by, "staff1");
    }

    #[test]
    fn admin_creates_user_with_validation() {
        let mut c = console();
        c.execute("login admin password").unwrap();

        assert!(matches!(
            c.execute("user-add --username ab --email nope --name X"),
            Err(ConsoleError::Invalid(_))
        ));

        c.execute(r#"user-add --username le.c --email c@container.com --name "Le Van C" --password pw"#)
            .unwrap();
        assert_eq!(c.store().state().users.len(), 4);

        c.execute("logout").unwrap();
        c.execute("login le.c pw").unwrap();
    }

    #[test]
    fn feedback_flow() {
        let mut c = console();
        c.execute("login user1 password").unwrap();
        c.execute("feedback-add --type complaint where is my box").unwrap();
        let submitted = c.store().state().feedbacks.last().unwrap().clone();
        assert!(submitted.container_id.is_none());
        assert_eq!(submitted.message, "where is my box");
        assert!(matches!(
            c.execute(&format!("feedback-respond {} soon", submitted.id)),
            Err(ConsoleError::Forbidden(_))
        ));

        c.execute("logout").unwrap();
        c.execute("login admin password").unwrap();
        c.execute(&format!("feedback-respond {} on its way", submitted.id)).unwrap();

        let resolved = c.store().state().feedback(&submitted.id).unwrap();
        assert_eq!(resolved.response.as_deref(), Some("on its way"));
        assert_eq!(resolved.responded_by.as_deref(), Some("admin"));
    }

    #[test]
    fn blank_response_is_a_usage_error() {
        let mut c = console();
        c.execute("login admin password").unwrap();
        assert!(matches!(
            c.execute(r#"feedback-respond 1 "   ""#),
            Err(ConsoleError::Usage(_))
        ));
        assert!(matches!(
            c.execute("feedback-respond 404 hello"),
            Err(ConsoleError::NotFound { .. })
        ));
        assert!(c.store().state().feedback("1").unwrap().response.is_none());
    }

    #[test]
    fn logout_resets_tab() {
        let mut c = console();
        c.execute("login admin password").unwrap();
        c.execute("tab warehouses").unwrap();
        c.execute("logout").unwrap();
        c.execute("login admin password").unwrap();
        let out = output(c.execute("whoami").unwrap());
        assert!(out.contains("\"tab\": \"dashboard\""));
    }

    #[test]
    fn run_stops_at_quit() {
        let mut c = console();
        let input = b"login admin password\nquit\nlogout\n";
        let mut out = Vec::new();
        c.run(&input[..], &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Welcome, Administrator (admin)"));
        assert!(c.store().current_user().is_some());
    }

    #[test]
    fn usage_errors_are_reported() {
        let mut c = console();
        assert!(matches!(c.execute("fly"), Err(ConsoleError::Usage(_))));
    }

    #[test]
    fn help_is_output_not_error() {
        let mut c = console();
        let out = output(c.execute("help").unwrap());
        assert!(out.contains("container-status"));
    }
}
