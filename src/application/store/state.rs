//! Application state snapshot

use serde::Serialize;

use crate::domain::{Container, Feedback, Theme, User, Warehouse};
use crate::infrastructure::Fixtures;

/// Everything the views read: session identity, theme and the four
/// collections, each in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppState {
    pub current_user: Option<User>,
    pub theme: Theme,
    pub users: Vec<User>,
    pub containers: Vec<Container>,
    pub warehouses: Vec<Warehouse>,
    pub feedbacks: Vec<Feedback>,
}

impl AppState {
    /// Logged-out state over the seed collections
    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        Self {
            current_user: None,
            theme: Theme::default(),
            users: fixtures.users,
            containers: fixtures.containers,
            warehouses: fixtures.warehouses,
            feedbacks: fixtures.feedbacks,
        }
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn warehouse(&self, id: &str) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.id == id)
    }

    pub fn feedback(&self, id: &str) -> Option<&Feedback> {
        self.feedbacks.iter().find(|f| f.id == id)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }
}
