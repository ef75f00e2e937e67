//! Tabs and per-role permissions
//!
//! This is UI-level gating only. The store controller does not check roles.

use serde::Serialize;

use crate::domain::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Dashboard,
    Users,
    Containers,
    Warehouses,
    Feedback,
}

impl Default for Tab {
    fn default() -> Self {
        Self::Dashboard
    }
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Self::Dashboard,
        Self::Users,
        Self::Containers,
        Self::Warehouses,
        Self::Feedback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Users => "users",
            Self::Containers => "containers",
            Self::Warehouses => "warehouses",
            Self::Feedback => "feedback",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn is_visible_to(&self, role: UserRole) -> bool {
        match self {
            Self::Users => role == UserRole::Admin,
            _ => true,
        }
    }
}

/// Tabs shown in the sidebar for `role`, in menu order
pub fn visible_tabs(role: UserRole) -> Vec<Tab> {
    Tab::ALL.into_iter().filter(|t| t.is_visible_to(role)).collect()
}

/// Active tab for the logged-in session
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    active: Tab,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch to `tab` if `role` can see it. Returns whether it switched.
    pub fn select(&mut self, tab: Tab, role: UserRole) -> bool {
        if !tab.is_visible_to(role) {
            return false;
        }
        self.active = tab;
        true
    }

    /// Back to the default tab, e.g. after logout
    pub fn reset(&mut self) {
        self.active = Tab::default();
    }
}

/// What the current role may do on each screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Permissions {
    pub manage_users: bool,
    pub create_container: bool,
    pub edit_container: bool,
    pub delete_container: bool,
    pub respond_feedback: bool,
    pub submit_feedback: bool,
}

impl Permissions {
    pub fn for_role(role: UserRole) -> Self {
        let admin = role == UserRole::Admin;
        let staff_or_admin = admin || role == UserRole::Staff;
        Self {
            manage_users: admin,
            create_container: admin,
            edit_container: staff_or_admin,
            delete_container: admin,
            respond_feedback: staff_or_admin,
            submit_feedback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_tab_is_admin_only() {
        assert_eq!(visible_tabs(UserRole::Admin).len(), 5);
        assert_eq!(
            visible_tabs(UserRole::Staff),
            vec![Tab::Dashboard, Tab::Containers, Tab::Warehouses, Tab::Feedback]
        );
        assert!(!visible_tabs(UserRole::User).contains(&Tab::Users));
    }

    #[test]
    fn navigator_refuses_hidden_tab_and_resets() {
        let mut nav = Navigator::new();
        assert!(!nav.select(Tab::Users, UserRole::Staff));
        assert_eq!(nav.active(), Tab::Dashboard);

        assert!(nav.select(Tab::Containers, UserRole::Staff));
        assert_eq!(nav.active(), Tab::Containers);

        nav.reset();
        assert_eq!(nav.active(), Tab::Dashboard);
    }

    #[test]
    fn staff_edits_but_cannot_create_or_delete() {
        let staff = Permissions::for_role(UserRole::Staff);
        assert!(staff.edit_container && staff.respond_feedback);
        assert!(!staff.create_container && !staff.delete_container && !staff.manage_users);

        let user = Permissions::for_role(UserRole::User);
        assert!(!user.edit_container && !user.respond_feedback);
        assert!(user.submit_feedback);

        let admin = Permissions::for_role(UserRole::Admin);
        assert!(admin.manage_users && admin.create_container && admin.delete_container);
    }

    #[test]
    fn tab_names_parse() {
        assert_eq!(Tab::from_str("Warehouses"), Some(Tab::Warehouses));
        assert_eq!(Tab::from_str("settings"), None);
    }
}
