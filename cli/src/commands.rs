//! Console command grammar
//!
//! Each input line is split into words and parsed with clap as if it were a
//! command line without the binary name.

use clap::{Parser, Subcommand};

use container_dashboard::domain::{ContainerStatus, FeedbackStatus, FeedbackType, UserRole};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in with username and password
    Login { username: String, password: String },
    /// End the session
    Logout,
    /// Show the logged-in user and their permissions
    Whoami,
    /// Toggle light/dark theme
    Theme,
    /// List tabs visible to the current role
    Tabs,
    /// Switch to a tab
    Tab { name: String },
    /// Show dashboard counters
    Dashboard,

    /// List users (admin)
    Users {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(short, long, value_parser = parse_role)]
        role: Option<UserRole>,
    },
    /// Create a user (admin)
    UserAdd {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_role, default_value = "user")]
        role: UserRole,
        #[arg(long)]
        password: Option<String>,
        /// Create the account disabled
        #[arg(long)]
        inactive: bool,
    },
    /// Edit a user (admin)
    UserEdit {
        id: String,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_role)]
        role: Option<UserRole>,
        #[arg(long)]
        active: Option<bool>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a user (admin)
    UserDel { id: String },

    /// List containers
    Containers {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long, value_parser = parse_container_status)]
        status: Option<ContainerStatus>,
    },
    /// Show one container
    Container { id: String },
    /// Register a container (admin)
    ContainerAdd {
        #[arg(long)]
        code: String,
        #[arg(long = "type", default_value = "20ft Standard")]
        container_type: String,
        #[arg(long, value_parser = parse_container_status, default_value = "in_transit")]
        status: ContainerStatus,
        #[arg(long, default_value = "1")]
        warehouse: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        notes: String,
        #[arg(long, default_value_t = 0.0)]
        weight: f64,
        #[arg(long, default_value_t = 6.0)]
        length: f64,
        #[arg(long, default_value_t = 2.4)]
        width: f64,
        #[arg(long, default_value_t = 2.6)]
        height: f64,
    },
    /// Edit container details (admin, staff)
    ContainerEdit {
        id: String,
        #[arg(long)]
        code: Option<String>,
        #[arg(long = "type")]
        container_type: Option<String>,
        #[arg(long)]
        warehouse: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        weight: Option<f64>,
    },
    /// Move a container to a new status (admin, staff)
    ContainerStatus {
        id: String,
        #[arg(value_parser = parse_container_status)]
        status: ContainerStatus,
    },
    /// Delete a container (admin)
    ContainerDel { id: String },

    /// Show warehouse utilization
    Warehouses,

    /// List feedback
    Feedback {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long, value_parser = parse_feedback_status)]
        status: Option<FeedbackStatus>,
        #[arg(long = "type", value_parser = parse_feedback_type)]
        feedback_type: Option<FeedbackType>,
    },
    /// Submit feedback
    FeedbackAdd {
        #[arg(long = "type", value_parser = parse_feedback_type, default_value = "general")]
        feedback_type: FeedbackType,
        #[arg(long)]
        container: Option<String>,
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Mark feedback as reviewed (admin, staff)
    FeedbackReview { id: String },
    /// Resolve feedback with a response (admin, staff)
    FeedbackRespond {
        id: String,
        #[arg(required = true, num_args = 1..)]
        response: Vec<String>,
    },

    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

fn parse_role(s: &str) -> Result<UserRole, String> {
    UserRole::from_str(s).ok_or_else(|| format!("unknown role '{s}' (admin, staff, user)"))
}

fn parse_container_status(s: &str) -> Result<ContainerStatus, String> {
    ContainerStatus::from_str(s).ok_or_else(|| {
        format!("unknown status '{s}' (in_transit, arrived, incident, returning)")
    })
}

fn parse_feedback_status(s: &str) -> Result<FeedbackStatus, String> {
    FeedbackStatus::from_str(s)
        .ok_or_else(|| format!("unknown status '{s}' (pending, reviewed, resolved)"))
}

fn parse_feedback_type(s: &str) -> Result<FeedbackType, String> {
    FeedbackType::from_str(s)
        .ok_or_else(|| format!("unknown type '{s}' (general, complaint, suggestion)"))
}

/// Split a line into words. Single or double quotes group words; there are
/// no escapes. An unterminated quote runs to the end of the line.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}
