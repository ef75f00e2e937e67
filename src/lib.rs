//! # Container Dashboard
//!
//! In-memory back office for shipping containers, warehouse capacity, user
//! accounts and customer feedback.
//!
//! ## Architecture
//!
//! - **domain**: Records (User, Container, Warehouse, Feedback) and their DTOs
//! - **application**: The store controller that owns all state, plus view
//!   logic (filters, dashboard counters, warehouse utilization, tabs)
//! - **infrastructure**: Seed fixtures, password hashing, preference storage
//! - **shared**: Error types, id and timestamp helpers
//!
//! ```no_run
//! use container_dashboard::{AppConfig, Credentials, StoreController};
//!
//! let mut store = StoreController::from_config(&AppConfig::default())?;
//! let admin = store.login(&Credentials::new("admin", "password"))?;
//! assert_eq!(admin.username, "admin");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use application::{AppState, Credentials, StoreController};
pub use domain::AuthError;
pub use logging::init_tracing;
pub use shared::InfraError;
