//! View logic: pure functions over an [`AppState`](crate::application::store::AppState)
//! snapshot. Rendering is left to the caller.

pub mod dashboard;
pub mod filters;
pub mod navigation;
pub mod warehouse;

pub use dashboard::DashboardSummary;
pub use filters::{ContainerQuery, FeedbackQuery, ListQuery, UserQuery};
pub use navigation::{visible_tabs, Navigator, Permissions, Tab};
pub use warehouse::{load_tier, utilization_percentage, LoadTier, WarehouseOverview};
