//! Domain layer: plain records and their create/update DTOs

pub mod container;
pub mod feedback;
pub mod theme;
pub mod user;
pub mod warehouse;

// Re-export commonly used types
pub use container::{Container, ContainerStatus, CreateContainerDto, Dimensions, UpdateContainerDto};
pub use feedback::{CreateFeedbackDto, Feedback, FeedbackStatus, FeedbackType, UpdateFeedbackDto};
pub use theme::Theme;
pub use user::{CreateUserDto, UpdateUserDto, User, UserRole};
pub use warehouse::{Warehouse, WarehouseStatus};

pub use crate::shared::errors::AuthError;

/// Result type for operations that can fail authentication
pub type AuthResult<T> = Result<T, AuthError>;
