//! Application layer: session/store controller and view logic

pub mod identity;
pub mod store;
pub mod views;

// Re-export key types for convenience
pub use identity::{CredentialTable, Credentials};
pub use store::{AppState, StoreController};
