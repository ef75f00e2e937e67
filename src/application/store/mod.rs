//! In-memory store: state snapshot plus the controller that mutates it

mod controller;
mod state;

pub use controller::StoreController;
pub use state::AppState;
