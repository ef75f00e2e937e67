//! Infrastructure layer - external concerns

pub mod crypto;
pub mod fixtures;
pub mod preferences;

pub use fixtures::Fixtures;
pub use preferences::{FilePreferences, InMemoryPreferences, PreferenceStore};
