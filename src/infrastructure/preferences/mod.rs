//! Preference persistence

mod file;
mod memory;
mod traits;

pub use file::FilePreferences;
pub use memory::InMemoryPreferences;
pub use traits::{PreferenceStore, THEME_KEY};
