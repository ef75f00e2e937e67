//! Preference store trait definitions

use crate::shared::InfraError;

/// Key under which the UI theme is stored
pub const THEME_KEY: &str = "theme";

/// Scoped key-value store for UI preferences.
///
/// Values are plain strings; callers parse them into their own types.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, InfraError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), InfraError>;
}
