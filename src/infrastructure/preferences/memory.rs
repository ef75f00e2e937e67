//! In-memory preference store

use std::collections::HashMap;

use super::PreferenceStore;
use crate::shared::InfraError;

/// Preferences that live as long as the process. Used in tests and when no
/// preferences file is configured.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPreferences {
    values: HashMap<String, String>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, InfraError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), InfraError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
