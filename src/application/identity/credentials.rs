//! Per-user secret storage
//!
//! Secrets never live on the `User` record. The table maps user id to a
//! bcrypt hash and is owned by the store controller.

use std::collections::HashMap;

use tracing::warn;

use crate::infrastructure::crypto::password::{hash_password, verify_password, MAX_COST, MIN_COST};
use crate::shared::InfraError;

/// Username and plaintext secret as typed at the login prompt
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// bcrypt hashes keyed by user id
#[derive(Debug, Clone)]
pub struct CredentialTable {
    hashes: HashMap<String, String>,
    cost: u32,
}

impl CredentialTable {
    /// Empty table. Fails if `cost` is outside bcrypt's accepted range so
    /// that later hashing cannot.
    pub fn new(cost: u32) -> Result<Self, InfraError> {
        Self::with_hashes(HashMap::new(), cost)
    }

    pub fn with_hashes(hashes: HashMap<String, String>, cost: u32) -> Result<Self, InfraError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(InfraError::Crypto(bcrypt::BcryptError::CostNotAllowed(cost)));
        }
        Ok(Self { hashes, cost })
    }

    /// Hash and store `password` for `user_id`, replacing any previous one.
    pub fn set(&mut self, user_id: &str, password: &str) -> Result<(), InfraError> {
        let hash = hash_password(password, self.cost)?;
        self.hashes.insert(user_id.to_string(), hash);
        Ok(())
    }

    pub fn remove(&mut self, user_id: &str) {
        self.hashes.remove(user_id);
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.hashes.contains_key(user_id)
    }

    /// `false` when the user has no secret or the hash is unreadable.
    pub fn verify(&self, user_id: &str, password: &str) -> bool {
        let Some(hash) = self.hashes.get(user_id) else {
            return false;
        };
        match verify_password(password, hash) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(user_id, error = %e, "Stored password hash could not be verified");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_cost() {
        assert!(CredentialTable::new(3).is_err());
        assert!(CredentialTable::new(32).is_err());
        assert!(CredentialTable::new(MIN_COST).is_ok());
    }

    #[test]
    fn verify_matches_only_own_secret() {
        let mut table = CredentialTable::new(MIN_COST).unwrap();
        table.set("u1", "alpha").unwrap();
        table.set("u2", "beta").unwrap();

        assert!(table.verify("u1", "alpha"));
        assert!(!table.verify("u1", "beta"));
        assert!(!table.verify("missing", "alpha"));
    }

    #[test]
    fn remove_revokes_login() {
        let mut table = CredentialTable::new(MIN_COST).unwrap();
        table.set("u1", "alpha").unwrap();
        table.remove("u1");
        assert!(!table.contains("u1"));
        assert!(!table.verify("u1", "alpha"));
    }

    #[test]
    fn garbage_hash_fails_closed() {
        let mut hashes = HashMap::new();
        hashes.insert("u1".to_string(), "not-a-bcrypt-hash".to_string());
        let table = CredentialTable::with_hashes(hashes, MIN_COST).unwrap();
        assert!(!table.verify("u1", "anything"));
    }
}
