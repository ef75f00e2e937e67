//! Identity: login credentials and the per-user secret table

pub mod credentials;

pub use credentials::{CredentialTable, Credentials};
