pub mod id;
pub mod time;
pub mod types;

pub use types::*;
