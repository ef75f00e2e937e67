//! User aggregate
//!
//! Contains the User entity and its create/update DTOs.

pub mod model;

mod dto_create;
mod dto_update;

pub use model::{User, UserRole};

pub use dto_create::CreateUserDto;
pub use dto_update::UpdateUserDto;
