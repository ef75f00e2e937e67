use serde::Deserialize;
use validator::Validate;

use super::UserRole;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub role: UserRole,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub is_active: bool,
    /// Plaintext secret; hashed before it is stored
    pub password: Option<String>,
}
