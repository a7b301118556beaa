pub mod category;
pub mod password;
pub mod user;

pub use category::Category;
pub use password::PasswordEntry;
pub use user::{AuthUser, Token, User};

use serde::{Deserialize, Serialize};

/// Body returned by update and delete endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct IdResponse {
    pub id: i64,
}
