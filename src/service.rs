pub mod category;
pub mod password;
pub mod user;

pub use category::CategoryService;
pub use password::PasswordService;
pub use user::UserService;

use crate::message::AppError;

/// Rejects a required string field that is empty or whitespace only.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}
