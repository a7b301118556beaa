pub mod auth_handler;
pub mod category_handler;
pub mod password_handler;
pub mod system_handler;
pub mod user_handler;
