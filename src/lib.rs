pub mod config;
pub mod handlers;
pub mod message;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod utils;


pub use config::Config;
pub use message::AppError;
pub use state::AppState;
