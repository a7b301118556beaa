//! Persistence layer. Each repository is a trait so services can be handed any
//! backing store; the Postgres implementations live next to their traits.

pub mod category;
pub mod password;
pub mod scope;
pub mod user;

pub use category::{CategoryRepo, PgCategoryRepo};
pub use password::{PasswordRepo, PgPasswordRepo};
pub use scope::OwnerScope;
pub use user::{PgUserRepo, UserRepo};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Opens the connection pool described by `config`.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

/// Applies the bundled migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
