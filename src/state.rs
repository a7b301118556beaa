use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::service::{CategoryService, PasswordService, UserService};
use crate::store::{
    CategoryRepo, PasswordRepo, PgCategoryRepo, PgPasswordRepo, PgUserRepo, UserRepo,
};

/// Services shared by every worker, registered as `web::Data<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub categories: CategoryService,
    pub passwords: PasswordService,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepo>,
        categories: Arc<dyn CategoryRepo>,
        passwords: Arc<dyn PasswordRepo>,
        bcrypt_cost: u32,
    ) -> Self {
        AppState {
            users: UserService::new(users, bcrypt_cost),
            categories: CategoryService::new(categories.clone()),
            passwords: PasswordService::new(passwords, categories),
        }
    }

    pub fn postgres(pool: PgPool, config: &Config) -> Self {
        AppState::new(
            Arc::new(PgUserRepo::new(pool.clone())),
            Arc::new(PgCategoryRepo::new(pool.clone())),
            Arc::new(PgPasswordRepo::new(pool)),
            config.bcrypt_cost,
        )
    }
}
