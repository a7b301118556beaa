use std::sync::Arc;

use tracing::debug;

use crate::message::AppError;
use crate::models::password::{PasswordEntryRequest, PasswordEntryResponse};
use crate::service::require_non_blank;
use crate::store::{CategoryRepo, OwnerScope, PasswordRepo};

#[derive(Clone)]
pub struct PasswordService {
    repo: Arc<dyn PasswordRepo>,
    categories: Arc<dyn CategoryRepo>,
}

impl PasswordService {
    pub fn new(repo: Arc<dyn PasswordRepo>, categories: Arc<dyn CategoryRepo>) -> Self {
        PasswordService { repo, categories }
    }

    pub async fn list(
        &self,
        user_id: i64,
        category_id: Option<i64>,
    ) -> Result<Vec<PasswordEntryResponse>, AppError> {
        let entries = self.repo.list(OwnerScope::new(user_id), category_id).await?;
        Ok(entries.into_iter().map(PasswordEntryResponse::from).collect())
    }

    pub async fn create(
        &self,
        user_id: i64,
        entry: &PasswordEntryRequest,
    ) -> Result<PasswordEntryResponse, AppError> {
        let scope = OwnerScope::new(user_id);
        self.validate(scope, entry).await?;

        let created = self.repo.insert(scope, entry).await?;
        Ok(created.into())
    }

    /// Replaces an entry's fields. A missing or foreign id is a silent no-op.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        entry: &PasswordEntryRequest,
    ) -> Result<i64, AppError> {
        let scope = OwnerScope::new(user_id);
        self.validate(scope, entry).await?;

        let affected = self.repo.update(scope, id, entry).await?;
        if affected == 0 {
            debug!(password_id = id, user_id, "password update matched no rows");
        }
        Ok(id)
    }

    /// Deletes an entry. A missing or foreign id is a silent no-op.
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<(), AppError> {
        let affected = self.repo.delete(OwnerScope::new(user_id), id).await?;
        if affected == 0 {
            debug!(password_id = id, user_id, "password delete matched no rows");
        }
        Ok(())
    }

    // An entry may only be filed under a category the same user owns.
    async fn validate(
        &self,
        scope: OwnerScope,
        entry: &PasswordEntryRequest,
    ) -> Result<(), AppError> {
        require_non_blank("name", &entry.name)?;

        if let Some(category_id) = entry.category_id {
            self.categories
                .find(scope, category_id)
                .await?
                .ok_or(AppError::NotFound("category"))?;
        }
        Ok(())
    }
}
