use std::sync::Arc;

use tracing::debug;

use crate::message::AppError;
use crate::models::category::CategoryResponse;
use crate::service::require_non_blank;
use crate::store::{CategoryRepo, OwnerScope};

#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoryRepo>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepo>) -> Self {
        CategoryService { repo }
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<CategoryResponse>, AppError> {
        let categories = self.repo.list(OwnerScope::new(user_id)).await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    pub async fn create(&self, user_id: i64, name: &str) -> Result<CategoryResponse, AppError> {
        require_non_blank("name", name)?;

        let category = self.repo.insert(OwnerScope::new(user_id), name).await?;
        Ok(category.into())
    }

    /// Renames a category. A missing or foreign id is a silent no-op.
    pub async fn update(&self, id: i64, user_id: i64, name: &str) -> Result<i64, AppError> {
        require_non_blank("name", name)?;

        let affected = self.repo.update(OwnerScope::new(user_id), id, name).await?;
        if affected == 0 {
            debug!(category_id = id, user_id, "category update matched no rows");
        }
        Ok(id)
    }

    /// Deletes a category. A missing or foreign id is a silent no-op.
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<(), AppError> {
        let affected = self.repo.delete(OwnerScope::new(user_id), id).await?;
        if affected == 0 {
            debug!(category_id = id, user_id, "category delete matched no rows");
        }
        Ok(())
    }
}
