use std::sync::Arc;

use crate::domain::{CategoryId, NewCategory};
use crate::error::{DomainError, RepoError};
use crate::ports::CategoryRepository;

/// Category use cases.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Create a category and return its ID.
    pub async fn create_category(&self, name: &str) -> Result<CategoryId, DomainError> {
        let category = self
            .repo
            .create(NewCategory::new(name))
            .await
            .map_err(|e| duplicate_or(e, name, "Error adding category"))?;

        tracing::info!(category_id = category.id, "Category created");
        Ok(category.id)
    }

    /// Names of all categories, in insertion order.
    pub async fn get_all_categories(&self) -> Result<Vec<String>, DomainError> {
        let categories = self.repo.find_all().await.map_err(|e| {
            tracing::error!(error = %e, "Error retrieving categories");
            DomainError::from(e)
        })?;

        Ok(categories.into_iter().map(|c| c.name).collect())
    }

    pub async fn get_category_by_id(&self, id: CategoryId) -> Result<String, DomainError> {
        let category = self.repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(category_id = id, "Category not found");
            DomainError::not_found("category", id)
        })?;

        Ok(category.name)
    }

    pub async fn update_category(&self, id: CategoryId, name: &str) -> Result<(), DomainError> {
        let mut category = self.repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(category_id = id, "Category not found");
            DomainError::not_found("category", id)
        })?;

        category.rename(name);
        self.repo
            .update(category)
            .await
            .map_err(|e| match e {
                RepoError::NotFound => DomainError::not_found("category", id),
                other => duplicate_or(other, name, "Error updating category"),
            })?;

        tracing::info!(category_id = id, "Category renamed");
        Ok(())
    }
}

fn duplicate_or(err: RepoError, name: &str, context: &str) -> DomainError {
    match err {
        RepoError::Constraint(_) => {
            tracing::warn!(category = name, "Category name already taken");
            DomainError::Duplicate(format!("category '{name}' already exists"))
        }
        other => {
            tracing::error!(error = %other, "{}", context);
            other.into()
        }
    }
}
