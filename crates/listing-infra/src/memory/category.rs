use async_trait::async_trait;
use tokio::sync::RwLock;

use listing_core::domain::{Category, CategoryId, NewCategory};
use listing_core::error::RepoError;
use listing_core::ports::{BaseRepository, CategoryRepository};

use super::Table;

/// In-memory category store enforcing name uniqueness.
pub struct InMemoryCategoryRepository {
    table: RwLock<Table<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn name_taken(table: &Table<Category>, name: &str, except: Option<CategoryId>) -> bool {
    table
        .rows
        .values()
        .any(|c| c.name == name && Some(c.id) != except)
}

#[async_trait]
impl BaseRepository<Category, CategoryId> for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, category: Category) -> Result<Category, RepoError> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&category.id) {
            return Err(RepoError::NotFound);
        }
        if name_taken(&table, &category.name, Some(category.id)) {
            return Err(RepoError::Constraint(format!(
                "category name '{}' already exists",
                category.name
            )));
        }

        table.rows.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> Result<(), RepoError> {
        match self.table.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category, RepoError> {
        let mut table = self.table.write().await;

        if name_taken(&table, &new_category.name, None) {
            return Err(RepoError::Constraint(format!(
                "category name '{}' already exists",
                new_category.name
            )));
        }

        let category = Category {
            id: table.allocate_id(),
            name: new_category.name,
            created_at: new_category.created_at,
            updated_at: new_category.created_at,
        };
        table.rows.insert(category.id, category.clone());

        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|c| c.name == name).cloned())
    }
}
