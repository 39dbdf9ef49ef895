use async_trait::async_trait;

use crate::domain::{
    Category, CategoryId, NewCategory, NewPost, Page, Post, PostFilter, PostId, UserId,
};
use crate::error::RepoError;

/// Generic repository trait defining the CRUD operations shared by entities.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Overwrite a stored entity. Fails with `NotFound` if it no longer exists.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, CategoryId> {
    /// Insert a category. A taken name fails with `Constraint`.
    async fn create(&self, category: NewCategory) -> Result<Category, RepoError>;

    /// All categories in insertion order.
    async fn find_all(&self) -> Result<Vec<Category>, RepoError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// One page of posts matching `filter`, ordered by ID.
    async fn find_filtered(&self, filter: &PostFilter, page: Page)
    -> Result<Vec<Post>, RepoError>;

    /// One page of the posts owned by `owner_id`, ordered by ID.
    async fn find_by_owner(&self, owner_id: UserId, page: Page) -> Result<Vec<Post>, RepoError>;
}
