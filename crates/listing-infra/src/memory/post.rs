use async_trait::async_trait;
use tokio::sync::RwLock;

use listing_core::domain::{NewPost, Page, Post, PostFilter, PostId, UserId};
use listing_core::error::RepoError;
use listing_core::ports::{BaseRepository, PostRepository};

use super::Table;

/// In-memory post store.
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn paginate<'a>(posts: impl Iterator<Item = &'a Post>, page: Page) -> Vec<Post> {
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let size = usize::try_from(page.size()).unwrap_or(usize::MAX);

    posts.skip(offset).take(size).cloned().collect()
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        match table.rows.get_mut(&post.id) {
            Some(row) => {
                *row = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        match self.table.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let post = Post {
            id: table.allocate_id(),
            title: new_post.title,
            description: new_post.description,
            price_per_day: new_post.price_per_day,
            address: new_post.address,
            category_id: new_post.category_id,
            is_active: new_post.is_active,
            created_at: new_post.created_at,
            updated_at: new_post.updated_at,
            owner_id: new_post.owner_id,
        };
        table.rows.insert(post.id, post.clone());

        Ok(post)
    }

    async fn find_filtered(&self, filter: &PostFilter, page: Page) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(paginate(table.rows.values().filter(|p| filter.matches(p)), page))
    }

    async fn find_by_owner(&self, owner_id: UserId, page: Page) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(paginate(
            table.rows.values().filter(|p| p.is_owned_by(owner_id)),
            page,
        ))
    }
}
