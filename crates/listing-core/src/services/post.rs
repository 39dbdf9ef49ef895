use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{
    CategoryId, NewPost, Page, Post, PostDetails, PostDraft, PostFilter, PostId, PostPatch,
    PostSearch, UserId,
};
use crate::error::{DomainError, RepoError};
use crate::ports::{CategoryRepository, PostRepository};

/// Post use cases: creation, search, and owner-only mutation.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { posts, categories }
    }

    /// Create a listing owned by `owner_id` and return its ID.
    pub async fn create_post(&self, owner_id: UserId, draft: PostDraft) -> Result<PostId, DomainError> {
        let category_id = self.resolve_category(&draft.category).await?;

        let post = self
            .posts
            .create(NewPost::new(owner_id, draft, category_id))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error creating post");
                DomainError::from(e)
            })?;

        tracing::info!(post_id = post.id, owner_id, "Post created");
        Ok(post.id)
    }

    /// One page of listings matching the search.
    pub async fn get_all_posts(&self, search: PostSearch) -> Result<Vec<PostDetails>, DomainError> {
        let category_id = match search.category.as_deref().filter(|c| !c.is_empty()) {
            Some(name) => Some(self.resolve_category(name).await?),
            None => None,
        };

        let filter = PostFilter {
            category_id,
            title: search.title.filter(|t| !t.is_empty()),
            price: search.price,
        };

        let posts = self
            .posts
            .find_filtered(&filter, search.page)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error getting posts");
                DomainError::from(e)
            })?;

        self.with_category_names(posts).await
    }

    pub async fn get_post_by_id(&self, id: PostId) -> Result<PostDetails, DomainError> {
        let post = self.find_post(id).await?;
        let category = self.category_name(post.category_id).await?;

        Ok(PostDetails::new(post, category))
    }

    /// One page of the listings owned by `owner_id`.
    pub async fn get_posts_by_owner(
        &self,
        owner_id: UserId,
        page: Page,
    ) -> Result<Vec<PostDetails>, DomainError> {
        let posts = self.posts.find_by_owner(owner_id, page).await.map_err(|e| {
            tracing::error!(error = %e, owner_id, "Failed to retrieve posts by owner");
            DomainError::from(e)
        })?;

        self.with_category_names(posts).await
    }

    /// Apply a sparse patch to a post owned by `owner_id`.
    pub async fn update_post(
        &self,
        owner_id: UserId,
        post_id: PostId,
        patch: PostPatch,
    ) -> Result<(), DomainError> {
        let mut post = self.find_owned(post_id, owner_id, "update").await?;

        let category_id = match patch.category_name() {
            Some(name) => Some(self.resolve_category(name).await?),
            None => None,
        };

        patch.apply(&mut post, category_id);
        self.posts.update(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("post", post_id),
            other => {
                tracing::error!(error = %other, post_id, "Error updating post");
                other.into()
            }
        })?;

        tracing::info!(post_id, "Post updated");
        Ok(())
    }

    pub async fn delete_post(&self, post_id: PostId, owner_id: UserId) -> Result<(), DomainError> {
        self.find_owned(post_id, owner_id, "delete").await?;

        self.posts.delete(post_id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("post", post_id),
            other => {
                tracing::error!(error = %other, post_id, "Error deleting post");
                other.into()
            }
        })?;

        tracing::info!(post_id, "Post deleted");
        Ok(())
    }

    async fn find_post(&self, id: PostId) -> Result<Post, DomainError> {
        self.posts.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(post_id = id, "Post not found");
            DomainError::not_found("post", id)
        })
    }

    async fn find_owned(
        &self,
        post_id: PostId,
        owner_id: UserId,
        action: &str,
    ) -> Result<Post, DomainError> {
        let post = self.find_post(post_id).await?;

        if !post.is_owned_by(owner_id) {
            tracing::warn!(post_id, user_id = owner_id, action, "Not the owner of the post");
            return Err(DomainError::Forbidden(format!(
                "not authorised to {action} post {post_id}"
            )));
        }

        Ok(post)
    }

    async fn resolve_category(&self, name: &str) -> Result<CategoryId, DomainError> {
        let category = self.categories.find_by_name(name).await?.ok_or_else(|| {
            tracing::warn!(category = name, "Category not found");
            DomainError::not_found("category", name)
        })?;

        Ok(category.id)
    }

    /// Posts reference their category by ID; a missing one is a broken
    /// foreign key, not a client error.
    async fn category_name(&self, id: CategoryId) -> Result<String, DomainError> {
        match self.categories.find_by_id(id).await? {
            Some(category) => Ok(category.name),
            None => {
                tracing::error!(category_id = id, "Post references a missing category");
                Err(DomainError::Internal(format!("category {id} missing")))
            }
        }
    }

    async fn with_category_names(&self, posts: Vec<Post>) -> Result<Vec<PostDetails>, DomainError> {
        let mut names: HashMap<CategoryId, String> = HashMap::new();
        let mut details = Vec::with_capacity(posts.len());

        for post in posts {
            let name = match names.get(&post.category_id) {
                Some(name) => name.clone(),
                None => {
                    let name = self.category_name(post.category_id).await?;
                    names.insert(post.category_id, name.clone());
                    name
                }
            };
            details.push(PostDetails::new(post, name));
        }

        Ok(details)
    }
}
