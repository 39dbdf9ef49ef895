use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::CategoryId;

pub type PostId = i32;
pub type UserId = i32;

/// Post entity - a rentable item or property listed by its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub price_per_day: f64,
    pub address: String,
    pub category_id: CategoryId,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_id: UserId,
}

impl Post {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Listing fields supplied by a user creating a post.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub price_per_day: f64,
    pub address: String,
    pub category: String,
}

/// A post that has not been stored yet; the store assigns the ID.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub price_per_day: f64,
    pub address: String,
    pub category_id: CategoryId,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_id: UserId,
}

impl NewPost {
    /// New listings start active, owned by their creator.
    pub fn new(owner_id: UserId, draft: PostDraft, category_id: CategoryId) -> Self {
        let now = Utc::now();
        Self {
            title: draft.title,
            description: draft.description,
            price_per_day: draft.price_per_day,
            address: draft.address,
            category_id,
            is_active: true,
            created_at: now,
            updated_at: now,
            owner_id,
        }
    }
}

/// Sparse update of a post.
///
/// Empty strings and a zero price count as "not provided", so a price can
/// never be patched to zero. `is_active` is not optional: it is always
/// written, and a request that omits it deactivates the post.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_day: Option<f64>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub is_active: bool,
}

impl PostPatch {
    /// Category name to re-resolve, if the patch carries one.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref().filter(|name| !name.is_empty())
    }

    /// Apply the patch; `category_id` is the resolved [`Self::category_name`].
    pub fn apply(self, post: &mut Post, category_id: Option<CategoryId>) {
        if let Some(title) = provided(self.title) {
            post.title = title;
        }
        if let Some(description) = provided(self.description) {
            post.description = description;
        }
        if let Some(price) = self.price_per_day.filter(|p| *p != 0.0) {
            post.price_per_day = price;
        }
        if let Some(address) = provided(self.address) {
            post.address = address;
        }
        if let Some(category_id) = category_id {
            post.category_id = category_id;
        }
        post.is_active = self.is_active;
        post.updated_at = Utc::now();
    }
}

fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Read model: a post with its category resolved to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetails {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub price_per_day: f64,
    pub address: String,
    pub category: String,
    pub is_active: bool,
    pub owner_id: UserId,
}

impl PostDetails {
    pub fn new(post: Post, category: String) -> Self {
        Self {
            id: post.id,
            title: post.title,
            description: post.description,
            price_per_day: post.price_per_day,
            address: post.address,
            category,
            is_active: post.is_active,
            owner_id: post.owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        let created = Utc::now() - chrono::TimeDelta::hours(1);
        Post {
            id: 7,
            title: "Cordless drill".to_string(),
            description: "18V with two batteries".to_string(),
            price_per_day: 12.5,
            address: "12 Elm Street".to_string(),
            category_id: 1,
            is_active: true,
            created_at: created,
            updated_at: created,
            owner_id: 42,
        }
    }

    #[test]
    fn test_patch_title_only_keeps_other_fields() {
        let mut post = sample_post();
        let before = post.clone();

        let patch = PostPatch {
            title: Some("New Title".to_string()),
            ..Default::default()
        };
        patch.apply(&mut post, None);

        assert_eq!(post.title, "New Title");
        assert_eq!(post.description, before.description);
        assert_eq!(post.address, before.address);
        assert_eq!(post.price_per_day, before.price_per_day);
        assert_eq!(post.category_id, before.category_id);
        // Omitted is_active is written as false.
        assert!(!post.is_active);
        assert!(post.updated_at > before.updated_at);
        assert_eq!(post.created_at, before.created_at);
    }

    #[test]
    fn test_patch_ignores_empty_and_zero_values() {
        let mut post = sample_post();

        let patch = PostPatch {
            title: Some(String::new()),
            description: Some(String::new()),
            price_per_day: Some(0.0),
            address: Some(String::new()),
            category: Some(String::new()),
            is_active: true,
        };
        assert_eq!(patch.category_name(), None);
        patch.apply(&mut post, None);

        let original = sample_post();
        assert_eq!(post.title, original.title);
        assert_eq!(post.price_per_day, original.price_per_day);
        assert!(post.is_active);
    }

    #[test]
    fn test_patch_applies_all_fields() {
        let mut post = sample_post();

        let patch = PostPatch {
            title: Some("Hammer drill".to_string()),
            description: Some("Heavy duty".to_string()),
            price_per_day: Some(20.0),
            address: Some("3 Oak Road".to_string()),
            category: Some("Tools".to_string()),
            is_active: true,
        };
        assert_eq!(patch.category_name(), Some("Tools"));
        patch.apply(&mut post, Some(9));

        assert_eq!(post.title, "Hammer drill");
        assert_eq!(post.description, "Heavy duty");
        assert_eq!(post.price_per_day, 20.0);
        assert_eq!(post.address, "3 Oak Road");
        assert_eq!(post.category_id, 9);
        assert_eq!(post.owner_id, 42);
    }

    #[test]
    fn test_new_post_starts_active() {
        let draft = PostDraft {
            title: "Tent".to_string(),
            description: "Four person".to_string(),
            price_per_day: 8.0,
            address: "Camp road".to_string(),
            category: "Outdoor".to_string(),
        };

        let post = NewPost::new(3, draft, 5);

        assert!(post.is_active);
        assert_eq!(post.owner_id, 3);
        assert_eq!(post.category_id, 5);
        assert_eq!(post.created_at, post.updated_at);
    }
}
