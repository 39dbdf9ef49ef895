//! Category and post services running against the in-memory repositories.

use std::sync::Arc;

use listing_core::domain::{Page, PostDraft, PostPatch, PostSearch, PriceRange};
use listing_core::ports::{BaseRepository, CategoryRepository, PostRepository};
use listing_core::{CategoryService, DomainError, PostService};
use listing_infra::{InMemoryCategoryRepository, InMemoryPostRepository};

struct Fixture {
    categories: CategoryService,
    posts: PostService,
    post_repo: Arc<InMemoryPostRepository>,
}

fn fixture() -> Fixture {
    let category_repo = Arc::new(InMemoryCategoryRepository::new());
    let post_repo = Arc::new(InMemoryPostRepository::new());

    let category_port: Arc<dyn CategoryRepository> = category_repo;
    let post_port: Arc<dyn PostRepository> = post_repo.clone();

    Fixture {
        categories: CategoryService::new(category_port.clone()),
        posts: PostService::new(post_port, category_port),
        post_repo,
    }
}

fn draft(title: &str, price: f64, category: &str) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        description: format!("{title} for rent"),
        price_per_day: price,
        address: "1 Main Street".to_string(),
        category: category.to_string(),
    }
}

#[tokio::test]
async fn test_duplicate_category_is_conflict() {
    let fx = fixture();
    fx.categories.create_category("Tools").await.unwrap();

    let result = fx.categories.create_category("Tools").await;

    assert!(matches!(result, Err(DomainError::Duplicate(_))));
}

#[tokio::test]
async fn test_categories_listed_in_insertion_order() {
    let fx = fixture();
    for name in ["Tools", "Electronics", "Garden"] {
        fx.categories.create_category(name).await.unwrap();
    }

    let names = fx.categories.get_all_categories().await.unwrap();

    assert_eq!(names, vec!["Tools", "Electronics", "Garden"]);
}

#[tokio::test]
async fn test_missing_category_is_not_found() {
    let fx = fixture();

    let lookup = fx.categories.get_category_by_id(99).await;
    let rename = fx.categories.update_category(99, "Anything").await;

    assert!(matches!(lookup, Err(DomainError::NotFound { .. })));
    assert!(matches!(rename, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_rename_category() {
    let fx = fixture();
    let id = fx.categories.create_category("Tols").await.unwrap();

    fx.categories.update_category(id, "Tools").await.unwrap();

    assert_eq!(fx.categories.get_category_by_id(id).await.unwrap(), "Tools");
}

#[tokio::test]
async fn test_rename_onto_existing_name_is_conflict() {
    let fx = fixture();
    fx.categories.create_category("Tools").await.unwrap();
    let garden = fx.categories.create_category("Garden").await.unwrap();

    let result = fx.categories.update_category(garden, "Tools").await;

    assert!(matches!(result, Err(DomainError::Duplicate(_))));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let fx = fixture();
    fx.categories.create_category("Electronics").await.unwrap();

    let id = fx
        .posts
        .create_post(17, draft("Projector", 25.0, "Electronics"))
        .await
        .unwrap();
    let details = fx.posts.get_post_by_id(id).await.unwrap();

    assert_eq!(details.category, "Electronics");
    assert_eq!(details.owner_id, 17);
    assert_eq!(details.title, "Projector");
    assert!(details.is_active);
}

#[tokio::test]
async fn test_create_post_with_unknown_category_fails() {
    let fx = fixture();

    let result = fx.posts.create_post(1, draft("Kayak", 30.0, "Boats")).await;

    assert!(matches!(result, Err(DomainError::NotFound { entity: "category", .. })));
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let fx = fixture();

    let result = fx.posts.get_post_by_id(404).await;

    assert!(matches!(result, Err(DomainError::NotFound { entity: "post", .. })));
}

#[tokio::test]
async fn test_filter_by_category_title_and_price() {
    let fx = fixture();
    fx.categories.create_category("Tools").await.unwrap();
    fx.categories.create_category("Electronics").await.unwrap();

    let owner = 1;
    for (title, price, category) in [
        ("Cordless Drill", 20.0, "Tools"),
        ("Hammer DRILL heavy", 45.0, "Tools"),
        ("Drill press", 80.0, "Tools"),
        ("Circular saw", 30.0, "Tools"),
        ("Drill-shaped speaker", 20.0, "Electronics"),
        ("Cheap drill", 5.0, "Tools"),
    ] {
        fx.posts
            .create_post(owner, draft(title, price, category))
            .await
            .unwrap();
    }

    let search = PostSearch {
        category: Some("Tools".to_string()),
        title: Some("drill".to_string()),
        price: PriceRange::parse("10-50").unwrap(),
        page: Page::default(),
    };
    let found = fx.posts.get_all_posts(search).await.unwrap();

    let titles: Vec<_> = found.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Cordless Drill", "Hammer DRILL heavy"]);
    assert!(found.iter().all(|p| p.category == "Tools"));
}

#[tokio::test]
async fn test_filter_with_unknown_category_is_not_found() {
    let fx = fixture();

    let search = PostSearch {
        category: Some("Boats".to_string()),
        ..Default::default()
    };

    assert!(matches!(
        fx.posts.get_all_posts(search).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_listing_is_paginated_by_ten() {
    let fx = fixture();
    fx.categories.create_category("Tools").await.unwrap();
    for i in 1..=23 {
        fx.posts
            .create_post(1, draft(&format!("Item {i}"), 10.0, "Tools"))
            .await
            .unwrap();
    }

    let page = |raw: &str| PostSearch {
        page: Page::parse(Some(raw)),
        ..Default::default()
    };

    let first = fx.posts.get_all_posts(page("0")).await.unwrap();
    let third = fx.posts.get_all_posts(page("3")).await.unwrap();
    let fourth = fx.posts.get_all_posts(page("4")).await.unwrap();

    assert_eq!(first.len(), 10);
    assert_eq!(first[0].title, "Item 1");
    assert_eq!(third.len(), 3);
    assert_eq!(third[0].title, "Item 21");
    assert!(fourth.is_empty());
}

#[tokio::test]
async fn test_posts_by_owner() {
    let fx = fixture();
    fx.categories.create_category("Tools").await.unwrap();
    fx.posts.create_post(1, draft("Saw", 10.0, "Tools")).await.unwrap();
    fx.posts.create_post(2, draft("Ladder", 12.0, "Tools")).await.unwrap();
    fx.posts.create_post(1, draft("Drill", 15.0, "Tools")).await.unwrap();

    let mine = fx.posts.get_posts_by_owner(1, Page::default()).await.unwrap();
    let none = fx.posts.get_posts_by_owner(3, Page::default()).await.unwrap();

    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|p| p.owner_id == 1));
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_update_by_non_owner_is_forbidden() {
    let fx = fixture();
    fx.categories.create_category("Tools").await.unwrap();
    let id = fx.posts.create_post(1, draft("Saw", 10.0, "Tools")).await.unwrap();

    let patch = PostPatch {
        title: Some("Stolen".to_string()),
        ..Default::default()
    };
    let result = fx.posts.update_post(2, id, patch).await;

    assert!(matches!(result, Err(DomainError::Forbidden(_))));
    assert_eq!(fx.posts.get_post_by_id(id).await.unwrap().title, "Saw");
}

#[tokio::test]
async fn test_sparse_update_by_owner() {
    let fx = fixture();
    fx.categories.create_category("Tools").await.unwrap();
    let id = fx.posts.create_post(1, draft("Saw", 10.0, "Tools")).await.unwrap();
    let before = fx.post_repo.find_by_id(id).await.unwrap().unwrap();

    let patch = PostPatch {
        title: Some("New Title".to_string()),
        ..Default::default()
    };
    fx.posts.update_post(1, id, patch).await.unwrap();

    let after = fx.post_repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(after.title, "New Title");
    assert_eq!(after.description, before.description);
    assert_eq!(after.address, before.address);
    assert_eq!(after.price_per_day, before.price_per_day);
    assert_eq!(after.category_id, before.category_id);
    assert!(!after.is_active);
    assert!(after.updated_at >= before.updated_at);
}

#[tokio::test]
async fn test_update_moves_post_to_another_category() {
    let fx = fixture();
    fx.categories.create_category("Tools").await.unwrap();
    fx.categories.create_category("Garden").await.unwrap();
    let id = fx.posts.create_post(1, draft("Mower", 40.0, "Tools")).await.unwrap();

    let patch = PostPatch {
        category: Some("Garden".to_string()),
        is_active: true,
        ..Default::default()
    };
    fx.posts.update_post(1, id, patch).await.unwrap();

    let details = fx.posts.get_post_by_id(id).await.unwrap();
    assert_eq!(details.category, "Garden");
    assert!(details.is_active);
}

#[tokio::test]
async fn test_update_missing_post_is_not_found() {
    let fx = fixture();

    let result = fx.posts.update_post(1, 5, PostPatch::default()).await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_checks_ownership() {
    let fx = fixture();
    fx.categories.create_category("Tools").await.unwrap();
    let id = fx.posts.create_post(1, draft("Saw", 10.0, "Tools")).await.unwrap();

    let by_stranger = fx.posts.delete_post(id, 2).await;
    assert!(matches!(by_stranger, Err(DomainError::Forbidden(_))));

    fx.posts.delete_post(id, 1).await.unwrap();
    assert!(matches!(
        fx.posts.get_post_by_id(id).await,
        Err(DomainError::NotFound { .. })
    ));

    let again = fx.posts.delete_post(id, 1).await;
    assert!(matches!(again, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_title_filter_treats_wildcards_literally() {
    let fx = fixture();
    fx.categories.create_category("Clothing").await.unwrap();
    fx.posts.create_post(1, draft("Linen shirt", 8.0, "Clothing")).await.unwrap();
    fx.posts.create_post(1, draft("100% wool coat", 15.0, "Clothing")).await.unwrap();

    let search = |title: &str| PostSearch {
        title: Some(title.to_string()),
        ..Default::default()
    };

    let percent = fx.posts.get_all_posts(search("%")).await.unwrap();
    let underscore = fx.posts.get_all_posts(search("_")).await.unwrap();

    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "100% wool coat");
    assert!(underscore.is_empty());
}
