//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

impl CategoryRequest {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        if self.name.trim().is_empty() {
            return Err(vec!["name is required".to_string()]);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreatedResponse {
    pub category_id: i32,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    pub price_per_day: f64,
    pub address: String,
    pub category: String,
}

impl CreatePostRequest {
    /// Every field is required; the price must be a positive amount.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("address", &self.address),
            ("category", &self.category),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{field} is required"));
            }
        }
        if !self.price_per_day.is_finite() || self.price_per_day <= 0.0 {
            errors.push("pricePerDay must be a positive number".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreatedResponse {
    pub post_id: i32,
}

/// Body of `PUT /posts/{id}`. Empty strings and a zero price mean
/// "unchanged"; `isActive` is always applied and defaults to `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_day: Option<f64>,
    pub address: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl UpdatePostRequest {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        match self.price_per_day {
            Some(price) if !price.is_finite() || price < 0.0 => {
                Err(vec!["pricePerDay must not be negative".to_string()])
            }
            _ => Ok(()),
        }
    }
}

/// Query string of `GET /posts` and `GET /posts/category/{category}`.
///
/// Kept as raw strings: a malformed `page` falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    pub title: Option<String>,
    /// `min-max`, either side optional.
    pub price: Option<String>,
    pub page: Option<String>,
}

/// Query string of `GET /my-posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price_per_day: f64,
    pub address: String,
    pub category: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponseWithOwner {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price_per_day: f64,
    pub address: String,
    pub category: String,
    pub is_active: bool,
    pub owner_id: i32,
}
