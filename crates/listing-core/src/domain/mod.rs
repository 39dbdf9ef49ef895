//! Domain entities - the core business objects.

mod category;
mod post;
mod query;

pub use category::{Category, CategoryId, NewCategory};
pub use post::{NewPost, Post, PostDetails, PostDraft, PostId, PostPatch, UserId};
pub use query::{Page, PostFilter, PostSearch, PriceRange};
