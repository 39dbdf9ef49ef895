//! Application services - orchestrate the ports on behalf of the HTTP layer.

mod category;
mod post;

pub use category::CategoryService;
pub use post::PostService;
