//! # Listing Core
//!
//! The domain layer of the rental listings service.
//! Categories, posts, query value types, the error taxonomy, the ports
//! infrastructure must implement, and the services orchestrating them.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{CategoryService, PostService};
