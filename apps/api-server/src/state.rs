//! Application state - shared across all handlers.

use std::sync::Arc;

use listing_core::ports::{CategoryRepository, PostRepository};
use listing_core::{CategoryService, PostService};
use listing_infra::{InMemoryCategoryRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use listing_infra::{DatabaseConnections, PostgresCategoryRepository, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService>,
    pub posts: Arc<PostService>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the state with PostgreSQL repositories when a database is
    /// configured and reachable, in-memory ones otherwise.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        if config.run_migrations {
                            use migration::MigratorTrait;

                            if let Err(e) = migration::Migrator::up(&connections.main, None).await {
                                tracing::error!("Failed to apply migrations: {}", e);
                            } else {
                                tracing::info!("Database migrations applied");
                            }
                        }

                        let conn = Arc::new(connections);
                        let mut state = Self::from_repositories(
                            Arc::new(PostgresCategoryRepository::new(conn.main.clone())),
                            Arc::new(PostgresPostRepository::new(conn.main.clone())),
                        );
                        state.db = Some(conn);
                        tracing::info!("Application state initialized (postgres)");
                        return state;
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
        }

        Self::in_memory()
    }

    /// State backed by fresh in-memory repositories.
    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }

    pub fn from_repositories(
        categories: Arc<dyn CategoryRepository>,
        posts: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(categories.clone())),
            posts: Arc::new(PostService::new(posts, categories)),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Storage backend status for the health endpoint.
    pub async fn database_status(&self) -> &'static str {
        #[cfg(feature = "postgres")]
        {
            if let Some(db) = &self.db {
                return if db.ping().await { "connected" } else { "unreachable" };
            }
        }

        "in-memory"
    }
}
