//! Application state shared by every command.

use std::sync::Arc;

use crate::config::Settings;
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;
use crate::utils::password::ConfiguredHasher;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
}

impl AppState {
    /// Creates a new AppState from a database connection pool and settings.
    ///
    /// Initializes all repositories and services from the provided pool, with
    /// password hashing driven by the `[password]` section.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let state = AppState::new(pool, &settings);
    /// ```
    pub fn new(pool: AsyncDbPool, settings: &Settings) -> Self {
        let repos = Repositories::new(pool.clone());
        let hasher = Arc::new(ConfiguredHasher::new(settings.password.clone()));
        let services = Services::new(repos, hasher);
        Self {
            services,
            db_pool: pool,
        }
    }
}
