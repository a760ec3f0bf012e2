//! Repository layer for data access operations.
//!
//! Each repository implements a store trait so services can be driven by
//! any backend, including in-memory fakes in tests.

mod reservation_repo;
mod traits;
mod user_repo;

pub use reservation_repo::ReservationRepository;
pub use traits::{ReservationStore, UserStore};
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub reservations: ReservationRepository,
    pub users: UserRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            reservations: ReservationRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }
}
