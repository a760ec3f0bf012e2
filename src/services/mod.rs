//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! callers and the store traits.

mod reservation_service;
mod user_service;

pub use reservation_service::ReservationService;
pub use user_service::UserService;

use std::sync::Arc;

use crate::repositories::Repositories;
use crate::utils::password::CredentialHasher;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since every dependency is shared behind an `Arc`.
#[derive(Clone)]
pub struct Services {
    pub reservations: ReservationService,
    pub users: UserService,
}

impl Services {
    /// Creates a new Services instance from Repositories and a password hasher.
    pub fn new(repos: Repositories, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self {
            reservations: ReservationService::new(Arc::new(repos.reservations)),
            users: UserService::new(Arc::new(repos.users), hasher),
        }
    }
}
