//! Store traits consumed by the service layer.

use async_trait::async_trait;

use crate::error::DatabaseError;
use crate::models::{NewReservation, NewUser, Reservation, ReservationChanges, User, UserProfileChanges};

/// Data access for the reservations table.
///
/// Every method runs exactly one autocommitted statement.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Insert a row and return the identifier generated by the database.
    async fn insert(&self, reservation: NewReservation) -> Result<i32, DatabaseError>;

    /// Every stored reservation.
    async fn list_all(&self) -> Result<Vec<Reservation>, DatabaseError>;

    /// Overwrite a row by primary key, returning the affected row count.
    async fn update(
        &self,
        reservation_id: i32,
        changes: ReservationChanges,
    ) -> Result<usize, DatabaseError>;

    /// Delete a row by primary key, returning the affected row count.
    async fn delete(&self, reservation_id: i32) -> Result<usize, DatabaseError>;
}

/// Data access for the users table.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<(), DatabaseError>;

    /// Overwrite the profile columns by primary key, returning the affected row count.
    async fn update_profile(
        &self,
        user_id: i32,
        changes: UserProfileChanges,
    ) -> Result<usize, DatabaseError>;

    /// Exact-match lookup; `None` when no row has this email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;
}
