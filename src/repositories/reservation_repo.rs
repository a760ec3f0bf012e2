//! Reservation repository for async database operations.
//!
//! Implements [`ReservationStore`] for the reservations table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::DatabaseError;
use crate::models::{NewReservation, Reservation, ReservationChanges, ReservationRecord};
use crate::repositories::ReservationStore;

/// Reservation repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment).
#[derive(Clone)]
pub struct ReservationRepository {
    pool: AsyncDbPool,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for ReservationRepository {
    /// Inserts a reservation and reads the generated key back with `RETURNING`.
    async fn insert(&self, new_reservation: NewReservation) -> Result<i32, DatabaseError> {
        use crate::schema::reservations::dsl::*;
        let mut conn = self.pool.get().await?;

        let generated_id = diesel::insert_into(reservations)
            .values(&new_reservation)
            .returning(reservation_id)
            .get_result::<i32>(&mut conn)
            .await?;

        Ok(generated_id)
    }

    async fn list_all(&self) -> Result<Vec<Reservation>, DatabaseError> {
        use crate::schema::reservations::dsl::*;
        let mut conn = self.pool.get().await?;

        let records = reservations
            .select(ReservationRecord::as_select())
            .order(reservation_id.asc())
            .load(&mut conn)
            .await?;

        Ok(records.into_iter().map(Reservation::from).collect())
    }

    async fn update(
        &self,
        target_id: i32,
        changes: ReservationChanges,
    ) -> Result<usize, DatabaseError> {
        use crate::schema::reservations::dsl::*;
        let mut conn = self.pool.get().await?;

        let affected = diesel::update(reservations.filter(reservation_id.eq(target_id)))
            .set(&changes)
            .execute(&mut conn)
            .await?;

        Ok(affected)
    }

    async fn delete(&self, target_id: i32) -> Result<usize, DatabaseError> {
        use crate::schema::reservations::dsl::*;
        let mut conn = self.pool.get().await?;

        let affected = diesel::delete(reservations.filter(reservation_id.eq(target_id)))
            .execute(&mut conn)
            .await?;

        Ok(affected)
    }
}
