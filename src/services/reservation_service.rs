//! Reservation service for business logic operations.
//!
//! Normalizes raw reservation input, delegates each operation to a single
//! store call and wraps any failure with the operation it belongs to.

use std::sync::Arc;

use crate::dto::{Confirmation, CreateReservation, ReservationCreated, UpdateReservation};
use crate::error::{AppError, AppResult, FailureCause};
use crate::models::{NewReservation, Reservation};
use crate::repositories::ReservationStore;
use crate::utils::normalize::{normalize_optional, parse_reservation_date, parse_total};

const ENTITY: &str = "reservation";

/// Reservation service handling create, list, update and delete.
///
/// Cloning is cheap, the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct ReservationService {
    store: Arc<dyn ReservationStore>,
}

impl ReservationService {
    /// Creates a new ReservationService over the given store.
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self { store }
    }

    /// Creates a pending reservation from raw input.
    ///
    /// Both dates lose any `,fraction` suffix and the total is read with a
    /// comma decimal separator. Malformed input is reported as a creation
    /// failure without touching the database.
    ///
    /// # Returns
    /// The identifier generated by the database and a confirmation message
    pub async fn create(&self, request: CreateReservation) -> AppResult<ReservationCreated> {
        let new_reservation =
            Self::normalize(request).map_err(|e| AppError::creation(ENTITY, e))?;

        let reservation_id = self
            .store
            .insert(new_reservation)
            .await
            .map_err(|e| AppError::creation(ENTITY, e))?;

        tracing::info!(reservation_id, "Reservation created");

        Ok(ReservationCreated {
            reservation_id,
            message: "Reservation created successfully".to_string(),
        })
    }

    /// Lists every reservation, unfiltered.
    pub async fn list_all(&self) -> AppResult<Vec<Reservation>> {
        let reservations = self
            .store
            .list_all()
            .await
            .map_err(|e| AppError::query("reservations", e))?;

        tracing::debug!(count = reservations.len(), "Listed reservations");
        Ok(reservations)
    }

    /// Overwrites every column of a reservation by primary key.
    ///
    /// Updating an id that does not exist still succeeds.
    pub async fn update(&self, request: UpdateReservation) -> AppResult<Confirmation> {
        let (reservation_id, changes) = request.into_changes();

        let affected = self
            .store
            .update(reservation_id, changes)
            .await
            .map_err(|e| AppError::update(ENTITY, e))?;

        tracing::debug!(reservation_id, affected, "Reservation update applied");
        Ok(Confirmation::new("Reservation updated successfully"))
    }

    /// Deletes a reservation by primary key.
    ///
    /// Deleting an id that does not exist still succeeds.
    pub async fn delete(&self, reservation_id: i32) -> AppResult<Confirmation> {
        let affected = self
            .store
            .delete(reservation_id)
            .await
            .map_err(|e| AppError::deletion(ENTITY, e))?;

        tracing::debug!(reservation_id, affected, "Reservation delete applied");
        Ok(Confirmation::new("Reservation deleted successfully"))
    }

    fn normalize(request: CreateReservation) -> Result<NewReservation, FailureCause> {
        let entry_date = parse_reservation_date("entry_date", &request.entry_date)?;
        let exit_date = parse_reservation_date("exit_date", &request.exit_date)?;
        let total = parse_total(&request.total)?;

        Ok(NewReservation::pending(
            request.pet_id,
            request.room_id,
            entry_date,
            exit_date,
            total,
            normalize_optional(request.notes),
        ))
    }
}
