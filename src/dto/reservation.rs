//! Reservation DTOs.

use bigdecimal::BigDecimal;
use jiff::civil;
use jiff_diesel::ToDiesel;
use serde::{Deserialize, Serialize};

use crate::models::ReservationChanges;
use crate::utils::normalize::{normalize_optional, truncate_to_second};

// ============================================================================
// Request DTOs
// ============================================================================

/// Input for creating a reservation.
///
/// Dates and total arrive as raw text: dates as `DD/MM/YY HH:MM:SS` with an
/// optional `,fraction` suffix, the total with a comma decimal separator.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreateReservation {
    pub pet_id: i32,
    pub room_id: i32,
    pub entry_date: String,
    pub exit_date: String,
    pub total: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Input for overwriting a reservation.
///
/// Unlike [`CreateReservation`], values are already typed and nothing is
/// parsed from text. Sub-second components are still dropped before the
/// write so stored dates keep second precision.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpdateReservation {
    pub reservation_id: i32,
    pub pet_id: i32,
    pub room_id: i32,
    pub entry_date: civil::DateTime,
    pub exit_date: civil::DateTime,
    pub status: String,
    pub total: BigDecimal,
    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateReservation {
    /// Splits the request into its key and the full-row changeset.
    pub fn into_changes(self) -> (i32, ReservationChanges) {
        let changes = ReservationChanges {
            pet_id: self.pet_id,
            room_id: self.room_id,
            entry_date: truncate_to_second(self.entry_date).to_diesel(),
            exit_date: truncate_to_second(self.exit_date).to_diesel(),
            status: self.status,
            total: self.total,
            notes: normalize_optional(self.notes),
        };
        (self.reservation_id, changes)
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Result of a successful reservation insert.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReservationCreated {
    pub reservation_id: i32,
    pub message: String,
}
