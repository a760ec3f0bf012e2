use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff::civil;
use jiff_diesel::{DateTime, ToDiesel};
use serde::Serialize;

/// Status assigned to every reservation at creation time
pub const DEFAULT_STATUS: &str = "Pending";

/// Row as stored in the reservations table
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::reservations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReservationRecord {
    pub reservation_id: i32,
    pub pet_id: i32,
    pub room_id: i32,
    pub entry_date: DateTime,
    pub exit_date: DateTime,
    pub status: String,
    pub total: BigDecimal,
    pub notes: Option<String>,
}

/// Reservation as returned to callers
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_id: i32,
    pub pet_id: i32,
    pub room_id: i32,
    pub entry_date: civil::DateTime,
    pub exit_date: civil::DateTime,
    pub status: String,
    pub total: BigDecimal,
    pub notes: Option<String>,
}

impl From<ReservationRecord> for Reservation {
    fn from(record: ReservationRecord) -> Self {
        Self {
            reservation_id: record.reservation_id,
            pet_id: record.pet_id,
            room_id: record.room_id,
            entry_date: record.entry_date.to_jiff(),
            exit_date: record.exit_date.to_jiff(),
            status: record.status,
            total: record.total,
            notes: record.notes,
        }
    }
}

/// NewReservation model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::reservations)]
pub struct NewReservation {
    pub pet_id: i32,
    pub room_id: i32,
    pub entry_date: DateTime,
    pub exit_date: DateTime,
    pub status: String,
    pub total: BigDecimal,
    pub notes: Option<String>,
}

impl NewReservation {
    /// Builds a pending reservation from already normalized values
    pub fn pending(
        pet_id: i32,
        room_id: i32,
        entry_date: civil::DateTime,
        exit_date: civil::DateTime,
        total: BigDecimal,
        notes: Option<String>,
    ) -> Self {
        Self {
            pet_id,
            room_id,
            entry_date: entry_date.to_diesel(),
            exit_date: exit_date.to_diesel(),
            status: DEFAULT_STATUS.to_string(),
            total,
            notes,
        }
    }
}

/// Full-row overwrite applied by primary key
/// Every column is written, a missing note clears the stored one
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::reservations)]
#[diesel(treat_none_as_null = true)]
pub struct ReservationChanges {
    pub pet_id: i32,
    pub room_id: i32,
    pub entry_date: DateTime,
    pub exit_date: DateTime,
    pub status: String,
    pub total: BigDecimal,
    pub notes: Option<String>,
}
