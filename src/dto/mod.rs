//! Request and response shapes accepted and returned by the services.

mod reservation;
mod user;

pub use reservation::{CreateReservation, ReservationCreated, UpdateReservation};
pub use user::{CreateUser, UpdateUser};

use serde::Serialize;

/// Success acknowledgement returned by write operations.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
