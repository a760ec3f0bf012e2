mod reservation;
mod user;

pub use reservation::{
    DEFAULT_STATUS, NewReservation, Reservation, ReservationChanges, ReservationRecord,
};
pub use user::{NewUser, User, UserProfileChanges};
