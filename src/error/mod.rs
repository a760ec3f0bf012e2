mod app_error;
mod database_error;
mod hash_error;
mod input_error;

pub use app_error::{AppError, AppResult, FailureCause};
pub use database_error::{DatabaseError, DatabaseErrorConverter, DatabaseFailure};
pub use hash_error::HashError;
pub use input_error::InputError;
