//! Command executor for dispatching CLI commands
//!
//! This module runs a parsed command against the services and renders the
//! outcome as JSON.

use serde::Serialize;
use serde_json::{Value, json};

use super::parser::{
    Commands, CreateReservationArgs, CreateUserArgs, ReservationCommand, UpdateReservationArgs,
    UserCommand,
};
use crate::dto::{CreateReservation, CreateUser, UpdateReservation, UpdateUser};
use crate::error::{AppError, AppResult};
use crate::services::Services;

/// Execute a CLI command with the given services
///
/// # Returns
/// The operation result as a JSON value, ready to print
///
/// # Errors
/// Returns the service error unchanged
pub async fn execute_command(command: Commands, services: &Services) -> AppResult<Value> {
    match command {
        Commands::Reservation(command) => execute_reservation(command, services).await,
        Commands::User(command) => execute_user(command, services).await,
    }
}

async fn execute_reservation(command: ReservationCommand, services: &Services) -> AppResult<Value> {
    let reservations = &services.reservations;

    match command {
        ReservationCommand::List => to_json(reservations.list_all().await?),
        ReservationCommand::Create(args) => to_json(reservations.create(args.into()).await?),
        ReservationCommand::Update(args) => to_json(reservations.update(args.into()).await?),
        ReservationCommand::Delete { reservation_id } => {
            to_json(reservations.delete(reservation_id).await?)
        }
    }
}

async fn execute_user(command: UserCommand, services: &Services) -> AppResult<Value> {
    let users = &services.users;

    match command {
        UserCommand::Create(args) => to_json(users.create(args.into()).await?),
        UserCommand::Update {
            user_id,
            username,
            phone,
            avatar_url,
        } => to_json(
            users
                .update(UpdateUser {
                    user_id,
                    username,
                    phone,
                    avatar_url,
                })
                .await?,
        ),
        UserCommand::Find { email } => to_json(users.find_by_email(&email).await?),
        UserCommand::Verify { email, password } => {
            let user = users.find_by_email(&email).await?;
            let stored_hash = user
                .as_ref()
                .filter(|u| u.has_local_credential())
                .and_then(|u| u.password_hash.as_deref());
            let matches = users
                .compare_password(password.as_deref(), stored_hash)
                .await?;
            Ok(json!({ "email": email, "matches": matches }))
        }
    }
}

fn to_json<T: Serialize>(value: T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::Internal {
        source: anyhow::Error::new(e).context("Failed to render command output"),
    })
}

impl From<CreateReservationArgs> for CreateReservation {
    fn from(args: CreateReservationArgs) -> Self {
        Self {
            pet_id: args.pet_id,
            room_id: args.room_id,
            entry_date: args.entry_date,
            exit_date: args.exit_date,
            total: args.total,
            notes: args.notes,
        }
    }
}

impl From<UpdateReservationArgs> for UpdateReservation {
    fn from(args: UpdateReservationArgs) -> Self {
        Self {
            reservation_id: args.reservation_id,
            pet_id: args.pet_id,
            room_id: args.room_id,
            entry_date: args.entry_date,
            exit_date: args.exit_date,
            status: args.status,
            total: args.total,
            notes: args.notes,
        }
    }
}

impl From<CreateUserArgs> for CreateUser {
    fn from(args: CreateUserArgs) -> Self {
        Self {
            username: args.username,
            email: args.email,
            password: args.password,
            role: args.role,
            phone: args.phone,
            avatar_url: args.avatar_url,
        }
    }
}
