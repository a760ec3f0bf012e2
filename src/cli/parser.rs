//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use bigdecimal::BigDecimal;
use clap::{Args, Parser, Subcommand};
use jiff::civil;
use std::path::PathBuf;

use crate::config::Environment;

/// Operator tool for the pet hotel database
#[derive(Parser, Debug)]
#[command(name = "pethotel")]
#[command(about = "Manage pet hotel reservations and user accounts")]
#[command(long_about = "
pethotel manages room reservations and user accounts stored in the pet hotel
PostgreSQL database. Every command runs a single statement and prints its
result as JSON.

EXAMPLES:
    # List every reservation
    pethotel reservation list

    # Book room 12 for pet 4
    pethotel reservation create --pet-id 4 --room-id 12 \\
        --entry-date '21/03/24 14:30:00' --exit-date '25/03/24 11:00:00' --total '1.234,56'

    # Create an account without a local password
    pethotel user create --username ana --email ana@x.com --role client

    # Check a password against the stored hash
    PETHOTEL_USER_PASSWORD=s3cret pethotel user verify --email ana@x.com

    # Use a custom configuration file with verbose logging
    pethotel --config /etc/pethotel/production.toml --verbose reservation list
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Load a single TOML file instead of the layered configuration
    /// directory. Environment variable overrides still apply.
    ///
    /// Example: --config /etc/pethotel/production.toml
    #[arg(short, long, global = true, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded.
    ///
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, global = true, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level. Cannot be used with --quiet.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only. Cannot be used with --verbose.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Room reservation operations
    #[command(subcommand)]
    Reservation(ReservationCommand),

    /// User account operations
    #[command(subcommand)]
    User(UserCommand),
}

#[derive(Subcommand, Debug)]
pub enum ReservationCommand {
    /// List every reservation
    List,

    /// Create a pending reservation
    ///
    /// Dates use `DD/MM/YY HH:MM:SS`; a `,fraction` suffix is accepted and
    /// dropped. The total uses a comma as decimal separator.
    Create(CreateReservationArgs),

    /// Overwrite every column of a reservation
    ///
    /// Dates use ISO 8601 (`2024-03-21T14:30:00`) and the total a plain
    /// decimal (`1234.56`).
    Update(UpdateReservationArgs),

    /// Delete a reservation
    Delete {
        #[arg(long, value_parser = super::validation::validate_id)]
        reservation_id: i32,
    },
}

#[derive(Args, Debug)]
pub struct CreateReservationArgs {
    #[arg(long, value_parser = super::validation::validate_id)]
    pub pet_id: i32,
    #[arg(long, value_parser = super::validation::validate_id)]
    pub room_id: i32,
    #[arg(long, value_name = "DD/MM/YY HH:MM:SS")]
    pub entry_date: String,
    #[arg(long, value_name = "DD/MM/YY HH:MM:SS")]
    pub exit_date: String,
    #[arg(long, value_name = "AMOUNT")]
    pub total: String,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateReservationArgs {
    #[arg(long, value_parser = super::validation::validate_id)]
    pub reservation_id: i32,
    #[arg(long, value_parser = super::validation::validate_id)]
    pub pet_id: i32,
    #[arg(long, value_parser = super::validation::validate_id)]
    pub room_id: i32,
    #[arg(long, value_parser = super::validation::parse_iso_datetime)]
    pub entry_date: civil::DateTime,
    #[arg(long, value_parser = super::validation::parse_iso_datetime)]
    pub exit_date: civil::DateTime,
    #[arg(long)]
    pub status: String,
    #[arg(long, value_parser = super::validation::parse_decimal)]
    pub total: BigDecimal,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Create a user account
    ///
    /// Without a password the account has no local credential.
    Create(CreateUserArgs),

    /// Update username, phone and avatar
    Update {
        #[arg(long, value_parser = super::validation::validate_id)]
        user_id: i32,
        #[arg(long)]
        username: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        avatar_url: Option<String>,
    },

    /// Look a user up by email
    Find {
        #[arg(long)]
        email: String,
    },

    /// Check a password against the stored hash
    Verify {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PETHOTEL_USER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct CreateUserArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "PETHOTEL_USER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    #[arg(long)]
    pub role: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let result = Cli::try_parse_from(["pethotel", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["pethotel", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["pethotel"]).is_err());
    }

    #[test]
    fn test_reservation_list_with_global_flags() {
        let cli = Cli::try_parse_from(["pethotel", "reservation", "list", "--verbose", "--env", "prod"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Reservation(ReservationCommand::List)
        ));
        assert!(cli.verbose);
        assert_eq!(cli.env, Some(Environment::Production));
    }

    #[test]
    fn test_reservation_create_keeps_raw_strings() {
        let cli = Cli::try_parse_from([
            "pethotel",
            "reservation",
            "create",
            "--pet-id",
            "4",
            "--room-id",
            "12",
            "--entry-date",
            "21/03/24 14:30:00,123",
            "--exit-date",
            "25/03/24 11:00:00",
            "--total",
            "1.234,56",
        ])
        .unwrap();

        let Commands::Reservation(ReservationCommand::Create(args)) = cli.command else {
            panic!("Expected reservation create");
        };
        assert_eq!(args.entry_date, "21/03/24 14:30:00,123");
        assert_eq!(args.total, "1.234,56");
        assert!(args.notes.is_none());
    }

    #[test]
    fn test_reservation_update_parses_typed_values() {
        let cli = Cli::try_parse_from([
            "pethotel",
            "reservation",
            "update",
            "--reservation-id",
            "7",
            "--pet-id",
            "4",
            "--room-id",
            "12",
            "--entry-date",
            "2024-03-21T14:30:00",
            "--exit-date",
            "2024-03-25T11:00:00",
            "--status",
            "Confirmed",
            "--total",
            "1234.56",
        ])
        .unwrap();

        let Commands::Reservation(ReservationCommand::Update(args)) = cli.command else {
            panic!("Expected reservation update");
        };
        assert_eq!(args.entry_date, civil::date(2024, 3, 21).at(14, 30, 0, 0));
        assert_eq!(args.total.to_string(), "1234.56");
    }

    #[test]
    fn test_reservation_delete_rejects_non_positive_id() {
        let result = Cli::try_parse_from(["pethotel", "reservation", "delete", "--reservation-id", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_find() {
        let cli = Cli::try_parse_from(["pethotel", "user", "find", "--email", "ana@x.com"]).unwrap();
        match cli.command {
            Commands::User(UserCommand::Find { email }) => assert_eq!(email, "ana@x.com"),
            other => panic!("Expected user find, got {:?}", other),
        }
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let result = Cli::try_parse_from(["pethotel", "--verbose", "--quiet", "reservation", "list"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
