//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::Cli;
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// CLI arguments override configuration file values.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration selected by the global CLI flags
    ///
    /// `--config` reads one file, otherwise the layered loader is used.
    /// `--env` overrides `PETHOTEL_APP_ENV` in both cases.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config {
            Some(ref path) => ConfigLoader::from_file(path),
            None => ConfigLoader::new()?,
        };

        let loader = match cli.env {
            Some(environment) => loader.with_environment(environment),
            None => loader,
        };

        tracing::debug!(environment = %loader.environment(), "Loading configuration");
        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        config.validate()?;

        Ok(config)
    }

    /// Get the current configuration (useful for inspection)
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn create_valid_base_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/pethotel".to_string();
        config
    }

    #[test]
    fn test_configuration_merger_new() {
        let base_config = create_valid_base_config();
        let merger = ConfigurationMerger::new(base_config.clone());
        assert_eq!(merger.config(), &base_config);
    }

    #[test]
    fn test_configuration_merger_merge_verbose_flag() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli = Cli::try_parse_from(["pethotel", "--verbose", "reservation", "list"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "debug");
    }

    #[test]
    fn test_configuration_merger_merge_quiet_flag() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli = Cli::try_parse_from(["pethotel", "--quiet", "reservation", "list"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "error");
    }

    #[test]
    fn test_configuration_merger_keeps_level_without_flags() {
        let mut base_config = create_valid_base_config();
        base_config.logger.level = "warn".to_string();
        let merger = ConfigurationMerger::new(base_config);

        let cli = Cli::try_parse_from(["pethotel", "reservation", "list"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "warn");
    }

    #[test]
    fn test_configuration_merger_rejects_invalid_base() {
        let mut base_config = create_valid_base_config();
        base_config.database.url = "mysql://localhost/pethotel".to_string();
        let merger = ConfigurationMerger::new(base_config);

        let cli = Cli::try_parse_from(["pethotel", "reservation", "list"]).unwrap();
        assert!(merger.merge_cli_args(&cli).is_err());
    }
}
