//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use jiff::civil;

/// Validate that a row identifier is a positive 32-bit integer
pub fn validate_id(id_str: &str) -> Result<i32, String> {
    let id: i32 = id_str
        .parse()
        .map_err(|_| format!("Identifier must be a positive whole number, got: '{}'", id_str))?;

    if id <= 0 {
        return Err(format!("Identifier must be greater than 0, got: {}", id));
    }

    Ok(id)
}

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Parse an ISO 8601 civil datetime such as `2024-03-21T14:30:00`
pub fn parse_iso_datetime(value: &str) -> Result<civil::DateTime, String> {
    value
        .trim()
        .parse::<civil::DateTime>()
        .map_err(|e| format!("Invalid datetime '{}': {}", value, e))
}

/// Parse a plain decimal amount such as `1234.56`
pub fn parse_decimal(value: &str) -> Result<BigDecimal, String> {
    BigDecimal::from_str(value.trim()).map_err(|e| format!("Invalid amount '{}': {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_id_validation_valid_ids() {
        for id_str in ["1", "42", "2147483647"] {
            assert!(validate_id(id_str).is_ok(), "Id {} should be valid", id_str);
        }
    }

    #[test]
    fn test_id_validation_invalid_ids() {
        for id_str in ["0", "-1", "abc", "", "2147483648"] {
            assert!(validate_id(id_str).is_err(), "Id '{}' should be invalid", id_str);
        }
    }

    #[test]
    fn test_config_file_path_validation() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), file.path());

        let dir = file.path().parent().unwrap().to_str().unwrap();
        assert!(validate_config_file_path(dir).is_err());
        assert!(validate_config_file_path("/definitely/not/here.toml").is_err());
    }

    #[test]
    fn test_iso_datetime_parsing() {
        assert_eq!(
            parse_iso_datetime("2024-03-21T14:30:00").unwrap(),
            civil::date(2024, 3, 21).at(14, 30, 0, 0)
        );
        assert!(parse_iso_datetime("21/03/24 14:30:00").is_err());
    }

    #[test]
    fn test_decimal_parsing() {
        assert_eq!(parse_decimal("1234.56").unwrap(), BigDecimal::from_str("1234.56").unwrap());
        assert!(parse_decimal("12,5x").is_err());
    }
}
