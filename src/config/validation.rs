//! Configuration validation logic.

use std::path::Path;

use crate::config::loader::{Config, TempConfig};
use crate::error::{Error, Result};
use regex::Regex;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_temp_config(&config.temp)
}

/// Validate the temp-space section.
pub fn validate_temp_config(temp: &TempConfig) -> Result<()> {
    validate_temp_frame_format(&temp.temp_frame_format)?;

    if let Some(dir) = &temp.temp_directory {
        validate_temp_directory(dir)?;
    }

    Ok(())
}

/// Validate the frame image extension.
///
/// The extension is spliced into file names and glob patterns, so only
/// ASCII alphanumerics are accepted.
pub fn validate_temp_frame_format(format: &str) -> Result<()> {
    if format.is_empty() {
        return Err(Error::ConfigValidation {
            field: "temp_frame_format".to_string(),
            message: "Frame format cannot be empty".to_string(),
        });
    }

    let format_pattern = Regex::new(r"^[A-Za-z0-9]+$")?;
    if !format_pattern.is_match(format) {
        return Err(Error::ConfigValidation {
            field: "temp_frame_format".to_string(),
            message: format!(
                "Frame format '{}' must be a bare extension like 'png' (letters and digits only)",
                format
            ),
        });
    }

    Ok(())
}

/// Validate the temp base override.
pub fn validate_temp_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "temp_directory".to_string(),
            message: "Temp directory cannot be empty".to_string(),
        });
    }

    if dir.is_relative() {
        return Err(Error::ConfigValidation {
            field: "temp_directory".to_string(),
            message: format!("Temp directory must be absolute: {}", dir.display()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_valid_frame_formats() {
        assert!(validate_temp_frame_format("png").is_ok());
        assert!(validate_temp_frame_format("jpg").is_ok());
        assert!(validate_temp_frame_format("JP2").is_ok());
    }

    #[test]
    fn test_invalid_frame_formats() {
        assert!(validate_temp_frame_format("").is_err());
        assert!(validate_temp_frame_format(".png").is_err());
        assert!(validate_temp_frame_format("png/../x").is_err());
        assert!(validate_temp_frame_format("p*g").is_err());
    }

    #[test]
    fn test_temp_directory_must_be_absolute() {
        assert!(validate_temp_directory(Path::new("relative/tmp")).is_err());
        assert!(validate_temp_directory(Path::new("")).is_err());
        assert!(validate_temp_directory(&std::env::temp_dir()).is_ok());
    }

    #[test]
    fn test_validate_config() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.temp.temp_directory = Some(PathBuf::from("tmp"));
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { ref field, .. } if field == "temp_directory"));
    }
}
